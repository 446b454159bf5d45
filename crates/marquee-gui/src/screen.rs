pub mod home;
pub mod settings;

use iced::Task;

use crate::app;

/// Which page is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Settings,
}

/// Actions that a screen can request from the app router.
///
/// Screens return these from `update()` instead of directly mutating
/// shared state — the app interprets them in one place.
pub enum Action {
    /// No side-effect.
    None,
    /// Update the status bar message.
    SetStatus(String),
    /// Show a modal dialog.
    ShowModal(ModalKind),
    /// Dismiss the current modal.
    DismissModal,
    /// Run an async Iced task that eventually produces an app::Message.
    RunTask(Task<app::Message>),
}

/// What kind of modal is currently shown.
#[derive(Debug, Clone)]
pub enum ModalKind {
    MovieDetail { movie_id: u64 },
}
