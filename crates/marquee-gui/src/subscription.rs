use iced::Subscription;
use std::time::Duration;

use crate::app::Message;

/// Everything the app listens to outside its own tasks.
///
/// The auto-advance tick is only wired while the carousel can actually
/// move: Home is visible, more than one entry is loaded, and the
/// interval is non-zero.
pub fn subscriptions(auto_advance_secs: u64, carousel_active: bool) -> Subscription<Message> {
    let mut subs = vec![window_events()];

    if carousel_active && auto_advance_secs > 0 {
        subs.push(
            iced::time::every(Duration::from_secs(auto_advance_secs))
                .map(|_| Message::AutoAdvance),
        );
    }

    Subscription::batch(subs)
}

fn window_events() -> Subscription<Message> {
    iced::window::events().map(|(_id, event)| Message::WindowEvent(event))
}
