use iced::widget::{button, column, container, row, text};
use iced::window;
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use marquee_api::images::{image_url, ImageSize};
use marquee_api::{TmdbClient, TmdbError};
use marquee_core::config::AppConfig;
use marquee_core::models::Movie;

use crate::poster_cache::{self, BackdropState, PosterCache};
use crate::screen::{home, settings, Action, ModalKind, Page};
use crate::style;
use crate::subscription;
use crate::theme::{self, ColorScheme};
use crate::widgets;
use crate::window_state::WindowState;

/// Application state — slim router that delegates to screens.
pub struct Marquee {
    page: Page,
    config: AppConfig,
    // Theme
    scheme: ColorScheme,
    // Screens
    home: home::Home,
    settings: settings::Settings,
    // Backdrop images
    backdrops: PosterCache,
    // App-level chrome
    modal_state: Option<ModalKind>,
    status_message: String,
    // Window persistence
    window_state: WindowState,
}

impl Default for Marquee {
    fn default() -> Self {
        let config = AppConfig::load().unwrap_or_default();
        let settings_screen = settings::Settings::from_config(&config);
        let home_screen = home::Home::new(config.general.page_size);
        let scheme = theme::scheme_for(theme::resolve_mode(config.appearance.mode));

        Self {
            page: Page::default(),
            config,
            scheme,
            home: home_screen,
            settings: settings_screen,
            backdrops: PosterCache::default(),
            modal_state: None,
            status_message: "Ready".into(),
            window_state: WindowState::load(),
        }
    }
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    NavigateTo(Page),
    BackdropLoaded {
        movie_id: u64,
        result: Result<std::path::PathBuf, String>,
    },
    AutoAdvance,
    WindowEvent(window::Event),
    Home(home::Message),
    Settings(settings::Message),
}

impl Marquee {
    pub fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        let fetch = app.spawn_fetch_now_playing();
        (app, fetch)
    }

    pub fn title(&self) -> String {
        String::from("Marquee")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(page) => {
                self.page = page;
                Task::none()
            }
            Message::BackdropLoaded { movie_id, result } => {
                match result {
                    Ok(path) => {
                        self.backdrops
                            .states
                            .insert(movie_id, BackdropState::Loaded(path));
                    }
                    Err(e) => {
                        tracing::debug!(movie_id, "backdrop download failed: {e}");
                        self.backdrops.states.insert(movie_id, BackdropState::Failed);
                    }
                }
                Task::none()
            }
            Message::AutoAdvance => {
                // The timer keeps ticking while the detail overlay is up;
                // advancing underneath it would be disorienting.
                if self.page == Page::Home && self.modal_state.is_none() {
                    let action = self.home.update(home::Message::AdvanceRequested);
                    return self.handle_action(action);
                }
                Task::none()
            }
            Message::WindowEvent(event) => {
                match event {
                    window::Event::Resized(size) => {
                        self.window_state.width = size.width;
                        self.window_state.height = size.height;
                        self.window_state.save();
                    }
                    window::Event::Moved(pos) => {
                        self.window_state.x = pos.x;
                        self.window_state.y = pos.y;
                        self.window_state.save();
                    }
                    _ => {}
                }
                Task::none()
            }
            Message::Home(msg) => {
                // Intercept messages that need app-level access.
                match &msg {
                    home::Message::Refresh => {
                        let action = self.home.update(msg);
                        let action_task = self.handle_action(action);
                        let fetch = self.spawn_fetch_now_playing();
                        return Task::batch([action_task, fetch]);
                    }
                    home::Message::MoviesLoaded(_) => {
                        let action = self.home.update(msg);
                        let action_task = self.handle_action(action);
                        let info: Vec<(u64, Option<String>)> = self
                            .home
                            .movies()
                            .map(|movies| {
                                movies
                                    .iter()
                                    .map(|m| (m.id, m.backdrop_path.clone()))
                                    .collect()
                            })
                            .unwrap_or_default();
                        let batch = self.batch_request_backdrops(info);
                        return Task::batch([action_task, batch]);
                    }
                    _ => {}
                }

                let action = self.home.update(msg);
                self.handle_action(action)
            }
            Message::Settings(msg) => {
                let is_save = matches!(msg, settings::Message::Save);
                let action = self.settings.update(msg, &mut self.config);
                self.sync_theme();
                self.home.set_page_size(self.config.general.page_size);
                let action_task = self.handle_action(action);

                // A saved API key may unblock a failed startup fetch.
                if is_save && self.home.needs_fetch() {
                    let refresh = self.home.update(home::Message::Refresh);
                    let refresh_task = self.handle_action(refresh);
                    let fetch = self.spawn_fetch_now_playing();
                    return Task::batch([action_task, refresh_task, fetch]);
                }
                action_task
            }
        }
    }

    /// Spawn the TMDB now-playing fetch as an async task.
    ///
    /// A missing API key short-circuits into a failure message that
    /// points at Settings instead of a doomed network call.
    fn spawn_fetch_now_playing(&self) -> Task<Message> {
        let Some(api_key) = self.config.resolved_api_key() else {
            return Task::done(Message::Home(home::Message::MoviesLoaded(Err(format!(
                "{}. Add one in Settings or set TMDB_API_KEY.",
                TmdbError::MissingApiKey
            )))));
        };
        let language = self.config.tmdb.language.clone();

        Task::perform(
            async move {
                let client = TmdbClient::new(api_key, language);
                client
                    .now_playing()
                    .await
                    .map(|page| page.movies)
                    .map_err(|e| e.to_string())
            },
            |result| Message::Home(home::Message::MoviesLoaded(result)),
        )
    }

    /// Interpret an Action returned by a screen.
    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::SetStatus(msg) => {
                self.status_message = msg;
                Task::none()
            }
            Action::ShowModal(kind) => {
                self.modal_state = Some(kind);
                Task::none()
            }
            Action::DismissModal => {
                self.modal_state = None;
                Task::none()
            }
            Action::RunTask(task) => task,
        }
    }

    /// Batch-request backdrop downloads for (movie_id, backdrop_path) pairs.
    fn batch_request_backdrops(&mut self, items: Vec<(u64, Option<String>)>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = items
            .into_iter()
            .map(|(id, path)| self.request_backdrop(id, path.as_deref()))
            .collect();
        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    /// Request a backdrop download for a movie if not already requested.
    fn request_backdrop(&mut self, movie_id: u64, backdrop_path: Option<&str>) -> Task<Message> {
        let Some(api_path) = backdrop_path else {
            // No backdrop available — mark as failed so the placeholder renders.
            self.backdrops
                .states
                .entry(movie_id)
                .or_insert(BackdropState::Failed);
            return Task::none();
        };
        if self.backdrops.states.contains_key(&movie_id) {
            return Task::none();
        }
        // Check disk cache first.
        let path = poster_cache::backdrop_path(movie_id);
        if path.exists() {
            self.backdrops
                .states
                .insert(movie_id, BackdropState::Loaded(path));
            return Task::none();
        }
        self.backdrops
            .states
            .insert(movie_id, BackdropState::Loading);
        let url = image_url(api_path, ImageSize::W780);
        Task::perform(
            async move { poster_cache::fetch_backdrop(movie_id, url).await },
            move |result| Message::BackdropLoaded { movie_id, result },
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = &self.scheme;
        let nav = self.nav_rail(cs);

        let page_content: Element<'_, Message> = match self.page {
            Page::Home => self.home.view(cs, &self.backdrops).map(Message::Home),
            Page::Settings => self.settings.view(cs).map(Message::Settings),
        };

        let status_bar = container(
            text(&self.status_message)
                .size(style::TEXT_XS)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .style(theme::status_bar(cs))
        .width(Length::Fill)
        .height(Length::Fixed(style::STATUS_BAR_HEIGHT))
        .padding([4.0, style::SPACE_MD]);

        let main: Element<'_, Message> =
            column![row![nav, page_content].height(Length::Fill), status_bar].into();

        // Wrap in modal if one is active.
        if let Some(modal_kind) = &self.modal_state {
            let modal_content = self.build_modal_content(cs, modal_kind);
            let dismiss_msg = Message::Home(home::Message::CloseDetail);
            widgets::modal(main, modal_content, dismiss_msg)
        } else {
            main
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let carousel_active = self.page == Page::Home && self.home.can_auto_advance();
        subscription::subscriptions(self.config.general.auto_advance_secs, carousel_active)
    }

    pub fn theme(&self) -> Theme {
        theme::build_theme(&self.scheme)
    }

    /// Re-resolve the color scheme from the config's appearance mode.
    ///
    /// Called after any settings change that might affect appearance.
    fn sync_theme(&mut self) {
        self.scheme = theme::scheme_for(theme::resolve_mode(self.config.appearance.mode));
    }

    fn build_modal_content<'a>(
        &'a self,
        cs: &ColorScheme,
        kind: &ModalKind,
    ) -> Element<'a, Message> {
        match kind {
            ModalKind::MovieDetail { movie_id } => {
                let Some(movie) = self.home.movie(*movie_id) else {
                    // The list was replaced while the overlay was open.
                    return container(
                        text("This movie is no longer in the list.").size(style::TEXT_SM),
                    )
                    .style(theme::dialog_container(cs))
                    .padding(style::SPACE_2XL)
                    .into();
                };
                self.movie_detail(cs, movie)
            }
        }
    }

    fn movie_detail<'a>(&'a self, cs: &ColorScheme, movie: &'a Movie) -> Element<'a, Message> {
        let backdrop = widgets::rounded_backdrop(
            cs,
            &self.backdrops,
            movie.id,
            style::DETAIL_WIDTH - 2.0 * style::SPACE_2XL,
            style::DETAIL_BACKDROP_HEIGHT,
            style::RADIUS_LG,
        );

        let mut meta = row![].spacing(style::SPACE_MD);
        if let Some(year) = movie.release_year() {
            meta = meta.push(
                text(year.to_string())
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            );
        }
        if let Some(score) = movie.vote_average.filter(|v| *v > 0.0) {
            meta = meta.push(
                text(format!("\u{2605} {score:.1}"))
                    .size(style::TEXT_SM)
                    .color(cs.tertiary)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            );
        }

        let overview: Element<'a, Message> = if movie.overview.is_empty() {
            text("No synopsis available.")
                .size(style::TEXT_SM)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_NORMAL)
                .into()
        } else {
            container(widgets::styled_scrollable(
                text(movie.overview.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_NORMAL),
                cs,
            ))
            .max_height(style::DETAIL_OVERVIEW_HEIGHT)
            .into()
        };

        let actions = row![
            button(text("View on TMDB").size(style::TEXT_SM))
                .padding([style::SPACE_SM, style::SPACE_XL])
                .on_press(Message::Home(home::Message::OpenOnTmdb(movie.id)))
                .style(theme::ghost_button(cs)),
            iced::widget::Space::new().width(Length::Fill),
            button(text("Close").size(style::TEXT_SM))
                .padding([style::SPACE_SM, style::SPACE_XL])
                .on_press(Message::Home(home::Message::CloseDetail))
                .style(theme::primary_button(cs)),
        ]
        .align_y(Alignment::Center);

        container(
            column![
                backdrop,
                text(movie.title.as_str())
                    .size(style::TEXT_XL)
                    .font(style::FONT_HEADING)
                    .color(cs.on_surface)
                    .line_height(style::LINE_HEIGHT_TIGHT),
                meta,
                overview,
                actions,
            ]
            .spacing(style::SPACE_LG),
        )
        .style(theme::dialog_container(cs))
        .padding(style::SPACE_2XL)
        .width(Length::Fixed(style::DETAIL_WIDTH))
        .into()
    }

    fn nav_rail<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let nav_item = |icon: iced::widget::Text<'static>, label: &'static str, page: Page| {
            let active = self.page == page;
            button(
                column![
                    icon.size(style::NAV_ICON_SIZE).center(),
                    text(label)
                        .size(style::NAV_LABEL_SIZE)
                        .line_height(style::LINE_HEIGHT_LOOSE)
                        .center(),
                ]
                .align_x(Alignment::Center)
                .spacing(style::SPACE_XXS)
                .width(Length::Fill),
            )
            .width(Length::Fixed(64.0))
            .padding([style::SPACE_SM, style::SPACE_XS])
            .on_press(Message::NavigateTo(page))
            .style(theme::nav_rail_item(active, cs))
        };

        use lucide_icons::iced as icons;

        let rail = column![
            nav_item(icons::icon_clapperboard(), "Now Playing", Page::Home),
            iced::widget::Space::new().height(Length::Fill),
            container(nav_item(icons::icon_settings(), "Settings", Page::Settings))
                .align_x(Alignment::Center)
                .width(Length::Fill)
                .padding(iced::Padding::new(0.0).bottom(style::SPACE_SM)),
        ]
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fill);

        container(rail)
            .style(theme::nav_rail_bg(cs))
            .width(Length::Fixed(style::NAV_RAIL_WIDTH))
            .height(Length::Fill)
            .padding(iced::Padding::new(0.0).top(style::SPACE_LG))
            .into()
    }
}
