//! Home screen: featured banner plus the now-playing carousel.

use std::time::Duration;

use iced::widget::{button, column, container, mouse_area, row, stack, text};
use iced::{Alignment, ContentFit, Element, Length, Task};

use lucide_icons::iced as icons;
use marquee_core::carousel::Carousel;
use marquee_core::models::Movie;

use crate::app;
use crate::poster_cache::{BackdropState, PosterCache};
use crate::screen::{Action, ModalKind};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// How long one slide takes; the carousel stays guarded for this long.
const SLIDE_DURATION: Duration = Duration::from_millis(800);

/// Result list fetch state. Failures carry a user-facing message.
pub enum FetchState {
    Loading,
    Loaded(Vec<Movie>),
    Failed(String),
}

/// Home screen state.
pub struct Home {
    fetch: FetchState,
    carousel: Carousel,
    page_size: usize,
}

/// Messages handled by the Home screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// Re-fetch the now-playing list. The actual TMDB call is spawned
    /// by app.rs.
    Refresh,
    MoviesLoaded(Result<Vec<Movie>, String>),
    /// Banner click or auto-advance tick.
    AdvanceRequested,
    /// Slide timer fired; the carousel accepts triggers again.
    SlideFinished,
    MovieSelected(u64),
    CloseDetail,
    OpenOnTmdb(u64),
}

impl Home {
    pub fn new(page_size: usize) -> Self {
        Self {
            fetch: FetchState::Loading,
            carousel: Carousel::new(0, page_size),
            page_size,
        }
    }

    /// Applied on the next `MoviesLoaded`, not retroactively.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
    }

    pub fn movies(&self) -> Option<&[Movie]> {
        match &self.fetch {
            FetchState::Loaded(movies) => Some(movies),
            _ => None,
        }
    }

    pub fn movie(&self, movie_id: u64) -> Option<&Movie> {
        self.movies()?.iter().find(|m| m.id == movie_id)
    }

    /// Whether a fetch would bring anything new (startup or after failure).
    pub fn needs_fetch(&self) -> bool {
        !matches!(self.fetch, FetchState::Loaded(_))
    }

    /// The auto-advance timer only runs when there is something to cycle.
    pub fn can_auto_advance(&self) -> bool {
        matches!(&self.fetch, FetchState::Loaded(movies) if movies.len() > 1)
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Refresh => {
                self.fetch = FetchState::Loading;
                Action::SetStatus("Fetching now playing\u{2026}".into())
            }
            Message::MoviesLoaded(Ok(movies)) => {
                self.carousel = Carousel::new(movies.len(), self.page_size);
                let count = movies.len();
                self.fetch = FetchState::Loaded(movies);
                Action::SetStatus(format!("{count} movies now playing"))
            }
            Message::MoviesLoaded(Err(e)) => {
                self.fetch = FetchState::Failed(e.clone());
                Action::SetStatus(format!("Error: {e}"))
            }
            Message::AdvanceRequested => {
                if !matches!(self.fetch, FetchState::Loaded(_)) {
                    return Action::None;
                }
                if self.carousel.request_advance() {
                    Action::RunTask(Task::perform(tokio::time::sleep(SLIDE_DURATION), |_| {
                        app::Message::Home(Message::SlideFinished)
                    }))
                } else {
                    // A slide is in flight; this trigger is dropped.
                    Action::None
                }
            }
            Message::SlideFinished => {
                self.carousel.transition_complete();
                Action::None
            }
            Message::MovieSelected(movie_id) => {
                Action::ShowModal(ModalKind::MovieDetail { movie_id })
            }
            Message::CloseDetail => Action::DismissModal,
            Message::OpenOnTmdb(movie_id) => {
                let url = format!("https://www.themoviedb.org/movie/{movie_id}");
                if let Err(e) = open::that(&url) {
                    tracing::warn!("Failed to open {url}: {e}");
                    return Action::SetStatus("Could not open the browser".into());
                }
                Action::None
            }
        }
    }

    pub fn view<'a>(
        &'a self,
        cs: &ColorScheme,
        backdrops: &'a PosterCache,
    ) -> Element<'a, Message> {
        let movies = match &self.fetch {
            FetchState::Loading => {
                return widgets::empty_state(
                    cs,
                    icons::icon_clapperboard()
                        .size(style::TEXT_3XL)
                        .color(cs.outline)
                        .into(),
                    "Loading",
                    "Fetching movies now in theaters\u{2026}",
                    None,
                );
            }
            FetchState::Failed(e) => {
                return widgets::empty_state(
                    cs,
                    icons::icon_triangle_alert()
                        .size(style::TEXT_3XL)
                        .color(cs.error)
                        .into(),
                    "Couldn't load movies",
                    e.as_str(),
                    Some(self.retry_button(cs)),
                );
            }
            FetchState::Loaded(movies) if movies.is_empty() => {
                return widgets::empty_state(
                    cs,
                    icons::icon_film()
                        .size(style::TEXT_3XL)
                        .color(cs.outline)
                        .into(),
                    "Nothing playing",
                    "TMDB returned an empty now-playing list.",
                    Some(self.retry_button(cs)),
                );
            }
            FetchState::Loaded(movies) => movies,
        };

        let banner = self.banner(cs, backdrops, &movies[0]);

        let header = row![
            text("In Theaters")
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .color(cs.on_surface)
                .line_height(style::LINE_HEIGHT_TIGHT),
            iced::widget::Space::new().width(Length::Fill),
            text(format!(
                "{} / {}",
                self.carousel.page() + 1,
                self.carousel.max_page() + 1
            ))
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_NORMAL),
        ]
        .align_y(Alignment::Center);

        let mut cards = row![].spacing(style::SPACE_MD);
        for movie in self.carousel.visible_slice(movies) {
            cards = cards.push(widgets::movie_card(
                cs,
                backdrops,
                movie,
                Message::MovieSelected(movie.id),
            ));
        }

        // With a single page the carousel has nowhere to go.
        if self.carousel.max_page() > 0 {
            let chevron = button(
                icons::icon_chevron_right()
                    .size(style::TEXT_XL)
                    .center(),
            )
            .padding(style::SPACE_SM)
            .on_press_maybe(
                (!self.carousel.is_transitioning()).then_some(Message::AdvanceRequested),
            )
            .style(theme::carousel_nav_button(cs));

            cards = cards.push(
                container(chevron)
                    .height(Length::Fixed(
                        style::CARD_IMAGE_HEIGHT + 2.0 * style::SPACE_SM,
                    ))
                    .align_y(Alignment::Center),
            );
        }

        let content = column![banner, header, cards]
            .spacing(style::SPACE_XL)
            .padding(style::SPACE_XL)
            .width(Length::Fill);

        widgets::styled_scrollable(content, cs)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn retry_button<'a>(&self, cs: &ColorScheme) -> Element<'a, Message> {
        button(text("Retry").size(style::TEXT_SM))
            .padding([style::SPACE_SM, style::SPACE_XL])
            .on_press(Message::Refresh)
            .style(theme::ghost_button(cs))
            .into()
    }

    /// Full-width featured banner for the first result. Clicking it
    /// advances the carousel, mirroring the card pages below.
    fn banner<'a>(
        &'a self,
        cs: &ColorScheme,
        backdrops: &'a PosterCache,
        movie: &'a Movie,
    ) -> Element<'a, Message> {
        let backdrop: Element<'a, Message> = match backdrops.get(movie.id) {
            Some(BackdropState::Loaded(path)) => iced::widget::image(path.as_path())
                .width(Length::Fill)
                .height(Length::Fixed(style::BANNER_HEIGHT))
                .content_fit(ContentFit::Cover)
                .border_radius(style::RADIUS_LG)
                .into(),
            _ => container(
                icons::icon_film()
                    .size(style::TEXT_3XL)
                    .color(cs.outline)
                    .center(),
            )
            .width(Length::Fill)
            .height(Length::Fixed(style::BANNER_HEIGHT))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(style::BANNER_HEIGHT))
            .style(theme::backdrop_placeholder(cs, style::RADIUS_LG))
            .into(),
        };

        let mut caption = column![text(movie.title.as_str())
            .size(style::TEXT_2XL)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_TIGHT)]
        .spacing(style::SPACE_SM);

        if !movie.overview.is_empty() {
            // Clip the synopsis to three lines.
            caption = caption.push(
                container(
                    text(movie.overview.as_str())
                        .size(style::TEXT_SM)
                        .line_height(style::LINE_HEIGHT_NORMAL)
                        .wrapping(iced::widget::text::Wrapping::WordOrGlyph),
                )
                .width(Length::Fixed(style::BANNER_OVERVIEW_WIDTH))
                .max_height(style::TEXT_SM * style::LINE_HEIGHT_NORMAL * 3.0 + 2.0)
                .clip(true),
            );
        }

        let overlay = container(
            container(caption)
                .style(theme::banner_scrim())
                .padding(style::SPACE_LG),
        )
        .width(Length::Fill)
        .height(Length::Fixed(style::BANNER_HEIGHT))
        .align_y(Alignment::End)
        .padding(style::SPACE_LG);

        mouse_area(stack![backdrop, overlay])
            .interaction(iced::mouse::Interaction::Pointer)
            .on_press(Message::AdvanceRequested)
            .into()
    }
}
