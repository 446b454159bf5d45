use iced::widget::{button, column, container, text};
use iced::{Element, Length};

use marquee_core::models::Movie;

use crate::poster_cache::PosterCache;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Card width: backdrop + horizontal padding inside the card.
pub const CARD_WIDTH: f32 = style::CARD_IMAGE_WIDTH + 2.0 * style::SPACE_SM;

/// A compact movie card for the carousel row.
///
/// Shows the landscape backdrop, a truncated title, and a year/rating
/// line. Generic over message type via `on_select`.
pub fn movie_card<'a, Message: Clone + 'static>(
    cs: &ColorScheme,
    backdrops: &'a PosterCache,
    movie: &Movie,
    on_select: Message,
) -> Element<'a, Message> {
    let backdrop = widgets::rounded_backdrop(
        cs,
        backdrops,
        movie.id,
        style::CARD_IMAGE_WIDTH,
        style::CARD_IMAGE_HEIGHT,
        style::RADIUS_MD,
    );

    // Title (clipped to 2 lines via container height)
    let title_el = container(
        text(movie.title.clone())
            .size(style::TEXT_SM)
            .font(style::FONT_HEADING)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::WordOrGlyph),
    )
    .height(Length::Fixed(
        style::TEXT_SM * style::LINE_HEIGHT_NORMAL * 2.0 + 2.0,
    ))
    .clip(true);

    let meta_el = text(meta_line(movie))
        .size(style::TEXT_XS)
        .color(cs.on_surface_variant)
        .line_height(style::LINE_HEIGHT_LOOSE);

    let card_content = column![backdrop, title_el, meta_el]
        .spacing(style::SPACE_XS)
        .padding(style::SPACE_SM)
        .width(Length::Fixed(CARD_WIDTH));

    let inner = container(card_content).style(theme::movie_card_style(cs));

    button(inner)
        .padding(0)
        .width(Length::Fixed(CARD_WIDTH))
        .on_press(on_select)
        .style(theme::movie_card_button(cs))
        .into()
}

/// "2024  ·  ★ 7.3", with either half dropped when unknown.
fn meta_line(movie: &Movie) -> String {
    let year = movie.release_year().unwrap_or_default().to_string();
    let score = movie
        .vote_average
        .filter(|v| *v > 0.0)
        .map(|v| format!("\u{2605} {v:.1}"))
        .unwrap_or_default();

    if !year.is_empty() && !score.is_empty() {
        format!("{year}  \u{00B7}  {score}")
    } else if !year.is_empty() {
        year
    } else {
        score
    }
}
