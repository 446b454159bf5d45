use iced::widget::container;
use iced::{ContentFit, Element, Length};

use crate::poster_cache::{BackdropState, PosterCache};
use crate::style;
use crate::theme::{self, ColorScheme};

/// Render a backdrop image with rounded corners, or a styled placeholder.
///
/// Uses `ContentFit::Cover` so the image fills the frame completely,
/// cropping any overflow rather than leaving gaps. The container always
/// has the placeholder background so a failed/blank image still shows
/// a visible frame.
pub fn rounded_backdrop<'a, Message: 'static>(
    cs: &ColorScheme,
    backdrops: &'a PosterCache,
    movie_id: u64,
    width: f32,
    height: f32,
    radius: f32,
) -> Element<'a, Message> {
    if let Some(BackdropState::Loaded(path)) = backdrops.get(movie_id) {
        container(
            iced::widget::image(path.as_path())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .border_radius(radius),
        )
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .style(theme::backdrop_placeholder(cs, radius))
        .into()
    } else {
        let icon_size = if width <= style::CARD_IMAGE_WIDTH {
            style::TEXT_XL
        } else {
            style::TEXT_3XL
        };
        container(
            lucide_icons::iced::icon_film()
                .size(icon_size)
                .color(cs.outline)
                .center(),
        )
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(theme::backdrop_placeholder(cs, radius))
        .into()
    }
}
