//! URL builder for TMDB's image CDN.

const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Rendition size served by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    W300,
    W500,
    W780,
    Original,
}

impl ImageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::W300 => "w300",
            Self::W500 => "w500",
            Self::W780 => "w780",
            Self::Original => "original",
        }
    }
}

/// Full CDN URL for a poster/backdrop path from the API.
///
/// TMDB paths come with a leading slash; tolerate both forms.
pub fn image_url(path: &str, size: ImageSize) -> String {
    let path = path.trim_start_matches('/');
    format!("{IMAGE_BASE_URL}/{}/{path}", size.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_sizes() {
        assert_eq!(
            image_url("/abc.jpg", ImageSize::W500),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(
            image_url("abc.jpg", ImageSize::Original),
            "https://image.tmdb.org/t/p/original/abc.jpg"
        );
    }
}
