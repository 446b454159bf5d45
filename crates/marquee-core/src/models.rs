use serde::{Deserialize, Serialize};

/// A single movie from the now-playing listing.
///
/// Immutable once fetched; owned by the home screen for the duration of
/// one page load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f32>,
}

impl Movie {
    /// Release year, when TMDB provides a date.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|d| d.split('-').next())
            .filter(|y| !y.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(release_date: Option<&str>) -> Movie {
        Movie {
            id: 1,
            title: "Test".into(),
            overview: String::new(),
            backdrop_path: None,
            poster_path: None,
            release_date: release_date.map(String::from),
            vote_average: None,
        }
    }

    #[test]
    fn test_release_year() {
        assert_eq!(movie(Some("2024-03-22")).release_year(), Some("2024"));
        assert_eq!(movie(Some("")).release_year(), None);
        assert_eq!(movie(None).release_year(), None);
    }
}
