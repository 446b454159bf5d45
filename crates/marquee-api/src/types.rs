use serde::Deserialize;

use marquee_core::models::Movie;

// ── Now-playing responses ────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct NowPlayingResponse {
    pub dates: Option<DateWindow>,
    pub page: u32,
    pub results: Vec<TmdbMovie>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// Theatrical release window covered by a now-playing page.
#[derive(Debug, Clone, Deserialize)]
pub struct DateWindow {
    pub minimum: String,
    pub maximum: String,
}

#[derive(Debug, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f32>,
}

/// The first now-playing results page, converted to core models.
#[derive(Debug)]
pub struct NowPlayingPage {
    pub movies: Vec<Movie>,
    pub dates: Option<DateWindow>,
    pub total_pages: u32,
    pub total_results: u32,
}

// ── Conversions to core models ───────────────────────────────────

impl TmdbMovie {
    pub fn into_movie(self) -> Movie {
        Movie {
            id: self.id,
            title: self.title,
            overview: self.overview,
            // TMDB sometimes sends explicit nulls and sometimes "" here.
            backdrop_path: self.backdrop_path.filter(|p| !p.is_empty()),
            poster_path: self.poster_path.filter(|p| !p.is_empty()),
            release_date: self.release_date.filter(|d| !d.is_empty()),
            vote_average: self.vote_average,
        }
    }
}

impl NowPlayingResponse {
    pub fn into_page(self) -> NowPlayingPage {
        NowPlayingPage {
            movies: self.results.into_iter().map(TmdbMovie::into_movie).collect(),
            dates: self.dates,
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_now_playing_response() {
        let json = r#"{
            "dates": { "maximum": "2024-04-03", "minimum": "2024-02-21" },
            "page": 1,
            "results": [
                {
                    "adult": false,
                    "backdrop_path": "/1XDDXPXGiI8id7MrUxK36ke7gkX.jpg",
                    "genre_ids": [28, 12, 16],
                    "id": 1011985,
                    "original_language": "en",
                    "original_title": "Kung Fu Panda 4",
                    "overview": "Po is gearing up to become the spiritual leader of his Valley of Peace.",
                    "popularity": 4538.567,
                    "poster_path": "/kDp1vUBnMpe8ak4rjgl3cLELqjU.jpg",
                    "release_date": "2024-03-02",
                    "title": "Kung Fu Panda 4",
                    "video": false,
                    "vote_average": 6.9,
                    "vote_count": 541
                },
                {
                    "backdrop_path": null,
                    "id": 693134,
                    "overview": "",
                    "poster_path": "/8b8R8l88Qje9dn9OE8PY05Nxl1X.jpg",
                    "release_date": "",
                    "title": "Dune: Part Two",
                    "vote_average": 8.3
                }
            ],
            "total_pages": 126,
            "total_results": 2512
        }"#;

        let resp: NowPlayingResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.page, 1);
        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.dates.as_ref().unwrap().minimum, "2024-02-21");

        let page = resp.into_page();
        assert_eq!(page.total_results, 2512);

        let first = &page.movies[0];
        assert_eq!(first.id, 1011985);
        assert_eq!(first.title, "Kung Fu Panda 4");
        assert_eq!(
            first.backdrop_path.as_deref(),
            Some("/1XDDXPXGiI8id7MrUxK36ke7gkX.jpg")
        );
        assert_eq!(first.release_year(), Some("2024"));

        // Nulls and empty strings both collapse to None.
        let second = &page.movies[1];
        assert!(second.backdrop_path.is_none());
        assert!(second.release_date.is_none());
        assert!(second.poster_path.is_some());
    }

    #[test]
    fn test_deserialize_minimal_movie() {
        let json = r#"{ "id": 7, "title": "Seven Samurai" }"#;
        let movie: TmdbMovie = serde_json::from_str(json).unwrap();
        let movie = movie.into_movie();
        assert_eq!(movie.id, 7);
        assert!(movie.overview.is_empty());
        assert!(movie.backdrop_path.is_none());
        assert!(movie.vote_average.is_none());
    }
}
