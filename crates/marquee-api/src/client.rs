use reqwest::Client;

use crate::error::TmdbError;
use crate::types::{NowPlayingPage, NowPlayingResponse};

const BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB API v3 client.
///
/// The API key is injected at construction; nothing in this crate reads
/// it from the environment or a global.
pub struct TmdbClient {
    api_key: String,
    language: String,
    http: Client,
}

impl TmdbClient {
    pub fn new(api_key: String, language: String) -> Self {
        Self {
            api_key,
            language,
            http: Client::new(),
        }
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, TmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "TMDB API error");
            Err(TmdbError::Api {
                status,
                message: body,
            })
        }
    }

    /// Fetch the first page of movies currently playing in theaters.
    pub async fn now_playing(&self) -> Result<NowPlayingPage, TmdbError> {
        let resp = self
            .http
            .get(format!("{BASE_URL}/movie/now_playing"))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
                ("page", "1"),
            ])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body: NowPlayingResponse = resp
            .json()
            .await
            .map_err(|e| TmdbError::Parse(e.to_string()))?;

        tracing::debug!(results = body.results.len(), "now-playing page fetched");
        Ok(body.into_page())
    }
}
