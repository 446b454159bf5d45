use std::collections::HashMap;
use std::path::PathBuf;

use marquee_core::config::AppConfig;

/// State of a backdrop image for a given movie.
#[derive(Debug, Clone)]
pub enum BackdropState {
    Loading,
    Loaded(PathBuf),
    Failed,
}

/// In-memory cache mapping movie IDs to their backdrop image state.
#[derive(Debug, Default)]
pub struct PosterCache {
    pub states: HashMap<u64, BackdropState>,
}

impl PosterCache {
    pub fn get(&self, movie_id: u64) -> Option<&BackdropState> {
        self.states.get(&movie_id)
    }
}

/// Directory for cached backdrop images.
pub fn backdrops_dir() -> PathBuf {
    AppConfig::cache_dir().join("backdrops")
}

/// Expected file path for a movie's backdrop image.
pub fn backdrop_path(movie_id: u64) -> PathBuf {
    backdrops_dir().join(format!("{movie_id}.jpg"))
}

/// Download a backdrop image and save it to disk. Returns the saved path.
pub async fn fetch_backdrop(movie_id: u64, url: String) -> Result<PathBuf, String> {
    let dir = backdrops_dir();
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;

    let path = backdrop_path(movie_id);

    let bytes = reqwest::get(&url)
        .await
        .map_err(|e| e.to_string())?
        .bytes()
        .await
        .map_err(|e| e.to_string())?;

    std::fs::write(&path, &bytes).map_err(|e| e.to_string())?;
    Ok(path)
}
