//! TMDB (The Movie Database) API client.
//!
//! One authenticated surface: the now-playing listing, plus the image
//! URL builder for the CDN that serves posters and backdrops.

pub mod client;
pub mod error;
pub mod images;
pub mod types;

pub use client::TmdbClient;
pub use error::TmdbError;
