//! Domain core for Marquee: movie models, the carousel pagination
//! state machine, and application configuration.

pub mod carousel;
pub mod config;
pub mod error;
pub mod models;
