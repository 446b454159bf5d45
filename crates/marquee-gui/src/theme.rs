//! Color schemes and the iced theme bridge.
//!
//! Two built-in variants (dark and light) share the same semantic token
//! names; `ThemeMode::System` resolves against the OS setting at startup
//! and whenever appearance settings change.

mod catalog;

pub use catalog::*;

use iced::{Color, Theme};

pub use marquee_core::config::ThemeMode;

/// Semantic color tokens used by every style function in [`catalog`].
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surfaces, low to high elevation
    pub surface_container_lowest: Color,
    pub surface: Color,
    pub surface_container_low: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,
    pub surface_bright: Color,

    // Text hierarchy
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,

    // Primary accent (marquee amber)
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_dim: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,

    // Rating gold
    pub tertiary: Color,

    // Error
    pub error: Color,
    pub error_hover: Color,
    pub error_pressed: Color,
    pub on_error: Color,
}

impl ColorScheme {
    pub fn dark() -> Self {
        Self {
            surface_container_lowest: Color::from_rgb8(0x0C, 0x0C, 0x10),
            surface: Color::from_rgb8(0x10, 0x10, 0x14),
            surface_container_low: Color::from_rgb8(0x16, 0x16, 0x1B),
            surface_container: Color::from_rgb8(0x1C, 0x1C, 0x22),
            surface_container_high: Color::from_rgb8(0x24, 0x24, 0x2B),
            surface_bright: Color::from_rgb8(0x2E, 0x2E, 0x36),

            on_surface: Color::from_rgb8(0xE6, 0xE1, 0xDC),
            on_surface_variant: Color::from_rgb8(0xA8, 0xA2, 0x9B),
            outline: Color::from_rgb8(0x7A, 0x75, 0x6E),
            outline_variant: Color::from_rgb8(0x3A, 0x3A, 0x42),

            primary: Color::from_rgb8(0xE8, 0xB4, 0x4C),
            primary_hover: Color::from_rgb8(0xF2, 0xC4, 0x66),
            primary_dim: Color::from_rgb8(0xC9, 0x9A, 0x35),
            on_primary: Color::from_rgb8(0x24, 0x1A, 0x03),
            primary_container: Color::from_rgb8(0x4A, 0x3A, 0x12),
            on_primary_container: Color::from_rgb8(0xF6, 0xDF, 0xAE),

            tertiary: Color::from_rgb8(0xF5, 0xC5, 0x18),

            error: Color::from_rgb8(0xE5, 0x48, 0x4D),
            error_hover: Color::from_rgb8(0xEC, 0x5D, 0x62),
            error_pressed: Color::from_rgb8(0xD9, 0x3B, 0x40),
            on_error: Color::from_rgb8(0x1B, 0x04, 0x05),
        }
    }

    pub fn light() -> Self {
        Self {
            surface_container_lowest: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            surface: Color::from_rgb8(0xFA, 0xF8, 0xF5),
            surface_container_low: Color::from_rgb8(0xF1, 0xEE, 0xE9),
            surface_container: Color::from_rgb8(0xE9, 0xE5, 0xDE),
            surface_container_high: Color::from_rgb8(0xDF, 0xDA, 0xD1),
            surface_bright: Color::from_rgb8(0xFF, 0xFF, 0xFF),

            on_surface: Color::from_rgb8(0x20, 0x1D, 0x1A),
            on_surface_variant: Color::from_rgb8(0x55, 0x51, 0x4B),
            outline: Color::from_rgb8(0x80, 0x7B, 0x73),
            outline_variant: Color::from_rgb8(0xD5, 0xD0, 0xC7),

            primary: Color::from_rgb8(0x8A, 0x5D, 0x00),
            primary_hover: Color::from_rgb8(0xA7, 0x71, 0x04),
            primary_dim: Color::from_rgb8(0x6E, 0x4A, 0x00),
            on_primary: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            primary_container: Color::from_rgb8(0xF4, 0xE3, 0xBC),
            on_primary_container: Color::from_rgb8(0x3E, 0x2E, 0x00),

            tertiary: Color::from_rgb8(0xB0, 0x89, 0x00),

            error: Color::from_rgb8(0xC6, 0x2A, 0x2F),
            error_hover: Color::from_rgb8(0xD1, 0x3A, 0x3F),
            error_pressed: Color::from_rgb8(0xA5, 0x22, 0x26),
            on_error: Color::from_rgb8(0xFF, 0xFF, 0xFF),
        }
    }
}

/// Resolve `ThemeMode::System` to a concrete Dark or Light.
pub fn resolve_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::System => match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        },
        other => other,
    }
}

/// Color scheme for a resolved mode (Dark is the fallback for System).
pub fn scheme_for(mode: ThemeMode) -> ColorScheme {
    match mode {
        ThemeMode::Light => ColorScheme::light(),
        _ => ColorScheme::dark(),
    }
}

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        "Marquee",
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.tertiary,
            warning: cs.tertiary,
            danger: cs.error,
        },
    )
}
