//! Design tokens: spacing, typography, and layout constants.
//!
//! Spacing sits on a 4px grid; typography uses a short scale so every
//! screen draws from the same hierarchy.

// ── Spacing (4px base grid) ──────────────────────────────────────

pub const SPACE_XXS: f32 = 2.0;
pub const SPACE_XS: f32 = 4.0;
pub const SPACE_SM: f32 = 8.0;
pub const SPACE_MD: f32 = 12.0;
pub const SPACE_LG: f32 = 16.0;
pub const SPACE_XL: f32 = 24.0;
pub const SPACE_2XL: f32 = 32.0;
pub const SPACE_3XL: f32 = 48.0;

// ── Typography ───────────────────────────────────────────────────

pub const TEXT_XS: f32 = 11.0;
pub const TEXT_SM: f32 = 12.0;
pub const TEXT_BASE: f32 = 15.0;
pub const TEXT_LG: f32 = 16.0;
pub const TEXT_XL: f32 = 22.0;
pub const TEXT_2XL: f32 = 28.0;
pub const TEXT_3XL: f32 = 36.0;

// Line heights (multipliers for `LineHeight::Relative`)
pub const LINE_HEIGHT_TIGHT: f32 = 1.2; // headings, display text
pub const LINE_HEIGHT_NORMAL: f32 = 1.45; // body text, labels
pub const LINE_HEIGHT_LOOSE: f32 = 1.6; // small/caption text

pub const FONT_HEADING: iced::Font = iced::Font {
    weight: iced::font::Weight::Medium,
    ..iced::Font::DEFAULT
};

// ── Layout ───────────────────────────────────────────────────────

pub const NAV_RAIL_WIDTH: f32 = 80.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;

// ── Navigation rail ──────────────────────────────────────────────

pub const NAV_ICON_SIZE: f32 = 22.0;
pub const NAV_LABEL_SIZE: f32 = 12.0;

// ── Banner (featured movie) ──────────────────────────────────────

pub const BANNER_HEIGHT: f32 = 300.0;
pub const BANNER_OVERVIEW_WIDTH: f32 = 520.0;

// ── Carousel cards ───────────────────────────────────────────────

pub const CARD_IMAGE_WIDTH: f32 = 168.0;
pub const CARD_IMAGE_HEIGHT: f32 = 95.0;

// ── Detail overlay ───────────────────────────────────────────────

pub const DETAIL_WIDTH: f32 = 560.0;
pub const DETAIL_BACKDROP_HEIGHT: f32 = 300.0;
pub const DETAIL_OVERVIEW_HEIGHT: f32 = 140.0;

// ── Input components ─────────────────────────────────────────────

pub const INPUT_LABEL_WIDTH: f32 = 150.0;
pub const INPUT_WIDTH: f32 = 360.0;

// ── Border radii ─────────────────────────────────────────────────

pub const RADIUS_SM: f32 = 4.0;
pub const RADIUS_MD: f32 = 8.0;
pub const RADIUS_LG: f32 = 12.0;
pub const RADIUS_XL: f32 = 16.0;
