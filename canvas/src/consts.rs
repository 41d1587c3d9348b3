//! Shared numeric and style constants for the canvas crate.

// ── Surface ─────────────────────────────────────────────────────

/// Width of the editing surface in pixels.
pub const SURFACE_WIDTH: f64 = 600.0;

/// Height of the editing surface in pixels.
pub const SURFACE_HEIGHT: f64 = 500.0;

/// Flat fill painted when no background image is set.
pub const FALLBACK_FILL: &str = "#a0aec6";

// ── Text ────────────────────────────────────────────────────────

/// Font family used for every overlay.
pub const FONT_FAMILY: &str = "Arial";

/// Distance from the overlay origin to the text baseline, in pixels.
/// Offsetting the baseline below the origin keeps the visual center of the
/// glyphs aligned with the hit-box center.
pub const TEXT_BASELINE_OFFSET: f64 = 10.0;

/// Minimum overlay font size in pixels.
pub const FONT_SIZE_MIN: u32 = 10;

/// Maximum overlay font size in pixels.
pub const FONT_SIZE_MAX: u32 = 100;

/// Maximum overlay rotation in degrees.
pub const ROTATION_MAX_DEG: u32 = 360;

// ── Hit-testing and dragging ────────────────────────────────────

/// Fixed height of an overlay's hit box, in pixels.
pub const TEXT_HIT_HEIGHT: f64 = 40.0;

/// Margin kept between a dragged overlay's center and the bottom surface
/// edge. The top margin is the overlay's font size; the asymmetry keeps
/// descenders legible near the bottom edge.
pub const BOTTOM_DRAG_MARGIN: f64 = 20.0;

// ── Overlay defaults ────────────────────────────────────────────

/// Text content for overlays created through the add operation.
pub const DEFAULT_TEXT: &str = "New Text";

/// Center position for overlays created through the add operation.
pub const DEFAULT_X: f64 = 100.0;

/// Center position for overlays created through the add operation.
pub const DEFAULT_Y: f64 = 100.0;

/// Font size for new overlays, in pixels.
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Fill color for new overlays.
pub const DEFAULT_COLOR: &str = "#000000";

/// Text content of the overlay seeded into a fresh session.
pub const INITIAL_TEXT: &str = "Your Text Here";

/// Center position of the overlay seeded into a fresh session.
pub const INITIAL_X: f64 = 300.0;

/// Center position of the overlay seeded into a fresh session.
pub const INITIAL_Y: f64 = 50.0;
