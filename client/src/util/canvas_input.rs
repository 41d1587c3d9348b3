//! Canvas pointer mapping and form-input parsing utilities.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use canvas::consts::{FONT_SIZE_MAX, FONT_SIZE_MIN, ROTATION_MAX_DEG};
use canvas::geom::Point;

/// Surface-local pointer position for a canvas pointer event.
#[must_use]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Parse a font-size control value, clamped into the legal range.
/// Returns `None` for non-numeric input.
#[must_use]
pub fn parse_font_size(raw: &str) -> Option<u32> {
    let value: u32 = raw.trim().parse().ok()?;
    Some(value.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX))
}

/// Parse a rotation control value, clamped into `0..=360` degrees.
/// Returns `None` for non-numeric input.
#[must_use]
pub fn parse_rotation(raw: &str) -> Option<u32> {
    let value: u32 = raw.trim().parse().ok()?;
    Some(value.min(ROTATION_MAX_DEG))
}
