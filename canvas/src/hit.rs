//! Hit-testing pointer positions against overlays, and drag clamping.
//!
//! Text width is font-dependent and only the browser can measure it, so the
//! measurement is injected through [`MeasureText`]. The wasm side implements
//! it over `ctx.measure_text` with the overlay's font set; tests use a
//! deterministic fake.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{BOTTOM_DRAG_MARGIN, TEXT_HIT_HEIGHT};
use crate::doc::{OverlayId, TextOverlay};
use crate::geom::{Point, clamp};

/// Measures rendered text width in surface pixels for a given font size.
pub trait MeasureText {
    fn text_width(&self, text: &str, size: u32) -> f64;
}

/// Test which overlay (if any) is under `point`.
///
/// Overlays are scanned in paint order and the FIRST one whose hit box
/// contains the point wins; overlapping overlays tie-break toward the one
/// earlier in the collection. The hit box is an axis-aligned rectangle
/// centered at the overlay position: measured text width by a fixed
/// [`TEXT_HIT_HEIGHT`] pixels.
#[must_use]
pub fn hit_test(point: Point, overlays: &[TextOverlay], measure: &dyn MeasureText) -> Option<OverlayId> {
    for overlay in overlays {
        let half_width = measure.text_width(&overlay.text, overlay.size) / 2.0;
        let half_height = TEXT_HIT_HEIGHT / 2.0;

        let inside = point.x > overlay.x - half_width
            && point.x < overlay.x + half_width
            && point.y > overlay.y - half_height
            && point.y < overlay.y + half_height;

        if inside {
            return Some(overlay.id);
        }
    }
    None
}

/// Clamp a raw pointer position to a legal overlay center.
///
/// The horizontal bound keeps the full text width on the surface; the
/// vertical bounds are asymmetric (font size above, [`BOTTOM_DRAG_MARGIN`]
/// below) to keep glyphs legible near the top and bottom edges. Uses the
/// collapsing [`clamp`], so text wider than the surface pins to the right
/// bound instead of panicking.
#[must_use]
pub fn clamp_drag_target(point: Point, text_width: f64, font_size: u32, surface_w: f64, surface_h: f64) -> Point {
    Point {
        x: clamp(point.x, text_width / 2.0, surface_w - text_width / 2.0),
        y: clamp(point.y, f64::from(font_size), surface_h - BOTTOM_DRAG_MARGIN),
    }
}
