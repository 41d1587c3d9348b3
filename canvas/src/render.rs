//! Rendering: draws the composed scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of document state and produces pixels — it
//! does not mutate any application state, so repeated calls over the same
//! state yield the same image.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::consts::{FALLBACK_FILL, FONT_FAMILY, TEXT_BASELINE_OFFSET};
use crate::doc::{OverlayStore, TextOverlay};
use crate::geom::Rect;

/// Draw the full scene: background, then overlays in paint order.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    doc: &OverlayStore,
    background: Option<&HtmlImageElement>,
    surface_w: f64,
    surface_h: f64,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, surface_w, surface_h);

    draw_background(ctx, background, surface_w, surface_h)?;

    for overlay in doc.overlays() {
        draw_overlay(ctx, overlay)?;
    }

    Ok(())
}

fn draw_background(
    ctx: &CanvasRenderingContext2d,
    background: Option<&HtmlImageElement>,
    surface_w: f64,
    surface_h: f64,
) -> Result<(), JsValue> {
    // An image that never decoded reports zero natural size; treat it like
    // no background at all.
    let image = background.filter(|img| img.natural_width() > 0 && img.natural_height() > 0);

    let Some(image) = image else {
        ctx.set_fill_style_str(FALLBACK_FILL);
        ctx.fill_rect(0.0, 0.0, surface_w, surface_h);
        return Ok(());
    };

    let fit = letterbox_rect(
        f64::from(image.natural_width()),
        f64::from(image.natural_height()),
        surface_w,
        surface_h,
    );
    ctx.draw_image_with_html_image_element_and_dw_and_dh(image, fit.x, fit.y, fit.width, fit.height)
}

fn draw_overlay(ctx: &CanvasRenderingContext2d, overlay: &TextOverlay) -> Result<(), JsValue> {
    if overlay.text.is_empty() {
        return Ok(());
    }

    ctx.save();
    ctx.translate(overlay.x, overlay.y)?;
    ctx.rotate(rotation_radians(overlay.rotation))?;

    ctx.set_font(&format!("{}px {FONT_FAMILY}", overlay.size));
    ctx.set_fill_style_str(&overlay.color);
    ctx.set_text_align("center");
    ctx.fill_text(&overlay.text, 0.0, TEXT_BASELINE_OFFSET)?;

    ctx.restore();
    Ok(())
}

/// Rotation in radians for a whole-degree overlay rotation.
#[must_use]
pub fn rotation_radians(degrees: u32) -> f64 {
    f64::from(degrees).to_radians()
}

/// Aspect-ratio-preserving fit of an image within the surface.
///
/// The image's larger relative dimension exactly fills the matching surface
/// dimension; the result is centered on the other axis. Both image
/// dimensions must be positive.
#[must_use]
pub fn letterbox_rect(image_w: f64, image_h: f64, surface_w: f64, surface_h: f64) -> Rect {
    let surface_ratio = surface_w / surface_h;
    let image_ratio = image_w / image_h;

    let (width, height) = if image_ratio > surface_ratio {
        (surface_w, surface_w / image_ratio)
    } else {
        (surface_h * image_ratio, surface_h)
    };

    Rect {
        x: (surface_w - width) / 2.0,
        y: (surface_h - height) / 2.0,
        width,
        height,
    }
}
