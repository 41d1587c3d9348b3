use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::{FONT_FAMILY, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::doc::{OverlayId, OverlayStore, PartialTextOverlay, TextOverlay};
use crate::geom::Point;
use crate::hit::{self, MeasureText};
use crate::input::{InputState, UiState};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from engine operations for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    OverlayAdded(TextOverlay),
    OverlayUpdated { id: OverlayId, fields: PartialTextOverlay },
    OverlayRemoved { id: OverlayId },
    BackgroundChanged,
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies; text measurement is injected through [`MeasureText`].
pub struct EngineCore {
    pub doc: OverlayStore,
    pub ui: UiState,
    pub input: InputState,
    pub surface_width: f64,
    pub surface_height: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            doc: OverlayStore::with_initial_overlay(),
            ui: UiState::default(),
            input: InputState::default(),
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
        }
    }
}

impl EngineCore {
    /// A fresh editing session: one seeded overlay, nothing active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Overlay model operations ---

    /// Append a new overlay with default values and a fresh id.
    pub fn add_overlay(&mut self) -> Vec<Action> {
        let overlay = self.doc.add_overlay();
        vec![Action::OverlayAdded(overlay), Action::RenderNeeded]
    }

    /// Merge the present fields of `fields` into the overlay matching `id`.
    /// Silent no-op (no actions) when the id doesn't resolve.
    pub fn update_overlay(&mut self, id: OverlayId, fields: PartialTextOverlay) -> Vec<Action> {
        if !self.doc.apply_partial(id, &fields) {
            return Vec::new();
        }
        vec![Action::OverlayUpdated { id, fields }, Action::RenderNeeded]
    }

    /// Delete the overlay matching `id`. Silent no-op when absent. Deleting
    /// the actively-dragged overlay also terminates the gesture.
    pub fn remove_overlay(&mut self, id: OverlayId) -> Vec<Action> {
        if self.doc.remove(id).is_none() {
            return Vec::new();
        }
        if self.ui.active_overlay_id == Some(id) {
            self.ui.active_overlay_id = None;
            self.input = InputState::Idle;
        }
        vec![Action::OverlayRemoved { id }, Action::RenderNeeded]
    }

    // --- Pointer gestures ---

    /// Pointer pressed at `point`: pick the first overlay (in paint order)
    /// whose hit box contains the point and begin dragging it.
    pub fn on_pointer_down(&mut self, point: Point, measure: &dyn MeasureText) -> Vec<Action> {
        // A press that arrives mid-gesture (lost pointer capture) settles
        // the previous drag first, keeping at most one overlay held.
        let mut actions = if self.ui.active_overlay_id.is_some() {
            self.on_pointer_up()
        } else {
            Vec::new()
        };

        let Some(id) = hit::hit_test(point, self.doc.overlays(), measure) else {
            return actions;
        };
        self.doc.set_dragging(id, true);
        self.ui.active_overlay_id = Some(id);
        self.input = InputState::DraggingOverlay { id };
        if !actions.iter().any(|a| matches!(a, Action::RenderNeeded)) {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Pointer moved to `point`: while a drag is in progress, move the held
    /// overlay to the clamped target position.
    pub fn on_pointer_move(&mut self, point: Point, measure: &dyn MeasureText) -> Vec<Action> {
        let InputState::DraggingOverlay { id } = self.input else {
            return Vec::new();
        };
        let Some(overlay) = self.doc.get(id) else {
            return Vec::new();
        };
        if !overlay.is_dragging {
            return Vec::new();
        }

        let text_width = measure.text_width(&overlay.text, overlay.size);
        let target = hit::clamp_drag_target(point, text_width, overlay.size, self.surface_width, self.surface_height);
        let fields = PartialTextOverlay { x: Some(target.x), y: Some(target.y), ..PartialTextOverlay::default() };
        self.doc.apply_partial(id, &fields);
        vec![Action::OverlayUpdated { id, fields }, Action::RenderNeeded]
    }

    /// Pointer released (or left the surface — treated identically): end any
    /// active drag and return to idle.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        let Some(id) = self.ui.active_overlay_id.take() else {
            return Vec::new();
        };
        self.doc.set_dragging(id, false);
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// The overlay currently held by the pointer, if any.
    #[must_use]
    pub fn active_overlay_id(&self) -> Option<OverlayId> {
        self.ui.active_overlay_id
    }

    /// Look up an overlay by id.
    #[must_use]
    pub fn overlay(&self, id: OverlayId) -> Option<&TextOverlay> {
        self.doc.get(id)
    }
}

/// Measures text through the 2D context, with the overlay's font set first.
struct Canvas2dMeasure {
    ctx: CanvasRenderingContext2d,
}

impl MeasureText for Canvas2dMeasure {
    fn text_width(&self, text: &str, size: u32) -> f64 {
        self.ctx.set_font(&format!("{size}px {FONT_FAMILY}"));
        match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width(),
            // A failed measurement hits nothing rather than everything.
            Err(_) => 0.0,
        }
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas
/// element plus the decoded background image, if one is installed.
pub struct Engine {
    canvas: HtmlCanvasElement,
    background: Option<HtmlImageElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element. Surface
    /// dimensions are taken from the element's pixel size.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let mut core = EngineCore::new();
        if canvas.width() > 0 && canvas.height() > 0 {
            core.surface_width = f64::from(canvas.width());
            core.surface_height = f64::from(canvas.height());
        }
        Self { canvas, background: None, core }
    }

    fn context(&self) -> Option<CanvasRenderingContext2d> {
        let object = match self.canvas.get_context("2d") {
            Ok(Some(object)) => object,
            // A missing or failed context is the degenerate-surface case;
            // callers treat it as a no-op.
            Ok(None) | Err(_) => return None,
        };
        match object.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => Some(ctx),
            Err(_) => None,
        }
    }

    // --- Delegated overlay model operations ---

    pub fn add_overlay(&mut self) -> Vec<Action> {
        self.core.add_overlay()
    }

    pub fn update_overlay(&mut self, id: OverlayId, fields: PartialTextOverlay) -> Vec<Action> {
        self.core.update_overlay(id, fields)
    }

    pub fn remove_overlay(&mut self, id: OverlayId) -> Vec<Action> {
        self.core.remove_overlay(id)
    }

    /// Install a decoded image as the background, replacing any prior one.
    pub fn set_background(&mut self, image: HtmlImageElement) -> Vec<Action> {
        self.background = Some(image);
        vec![Action::BackgroundChanged, Action::RenderNeeded]
    }

    /// Whether a background image is currently installed.
    #[must_use]
    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    // --- Pointer events ---

    pub fn on_pointer_down(&mut self, point: Point) -> Vec<Action> {
        let Some(ctx) = self.context() else {
            return Vec::new();
        };
        let measure = Canvas2dMeasure { ctx };
        self.core.on_pointer_down(point, &measure)
    }

    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        let Some(ctx) = self.context() else {
            return Vec::new();
        };
        let measure = Canvas2dMeasure { ctx };
        self.core.on_pointer_move(point, &measure)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    // --- Render and export ---

    /// Draw the current state to the canvas. A surface without a usable 2D
    /// context is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let Some(ctx) = self.context() else {
            return Ok(());
        };
        render::draw(
            &ctx,
            &self.core.doc,
            self.background.as_ref(),
            self.core.surface_width,
            self.core.surface_height,
        )
    }

    /// Encode the composed surface as a PNG data URL.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas refuses to encode (e.g. zero-sized).
    pub fn to_png_data_url(&self) -> Result<String, JsValue> {
        self.canvas.to_data_url_with_type("image/png")
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn active_overlay_id(&self) -> Option<OverlayId> {
        self.core.active_overlay_id()
    }

    #[must_use]
    pub fn overlay(&self, id: OverlayId) -> Option<&TextOverlay> {
        self.core.overlay(id)
    }
}
