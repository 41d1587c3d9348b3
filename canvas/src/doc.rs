//! Document model: text overlays, their properties, and the in-memory store.
//!
//! This module defines the core data types that describe what is on the
//! surface (`TextOverlay`), a sparse-update type for incremental edits
//! (`PartialTextOverlay`), and the runtime store that owns all live overlays
//! (`OverlayStore`).
//!
//! Data flows into this layer from the settings panel and from the input
//! engine (mutations). The renderer reads from `OverlayStore` via `overlays`,
//! which yields paint order: overlays are drawn in insertion order and are
//! never reordered.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_COLOR, DEFAULT_FONT_SIZE, DEFAULT_TEXT, DEFAULT_X, DEFAULT_Y, INITIAL_TEXT, INITIAL_X, INITIAL_Y,
};

/// Unique identifier for a text overlay.
///
/// Ids come from a monotonically increasing per-store counter and are never
/// reused within a session, even after deletions.
pub type OverlayId = u64;

/// A draggable, styleable text label composited over the background.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextOverlay {
    /// Unique identifier, stable for the overlay's lifetime.
    pub id: OverlayId,
    /// Text content; may be empty.
    pub text: String,
    /// Horizontal center position in surface pixels.
    pub x: f64,
    /// Vertical center position in surface pixels.
    pub y: f64,
    /// Clockwise rotation in whole degrees, `0..=360`.
    pub rotation: u32,
    /// Font size in pixels, `10..=100`.
    pub size: u32,
    /// Fill color as a CSS hex string.
    pub color: String,
    /// Transient drag flag; true only while the pointer holds this overlay.
    /// Never serialized: drag state is not part of the document.
    #[serde(skip)]
    pub is_dragging: bool,
}

/// Sparse update for a text overlay. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialTextOverlay {
    /// New text content, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// New x position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New y position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New rotation in degrees, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<u32>,
    /// New font size in pixels, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// New fill color, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// In-memory store of text overlays, in paint order.
pub struct OverlayStore {
    overlays: Vec<TextOverlay>,
    next_id: OverlayId,
}

impl OverlayStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { overlays: Vec::new(), next_id: 1 }
    }

    /// Create a store seeded with the session's initial overlay.
    #[must_use]
    pub fn with_initial_overlay() -> Self {
        let mut store = Self::new();
        let id = store.allocate_id();
        store.overlays.push(TextOverlay {
            id,
            text: INITIAL_TEXT.to_owned(),
            x: INITIAL_X,
            y: INITIAL_Y,
            rotation: 0,
            size: DEFAULT_FONT_SIZE,
            color: DEFAULT_COLOR.to_owned(),
            is_dragging: false,
        });
        store
    }

    fn allocate_id(&mut self) -> OverlayId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a new overlay with default field values and a fresh id,
    /// returning a copy of it. Always succeeds.
    pub fn add_overlay(&mut self) -> TextOverlay {
        let id = self.allocate_id();
        let overlay = TextOverlay {
            id,
            text: DEFAULT_TEXT.to_owned(),
            x: DEFAULT_X,
            y: DEFAULT_Y,
            rotation: 0,
            size: DEFAULT_FONT_SIZE,
            color: DEFAULT_COLOR.to_owned(),
            is_dragging: false,
        };
        self.overlays.push(overlay.clone());
        overlay
    }

    /// Apply a partial update to an existing overlay. Returns false if the
    /// overlay doesn't exist. Never affects ordering or other overlays.
    pub fn apply_partial(&mut self, id: OverlayId, partial: &PartialTextOverlay) -> bool {
        let Some(overlay) = self.overlays.iter_mut().find(|o| o.id == id) else {
            return false;
        };
        if let Some(ref text) = partial.text {
            overlay.text = text.clone();
        }
        if let Some(x) = partial.x {
            overlay.x = x;
        }
        if let Some(y) = partial.y {
            overlay.y = y;
        }
        if let Some(rotation) = partial.rotation {
            overlay.rotation = rotation;
        }
        if let Some(size) = partial.size {
            overlay.size = size;
        }
        if let Some(ref color) = partial.color {
            overlay.color = color.clone();
        }
        true
    }

    /// Set or clear the transient drag flag on an overlay. Returns false if
    /// the overlay doesn't exist.
    pub fn set_dragging(&mut self, id: OverlayId, dragging: bool) -> bool {
        let Some(overlay) = self.overlays.iter_mut().find(|o| o.id == id) else {
            return false;
        };
        overlay.is_dragging = dragging;
        true
    }

    /// Remove an overlay by id, returning it if it was present. The id is
    /// not recycled.
    pub fn remove(&mut self, id: OverlayId) -> Option<TextOverlay> {
        let index = self.overlays.iter().position(|o| o.id == id)?;
        Some(self.overlays.remove(index))
    }

    /// Return a reference to an overlay by id.
    #[must_use]
    pub fn get(&self, id: OverlayId) -> Option<&TextOverlay> {
        self.overlays.iter().find(|o| o.id == id)
    }

    /// All overlays in paint order (insertion order).
    #[must_use]
    pub fn overlays(&self) -> &[TextOverlay] {
        &self.overlays
    }

    /// Number of overlays currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    /// Returns `true` if the store contains no overlays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}

impl Default for OverlayStore {
    fn default() -> Self {
        Self::new()
    }
}
