//! Input model: UI state and the pointer gesture state machine.
//!
//! `UiState` is the persistent interaction state visible to the host (which
//! overlay is currently held). `InputState` is the active gesture being
//! tracked between pointer-down and pointer-up. The two stay in lockstep:
//! an overlay has `is_dragging == true` exactly while it is the active
//! overlay of a `DraggingOverlay` gesture.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::OverlayId;

/// Persistent interaction state visible to the host.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the overlay currently held by the pointer, if any.
    /// At most one overlay may be in an actively-dragged state at a time.
    pub active_overlay_id: Option<OverlayId>,
}

/// Internal state for the pointer gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// The user is moving an overlay across the surface.
    DraggingOverlay {
        /// Id of the overlay picked at press time.
        id: OverlayId,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}
