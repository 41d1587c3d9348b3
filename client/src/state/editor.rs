#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::doc::{OverlayId, TextOverlay};
use canvas::engine::Engine;

/// Read-only mirror of the engine's document, refreshed after every
/// mutation so components can render reactively.
#[derive(Clone, Debug, Default)]
pub struct EditorState {
    /// Overlay snapshots in paint order.
    pub overlays: Vec<TextOverlay>,
    /// Whether a background image is currently installed.
    pub background_loaded: bool,
}

impl EditorState {
    /// Look up an overlay snapshot by id.
    #[must_use]
    pub fn overlay(&self, id: OverlayId) -> Option<&TextOverlay> {
        self.overlays.iter().find(|o| o.id == id)
    }
}

/// Shared handle to the imperative engine owned by the canvas host.
///
/// The engine mounts after the first render, so the slot starts empty;
/// callers treat an unmounted engine as a no-op.
#[derive(Clone, Default)]
pub struct EngineHandle {
    inner: Rc<RefCell<Option<Engine>>>,
}

impl EngineHandle {
    /// Install the engine once the canvas element exists.
    pub fn install(&self, engine: Engine) {
        *self.inner.borrow_mut() = Some(engine);
    }

    /// Whether an engine has been installed yet.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.inner.borrow().is_some()
    }

    /// Run `f` against the engine, if mounted.
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> Option<R> {
        self.inner.borrow_mut().as_mut().map(f)
    }
}
