//! Bridging helpers between the imperative engine and Leptos signals.
//!
//! Every mutation follows the same explicit sequence: apply the operation,
//! render synchronously if any returned action asks for it, then mirror the
//! engine's document into the `EditorState` signal. There is no
//! change-watching layer; render timing is deterministic.

use leptos::prelude::*;

use canvas::engine::{Action, Engine};

use crate::state::editor::{EditorState, EngineHandle};

/// Apply a mutation to the engine, render if needed, and re-mirror state.
///
/// A no-op mutation (empty action list) triggers neither a render nor a
/// signal write.
pub fn mutate_engine(engine: &EngineHandle, editor: RwSignal<EditorState>, f: impl FnOnce(&mut Engine) -> Vec<Action>) {
    let Some(actions) = engine.with(f) else {
        return;
    };
    if actions.is_empty() {
        return;
    }
    if actions.iter().any(|a| matches!(a, Action::RenderNeeded)) {
        render_now(engine);
    }
    sync_editor_state(engine, editor);
}

/// Render synchronously, logging (not crashing) on canvas failures.
pub fn render_now(engine: &EngineHandle) {
    if let Some(Err(err)) = engine.with(|e| e.render()) {
        log::error!("canvas render failed: {err:?}");
    }
}

/// Mirror the engine's document into the reactive editor state.
pub fn sync_editor_state(engine: &EngineHandle, editor: RwSignal<EditorState>) {
    let Some((overlays, background_loaded)) = engine.with(|e| (e.core.doc.overlays().to_vec(), e.has_background()))
    else {
        return;
    };
    editor.update(|state| {
        state.overlays = overlays;
        state.background_loaded = background_loaded;
    });
}
