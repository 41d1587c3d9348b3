use super::*;

// =============================================================
// EditorState
// =============================================================

#[test]
fn editor_state_default_has_no_overlays() {
    let state = EditorState::default();
    assert!(state.overlays.is_empty());
}

#[test]
fn editor_state_default_has_no_background() {
    let state = EditorState::default();
    assert!(!state.background_loaded);
}

#[test]
fn overlay_lookup_finds_by_id() {
    let mut doc = canvas::doc::OverlayStore::with_initial_overlay();
    let added = doc.add_overlay().id;
    let state = EditorState { overlays: doc.overlays().to_vec(), background_loaded: false };

    assert_eq!(state.overlay(1).map(|o| o.id), Some(1));
    assert_eq!(state.overlay(added).map(|o| o.id), Some(added));
}

#[test]
fn overlay_lookup_misses_unknown_id() {
    let state = EditorState::default();
    assert!(state.overlay(7).is_none());
}

// =============================================================
// EngineHandle
// =============================================================

#[test]
fn engine_handle_starts_uninstalled() {
    let handle = EngineHandle::default();
    assert!(!handle.is_installed());
}

#[test]
fn with_on_uninstalled_handle_returns_none() {
    let handle = EngineHandle::default();
    assert!(handle.with(|e| e.active_overlay_id()).is_none());
}

#[test]
fn clones_share_the_same_slot() {
    let handle = EngineHandle::default();
    let clone = handle.clone();
    assert_eq!(handle.is_installed(), clone.is_installed());
}
