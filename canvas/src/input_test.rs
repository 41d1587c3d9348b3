use super::*;

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_has_no_active_overlay() {
    let ui = UiState::default();
    assert!(ui.active_overlay_id.is_none());
}

#[test]
fn ui_state_clone_preserves_active_overlay() {
    let ui = UiState { active_overlay_id: Some(3) };
    let copy = ui.clone();
    assert_eq!(copy.active_overlay_id, Some(3));
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn input_state_equality() {
    assert_eq!(InputState::DraggingOverlay { id: 1 }, InputState::DraggingOverlay { id: 1 });
    assert_ne!(InputState::DraggingOverlay { id: 1 }, InputState::DraggingOverlay { id: 2 });
    assert_ne!(InputState::Idle, InputState::DraggingOverlay { id: 1 });
}

#[test]
fn input_state_clone_and_copy() {
    let a = InputState::DraggingOverlay { id: 9 };
    let b = a;
    assert_eq!(a, b);
}

#[test]
fn input_state_debug_format() {
    let s = format!("{:?}", InputState::DraggingOverlay { id: 4 });
    assert!(s.contains("DraggingOverlay"));
    assert!(s.contains('4'));
}
