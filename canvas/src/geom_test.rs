#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn point_new_stores_coordinates() {
    let p = Point::new(3.5, -2.0);
    assert_eq!(p.x, 3.5);
    assert_eq!(p.y, -2.0);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(2.0, 1.0));
}

#[test]
fn point_clone_and_copy() {
    let a = Point::new(4.0, 5.0);
    let b = a;
    assert_eq!(a, b);
}

// =============================================================
// Rect
// =============================================================

#[test]
fn rect_equality() {
    let a = Rect { x: 0.0, y: 10.0, width: 100.0, height: 50.0 };
    let b = a;
    assert_eq!(a, b);
}

// =============================================================
// clamp
// =============================================================

#[test]
fn clamp_passes_through_in_range() {
    assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
}

#[test]
fn clamp_pins_below_minimum() {
    assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
}

#[test]
fn clamp_pins_above_maximum() {
    assert_eq!(clamp(42.0, 0.0, 10.0), 10.0);
}

#[test]
fn clamp_honors_bounds_exactly() {
    assert_eq!(clamp(0.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(10.0, 0.0, 10.0), 10.0);
}

#[test]
fn clamp_collapses_to_max_when_min_exceeds_max() {
    // min > max happens when an overlay is wider than the surface; the
    // min-last ordering collapses the result to max instead of panicking.
    assert_eq!(clamp(5.0, 20.0, 10.0), 10.0);
    assert_eq!(clamp(50.0, 20.0, 10.0), 10.0);
}
