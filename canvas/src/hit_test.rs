#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::OverlayStore;

/// Deterministic measurer: every string is `width` pixels wide.
struct FixedMeasure {
    width: f64,
}

impl MeasureText for FixedMeasure {
    fn text_width(&self, _text: &str, _size: u32) -> f64 {
        self.width
    }
}

fn overlay_at(store: &mut OverlayStore, x: f64, y: f64) -> OverlayId {
    let id = store.add_overlay().id;
    let partial = crate::doc::PartialTextOverlay { x: Some(x), y: Some(y), ..Default::default() };
    store.apply_partial(id, &partial);
    id
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn hit_inside_box_selects_overlay() {
    let mut store = OverlayStore::new();
    let id = overlay_at(&mut store, 100.0, 100.0);
    let measure = FixedMeasure { width: 80.0 };

    let hit = hit_test(Point::new(110.0, 110.0), store.overlays(), &measure);
    assert_eq!(hit, Some(id));
}

#[test]
fn hit_outside_box_selects_nothing() {
    let mut store = OverlayStore::new();
    overlay_at(&mut store, 100.0, 100.0);
    let measure = FixedMeasure { width: 80.0 };

    assert!(hit_test(Point::new(200.0, 100.0), store.overlays(), &measure).is_none());
    assert!(hit_test(Point::new(100.0, 150.0), store.overlays(), &measure).is_none());
}

#[test]
fn hit_box_edges_are_exclusive() {
    let mut store = OverlayStore::new();
    overlay_at(&mut store, 100.0, 100.0);
    let measure = FixedMeasure { width: 80.0 };

    // Box spans x in (60, 140) and y in (80, 120), both open.
    assert!(hit_test(Point::new(60.0, 100.0), store.overlays(), &measure).is_none());
    assert!(hit_test(Point::new(140.0, 100.0), store.overlays(), &measure).is_none());
    assert!(hit_test(Point::new(100.0, 80.0), store.overlays(), &measure).is_none());
    assert!(hit_test(Point::new(100.0, 120.0), store.overlays(), &measure).is_none());
}

#[test]
fn hit_box_width_follows_measurement() {
    let mut store = OverlayStore::new();
    overlay_at(&mut store, 100.0, 100.0);

    let narrow = FixedMeasure { width: 10.0 };
    let wide = FixedMeasure { width: 200.0 };
    let point = Point::new(140.0, 100.0);

    assert!(hit_test(point, store.overlays(), &narrow).is_none());
    assert!(hit_test(point, store.overlays(), &wide).is_some());
}

#[test]
fn hit_box_height_is_fixed() {
    let mut store = OverlayStore::new();
    let id = overlay_at(&mut store, 100.0, 100.0);
    let measure = FixedMeasure { width: 80.0 };

    // Height stays 40 regardless of font size.
    assert_eq!(hit_test(Point::new(100.0, 119.0), store.overlays(), &measure), Some(id));
    assert!(hit_test(Point::new(100.0, 121.0), store.overlays(), &measure).is_none());
}

#[test]
fn overlapping_overlays_tie_break_to_earlier_in_order() {
    let mut store = OverlayStore::new();
    let first = overlay_at(&mut store, 100.0, 100.0);
    let second = overlay_at(&mut store, 110.0, 100.0);
    let measure = FixedMeasure { width: 80.0 };

    // Point inside both boxes.
    let hit = hit_test(Point::new(105.0, 100.0), store.overlays(), &measure);
    assert_eq!(hit, Some(first));
    assert_ne!(hit, Some(second));
}

#[test]
fn empty_store_hits_nothing() {
    let store = OverlayStore::new();
    let measure = FixedMeasure { width: 80.0 };
    assert!(hit_test(Point::new(100.0, 100.0), store.overlays(), &measure).is_none());
}

#[test]
fn zero_width_measurement_hits_nothing() {
    let mut store = OverlayStore::new();
    overlay_at(&mut store, 100.0, 100.0);
    let measure = FixedMeasure { width: 0.0 };
    assert!(hit_test(Point::new(100.0, 100.0), store.overlays(), &measure).is_none());
}

// =============================================================
// clamp_drag_target
// =============================================================

#[test]
fn drag_target_inside_bounds_is_unchanged() {
    let target = clamp_drag_target(Point::new(300.0, 250.0), 100.0, 16, 600.0, 500.0);
    assert_eq!(target, Point::new(300.0, 250.0));
}

#[test]
fn drag_target_clamps_horizontal_bounds() {
    let left = clamp_drag_target(Point::new(-50.0, 250.0), 100.0, 16, 600.0, 500.0);
    assert_eq!(left.x, 50.0);

    let right = clamp_drag_target(Point::new(700.0, 250.0), 100.0, 16, 600.0, 500.0);
    assert_eq!(right.x, 550.0);
}

#[test]
fn drag_target_clamps_vertical_bounds_asymmetrically() {
    let top = clamp_drag_target(Point::new(300.0, -10.0), 100.0, 24, 600.0, 500.0);
    assert_eq!(top.y, 24.0);

    let bottom = clamp_drag_target(Point::new(300.0, 999.0), 100.0, 24, 600.0, 500.0);
    assert_eq!(bottom.y, 480.0);
}

#[test]
fn drag_target_collapses_for_oversized_text() {
    // Text wider than the surface: the horizontal bounds invert and the
    // center pins to the upper bound.
    let target = clamp_drag_target(Point::new(300.0, 250.0), 1000.0, 16, 600.0, 500.0);
    assert_eq!(target.x, 600.0 - 500.0);
}
