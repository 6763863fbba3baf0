//! Integration tests for widget-local <-> scene coordinate mapping

use diagramscene_canvas::Viewport;
use diagramscene_core::Point;
use proptest::prelude::*;

#[test]
fn test_identity_mapping() {
    let viewport = Viewport::default();
    let p = viewport.map_to_scene(Point::new(50.0, 30.0));
    assert_eq!(p, Point::new(50.0, 30.0));
}

#[test]
fn test_pan_only() {
    let mut viewport = Viewport::default();
    viewport.pan_by(-100.0, 25.0);
    let p = viewport.map_to_scene(Point::new(0.0, 25.0));
    assert!((p.x - 100.0).abs() < 1e-9);
    assert!(p.y.abs() < 1e-9);
}

#[test]
fn test_zoom_in_at_keeps_cursor_anchor() {
    let mut viewport = Viewport::new(800.0, 600.0);
    let cursor = Point::new(320.0, 180.0);
    let anchor = viewport.map_to_scene(cursor);

    viewport.zoom_in_at(anchor);
    viewport.zoom_in_at(anchor);
    viewport.zoom_out_at(anchor);

    let back = viewport.map_from_scene(anchor);
    assert!(back.distance_to(&cursor) < 1e-9);
    assert!((viewport.zoom() - 1.2).abs() < 1e-9);
}

#[test]
fn test_reset_restores_identity() {
    let mut viewport = Viewport::default();
    viewport.set_zoom(3.0);
    viewport.set_pan(10.0, 10.0);
    viewport.rotate_by(1.0);
    assert!(!viewport.is_identity());
    viewport.reset();
    assert!(viewport.is_identity());
}

proptest! {
    #[test]
    fn prop_scene_round_trip(
        x in -5000.0f64..5000.0,
        y in -5000.0f64..5000.0,
        zoom in 0.2f64..40.0,
        pan_x in -1000.0f64..1000.0,
        pan_y in -1000.0f64..1000.0,
        rotation in -10.0f64..10.0,
    ) {
        let mut viewport = Viewport::default();
        viewport.set_zoom(zoom);
        viewport.set_pan(pan_x, pan_y);
        viewport.set_rotation(rotation);

        let local = Point::new(x, y);
        let back = viewport.map_from_scene(viewport.map_to_scene(local));
        prop_assert!(back.distance_to(&local) < 1e-6);
    }

    #[test]
    fn prop_zoom_scales_distances(
        zoom in 0.2f64..40.0,
        rotation in 0.0f64..std::f64::consts::TAU,
    ) {
        let mut viewport = Viewport::default();
        viewport.set_zoom(zoom);
        viewport.set_rotation(rotation);

        let a = viewport.map_to_scene(Point::new(0.0, 0.0));
        let b = viewport.map_to_scene(Point::new(100.0, 0.0));
        prop_assert!((a.distance_to(&b) - 100.0 / zoom).abs() < 1e-9);
    }
}
