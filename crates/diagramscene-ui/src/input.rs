//! Toolkit-independent pointer handling for the canvas.

use diagramscene_canvas::{ContextMenuEvent, Viewport};
use diagramscene_core::Point;

/// Builds the event for a context-menu trigger at widget position `(x, y)`.
///
/// The popup is parented to the canvas, so it is placed in the same
/// widget-local space the trigger was reported in.
pub fn context_menu_event(x: f64, y: f64) -> ContextMenuEvent {
    let p = Point::new(x, y);
    ContextMenuEvent::new(p, p)
}

/// Zooms around the cursor for one scroll step. Negative `dy` (wheel up)
/// zooms in.
pub fn apply_scroll_zoom(viewport: &mut Viewport, cursor: Point, dy: f64) {
    let anchor = viewport.map_to_scene(cursor);
    if dy < 0.0 {
        viewport.zoom_in_at(anchor);
    } else if dy > 0.0 {
        viewport.zoom_out_at(anchor);
    }
}

/// Pans by the pointer delta since the last drag update.
pub fn apply_drag_pan(viewport: &mut Viewport, last_offset: &mut (f64, f64), offset: (f64, f64)) {
    let dx = offset.0 - last_offset.0;
    let dy = offset.1 - last_offset.1;
    viewport.pan_by(dx, dy);
    *last_offset = offset;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_menu_event_uses_widget_position() {
        let event = context_menu_event(50.0, 30.0);
        assert_eq!(event.local, Point::new(50.0, 30.0));
        assert_eq!(event.global, Point::new(50.0, 30.0));
    }

    #[test]
    fn test_scroll_zoom_keeps_cursor_anchor() {
        let mut viewport = Viewport::default();
        let cursor = Point::new(200.0, 100.0);
        let anchor = viewport.map_to_scene(cursor);

        apply_scroll_zoom(&mut viewport, cursor, -1.0);
        assert!((viewport.zoom() - 1.2).abs() < 1e-12);
        assert!(viewport.map_to_scene(cursor).distance_to(&anchor) < 1e-9);

        apply_scroll_zoom(&mut viewport, cursor, 1.0);
        assert!((viewport.zoom() - 1.0).abs() < 1e-12);

        apply_scroll_zoom(&mut viewport, cursor, 0.0);
        assert!((viewport.zoom() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_drag_pan_is_incremental() {
        let mut viewport = Viewport::default();
        let mut last = (0.0, 0.0);
        apply_drag_pan(&mut viewport, &mut last, (10.0, 5.0));
        apply_drag_pan(&mut viewport, &mut last, (15.0, 5.0));
        assert_eq!((viewport.pan_x(), viewport.pan_y()), (15.0, 5.0));
        assert_eq!(last, (15.0, 5.0));
    }
}
