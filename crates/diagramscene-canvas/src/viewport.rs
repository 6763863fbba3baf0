//! Viewport and coordinate transformation for the diagram canvas.
//!
//! Handles conversion between widget-local coordinates (pixels, 0,0 at the
//! widget's top-left) and scene coordinates (the diagram's logical space).
//! Manages zoom, pan and rotation with proper coordinate mapping.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use diagramscene_core::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP,
};
use diagramscene_core::Point;

/// Maps a widget-local point into scene coordinates using the view
/// transform in effect at the moment of the call.
pub trait SceneView {
    fn map_to_scene(&self, local: Point) -> Point;
}

/// Represents the viewport transformation state (zoom, pan and rotation).
///
/// The forward transform is `local = R(rotation) * (scene * zoom) + pan`.
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    rotation: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a new viewport with the identity transform.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            rotation: 0.0,
            canvas_width,
            canvas_height,
        }
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level; values outside the open range 0.1..50.0 are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > MIN_ZOOM && zoom < MAX_ZOOM {
            self.zoom = zoom;
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    /// Resets zoom to 1.0 (100%).
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    /// Gets the pan offset (X coordinate, pixels).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate, pixels).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta amount in pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Resets pan to origin (0, 0).
    pub fn reset_pan(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Gets the view rotation in radians (clockwise on screen).
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Sets the view rotation in radians, normalised to `[0, 2π)`.
    pub fn set_rotation(&mut self, radians: f64) {
        if radians.is_finite() {
            self.rotation = radians.rem_euclid(std::f64::consts::TAU);
        }
    }

    /// Rotates the view by a delta in radians.
    pub fn rotate_by(&mut self, radians: f64) {
        self.set_rotation(self.rotation + radians);
    }

    /// Converts widget-local coordinates to scene coordinates.
    ///
    /// Formula:
    /// ```text
    /// d     = local - pan
    /// scene = R(-rotation) * d / zoom
    /// ```
    pub fn map_to_scene(&self, local: Point) -> Point {
        let dx = local.x - self.pan_x;
        let dy = local.y - self.pan_y;
        let (sin, cos) = self.rotation.sin_cos();
        let rx = cos * dx + sin * dy;
        let ry = -sin * dx + cos * dy;
        Point::new(rx / self.zoom, ry / self.zoom)
    }

    /// Converts scene coordinates to widget-local coordinates.
    ///
    /// Formula:
    /// ```text
    /// local = R(rotation) * (scene * zoom) + pan
    /// ```
    pub fn map_from_scene(&self, scene: Point) -> Point {
        let (x, y) = self.rotate_scaled(scene, self.zoom);
        Point::new(x + self.pan_x, y + self.pan_y)
    }

    fn rotate_scaled(&self, p: Point, zoom: f64) -> (f64, f64) {
        let sx = p.x * zoom;
        let sy = p.y * zoom;
        let (sin, cos) = self.rotation.sin_cos();
        (cos * sx - sin * sy, sin * sx + cos * sy)
    }

    /// Zooms to a point, maintaining that point's on-screen position.
    ///
    /// Useful for "zoom to cursor" functionality.
    ///
    /// # Arguments
    /// * `scene_point` - The scene coordinate that must stay under the cursor
    /// * `new_zoom` - The new zoom level
    pub fn zoom_to_point(&mut self, scene_point: Point, new_zoom: f64) {
        if new_zoom <= MIN_ZOOM || new_zoom >= MAX_ZOOM {
            return;
        }

        let local = self.map_from_scene(scene_point);
        let (x, y) = self.rotate_scaled(scene_point, new_zoom);
        self.zoom = new_zoom;
        self.pan_x = local.x - x;
        self.pan_y = local.y - y;
    }

    /// Zooms in keeping `scene_point` under the cursor.
    pub fn zoom_in_at(&mut self, scene_point: Point) {
        self.zoom_to_point(scene_point, self.zoom * ZOOM_STEP);
    }

    /// Zooms out keeping `scene_point` under the cursor.
    pub fn zoom_out_at(&mut self, scene_point: Point) {
        self.zoom_to_point(scene_point, self.zoom / ZOOM_STEP);
    }

    /// Centers the viewport on a scene coordinate.
    pub fn center_on(&mut self, scene_point: Point) {
        let (x, y) = self.rotate_scaled(scene_point, self.zoom);
        self.pan_x = self.canvas_width / 2.0 - x;
        self.pan_y = self.canvas_height / 2.0 - y;
    }

    /// Resets viewport to the identity transform.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.rotation = 0.0;
    }

    /// Returns true when mapping leaves points unchanged.
    pub fn is_identity(&self) -> bool {
        self.zoom == 1.0 && self.pan_x == 0.0 && self.pan_y == 0.0 && self.rotation == 0.0
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1}) | Rotation: {:.1}°",
            self.zoom,
            self.pan_x,
            self.pan_y,
            self.rotation.to_degrees()
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

impl SceneView for Viewport {
    fn map_to_scene(&self, local: Point) -> Point {
        Viewport::map_to_scene(self, local)
    }
}

// Borrowed only for the mapping itself, so the view stays mutable while a
// modal popup is running.
impl SceneView for RefCell<Viewport> {
    fn map_to_scene(&self, local: Point) -> Point {
        self.borrow().map_to_scene(local)
    }
}

impl<T: SceneView + ?Sized> SceneView for Rc<T> {
    fn map_to_scene(&self, local: Point) -> Point {
        (**self).map_to_scene(local)
    }
}
