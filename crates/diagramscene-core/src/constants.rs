//! Application-wide constants.

/// Smallest zoom factor the canvas accepts (exclusive).
pub const MIN_ZOOM: f64 = 0.1;

/// Largest zoom factor the canvas accepts (exclusive).
pub const MAX_ZOOM: f64 = 50.0;

/// Multiplier applied by a single zoom-in / zoom-out step.
pub const ZOOM_STEP: f64 = 1.2;

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;

/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 800.0;

/// Label of the canvas context-menu paste entry.
pub const PASTE_LABEL: &str = "Paste";

/// Maximum number of commands kept on the editor undo stack.
pub const UNDO_LIMIT: usize = 50;
