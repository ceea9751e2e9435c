//! Fixed canvas and geometry policy (all values in SVG user units)

use glam::DVec2;

pub const CANVAS_WIDTH: f64 = 300.0;
pub const CANVAS_HEIGHT: f64 = 200.0;
/// Every shape is anchored on this point.
pub const CENTER: DVec2 = DVec2::new(150.0, 100.0);

pub const CIRCLE_RADIUS: f64 = 50.0;
pub const TRIANGLE_SIDE: f64 = 100.0;
pub const SQUARE_SIDE: f64 = 100.0;
pub const RECT_WIDTH: f64 = 200.0;
pub const RECT_HEIGHT: f64 = 100.0;

/// Font size of the label overlay.
pub const FONT_SIZE: f64 = 48.0;
