//! Coordinates on the canvas.
//!
//! The origin of coordinate system is in top-left corner, `y` grows downwards.
//! Headings are measured in degrees, clockwise on screen (`0°` points to `+x`, `90°` to `+y`).

use euclid::{Angle, Point2D, Size2D, Vector2D};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSpace;

/// Continuous position on the canvas.
pub type P2 = Point2D<f64, PixelSpace>;
pub type V2 = Vector2D<f64, PixelSpace>;
/// Integer cell of the canvas; may lie outside of it.
pub type Cell2 = Point2D<i64, PixelSpace>;
pub type Resolution = Size2D<u32, PixelSpace>;

/// Unit vector pointing along `heading`.
pub fn direction(heading: Angle<f64>) -> V2 {
  let (sin, cos) = heading.sin_cos();
  V2::new(cos, sin)
}

/// The cell enclosing a continuous position.
/// Positions that do not fit in `i64` (or are NaN) map to `(-1, -1)`, outside of any canvas.
pub fn enclosing_cell(p: P2) -> Cell2 {
  p.floor().try_cast().unwrap_or_else(|| Cell2::new(-1, -1))
}

pub fn contains(resolution: Resolution, cell: Cell2) -> bool {
  cell.x >= 0 && cell.y >= 0 &&
  cell.x < resolution.width as i64 && cell.y < resolution.height as i64
}

/// Circular distance between two headings, in degrees, within `[0, 180]`.
pub fn angular_distance(a: Angle<f64>, b: Angle<f64>) -> f64 {
  (a - b).signed().to_degrees().abs()
}
