//! Drawing surface the simulation paints through.
//!
//! The simulation never touches pixels directly; everything goes through [`Canvas`],
//! so any raster backend can be plugged in. [`image::RgbaImage`] is provided.

use {
  crate::geometry::{Cell2, P2, Resolution},
  euclid::Box2D,
  image::Rgba,
};

mod impl_canvas_rgbaimage;
#[cfg(test)] mod tests;

pub use crate::geometry::PixelSpace;

pub trait Canvas {
  fn dimensions(&self) -> Resolution;
  /// Overwrite a rectangle, clipped to the canvas.
  fn fill_rect(&mut self, rect: Box2D<u32, PixelSpace>, color: Rgba<u8>);
  /// Blend a single pixel using the alpha of `color`. Out of range pixels are ignored.
  fn set_pixel(&mut self, pixel: Cell2, color: Rgba<u8>);
  /// Blend an antialiased disc of `radius` centered at `center`.
  fn stroke_point(&mut self, center: P2, radius: f64, color: Rgba<u8>);

  fn clear(&mut self, color: Rgba<u8>) {
    let size = self.dimensions();
    self.fill_rect(Box2D::from_size(size), color);
  }
}
