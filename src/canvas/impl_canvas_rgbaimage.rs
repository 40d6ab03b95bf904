use {
  super::Canvas,
  crate::geometry::{self, Cell2, P2, PixelSpace, Resolution},
  euclid::Box2D,
  image::{Pixel, Rgba, RgbaImage},
};

impl Canvas for RgbaImage {
  fn dimensions(&self) -> Resolution {
    RgbaImage::dimensions(self).into()
  }

  fn fill_rect(&mut self, rect: Box2D<u32, PixelSpace>, color: Rgba<u8>) {
    let rect = match rect.intersection(&Box2D::from_size(Canvas::dimensions(self))) {
      Some(x) => x,
      None => return
    };
    itertools::iproduct!(rect.y_range(), rect.x_range())
      .for_each(|(y, x)| self.put_pixel(x, y, color));
  }

  fn set_pixel(&mut self, pixel: Cell2, color: Rgba<u8>) {
    if !geometry::contains(Canvas::dimensions(self), pixel) { return }
    self.get_pixel_mut(pixel.x as u32, pixel.y as u32)
      .blend(&color);
  }

  fn stroke_point(&mut self, center: P2, radius: f64, color: Rgba<u8>) {
    let size = Canvas::dimensions(self);
    let reach = radius + 0.5;
    let min = (center - euclid::vec2(reach, reach)).floor().max(P2::origin());
    let max = (center + euclid::vec2(reach, reach)).ceil()
      .min(P2::new(size.width as f64, size.height as f64));
    if min.x >= max.x || min.y >= max.y { return }

    itertools::iproduct!(min.y as u32 .. max.y as u32, min.x as u32 .. max.x as u32)
      .for_each(|(y, x)| {
        // distance from the pixel center to the disc edge
        let sdf = P2::new(x as f64 + 0.5, y as f64 + 0.5).distance_to(center) - radius;
        let pixel = self.get_pixel_mut(x, y);
        *pixel = sdf_overlay_aa(sdf, *pixel, color);
      });
  }
}

/// Blend `col2` over `col1` weighted by how much of a unit pixel the shape covers.
fn sdf_overlay_aa(sdf: f64, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let coverage = (0.5 - sdf).clamp(0.0, 1.0);
  if coverage == 0.0 { return col1 }
  col2.0[3] = (col2.0[3] as f64 * coverage).round() as u8;
  col1.blend(&col2);
  col1
}
