use {
  super::*,
  euclid::point2,
  image::RgbaImage,
};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[test] fn clear_fills_everything() {
  let mut image = RgbaImage::new(8, 4);
  image.clear(WHITE);
  assert!(image.pixels().all(|p| *p == WHITE));
}

#[test] fn fill_rect_is_clipped() {
  let mut image = RgbaImage::new(4, 4);
  image.fill_rect(Box2D::new(point2(2, 2), point2(10, 10)), WHITE);
  assert_eq!(image.pixels().filter(|p| **p == WHITE).count(), 4);
  assert_eq!(*image.get_pixel(1, 1), Rgba([0, 0, 0, 0]));
}

#[test] fn set_pixel_blends_and_ignores_outside() {
  let mut image = RgbaImage::new(4, 4);
  image.clear(WHITE);
  image.set_pixel(point2(1, 1), Rgba([0, 0, 0, 180]));
  image.set_pixel(point2(-1, 1), Rgba([0, 0, 0, 255]));
  image.set_pixel(point2(1, 4), Rgba([0, 0, 0, 255]));

  let px = image.get_pixel(1, 1);
  assert!(px.0[0] < 255 && px.0[0] > 0, "{:?}", px);
  assert_eq!(px.0[3], 255);
  assert_eq!(image.pixels().filter(|p| **p != WHITE).count(), 1);
}

#[test] fn stroke_point_accumulates() {
  let mut image = RgbaImage::new(8, 8);
  image.clear(WHITE);
  let grain = Rgba([172, 68, 6, 7]);
  image.stroke_point(P2::new(4.5, 4.5), 0.6, grain);
  let once = *image.get_pixel(4, 4);
  assert_ne!(once, WHITE);
  for _ in 0..50 {
    image.stroke_point(P2::new(4.5, 4.5), 0.6, grain);
  }
  let many = *image.get_pixel(4, 4);
  // repeated low-alpha grains pull the pixel towards the grain color
  assert!(many.0[2] < once.0[2]);
  // far pixels untouched
  assert_eq!(*image.get_pixel(0, 0), WHITE);
}

#[test] fn stroke_point_off_canvas() {
  let mut image = RgbaImage::new(4, 4);
  image.clear(WHITE);
  image.stroke_point(P2::new(-10.0, 50.0), 0.6, Rgba([0, 0, 0, 255]));
  assert!(image.pixels().all(|p| *p == WHITE));
}
