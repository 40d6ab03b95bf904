//! Sand shading beside the cracks.
//!
//! On every growth step the crack looks sideways, perpendicular to its heading, for the
//! extent of the open region next to it ([`find_boundary`]), and its [`SandPainter`]
//! scatters faint grains along that segment. Thousands of overlapping passes build up
//! the gradient texture.

use {
  crate::{
    canvas::Canvas,
    geometry::{self, P2},
    grid::{Grid, Occupancy},
  },
  euclid::Angle,
  image::{Rgb, Rgba},
  rand::Rng,
};

/// Distance between two consecutive probes of the region walk.
pub const PROBE_STEP: f64 = 0.81;
/// The region reaches at most `1 / REGION_DIVISOR` of the canvas size on each axis.
pub const REGION_DIVISOR: u32 = 10;

const GRAIN_INITIAL: f64 = 0.01;
const GRAIN_WALK: f64 = 0.05;
const GRAIN_ALPHA: u8 = 7;
const GRAIN_RADIUS: f64 = 0.6;

/// Walk from `origin` in the direction `heading + 90°` until the probe leaves the canvas,
/// gets too far from `origin`, or lands on a claimed cell other than the crack's own.
/// Returns the last open point, which is `origin` itself if the first probe is blocked.
pub fn find_boundary(grid: &Grid, origin: P2, heading: Angle<f64>) -> P2 {
  let step = geometry::direction(heading + Angle::frac_pi_2()) * PROBE_STEP;
  let resolution = grid.resolution();
  let reach_x = (resolution.width / REGION_DIVISOR) as i64;
  let reach_y = (resolution.height / REGION_DIVISOR) as i64;
  let home = geometry::enclosing_cell(origin);

  let mut boundary = origin;
  loop {
    let probe = boundary + step;
    let cell = geometry::enclosing_cell(probe);
    let near = ((cell.x as f64 - origin.x).abs() as i64) < reach_x &&
      ((cell.y as f64 - origin.y).abs() as i64) < reach_y;
    if !near {
      return boundary;
    }
    match grid.query(cell) {
      Occupancy::Open => {},
      // the crack's own trace
      Occupancy::Claimed(_) if cell == home => {},
      _ => return boundary
    }
    boundary = probe;
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SandPainter {
  pub color: Rgb<u8>,
  /// Spread of the grains along the segment, random walk in `[0, 1]`.
  pub grain: f64
}

impl SandPainter {
  pub fn new(color: Rgb<u8>) -> Self {
    Self { color, grain: GRAIN_INITIAL }
  }

  /// Scatter grains on the segment from `origin` towards `boundary`.
  /// Returns the number of grains drawn.
  pub fn render<C: Canvas + ?Sized>(
    &mut self,
    canvas: &mut C,
    rng: &mut impl Rng,
    boundary: P2,
    origin: P2
  ) -> usize {
    self.grain = (self.grain + rng.gen_range(-GRAIN_WALK..GRAIN_WALK)).clamp(0.0, 1.0);

    let span = boundary - origin;
    let grains = span.length().sqrt() as usize;
    let w = if grains > 1 { self.grain / (grains - 1) as f64 } else { 0.0 };

    let [r, g, b] = self.color.0;
    let color = Rgba([r, g, b, GRAIN_ALPHA]);
    (0..grains).for_each(|i| {
      // sinusoidal warp keeps grains dense near the crack
      let t = (i as f64 * w).sin().sin();
      canvas.stroke_point(origin + span * t, GRAIN_RADIUS, color);
    });
    grains
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::geometry::Resolution,
    euclid::point2,
    image::RgbaImage,
    rand::SeedableRng,
    rand_pcg::Pcg64,
  };

  const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

  fn close(a: P2, b: P2) -> bool {
    (a - b).length() < 1e-6
  }

  #[test] fn stops_before_claimed_cell() {
    let mut grid = Grid::new(Resolution::new(100, 100));
    grid.seed(point2(50, 55), Angle::degrees(0.0));
    let boundary = find_boundary(&grid, P2::new(50.5, 50.5), Angle::degrees(0.0));
    assert!(close(boundary, P2::new(50.5, 50.5 + 5.0 * PROBE_STEP)), "{:?}", boundary);
  }

  #[test] fn stops_at_canvas_edge() {
    let grid = Grid::new(Resolution::new(100, 100));
    let boundary = find_boundary(&grid, P2::new(5.5, 95.5), Angle::degrees(0.0));
    assert!(close(boundary, P2::new(5.5, 95.5 + 5.0 * PROBE_STEP)), "{:?}", boundary);
  }

  #[test] fn stops_at_distance_cap() {
    let grid = Grid::new(Resolution::new(100, 100));
    let boundary = find_boundary(&grid, P2::new(50.5, 20.5), Angle::degrees(0.0));
    assert!(close(boundary, P2::new(50.5, 20.5 + 12.0 * PROBE_STEP)), "{:?}", boundary);
  }

  #[test] fn perpendicular_is_heading_plus_quarter_turn() {
    let grid = Grid::new(Resolution::new(100, 100));
    // heading 90° looks towards -x
    let boundary = find_boundary(&grid, P2::new(50.5, 50.5), Angle::degrees(90.0));
    assert!(boundary.x < 50.5 && (boundary.y - 50.5).abs() < 1e-6, "{:?}", boundary);
  }

  #[test] fn blocked_immediately() {
    let mut grid = Grid::new(Resolution::new(100, 100));
    grid.seed(point2(50, 51), Angle::degrees(0.0));
    let origin = P2::new(50.5, 50.5);
    assert_eq!(find_boundary(&grid, origin, Angle::degrees(0.0)), origin);
    // tiny canvases have no room for a region at all
    let grid = Grid::new(Resolution::new(8, 8));
    assert_eq!(find_boundary(&grid, P2::new(4.0, 4.0), Angle::degrees(0.0)), P2::new(4.0, 4.0));
  }

  #[test] fn walks_out_of_own_cell() {
    let mut grid = Grid::new(Resolution::new(100, 100));
    grid.seed(point2(20, 50), Angle::degrees(0.0));
    // first probe at y = 50.81 is still inside the claimed cell (20, 50)
    let boundary = find_boundary(&grid, P2::new(20.0, 50.0), Angle::degrees(0.0));
    assert!(close(boundary, P2::new(20.0, 50.0 + 12.0 * PROBE_STEP)), "{:?}", boundary);
    // a foreign cell right next to the crack still stops the walk
    grid.seed(point2(20, 51), Angle::degrees(90.0));
    let boundary = find_boundary(&grid, P2::new(20.0, 50.0), Angle::degrees(0.0));
    assert!(close(boundary, P2::new(20.0, 50.0 + PROBE_STEP)), "{:?}", boundary);
  }

  #[test] fn grain_count_follows_length() {
    let mut canvas = RgbaImage::new(40, 40);
    canvas.clear(WHITE);
    let mut rng = Pcg64::seed_from_u64(0);
    let mut painter = SandPainter::new(Rgb([172, 68, 6]));
    assert_eq!(painter.render(&mut canvas, &mut rng, P2::new(10.0, 26.0), P2::new(10.0, 10.0)), 4);
    assert!(canvas.pixels().any(|p| *p != WHITE));
    // degenerate segments
    assert_eq!(painter.render(&mut canvas, &mut rng, P2::new(10.0, 10.0), P2::new(10.0, 10.0)), 0);
    assert_eq!(painter.render(&mut canvas, &mut rng, P2::new(10.0, 11.5), P2::new(10.0, 10.0)), 1);
  }

  #[test] fn grain_walk_is_clamped() {
    let mut canvas = RgbaImage::new(8, 8);
    let mut rng = Pcg64::seed_from_u64(11);
    let mut painter = SandPainter::new(Rgb([0, 0, 0]));
    painter.grain = 0.99;
    for _ in 0..2000 {
      painter.render(&mut canvas, &mut rng, P2::new(1.0, 1.0), P2::new(1.0, 1.0));
      assert!((0.0..=1.0).contains(&painter.grain));
    }
  }
}
