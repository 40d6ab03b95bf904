//! Occupancy grid shared by all cracks.
//!
//! Every cell of the canvas either is [`Cell::Unclaimed`] or remembers the heading of
//! the crack that passed through it. A claimed cell never becomes unclaimed again, and
//! may only be rewritten by a heading within [`CONTINUATION_TOLERANCE`] degrees of the
//! stored one: that is the same crack continuing. Anything else is a collision.

use {
  crate::geometry::{self, Cell2, Resolution},
  euclid::Angle,
  image::{Rgb, RgbImage},
  rand::Rng,
};

#[cfg(test)] mod tests;

/// Maximum circular distance, in degrees, between a stored angle and an incoming heading
/// for the claim to count as continuation.
pub const CONTINUATION_TOLERANCE: f64 = 5.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Cell {
  Unclaimed,
  /// Angle normalized to `[0, 360)` degrees.
  Claimed(Angle<f64>)
}

/// Result of looking up a cell, where anything outside of the canvas is blocked.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Occupancy {
  Open,
  Claimed(Angle<f64>),
  OutOfBounds
}

impl Occupancy {
  pub fn is_open(&self) -> bool {
    matches!(self, Occupancy::Open)
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Claim {
  /// The cell now holds the incoming heading.
  Continued,
  /// The cell belongs to another crack and was left untouched.
  Collision(Angle<f64>),
  OutOfBounds
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
  data: Vec<Cell>,
  resolution: Resolution
}

impl Grid {
  pub fn new(resolution: Resolution) -> Self {
    Self {
      data: vec![Cell::Unclaimed; resolution.area() as usize],
      resolution
    }
  }

  pub fn resolution(&self) -> Resolution {
    self.resolution
  }

  fn offset(&self, cell: Cell2) -> Option<usize> {
    geometry::contains(self.resolution, cell)
      .then(|| (cell.y * self.resolution.width as i64 + cell.x) as usize)
  }

  fn offset_to_cell(&self, offset: usize) -> Cell2 {
    let width = self.resolution.width as usize;
    Cell2::new((offset % width) as i64, (offset / width) as i64)
  }

  pub fn query(&self, cell: Cell2) -> Occupancy {
    match self.offset(cell).map(|i| self.data[i]) {
      Some(Cell::Unclaimed) => Occupancy::Open,
      Some(Cell::Claimed(angle)) => Occupancy::Claimed(angle),
      None => Occupancy::OutOfBounds
    }
  }

  pub fn claim(&mut self, cell: Cell2, heading: Angle<f64>) -> Claim {
    let i = match self.offset(cell) {
      Some(i) => i,
      None => return Claim::OutOfBounds
    };
    match self.data[i] {
      Cell::Claimed(stored) if geometry::angular_distance(stored, heading) >= CONTINUATION_TOLERANCE =>
        Claim::Collision(stored),
      _ => {
        self.data[i] = Cell::Claimed(heading.positive());
        Claim::Continued
      }
    }
  }

  /// Write an angle unconditionally. Returns `false` if the cell is outside of the grid.
  pub fn seed(&mut self, cell: Cell2, angle: Angle<f64>) -> bool {
    match self.offset(cell) {
      Some(i) => {
        self.data[i] = Cell::Claimed(angle.positive());
        true
      },
      None => false
    }
  }

  /// Pre-seed `count` random cells with random integral angles.
  /// Cells may be picked more than once; the very last cell is never picked.
  pub fn seed_random(&mut self, count: usize, rng: &mut impl Rng) {
    let span = (self.data.len() - 1).max(1);
    for _ in 0..count {
      let i = rng.gen_range(0..span);
      let angle = rng.gen_range(0..360) as f64;
      self.data[i] = Cell::Claimed(Angle::degrees(angle));
    }
  }

  /// Uniformly random cell inside of the grid.
  pub fn random_cell(&self, rng: &mut impl Rng) -> Cell2 {
    Cell2::new(
      rng.gen_range(0..self.resolution.width) as i64,
      rng.gen_range(0..self.resolution.height) as i64
    )
  }

  pub fn cells(&self) -> impl Iterator<Item = (Cell2, Cell)> + '_ {
    self.data.iter()
      .enumerate()
      .map(move |(i, cell)| (self.offset_to_cell(i), *cell))
  }

  pub fn claimed_count(&self) -> usize {
    self.data.iter()
      .filter(|cell| matches!(cell, Cell::Claimed(_)))
      .count()
  }

  /// Claimed cells colored by their angle, unclaimed cells black.
  pub fn display_debug(&self) -> RgbImage {
    let mut image = RgbImage::new(self.resolution.width, self.resolution.height);
    self.cells().for_each(|(xy, cell)| {
      if let Cell::Claimed(angle) = cell {
        *image.get_pixel_mut(xy.x as u32, xy.y as u32) = hue(angle.to_degrees());
      }
    });
    image
  }
}

// fully saturated color wheel
fn hue(degrees: f64) -> Rgb<u8> {
  let h = degrees.rem_euclid(360.0) / 60.0;
  let x = 1.0 - (h % 2.0 - 1.0).abs();
  let (r, g, b) = match h as u32 {
    0 => (1.0, x, 0.0),
    1 => (x, 1.0, 0.0),
    2 => (0.0, 1.0, x),
    3 => (0.0, x, 1.0),
    4 => (x, 0.0, 1.0),
    _ => (1.0, 0.0, x)
  };
  Rgb([(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8])
}
