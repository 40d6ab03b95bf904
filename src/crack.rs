use {
  crate::{
    canvas::Canvas,
    geometry::{self, Cell2, P2, V2},
    grid::{Claim, Grid, Occupancy},
    palette::Palette,
    sand::{self, SandPainter},
  },
  euclid::Angle,
  image::Rgba,
  rand::Rng,
};

/// Distance a crack grows per step.
pub const STEP: f64 = 0.42;
/// Default number of random probes spent looking for a place to start.
pub const SEARCH_BUDGET: usize = 10_000;

const TIP_COLOR: Rgba<u8> = Rgba([0, 0, 0, 180]);
const TIP_JITTER: f64 = 0.25;
/// New cracks branch off at `90° ± TURN_JITTER`.
const TURN_JITTER: i32 = 3;

/// A single growing line.
#[derive(Debug, Clone, PartialEq)]
pub struct Crack {
  pub position: P2,
  pub heading: Angle<f64>,
  pub painter: SandPainter
}

/// What happened to a crack during [`Crack::advance`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Advance {
  Growing,
  /// Ran into a cell claimed by a crack with a different heading.
  Collided { cell: Cell2, foreign: Angle<f64> },
  /// Left the canvas.
  Exited { cell: Cell2 }
}

impl Advance {
  pub fn is_dead(&self) -> bool {
    !matches!(self, Advance::Growing)
  }
}

impl Crack {
  pub fn new(position: P2, heading: Angle<f64>, painter: SandPainter) -> Self {
    Self { position, heading, painter }
  }

  /// Pick random cells until a claimed one is found, then branch off perpendicular to it.
  /// Gives up after `budget` probes.
  pub fn find_start(
    grid: &Grid,
    palette: &Palette,
    rng: &mut impl Rng,
    budget: usize
  ) -> Option<Self> {
    let (anchor, angle) = (0..budget).find_map(|_| {
      let cell = grid.random_cell(rng);
      match grid.query(cell) {
        Occupancy::Claimed(angle) => Some((cell, angle)),
        _ => None
      }
    })?;

    let turn = (90 + rng.gen_range(-TURN_JITTER..TURN_JITTER)) as f64;
    let heading = if rng.gen_range(0..100) < 50 {
      angle.to_degrees() - turn
    } else {
      angle.to_degrees() + turn
    };
    Some(Self::new(
      anchor.cast(),
      Angle::degrees(heading),
      SandPainter::new(palette.pick(rng))
    ))
  }

  pub fn cell(&self) -> Cell2 {
    geometry::enclosing_cell(self.position)
  }

  /// Shade the open region beside the crack, grow by [`STEP`] and try to claim the new cell.
  pub fn advance<C: Canvas + ?Sized>(
    &mut self,
    grid: &mut Grid,
    canvas: &mut C,
    rng: &mut impl Rng
  ) -> Advance {
    let boundary = sand::find_boundary(grid, self.position, self.heading);
    self.painter.render(canvas, rng, boundary, self.position);

    self.position += geometry::direction(self.heading) * STEP;

    let jitter = V2::new(
      rng.gen_range(-TIP_JITTER..TIP_JITTER),
      rng.gen_range(-TIP_JITTER..TIP_JITTER)
    );
    canvas.set_pixel(geometry::enclosing_cell(self.position + jitter), TIP_COLOR);

    let cell = self.cell();
    match grid.claim(cell, self.heading) {
      Claim::Continued => Advance::Growing,
      Claim::Collision(foreign) => Advance::Collided { cell, foreign },
      Claim::OutOfBounds => Advance::Exited { cell }
    }
  }
}
