//! The simulation driver.
//!
//! A [`Substrate`] owns the occupancy grid, the crack pool, the canvas and the random
//! source. Each [`step`](Substrate::step) advances every slot once, in pool order, against
//! the same grid: a claim made by one crack is visible to the next crack within the step.
//! Cracks that die are queued and respawned after the sweep, each death also recruiting a
//! new crack while the pool is below its limit.

use {
  crate::{
    canvas::Canvas,
    crack::{Advance, Crack},
    geometry::{self, P2},
    grid::{Claim, Grid},
    params::CrackParams,
    pool::{AgentId, CrackPool, Slot, Spawn, Spawner},
    sand::SandPainter,
    util::time_seed,
  },
  anyhow::{Result, ensure},
  euclid::Angle,
  image::{Rgba, RgbaImage},
  log::{debug, info, trace},
  rand::{Rng, SeedableRng},
  rand_pcg::Pcg64,
};


const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Counters accumulated over the lifetime of a simulation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Stats {
  pub steps: u64,
  pub collisions: u64,
  pub exits: u64,
  /// Dead slots handed back to the spawner.
  pub respawns: u64,
  /// New slots added after a death.
  pub recruits: u64,
  /// Start searches that ran out of budget.
  pub failed_searches: u64
}

pub struct Substrate<C = RgbaImage, R = Pcg64> {
  params: CrackParams,
  grid: Grid,
  pool: CrackPool,
  spawner: Spawner,
  canvas: C,
  rng: R,
  stats: Stats
}

impl Substrate<RgbaImage, Pcg64> {
  /// White canvas of the configured size, seeded [`Pcg64`].
  pub fn new(params: CrackParams) -> Result<Self> {
    params.validate()?;
    let seed = params.rng_seed.unwrap_or_else(time_seed);
    info!("substrate {}x{}, rng seed {}", params.width, params.height, seed);
    let canvas = RgbaImage::new(params.width, params.height);
    Self::with_canvas(params, canvas, Pcg64::seed_from_u64(seed))
  }
}

impl<C: Canvas, R: Rng> Substrate<C, R> {
  /// Pre-seed a fresh grid with `params.seeds()` random cells, then start the cracks.
  pub fn with_canvas(params: CrackParams, canvas: C, mut rng: R) -> Result<Self> {
    params.validate()?;
    let mut grid = Grid::new(params.resolution());
    grid.seed_random(params.seeds(), &mut rng);
    Self::from_grid(params, grid, canvas, rng)
  }

  /// Start the cracks on an already prepared grid.
  pub fn from_grid(params: CrackParams, grid: Grid, mut canvas: C, rng: R) -> Result<Self> {
    params.validate()?;
    ensure!(grid.resolution() == params.resolution(), "grid does not match the canvas size");
    ensure!(canvas.dimensions() == params.resolution(), "canvas does not match the configured size");

    canvas.clear(BACKGROUND);
    let spawner = Spawner::new(params.palette()?, params.search_budget);
    let mut substrate = Self {
      pool: CrackPool::new(params.crack_limit),
      params,
      grid,
      spawner,
      canvas,
      rng,
      stats: Stats::default()
    };
    substrate.spawn_initial(substrate.params.starting_cracks);
    Ok(substrate)
  }

  /// Try to start `count` cracks. Failed searches leave no slot behind.
  pub fn spawn_initial(&mut self, count: usize) -> usize {
    let spawned = (0..count)
      .filter(|_| match self.spawner.spawn(&mut self.pool, &self.grid, &mut self.rng) {
        Spawn::Spawned(_) => true,
        Spawn::NotFound => {
          self.stats.failed_searches += 1;
          false
        },
        Spawn::AtCapacity => false
      })
      .count();
    debug!("spawned {} of {} cracks", spawned, count);
    spawned
  }

  /// Insert a growing crack at an exact place, claiming its starting cell.
  /// Returns `None` when the pool is full, the position is off the canvas, or the cell
  /// belongs to a crack with a different heading.
  pub fn plant(&mut self, position: P2, heading: Angle<f64>) -> Option<AgentId> {
    if self.pool.is_full() { return None }
    let cell = geometry::enclosing_cell(position);
    match self.grid.claim(cell, heading) {
      Claim::Continued => {},
      Claim::Collision(foreign) => {
        debug!("not planting at {:?}: claimed at {:.1}°", cell, foreign.to_degrees());
        return None
      },
      Claim::OutOfBounds => return None
    }
    let painter = SandPainter::new(self.spawner.palette.pick(&mut self.rng));
    self.pool.insert(Slot::Growing(Crack::new(position, heading, painter)))
  }

  /// Advance every slot once, then respawn the dead.
  pub fn step(&mut self) {
    let Self { pool, grid, spawner, canvas, rng, stats, .. } = self;

    let ids: Vec<AgentId> = pool.ids().collect();
    for id in ids {
      let advance = match pool.get_mut(id) {
        Some(Slot::Growing(crack)) => crack.advance(grid, canvas, rng),
        Some(slot @ Slot::Searching) => {
          match spawner.find_start(grid, rng) {
            Some(crack) => *slot = Slot::Growing(crack),
            None => stats.failed_searches += 1
          }
          continue
        },
        _ => continue
      };
      match advance {
        Advance::Growing => continue,
        Advance::Collided { cell, foreign } => {
          trace!("crack {:?} collided at {:?} with {:.1}°", id, cell, foreign.to_degrees());
          stats.collisions += 1;
        },
        Advance::Exited { cell } => {
          trace!("crack {:?} left the canvas at {:?}", id, cell);
          stats.exits += 1;
        }
      }
      pool.kill(id);
    }

    while let Some(id) = pool.next_pending() {
      stats.respawns += 1;
      if !spawner.respawn(pool, id, grid, rng) {
        stats.failed_searches += 1;
      }
      match spawner.spawn(pool, grid, rng) {
        Spawn::Spawned(new) => {
          trace!("crack {:?} recruited crack {:?}", id, new);
          stats.recruits += 1;
        },
        Spawn::NotFound => stats.failed_searches += 1,
        Spawn::AtCapacity => {}
      }
    }
    debug_assert!(!pool.has_pending());
    stats.steps += 1;
  }

  /// The painting so far. Nothing is ever erased.
  pub fn render(&self) -> &C {
    &self.canvas
  }

  pub fn into_canvas(self) -> C {
    self.canvas
  }

  pub fn grid(&self) -> &Grid { &self.grid }
  pub fn pool(&self) -> &CrackPool { &self.pool }
  pub fn params(&self) -> &CrackParams { &self.params }
  pub fn stats(&self) -> Stats { self.stats }

  /// Slots currently growing.
  pub fn growing(&self) -> usize {
    self.pool.cracks().count()
  }
}
