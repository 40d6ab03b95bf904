//! Crack-growth generative art.
//!
//! A population of cracks races across a shared substrate. Every crack grows in a straight
//! line, claiming the grid cells it passes through, and leaves a band of translucent sand on
//! one side. A crack dies when it runs into a cell claimed with a different heading, or leaves
//! the canvas; its slot is then restarted perpendicular to some existing crack, and while the
//! population is below its limit each death also recruits a new crack.
//!
//! # Basic usage
//! ```no_run
//! # use substrate::{CrackParams, Substrate, output};
//! # fn main() -> anyhow::Result<()> {
//! let mut substrate = Substrate::new(CrackParams {
//!   rng_seed: Some(7),
//!   ..CrackParams::new(900, 900)
//! })?;
//! (0..20_000).for_each(|_| substrate.step());
//! output::save_png(substrate.render(), "out.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! The [`Substrate`] is generic over its [`Canvas`](canvas::Canvas) and random source, so the
//! same simulation can draw into any surface that implements the trait.

pub mod canvas;
pub mod crack;
pub mod geometry;
pub mod grid;
pub mod output;
pub mod palette;
pub mod params;
pub mod pool;
pub mod sand;
pub mod substrate;
pub mod util;

pub use {
  canvas::Canvas,
  grid::Grid,
  palette::Palette,
  params::CrackParams,
  substrate::{Stats, Substrate},
};
