use {
  euclid::{point2, Angle},
  image::RgbaImage,
  rand::SeedableRng,
  substrate::{output, CrackParams, Grid, Substrate},
};

// no random seeds: a square frame of four planted cracks that everything else branches off
fn main() -> anyhow::Result<()> {
  env_logger::init();
  let path = "planted.png";
  let params = CrackParams {
    seeds: Some(0),
    starting_cracks: 0,
    crack_limit: 40,
    rng_seed: Some(3),
    palette: Some(vec!["#203040".into(), "#5a7d9a".into(), "#c8d8e4".into()]),
    ..CrackParams::new(600, 600)
  };
  let grid = Grid::new(params.resolution());
  let canvas = RgbaImage::new(params.width, params.height);
  let rng = rand_pcg::Pcg64::seed_from_u64(3);
  let mut substrate = Substrate::from_grid(params, grid, canvas, rng)?;

  for (x, y, heading) in [(100.5, 100.5, 0.0), (500.5, 100.5, 90.0), (500.5, 500.5, 180.0), (100.5, 500.5, 270.0)] {
    substrate.plant(point2(x, y), Angle::degrees(heading));
  }
  (0..20_000).for_each(|_| substrate.step());

  log::info!("{:?}", substrate.stats());
  output::save_png(substrate.render(), path)?;
  Ok(())
}
