use substrate::{output, profile, CrackParams, Substrate};

// 900x900, 25 cracks, 30k steps
fn main() -> anyhow::Result<()> {
  env_logger::init();
  let path = "out.png";

  let mut substrate = Substrate::new(CrackParams {
    rng_seed: Some(0),
    ..CrackParams::new(900, 900)
  })?;
  profile!("desert", {
    (0..30_000).for_each(|_| substrate.step());
  });
  output::save_png(substrate.render(), path)?;
  Ok(())
}
