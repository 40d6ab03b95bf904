use {
  anyhow::{Context, Result},
  clap::{Args, Parser, Subcommand},
  log::info,
  rayon::prelude::*,
  std::path::{Path, PathBuf},
  substrate::{
    output::{self, GifRecorder},
    profile,
    util::{suffixed, time_seed},
    CrackParams, Substrate,
  },
};

#[derive(Parser)]
#[command(name = "substrate", version, about = "Crack-growth generative art")]
struct Cli {
  #[command(subcommand)]
  command: Command
}

#[derive(Subcommand)]
enum Command {
  /// Grow cracks and save the painting
  Crack(CrackArgs)
}

#[derive(Args, Clone)]
struct CrackArgs {
  /// JSON file with simulation parameters; flags override its values
  #[arg(long)]
  config: Option<PathBuf>,
  #[arg(long)]
  width: Option<u32>,
  #[arg(long)]
  height: Option<u32>,
  /// Number of simulation steps
  #[arg(short, long, default_value_t = 10_000)]
  iterations: usize,
  /// Output PNG
  #[arg(short, long, default_value = "out.png")]
  out: PathBuf,
  /// Also write an animated GIF of the growth
  #[arg(long)]
  gif: Option<PathBuf>,
  /// Steps between GIF frames
  #[arg(long, default_value_t = 10)]
  gif_every: usize,
  /// Save an intermediate PNG every N steps
  #[arg(long)]
  save_every: Option<usize>,
  #[arg(long)]
  seed: Option<u64>,
  #[arg(long)]
  crack_limit: Option<usize>,
  /// Pre-seeded grid cells
  #[arg(long)]
  seeds: Option<usize>,
  #[arg(long)]
  starting_cracks: Option<usize>,
  /// Random probes per start search
  #[arg(long)]
  search_budget: Option<usize>,
  /// Write the final claim grid as a hue-coded PNG
  #[arg(long)]
  grid_debug: Option<PathBuf>,
  /// Render N pictures in parallel with consecutive seeds
  #[arg(long)]
  variants: Option<usize>
}

impl CrackArgs {
  fn params(&self) -> Result<CrackParams> {
    let mut params = match &self.config {
      Some(path) => CrackParams::load(path)?,
      None => CrackParams::default()
    };
    if let Some(width) = self.width { params.width = width }
    if let Some(height) = self.height { params.height = height }
    if let Some(limit) = self.crack_limit { params.crack_limit = limit }
    if let Some(starting) = self.starting_cracks { params.starting_cracks = starting }
    if let Some(budget) = self.search_budget { params.search_budget = budget }
    params.seeds = self.seeds.or(params.seeds);
    params.rng_seed = self.seed.or(params.rng_seed);
    params.validate()?;
    Ok(params)
  }
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  match Cli::parse().command {
    Command::Crack(args) => crack(args)
  }
}

fn crack(args: CrackArgs) -> Result<()> {
  let params = args.params()?;
  match args.variants {
    None | Some(0) | Some(1) => run(&args, params, &args.out),
    Some(n) => {
      let base = params.rng_seed.unwrap_or_else(time_seed);
      (0..n).into_par_iter()
        .map(|k| {
          let params = CrackParams { rng_seed: Some(base.wrapping_add(k as u64)), ..params.clone() };
          let args = CrackArgs {
            gif: args.gif.as_deref().map(|p| suffixed(p, k)),
            grid_debug: args.grid_debug.as_deref().map(|p| suffixed(p, k)),
            ..args.clone()
          };
          run(&args, params, &suffixed(&args.out, k))
            .with_context(|| format!("variant {}", k))
        })
        .collect::<Result<Vec<_>>>()?;
      Ok(())
    }
  }
}

fn run(args: &CrackArgs, params: CrackParams, out: &Path) -> Result<()> {
  let mut substrate = Substrate::new(params)?;
  let mut gif = args.gif.as_ref().map(|_| GifRecorder::new(args.gif_every));

  profile!("crack", {
    for i in 0..args.iterations {
      substrate.step();
      if let Some(gif) = gif.as_mut() {
        gif.observe(i, substrate.render());
      }
      if let Some(every) = args.save_every.filter(|&n| n > 0) {
        if i > 0 && i % every == 0 {
          output::save_png(substrate.render(), suffixed(out, i))?;
        }
      }
    }
  });

  let stats = substrate.stats();
  info!(
    "{} steps, {} growing, {} collisions, {} exits, {} recruits, {} failed searches",
    stats.steps, substrate.growing(), stats.collisions, stats.exits, stats.recruits, stats.failed_searches
  );

  if let Some(path) = &args.grid_debug {
    substrate.grid().display_debug().save(path)
      .with_context(|| format!("writing {}", path.display()))?;
  }
  output::save_png(substrate.render(), out)?;
  if let (Some(gif), Some(path)) = (gif, &args.gif) {
    profile!("gif", { gif.finish(substrate.render(), path) })?;
  }
  Ok(())
}
