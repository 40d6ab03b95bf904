use {
  crate::{crack::SEARCH_BUDGET, geometry::Resolution, palette::Palette},
  anyhow::{Context, Result, ensure},
  serde::{Deserialize, Serialize},
  std::path::Path,
};

/// Knobs of a crack simulation.
///
/// Can be read from a JSON file; missing fields take their default value.
/// ```
/// # use substrate::CrackParams;
/// let params: CrackParams = serde_json::from_str(r#"{ "width": 640, "height": 480 }"#).unwrap();
/// assert_eq!(params.seeds(), 64 + 48);
/// assert_eq!(params.crack_limit, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrackParams {
  pub width: u32,
  pub height: u32,
  /// Maximum number of cracks alive at once.
  pub crack_limit: usize,
  /// Number of pre-seeded grid cells. Defaults to `width / 10 + height / 10`.
  pub seeds: Option<usize>,
  pub starting_cracks: usize,
  /// Random probes per start search.
  pub search_budget: usize,
  /// Seed of the random source. A time based seed is used when absent.
  pub rng_seed: Option<u64>,
  /// `#rrggbb` colors for the sand; the desert palette when absent.
  pub palette: Option<Vec<String>>
}

impl Default for CrackParams {
  fn default() -> Self {
    Self {
      width: 1920,
      height: 1080,
      crack_limit: 25,
      seeds: None,
      starting_cracks: 5,
      search_budget: SEARCH_BUDGET,
      rng_seed: None,
      palette: None
    }
  }
}

impl CrackParams {
  pub fn new(width: u32, height: u32) -> Self {
    Self { width, height, ..Default::default() }
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
      .with_context(|| format!("reading config {}", path.display()))?;
    let params: Self = serde_json::from_str(&text)
      .with_context(|| format!("parsing config {}", path.display()))?;
    params.validate()?;
    Ok(params)
  }

  pub fn seeds(&self) -> usize {
    self.seeds.unwrap_or((self.width / 10 + self.height / 10) as usize)
  }

  pub fn resolution(&self) -> Resolution {
    Resolution::new(self.width, self.height)
  }

  pub fn palette(&self) -> Result<Palette> {
    match &self.palette {
      Some(hex) => Palette::parse(hex),
      None => Ok(Palette::desert())
    }
  }

  pub fn validate(&self) -> Result<()> {
    ensure!(self.width > 0 && self.height > 0, "canvas must not be empty: {}x{}", self.width, self.height);
    ensure!(self.crack_limit > 0, "crack limit must be at least 1");
    self.palette()?;
    Ok(())
  }
}
