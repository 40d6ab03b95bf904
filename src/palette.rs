use {
  anyhow::{Context, Result, bail, ensure},
  image::Rgb,
  rand::Rng,
};

/// Colors handed to sand painters when a crack spawns.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
  colors: Vec<Rgb<u8>>
}

const DESERT: [[u8; 3]; 14] = [
  [172, 68, 6],
  [201, 148, 89],
  [128, 44, 8],
  [154, 135, 109],
  [215, 207, 185],
  [79, 68, 59],
  [244, 172, 68],
  [234, 204, 147],
  [59, 44, 28],
  [61, 62, 68],
  [221, 89, 64],
  [252, 180, 140],
  [96, 40, 28],
  [160, 92, 92],
];

impl Palette {
  pub fn new(colors: Vec<Rgb<u8>>) -> Result<Self> {
    ensure!(!colors.is_empty(), "palette must contain at least one color");
    Ok(Self { colors })
  }

  /// Warm sand and rust tones.
  pub fn desert() -> Self {
    Self { colors: DESERT.iter().map(|&c| Rgb(c)).collect() }
  }

  /// Parse `#rrggbb` (or `rrggbb`) strings.
  pub fn parse<S: AsRef<str>>(hex: &[S]) -> Result<Self> {
    let colors = hex.iter()
      .map(|s| parse_hex(s.as_ref()).with_context(|| format!("invalid palette color {:?}", s.as_ref())))
      .collect::<Result<Vec<_>>>()?;
    Self::new(colors)
  }

  pub fn colors(&self) -> &[Rgb<u8>] {
    &self.colors
  }

  pub fn pick(&self, rng: &mut impl Rng) -> Rgb<u8> {
    self.colors[rng.gen_range(0..self.colors.len())]
  }
}

impl Default for Palette {
  fn default() -> Self { Self::desert() }
}

fn parse_hex(s: &str) -> Result<Rgb<u8>> {
  let digits = s.strip_prefix('#').unwrap_or(s);
  if digits.len() != 6 || !digits.is_ascii() {
    bail!("expected 6 hex digits");
  }
  let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
  Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}
