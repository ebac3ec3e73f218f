//! Palette generation: a fixed-size set of colors drawn in a named mode.

use {
  crate::error::{Error, Result},
  rand::Rng,
  std::{fmt, str::FromStr},
};

/// RGB color with channels in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
  pub r: f64,
  pub g: f64,
  pub b: f64,
}

impl Color {
  pub const fn new(r: f64, g: f64, b: f64) -> Self {
    Self { r, g, b }
  }
}

/// Named color scheme; decides the per-channel distribution of every
/// palette entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PaletteMode {
  /// Every channel biased to the light half of the range.
  #[default]
  Pastel,
  /// Every channel uniform over the full range.
  Vivid,
  /// Red-heavy, muted green, almost no blue.
  Autumn,
  /// Almost no red, muted green, blue-heavy.
  Ocean,
}

impl PaletteMode {
  pub const ALL: [PaletteMode; 4] = [
    PaletteMode::Pastel,
    PaletteMode::Vivid,
    PaletteMode::Autumn,
    PaletteMode::Ocean,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      PaletteMode::Pastel => "pastel",
      PaletteMode::Vivid => "vivid",
      PaletteMode::Autumn => "autumn",
      PaletteMode::Ocean => "ocean",
    }
  }
}

impl fmt::Display for PaletteMode {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PaletteMode {
  type Err = Error;

  /// Case-sensitive: mode tokens are lowercase identifiers, not prose.
  fn from_str(s: &str) -> Result<Self> {
    match s {
      "pastel" => Ok(PaletteMode::Pastel),
      "vivid" => Ok(PaletteMode::Vivid),
      "autumn" => Ok(PaletteMode::Autumn),
      "ocean" => Ok(PaletteMode::Ocean),
      other => Err(Error::invalid_argument(format!("unknown palette mode {:?}", other))),
    }
  }
}

/// Draw `count` colors in the given `mode`.
///
/// Each color consumes exactly three uniform draws from `rng`, in channel
/// order `r`, `g`, `b`; the sequence of draws is part of the determinism
/// contract. `count` is checked before the first draw.
pub fn generate(mode: PaletteMode, count: usize, rng: &mut impl Rng) -> Result<Vec<Color>> {
  if count < 1 {
    return Err(Error::invalid_argument(format!("palette size {} < 1", count)));
  }
  let palette = (0..count)
    .map(|_| match mode {
      PaletteMode::Pastel => Color::new(
        rng.gen_range(0.5..1.0),
        rng.gen_range(0.5..1.0),
        rng.gen_range(0.5..1.0),
      ),
      PaletteMode::Vivid => Color::new(
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
      ),
      PaletteMode::Autumn => Color::new(
        rng.gen_range(0.5..1.0),
        rng.gen_range(0.3..0.8),
        rng.gen_range(0.0..0.2),
      ),
      PaletteMode::Ocean => Color::new(
        rng.gen_range(0.0..0.2),
        rng.gen_range(0.3..0.7),
        rng.gen_range(0.5..1.0),
      ),
    })
    .collect();
  Ok(palette)
}
