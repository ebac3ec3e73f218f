//! Scene composition: from a handful of [`Parameters`] to the full ordered
//! list of draw instructions making up a [`Poster`].
//!
//! Composition is pure. A single [`Pcg64`](rand_pcg::Pcg64) seeded from
//! [`Parameters::seed`] is the only randomness source, and every draw goes
//! through it in a fixed order: palette first, then per layer the center
//! (`x`, then `y`), the radius, one jitter per outline vertex, the palette
//! index, and the opacity. Equal parameters therefore compose equal posters,
//! on any platform.

use {
  crate::{
    error::{Error, Result},
    geometry::{Polygon, P2},
  },
  rand::{Rng, SeedableRng},
  rand_pcg::Pcg64,
  std::ops::Range,
};

pub mod blob;
pub mod palette;

pub use palette::{Color, PaletteMode};

/// The user-facing knobs of one render.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
  /// Number of blob layers, `1..=50`.
  pub layer_count: u32,
  /// Radial jitter amplitude, `0.0..=0.8`.
  pub wobble: f64,
  /// Determinism anchor, `0..=10000`.
  pub seed: u64,
  pub palette_mode: PaletteMode,
}

impl Default for Parameters {
  fn default() -> Self {
    Self {
      layer_count: 11,
      wobble: 0.26,
      seed: 7015,
      palette_mode: PaletteMode::Pastel,
    }}}

impl Parameters {
  pub const MAX_LAYERS: u32 = 50;
  pub const MAX_WOBBLE: f64 = 0.8;
  pub const MAX_SEED: u64 = 10_000;

  /// Check every field against its documented range.
  pub fn validate(&self) -> Result<()> {
    if !(1..=Self::MAX_LAYERS).contains(&self.layer_count) {
      return Err(Error::invalid_argument(format!(
        "layer count {} outside of 1..={}", self.layer_count, Self::MAX_LAYERS
      )));
    }
    if !(self.wobble >= 0.0 && self.wobble <= Self::MAX_WOBBLE) {
      return Err(Error::invalid_argument(format!(
        "wobble {} outside of 0..={}", self.wobble, Self::MAX_WOBBLE
      )));
    }
    if self.seed > Self::MAX_SEED {
      return Err(Error::invalid_argument(format!(
        "seed {} outside of 0..={}", self.seed, Self::MAX_SEED
      )));
    }
    Ok(())
  }
}

/// Fixed characteristics of the poster, exposed so that tests and
/// adventurous callers can vary them; [`Style::default`] reproduces the
/// reference poster exactly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
  /// Palette entries per render, independent of the layer count.
  pub palette_size: usize,
  /// Vertices per blob outline.
  pub blob_points: usize,
  /// Blob radius draw range, in units of the unit canvas.
  pub radius: Range<f64>,
  /// Layer opacity draw range.
  pub alpha: Range<f64>,
  /// Canvas width : height proportion.
  pub aspect: (u32, u32),
  pub background: Color,
  /// Caption prefix; the palette mode is appended after a bullet.
  pub title: String,
  /// Caption anchor (left end of the baseline), world units.
  pub label_anchor: P2,
  /// Caption height as a fraction of the canvas height.
  pub label_em: f64,
}

impl Default for Style {
  fn default() -> Self {
    Self {
      palette_size: 6,
      blob_points: 200,
      radius: 0.15..0.45,
      alpha: 0.25..0.6,
      aspect: (7, 10),
      background: Color::new(0.98, 0.98, 0.97),
      title: "Interactive Poster".into(),
      label_anchor: P2::new(0.05, 0.05),
      label_em: 0.025,
    }}}

impl Style {
  pub fn validate(&self) -> Result<()> {
    if self.palette_size < 1 {
      return Err(Error::invalid_argument("palette size must be at least 1"));
    }
    if self.blob_points < 3 {
      return Err(Error::invalid_argument(format!(
        "blob outline needs at least 3 points, got {}", self.blob_points
      )));
    }
    if !(self.radius.start > 0.0 && self.radius.end > self.radius.start && self.radius.end.is_finite()) {
      return Err(Error::invalid_argument(format!(
        "radius range {:?} must be positive, finite and non-empty", self.radius
      )));
    }
    if !(self.alpha.start >= 0.0 && self.alpha.end > self.alpha.start && self.alpha.end <= 1.0) {
      return Err(Error::invalid_argument(format!(
        "alpha range {:?} must stay within 0..=1 and be non-empty", self.alpha
      )));
    }
    if self.aspect.0 == 0 || self.aspect.1 == 0 {
      return Err(Error::invalid_argument("aspect sides must be non-zero"));
    }
    if !(self.label_anchor.x.is_finite() && self.label_anchor.y.is_finite()) {
      return Err(Error::invalid_argument(format!(
        "label anchor {:?} must be finite", self.label_anchor
      )));
    }
    if !(self.label_em > 0.0 && self.label_em.is_finite()) {
      return Err(Error::invalid_argument(format!(
        "label size {} must be positive and finite", self.label_em
      )));
    }
    Ok(())
  }
}

/// One draw instruction: a blob outline filled with a palette entry at a
/// fixed opacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
  /// Blob center, drawn uniformly over the unit square.
  pub center: P2,
  /// Nominal blob radius, before jitter.
  pub radius: f64,
  pub blob: Polygon<f64>,
  /// Index into the poster palette; entries repeat freely across layers.
  pub color_index: usize,
  /// Source-over opacity of the fill.
  pub alpha: f64,
}

/// Caption drawn above every layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
  pub text: String,
  /// Left end of the baseline, world units.
  pub anchor: P2,
  /// Height as a fraction of the canvas height.
  pub em: f64,
}

/// A composed scene: everything a renderer needs, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct Poster {
  pub background: Color,
  /// Fixed-size palette; layers point into it by index.
  pub palette: Vec<Color>,
  /// Bottom-to-top draw order.
  pub layers: Vec<Layer>,
  pub label: Label,
  /// Canvas width : height proportion.
  pub aspect: (u32, u32),
}

impl Poster {
  /// Resolved fill color of one layer.
  pub fn layer_color(&self, layer: &Layer) -> Color {
    self.palette[layer.color_index]
  }
}

/// Compose a poster with the reference [`Style`].
pub fn compose(params: &Parameters) -> Result<Poster> {
  compose_with(params, &Style::default())
}

/// Compose a poster with an explicit [`Style`].
///
/// All validation happens before the RNG is even created; on error no
/// entropy is consumed and no partial scene exists.
pub fn compose_with(params: &Parameters, style: &Style) -> Result<Poster> {
  params.validate()?;
  style.validate()?;

  let mut rng = Pcg64::seed_from_u64(params.seed);
  let palette = palette::generate(params.palette_mode, style.palette_size, &mut rng)?;

  let mut layers = Vec::with_capacity(params.layer_count as usize);
  for _ in 0..params.layer_count {
    let center = P2::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
    let radius = rng.gen_range(style.radius.clone());
    let blob = blob::generate(center, radius, style.blob_points, params.wobble, &mut rng)?;
    let color_index = rng.gen_range(0..palette.len());
    let alpha = rng.gen_range(style.alpha.clone());
    log::trace!(
      "layer {}: center ({:.3}, {:.3}), radius {:.3}, color {}, alpha {:.3}",
      layers.len(), center.x, center.y, radius, color_index, alpha
    );
    layers.push(Layer { center, radius, blob, color_index, alpha });
  }
  log::debug!(
    "composed {} layers, seed {}, wobble {}, {} palette",
    layers.len(), params.seed, params.wobble, params.palette_mode
  );

  Ok(Poster {
    background: style.background,
    palette,
    layers,
    label: Label {
      text: format!("{} • {}", style.title, params.palette_mode),
      anchor: style.label_anchor,
      em: style.label_em,
    },
    aspect: style.aspect,
  })
}
