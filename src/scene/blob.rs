//! Wobbly-circle outlines, the single organic ingredient of a poster.

use {
  crate::{
    error::{Error, Result},
    geometry::{Polygon, P2},
  },
  euclid::Vector2D as V2,
  rand::Rng,
  std::f64::consts::PI,
};

/// Sample a closed polygon approximating a circle of `radius` around
/// `center`, with per-vertex radial jitter of amplitude `wobble`.
///
/// Angles sweep `[0, 2π]` inclusive of both ends, so the first and last
/// vertex sit on the same nominal direction and differ only by their
/// independent jitter draws. Each vertex consumes exactly one uniform draw.
/// `wobble` of 1 or more can fold the outline into self-intersection;
/// callers get exactly the outline they asked for.
///
/// `radius` must be positive and finite, `points` at least 3; both are
/// checked before the first draw.
pub fn generate(
  center: P2,
  radius: f64,
  points: usize,
  wobble: f64,
  rng: &mut impl Rng,
) -> Result<Polygon<f64>> {
  if !(radius > 0.0 && radius.is_finite()) {
    return Err(Error::invalid_argument(format!(
      "blob radius {} must be positive and finite", radius
    )));
  }
  if points < 3 {
    return Err(Error::invalid_argument(format!(
      "blob outline needs at least 3 points, got {}", points
    )));
  }
  let step = 2.0 * PI / (points - 1) as f64;
  let vertices = (0..points)
    .map(|i| {
      let angle = step * i as f64;
      let jitter = rng.gen_range(0.0..1.0) - 0.5;
      let r = radius * (1.0 + wobble * jitter);
      center + V2::new(angle.cos(), angle.sin()) * r
    })
    .collect();
  Ok(Polygon::new(vertices))
}
