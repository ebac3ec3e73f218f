#![allow(non_snake_case)]
use {
  crate::{
    drawing::{canvas_bounding_box, Draw, Shape, Texture},
    geometry::{to_pixel_space, to_world_space, BoundingBox, PixelSpace, Polygon},
    sdf::SDF,
  },
  euclid::{Point2D, Size2D, Vector2D as V2},
  image::{Pixel, Rgba, RgbaImage},
};

/// Vertical subsamples per pixel row in [`fill_polygon`].
const SUBROWS: u32 = 4;

impl <Cutie> Draw<RgbaImage> for Texture<Cutie, Rgba<u8>>
  where Cutie: Shape
{
  /// Per-pixel signed distance fill with edge antialiasing. Exact, but it
  /// evaluates the full distance field on every pixel of the bounding box;
  /// keep it for small shapes, and use [`fill_polygon`] for blob-sized
  /// outlines.
  fn draw(&self, image: &mut RgbaImage) {
    let resolution: Size2D<_, PixelSpace> = image.dimensions().into();
    let bounding_box = match canvas_bounding_box(self.bounding_box(), resolution) {
      Some(x) => x,
      None => return // bounding box has no intersection with the canvas at all
    };
    let Δp = 1.0 / resolution.width.min(resolution.height) as f64;

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::from([x, y]))
      .for_each(|pixel| {
        let pixel_world = to_world_space(pixel.to_f64() + V2::splat(0.5), resolution);
        let coverage = sdf_coverage(self.sdf(pixel_world), Δp);
        if coverage > 0.0 {
          let pixel = image.get_pixel_mut(pixel.x, pixel.y);
          *pixel = overlay_coverage(coverage, *pixel, self.texture);
        }
      });
  }
}

/// Fill a closed polygon with a single color under the canvas mapping.
///
/// Scanline fill with [`SUBROWS`] subsamples per pixel row vertically and
/// exact fractional span coverage horizontally, so the cost scales with the
/// outline's bounding box instead of with its vertex count times the pixel
/// count. Self-intersecting outlines resolve by the even-odd rule, matching
/// [`Polygon::sdf`](crate::sdf::SDF::sdf).
pub fn fill_polygon(image: &mut RgbaImage, polygon: &Polygon<f64>, color: Rgba<u8>) {
  let resolution: Size2D<_, PixelSpace> = image.dimensions().into();
  if polygon.vertices.len() < 3 {
    return;
  }
  let bounding_box = match canvas_bounding_box(polygon.bounding_box(), resolution) {
    Some(x) => x,
    None => return
  };

  let edges = polygon.edges()
    .map(|(a, b)| (to_pixel_space(a, resolution), to_pixel_space(b, resolution)))
    .collect::<Vec<_>>();

  let origin = bounding_box.min.x as f64;
  let mut coverage = vec![0f64; (bounding_box.max.x - bounding_box.min.x) as usize];
  let mut crossings: Vec<f64> = Vec::with_capacity(8);

  for y in bounding_box.y_range() {
    coverage.iter_mut().for_each(|c| *c = 0.0);
    for sub in 0..SUBROWS {
      let sy = y as f64 + (sub as f64 + 0.5) / SUBROWS as f64;
      crossings.clear();
      for (a, b) in &edges {
        // half-open in y, so a vertex lying on the scanline counts once
        if (a.y > sy) != (b.y > sy) {
          crossings.push(a.x + (sy - a.y) * (b.x - a.x) / (b.y - a.y));
        }
      }
      crossings.sort_unstable_by(f64::total_cmp);
      for span in crossings.chunks_exact(2) {
        accumulate_span(&mut coverage, origin, span[0], span[1]);
      }
    }
    for (i, &c) in coverage.iter().enumerate() {
      if c <= 0.0 { continue; }
      let pixel = image.get_pixel_mut(bounding_box.min.x + i as u32, y);
      *pixel = overlay_coverage(c / SUBROWS as f64, *pixel, color);
    }
  }
}

// add one horizontal span's fractional coverage to a sub-row accumulator
fn accumulate_span(coverage: &mut [f64], origin: f64, xa: f64, xb: f64) {
  let lo = xa.max(origin);
  let hi = xb.min(origin + coverage.len() as f64);
  if hi <= lo { return; }
  let first = (lo - origin).floor() as usize;
  let last = ((hi - origin).ceil() as usize).min(coverage.len());
  for (i, c) in coverage[first..last].iter_mut().enumerate() {
    let cell = origin + (first + i) as f64;
    *c += (hi.min(cell + 1.0) - lo.max(cell)).max(0.0);
  }
}

/// Fraction of a pixel with footprint `Δp` covered at signed distance `sdf`.
pub(crate) fn sdf_coverage(sdf: f64, Δp: f64) -> f64 {
  (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp) / Δp
}

/// Source-over blend of `col2` onto `col1`, with `col2`'s alpha scaled by
/// the pixel coverage.
pub(crate) fn overlay_coverage(coverage: f64, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  col2.0[3] = ((col2.0[3] as f64) * coverage.clamp(0.0, 1.0)).round() as u8;
  col1.blend(&col2);
  col1
}
