//! Built-in stroke glyphs for the poster caption.
//!
//! Each glyph is a handful of polylines in a unit em cell (`x` right, `y`
//! down, baseline at [`BASELINE`]); a single-point polyline is a dot. The
//! caption is laid out and rasterized directly in pixel space, so the pen
//! stays circular no matter how the canvas mapping stretches the scene.
//! The tables cover exactly the characters a caption can contain; anything
//! else advances the pen without leaving ink.

use {
  crate::{
    drawing::impl_draw_rgbaimage::{overlay_coverage, sdf_coverage},
    geometry::{to_pixel_space, Circle, PixelSpace, Segment},
    scene::Label,
  },
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2},
  image::{Rgba, RgbaImage},
};

/// Baseline height inside the em cell.
const BASELINE: f64 = 0.78;
/// Pen advance between glyph cells, em units.
const ADVANCE: f64 = 0.56;
/// Stroke half-width, em units; sized for a bold caption.
const HALF_STROKE: f64 = 0.055;
/// Bullet radius, em units.
const DOT_RADIUS: f64 = 0.11;

const INK: Rgba<u8> = Rgba([25, 25, 28, 255]);

type Poly = &'static [[f64; 2]];

pub(crate) fn draw(image: &mut RgbaImage, label: &Label) {
  let resolution: Size2D<_, PixelSpace> = image.dimensions().into();
  if resolution.width == 0 || resolution.height == 0 {
    return;
  }
  let em = label.em * resolution.height as f64;
  if !(em > 0.0) {
    return;
  }
  let mut pen = to_pixel_space(label.anchor, resolution);

  for ch in label.text.chars() {
    if ch == '•' {
      let dot = Circle { xy: place(pen, [0.28, 0.55], em), r: DOT_RADIUS * em };
      let clearance = dot.r + 1.0;
      fill_distance(
        image,
        pixel_box(Box2D::new(dot.xy, dot.xy), clearance, resolution),
        |p| dot.distance(p),
      );
    } else if let Some(polylines) = glyph(ch) {
      let half = HALF_STROKE * em;
      let segments = pen_strokes(polylines, pen, em);
      let endpoints = Box2D::from_points(segments.iter().flat_map(|s| [s.a, s.b]));
      fill_distance(
        image,
        pixel_box(endpoints, half + 1.0, resolution),
        |p| segments.iter().map(|s| s.distance(p)).fold(f64::MAX, f64::min) - half,
      );
    }
    pen.x += ADVANCE * em;
  }
}

fn place(pen: Point2D<f64, PixelSpace>, p: [f64; 2], em: f64) -> Point2D<f64, PixelSpace> {
  pen + V2::new(p[0], p[1] - BASELINE) * em
}

fn pen_strokes(
  polylines: &[Poly],
  pen: Point2D<f64, PixelSpace>,
  em: f64
) -> Vec<Segment<f64, PixelSpace>> {
  let mut strokes = vec![];
  for line in polylines {
    if let [dot] = **line {
      let p = place(pen, dot, em);
      strokes.push(Segment { a: p, b: p });
    }
    for pair in line.windows(2) {
      strokes.push(Segment { a: place(pen, pair[0], em), b: place(pen, pair[1], em) });
    }
  }
  strokes
}

fn pixel_box(
  b: Box2D<f64, PixelSpace>,
  clearance: f64,
  resolution: Size2D<u32, PixelSpace>
) -> Option<Box2D<u32, PixelSpace>> {
  b.inflate(clearance, clearance)
    .round_out()
    .intersection(&Box2D::from_size(resolution.to_f64()))
    .map(|x| x.to_u32())
}

// per-pixel distance fill; distances are in pixel units, so the footprint
// is exactly 1
fn fill_distance(
  image: &mut RgbaImage,
  bounding_box: Option<Box2D<u32, PixelSpace>>,
  distance: impl Fn(Point2D<f64, PixelSpace>) -> f64,
) {
  let bounding_box = match bounding_box {
    Some(x) => x,
    None => return
  };
  itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
    .map(|(y, x)| Point2D::<_, PixelSpace>::from([x, y]))
    .for_each(|pixel| {
      let coverage = sdf_coverage(distance(pixel.to_f64() + V2::splat(0.5)), 1.0);
      if coverage > 0.0 {
        let pixel = image.get_pixel_mut(pixel.x, pixel.y);
        *pixel = overlay_coverage(coverage, *pixel, INK);
      }
    });
}

fn glyph(ch: char) -> Option<&'static [Poly]> {
  Some(match ch {
    'I' => &[
      &[[0.14, 0.05], [0.42, 0.05]],
      &[[0.28, 0.05], [0.28, 0.78]],
      &[[0.14, 0.78], [0.42, 0.78]],
    ],
    'P' => &[
      &[[0.12, 0.78], [0.12, 0.05], [0.38, 0.05], [0.46, 0.13], [0.46, 0.33], [0.38, 0.41], [0.12, 0.41]],
    ],
    'a' => &[
      &[[0.46, 0.32], [0.46, 0.78]],
      &[[0.46, 0.38], [0.36, 0.32], [0.18, 0.32], [0.10, 0.42], [0.10, 0.68], [0.18, 0.78], [0.36, 0.78], [0.46, 0.70]],
    ],
    'c' => &[
      &[[0.46, 0.42], [0.38, 0.32], [0.18, 0.32], [0.10, 0.42], [0.10, 0.68], [0.18, 0.78], [0.38, 0.78], [0.46, 0.68]],
    ],
    'd' => &[
      &[[0.46, 0.05], [0.46, 0.78]],
      &[[0.46, 0.40], [0.36, 0.32], [0.18, 0.32], [0.10, 0.42], [0.10, 0.68], [0.18, 0.78], [0.36, 0.78], [0.46, 0.70]],
    ],
    'e' => &[
      &[[0.10, 0.54], [0.46, 0.54], [0.46, 0.42], [0.38, 0.32], [0.18, 0.32], [0.10, 0.42], [0.10, 0.68], [0.18, 0.78], [0.38, 0.78], [0.44, 0.73]],
    ],
    'i' => &[
      &[[0.28, 0.16]],
      &[[0.28, 0.32], [0.28, 0.78]],
    ],
    'l' => &[
      &[[0.28, 0.05], [0.28, 0.78]],
    ],
    'm' => &[
      &[[0.08, 0.78], [0.08, 0.32]],
      &[[0.08, 0.40], [0.14, 0.32], [0.22, 0.32], [0.27, 0.40], [0.27, 0.78]],
      &[[0.27, 0.40], [0.33, 0.32], [0.42, 0.32], [0.48, 0.40], [0.48, 0.78]],
    ],
    'n' => &[
      &[[0.10, 0.78], [0.10, 0.32]],
      &[[0.10, 0.42], [0.18, 0.32], [0.38, 0.32], [0.46, 0.42], [0.46, 0.78]],
    ],
    'o' => &[
      &[[0.18, 0.32], [0.38, 0.32], [0.46, 0.42], [0.46, 0.68], [0.38, 0.78], [0.18, 0.78], [0.10, 0.68], [0.10, 0.42], [0.18, 0.32]],
    ],
    'p' => &[
      &[[0.10, 0.32], [0.10, 0.98]],
      &[[0.10, 0.40], [0.18, 0.32], [0.38, 0.32], [0.46, 0.42], [0.46, 0.68], [0.38, 0.78], [0.18, 0.78], [0.10, 0.70]],
    ],
    'r' => &[
      &[[0.14, 0.32], [0.14, 0.78]],
      &[[0.14, 0.46], [0.24, 0.32], [0.38, 0.32], [0.46, 0.40]],
    ],
    's' => &[
      &[[0.46, 0.40], [0.38, 0.32], [0.18, 0.32], [0.10, 0.40], [0.16, 0.52], [0.40, 0.58], [0.46, 0.68], [0.38, 0.78], [0.18, 0.78], [0.10, 0.70]],
    ],
    't' => &[
      &[[0.26, 0.12], [0.26, 0.70], [0.32, 0.78], [0.44, 0.78]],
      &[[0.12, 0.32], [0.42, 0.32]],
    ],
    'u' => &[
      &[[0.10, 0.32], [0.10, 0.68], [0.18, 0.78], [0.38, 0.78], [0.46, 0.70]],
      &[[0.46, 0.32], [0.46, 0.78]],
    ],
    'v' => &[
      &[[0.10, 0.32], [0.28, 0.78], [0.46, 0.32]],
    ],
    _ => return None,
  })
}
