//! Rasterization of a composed [`Poster`] into an [`RgbaImage`].
//!
//! The canvas mapping is anisotropic: the unit square of
//! [`WorldSpace`](crate::geometry::WorldSpace) is stretched componentwise
//! onto the full raster, so a poster keeps its proportions at any width.
//! Blobs go through the scanline [`fill_polygon`]; everything with a cheap
//! signed distance (the caption strokes, small shapes) goes through the
//! per-pixel [`Draw`] path.

use {
  crate::{
    error::Result,
    geometry::{to_pixel_space, BoundingBox, PixelSpace, Shape, WorldSpace},
    scene::{self, Color, Parameters, Poster},
    sdf::SDF,
  },
  euclid::{Box2D, Point2D, Size2D},
  image::{Rgba, RgbaImage},
  std::time::Instant,
};

mod impl_draw_rgbaimage;
mod label;
#[cfg(test)] mod tests;
pub use impl_draw_rgbaimage::fill_polygon;

pub trait Draw<Backend>: Shape {
  fn draw(&self, image: &mut Backend);
}

/// Shape bundled with its fill.
#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}
impl <S, T> SDF<f64> for Texture<S, T> where S: SDF<f64> {
  fn sdf(&self, pixel: Point2D<f64, WorldSpace>) -> f64 { self.shape.sdf(pixel) } }
impl <S, T> BoundingBox<f64, WorldSpace> for Texture<S, T> where S: BoundingBox<f64, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f64, WorldSpace> { self.shape.bounding_box() } }

/// Scene color and opacity, converted to a raster pixel.
pub fn rgba(color: Color, alpha: f64) -> Rgba<u8> {
  Rgba([
    (color.r.clamp(0.0, 1.0) * 255.0).round() as u8,
    (color.g.clamp(0.0, 1.0) * 255.0).round() as u8,
    (color.b.clamp(0.0, 1.0) * 255.0).round() as u8,
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
  ])
}

// pixel footprint of a world-space box under the canvas mapping,
// clipped to the canvas
fn canvas_bounding_box(
  bounding_box: Box2D<f64, WorldSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> Option<Box2D<u32, PixelSpace>> {
  Box2D::new(
    to_pixel_space(bounding_box.min, resolution),
    to_pixel_space(bounding_box.max, resolution)
  )
    .round_out()
    .intersection(&Box2D::from_size(resolution.to_f64()))
    .map(|x| x.to_u32())
}

/// Rasterize a composed poster at the given canvas width; the height
/// follows the poster's aspect.
pub fn render(poster: &Poster, width: u32) -> RgbaImage {
  let t0 = Instant::now();
  let (aw, ah) = poster.aspect;
  let height = (width as f64 * ah as f64 / aw as f64).round() as u32;
  let mut image = RgbaImage::from_pixel(width, height, rgba(poster.background, 1.0));

  for layer in &poster.layers {
    fill_polygon(&mut image, &layer.blob, rgba(poster.layer_color(layer), layer.alpha));
  }
  label::draw(&mut image, &poster.label);

  log::debug!(
    "rendered {} layers at {}x{} in {:?}",
    poster.layers.len(), width, height, t0.elapsed()
  );
  image
}

/// The whole reference pipeline in one call: compose with the default
/// style, then render.
pub fn render_poster(params: &Parameters, width: u32) -> Result<RgbaImage> {
  Ok(render(&scene::compose(params)?, width))
}

impl Poster {
  /// See [`render`].
  pub fn render(&self, width: u32) -> RgbaImage {
    render(self, width)
  }
}
