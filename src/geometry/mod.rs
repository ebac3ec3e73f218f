//! Geometric vocabulary of the poster: coordinate spaces, bounding boxes,
//! and the shapes the rasterizer knows how to fill.
//!
//! The origin of the coordinate system is in the top-left corner, with `y`
//! growing downwards. A scene lives in the unit square `[0, 1]²` of
//! [`WorldSpace`]; the canvas mapping stretches it componentwise onto the
//! full pixel raster, whatever its proportions.

use {
  crate::sdf::SDF,
  euclid::{Box2D, Point2D, Size2D},
  num_traits::NumCast,
};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelSpace;
/// Normalized coordinate basis
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldSpace;

/// Point in the normalized coordinate basis.
pub type P2<T = f64> = Point2D<T, WorldSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

impl<T, S, B: BoundingBox<T, S> + ?Sized> BoundingBox<T, S> for &B {
  fn bounding_box(&self) -> Box2D<T, S> {
    (**self).bounding_box()
  }}

/// Something inside a rectangular area.
pub trait Shape: SDF<f64> + BoundingBox<f64, WorldSpace> {
  #[cfg(feature = "drawing")]
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}
impl <T> Shape for T where T: SDF<f64> + BoundingBox<f64, WorldSpace> {}

pub fn to_world_space<T: NumCast + Copy>(
  point: Point2D<T, PixelSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> P2 {
  point.to_f64().to_vector()
    .component_div(resolution.to_f64().to_vector())
    .cast_unit()
    .to_point()
}

pub fn to_pixel_space(
  point: P2,
  resolution: Size2D<u32, PixelSpace>
) -> Point2D<f64, PixelSpace> {
  point.to_vector()
    .component_mul(resolution.to_f64().to_vector().cast_unit())
    .cast_unit()
    .to_point()
}
