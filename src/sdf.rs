use {
  crate::geometry::WorldSpace,
  euclid::Point2D,
};

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, WorldSpace>) -> T;
}

impl<T, S: SDF<T> + ?Sized> SDF<T> for &S {
  fn sdf(&self, pixel: Point2D<T, WorldSpace>) -> T {
    (**self).sdf(pixel)
  }}
