use {
  super::{BoundingBox, P2, WorldSpace},
  crate::sdf::SDF,
  euclid::{Box2D, Point2D, Vector2D as V2},
  num_traits::Float,
};

/// Circle with an explicit center and radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle<T, U = WorldSpace> {
  pub xy: Point2D<T, U>,
  pub r: T,
}

impl<T: Float, U> Circle<T, U> {
  /// Signed distance from `p`; negative inside.
  pub fn distance(&self, p: Point2D<T, U>) -> T {
    (p - self.xy).length() - self.r
  }
}

impl<T: Float> SDF<T> for Circle<T, WorldSpace> {
  fn sdf(&self, pixel: P2<T>) -> T {
    self.distance(pixel)
  }}

impl<T: Float, U> BoundingBox<T, U> for Circle<T, U> {
  fn bounding_box(&self) -> Box2D<T, U> {
    Box2D::new(
      (self.xy.to_vector() - V2::splat(self.r)).to_point(),
      (self.xy.to_vector() + V2::splat(self.r)).to_point()
    )}}

/// Line segment between two points. Has no interior, so its distance field
/// is never negative; strokes are carved out of it by a half-width offset.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment<T, U = WorldSpace> {
  pub a: Point2D<T, U>,
  pub b: Point2D<T, U>,
}

impl<T: Float, U> Segment<T, U> {
  /// Distance from `p`. A zero-length segment degrades to a point.
  pub fn distance(&self, p: Point2D<T, U>) -> T {
    let pa = p - self.a;
    let ba = self.b - self.a;
    let denom = ba.dot(ba);
    let h = if denom > T::zero() {
      (pa.dot(ba) / denom).max(T::zero()).min(T::one())
    } else {
      T::zero()
    };
    (pa - ba * h).length()
  }
}

impl<T: Float> SDF<T> for Segment<T, WorldSpace> {
  fn sdf(&self, pixel: P2<T>) -> T {
    self.distance(pixel)
  }}

impl<T: Float, U> BoundingBox<T, U> for Segment<T, U> {
  fn bounding_box(&self) -> Box2D<T, U> {
    Box2D::from_points([self.a, self.b])
  }}

/// Closed polygon; vertices are connected in order, the last back to the
/// first. Orientation does not matter, and the outline may self-intersect,
/// in which case the even-odd rule decides what counts as inside.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T, U = WorldSpace> {
  pub vertices: Vec<Point2D<T, U>>,
}

impl<T, U> Polygon<T, U> {
  pub fn new(vertices: Vec<Point2D<T, U>>) -> Self {
    Self { vertices }
  }

  /// Edges as vertex pairs, including the closing edge.
  pub fn edges(&self) -> impl Iterator<Item = (Point2D<T, U>, Point2D<T, U>)> + '_
    where T: Copy {
    let n = self.vertices.len();
    (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
  }
}

impl<T: Float> SDF<T> for Polygon<T, WorldSpace> {
  fn sdf(&self, pixel: P2<T>) -> T {
    let v = &self.vertices;
    let n = v.len();
    if n < 2 {
      return T::max_value();
    }
    let mut d = {
      let w = pixel - v[0];
      w.dot(w)
    };
    let mut s = T::one();
    let mut j = n - 1;
    for i in 0..n {
      let e = v[j] - v[i];
      let w = pixel - v[i];
      let denom = e.dot(e);
      let h = if denom > T::zero() {
        (w.dot(e) / denom).max(T::zero()).min(T::one())
      } else {
        T::zero()
      };
      let b = w - e * h;
      d = d.min(b.dot(b));
      // even-odd ray crossing, counted consistently at vertices
      let c = [pixel.y >= v[i].y, pixel.y < v[j].y, e.x * w.y > e.y * w.x];
      if c == [true; 3] || c == [false; 3] {
        s = -s;
      }
      j = i;
    }
    s * d.sqrt()
  }}

impl<T: Float, U> BoundingBox<T, U> for Polygon<T, U> {
  fn bounding_box(&self) -> Box2D<T, U> {
    Box2D::from_points(&self.vertices)
  }}
