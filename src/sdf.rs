use {
  crate::geometry::{BoundingBox, PixelSpace},
  euclid::{Box2D, Point2D},
  num_traits::Float
};

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, PixelSpace>) -> T;
}

/// Union of two SDFs.
#[derive(Clone, Copy, Debug)]
pub struct Union<S1, S2> {
  pub s1: S1,
  pub s2: S2,
}

impl<T, S1, S2> SDF<T> for Union<S1, S2>
  where T: Float,
        S1: SDF<T>,
        S2: SDF<T> {
  fn sdf(&self, pixel: Point2D<T, PixelSpace>) -> T {
    self.s1.sdf(pixel).min(self.s2.sdf(pixel))
  }}

impl<T, S1, S2> BoundingBox<T, PixelSpace> for Union<S1, S2>
  where T: Copy + PartialOrd,
        S1: BoundingBox<T, PixelSpace>,
        S2: BoundingBox<T, PixelSpace> {
  fn bounding_box(&self) -> Box2D<T, PixelSpace> {
    self.s1.bounding_box().union(&self.s2.bounding_box())
  }}
