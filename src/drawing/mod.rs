use {
  crate::{
    geometry::{BoundingBox, PixelSpace, Shape},
    sdf::SDF
  },
  euclid::{Box2D, Point2D}
};

mod impl_draw_rgbaimage;
#[cfg(test)] mod tests;
pub use impl_draw_rgbaimage::canvas;

pub trait Draw<Backend>: Shape {
  fn draw(&self, image: &mut Backend);
}

/// Pairs a shape with the color it is drawn in.
#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}
impl <S, T> SDF<f32> for Texture<S, T> where S: SDF<f32> {
  fn sdf(&self, pixel: Point2D<f32, PixelSpace>) -> f32 { self.shape.sdf(pixel) } }
impl <S, T> BoundingBox<f32, PixelSpace> for Texture<S, T> where S: BoundingBox<f32, PixelSpace> {
  fn bounding_box(&self) -> Box2D<f32, PixelSpace> { self.shape.bounding_box() } }
