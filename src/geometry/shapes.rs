use {
  super::{BoundingBox, PixelSpace, P2},
  crate::sdf::SDF,
  euclid::{Box2D, Vector2D as V2}
};

/// Filled circle
#[derive(Debug, Copy, Clone)]
pub struct Disk {
  pub center: P2,
  pub radius: f32
}

/// Circle outline; the stroke is centered on `radius`
#[derive(Debug, Copy, Clone)]
pub struct Ring {
  pub center: P2,
  pub radius: f32,
  pub width: f32
}

/// Line segment stroked with round caps
#[derive(Debug, Copy, Clone)]
pub struct Segment {
  pub a: P2,
  pub b: P2,
  pub width: f32
}

/// Axis-aligned rectangle outline; the stroke is centered on the boundary
#[derive(Debug, Copy, Clone)]
pub struct Frame {
  pub rect: Box2D<f32, PixelSpace>,
  pub width: f32
}

impl BoundingBox<f32, PixelSpace> for Disk {
  fn bounding_box(&self) -> Box2D<f32, PixelSpace> {
    Box2D::new(
      self.center - V2::splat(self.radius),
      self.center + V2::splat(self.radius)
    )}}

impl BoundingBox<f32, PixelSpace> for Ring {
  fn bounding_box(&self) -> Box2D<f32, PixelSpace> {
    let r = self.radius + self.width / 2.0;
    Box2D::new(
      self.center - V2::splat(r),
      self.center + V2::splat(r)
    )}}

impl BoundingBox<f32, PixelSpace> for Segment {
  fn bounding_box(&self) -> Box2D<f32, PixelSpace> {
    Box2D::from_points([self.a, self.b])
      .inflate(self.width / 2.0, self.width / 2.0)
  }}

impl BoundingBox<f32, PixelSpace> for Frame {
  fn bounding_box(&self) -> Box2D<f32, PixelSpace> {
    self.rect.inflate(self.width / 2.0, self.width / 2.0)
  }}

impl SDF<f32> for Disk {
  fn sdf(&self, pixel: P2) -> f32 {
    (pixel - self.center).length() - self.radius
  }
}

impl SDF<f32> for Ring {
  fn sdf(&self, pixel: P2) -> f32 {
    ((pixel - self.center).length() - self.radius).abs() - self.width / 2.0
  }
}

impl SDF<f32> for Segment {
  fn sdf(&self, pixel: P2) -> f32 {
    let pa = pixel - self.a;
    let ba = self.b - self.a;
    let h = (pa.dot(ba) / ba.dot(ba)).clamp(0.0, 1.0);
    (pa - ba * h).length() - self.width / 2.0
  }
}

impl SDF<f32> for Frame {
  fn sdf(&self, pixel: P2) -> f32 {
    let dist = (pixel - self.rect.center()).abs() - self.rect.size().to_vector() / 2.0;
    let outside_dist = dist
      .max(V2::splat(0.0))
      .length();
    let inside_dist = dist.x
      .max(dist.y)
      .min(0.0);
    (outside_dist + inside_dist).abs() - self.width / 2.0
  }
}
