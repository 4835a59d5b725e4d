#![allow(non_snake_case)]
use {
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2},
  image::{Pixel, Rgba, RgbaImage},
  crate::{
    drawing::{Draw, Texture},
    geometry::{BoundingBox, PixelSpace, Shape},
    sdf::SDF
  }
};

/// Square canvas, fully transparent.
pub fn canvas(size: u32) -> RgbaImage {
  RgbaImage::new(size, size)
}

impl <Cutie> Draw<RgbaImage> for Texture<Cutie, Rgba<u8>>
  where Cutie: Shape
{
  fn draw(&self, image: &mut RgbaImage) {
    let resolution: Size2D<_, PixelSpace> = image.dimensions().into();
    let bounding_box = match clamp_bounding_box(self.bounding_box(), resolution) {
      Some(x) => x,
      None => return // bounding box has no intersection with the canvas at all
    };
    let Δp = 1.0;

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::from([x, y]))
      .for_each(|pixel| {
        // sample at the pixel center
        let sdf = self.sdf(pixel.to_f32() + V2::splat(0.5));
        let pixel = image.get_pixel_mut(pixel.x, pixel.y);
        *pixel = sdf_overlay_aa(sdf, Δp, *pixel, self.texture);
      });
  }
}

// one extra pixel on each side, so antialiased edges are not cut off
fn clamp_bounding_box(
  bounding_box: Box2D<f32, PixelSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> Option<Box2D<u32, PixelSpace>> {
  bounding_box
    .inflate(1.0, 1.0)
    .round_out()
    .intersection(&Box2D::from_size(resolution.to_f32()))
    .map(|x| x.to_u32())
}

fn sdf_overlay_aa(sdf: f32, Δp: f32, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  let alpha = Δf / Δp;
  // overlay blending with premultiplied alpha
  col2.0[3] = ((col2.0[3] as f32) * alpha) as u8;
  col1.blend(&col2);
  col1
}
