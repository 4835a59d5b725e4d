//! The built-in icon table: every icon is a name plus the ordered list of
//! primitives it is drawn from, rendered by one shared routine.

use {
  crate::{
    drawing::{canvas, Draw},
    geometry::{Disk, Frame, PixelSpace, Ring, Segment, Shape, P2}
  },
  anyhow::Result,
  euclid::{Box2D, Vector2D as V2},
  image::{Rgba, RgbaImage},
  std::{
    fs,
    path::{Path, PathBuf}
  }
};


/// Canvas side of every icon, in pixels.
pub const ICON_SIZE: u32 = 24;
/// Stroke and fill color shared by the whole set.
pub const ACCENT: Rgba<u8> = Rgba([0x66, 0x7e, 0xea, 0xff]);
const WHITE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
const STROKE: f32 = 2.0;

pub struct Icon {
  pub name: &'static str,
  shapes: Vec<Box<dyn Draw<RgbaImage>>>
}

impl Icon {
  /// Transparent canvas with the primitives applied in order.
  pub fn render(&self) -> RgbaImage {
    let mut image = canvas(ICON_SIZE);
    self.shapes.iter()
      .for_each(|shape| shape.draw(&mut image));
    image
  }

  pub fn filename(&self) -> String {
    format!("{}.png", self.name)
  }

  /// Encode into `<dir>/<name>.png`, overwriting a previous file.
  pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(self.filename());
    self.render().save(&path)?;
    Ok(path)
  }
}

fn center() -> P2 {
  P2::splat(ICON_SIZE as f32 / 2.0)
}

/// Endpoints of a radial tick at `angle` degrees, spanning `r0..r1` out of `center`.
pub fn spoke(center: P2, angle: f32, r0: f32, r1: f32) -> (P2, P2) {
  let rad = angle.to_radians();
  let dir = V2::<_, PixelSpace>::from([rad.cos(), rad.sin()]);
  (center + dir * r0, center + dir * r1)
}

fn radial_ticks(step: usize, r0: f32, r1: f32) -> impl Iterator<Item = Box<dyn Draw<RgbaImage>>> {
  (0..360).step_by(step)
    .map(move |angle| -> Box<dyn Draw<RgbaImage>> {
      let (a, b) = spoke(center(), angle as f32, r0, r1);
      Box::new(Segment { a, b, width: STROKE }.texture(ACCENT))
    })
}

// document sheet: outlined square plus two lines of "text"
fn submit() -> Vec<Box<dyn Draw<RgbaImage>>> {
  vec![
    Box::new(Frame {
      rect: Box2D::new(P2::new(3.0, 3.0), P2::new(21.0, 21.0)),
      width: STROKE
    }.texture(ACCENT)),
    Box::new(Segment { a: P2::new(3.0, 9.0), b: P2::new(21.0, 9.0), width: STROKE }.texture(ACCENT)),
    Box::new(Segment { a: P2::new(9.0, 15.0), b: P2::new(15.0, 15.0), width: STROKE }.texture(ACCENT))
  ]
}

// circled X
fn clear() -> Vec<Box<dyn Draw<RgbaImage>>> {
  vec![
    Box::new(Ring { center: center(), radius: 10.0, width: STROKE }.texture(ACCENT)),
    Box::new(Segment { a: P2::new(7.0, 7.0), b: P2::new(17.0, 17.0), width: STROKE }
      .union(Segment { a: P2::new(7.0, 17.0), b: P2::new(17.0, 7.0), width: STROKE })
      .texture(ACCENT))
  ]
}

// gear: filled hub, six spokes at 60°
fn settings() -> Vec<Box<dyn Draw<RgbaImage>>> {
  let mut shapes: Vec<Box<dyn Draw<RgbaImage>>> = vec![
    Box::new(Disk { center: center(), radius: 2.0 }.texture(ACCENT))
  ];
  shapes.extend(radial_ticks(60, 8.0, 10.0));
  shapes
}

// outlined core, eight rays at 45°
fn sun() -> Vec<Box<dyn Draw<RgbaImage>>> {
  let mut shapes: Vec<Box<dyn Draw<RgbaImage>>> = vec![
    Box::new(Ring { center: center(), radius: 3.0, width: STROKE }.texture(ACCENT))
  ];
  shapes.extend(radial_ticks(45, 6.0, 8.0));
  shapes
}

// crescent: the white disk erases part of the outline by overlap
fn moon() -> Vec<Box<dyn Draw<RgbaImage>>> {
  vec![
    Box::new(Ring { center: center(), radius: 7.0, width: STROKE }.texture(ACCENT)),
    Box::new(Disk { center: P2::new(15.0, 9.0), radius: 4.0 }.texture(WHITE))
  ]
}

/// The built-in set, in generation order.
pub fn all() -> Vec<Icon> {
  vec![
    Icon { name: "submit", shapes: submit() },
    Icon { name: "clear", shapes: clear() },
    Icon { name: "settings", shapes: settings() },
    Icon { name: "sun", shapes: sun() },
    Icon { name: "moon", shapes: moon() }
  ]
}

/// Render every icon into `dir`, creating it when missing.
/// Returns the written paths, in generation order.
pub fn write_all(dir: &Path) -> Result<Vec<PathBuf>> {
  fs::create_dir_all(dir)?;
  all().iter()
    .map(|icon| icon.write_to(dir))
    .collect()
}
