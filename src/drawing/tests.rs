use {
  super::*,
  crate::geometry::{Disk, Ring, Segment, P2},
  image::Rgba
};

const INK: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

#[test] fn disk_fill() {
  let mut image = canvas(24);
  Disk { center: P2::splat(12.0), radius: 5.0 }
    .texture(INK)
    .draw(&mut image);
  assert_eq!(*image.get_pixel(12, 12), INK);
  assert_eq!(image.get_pixel(0, 0).0[3], 0);
}

#[test] fn ring_leaves_center_empty() {
  let mut image = canvas(24);
  Ring { center: P2::splat(12.0), radius: 8.0, width: 2.0 }
    .texture(INK)
    .draw(&mut image);
  assert_eq!(*image.get_pixel(12, 4), INK); // on the stroke
  assert_eq!(image.get_pixel(12, 12).0[3], 0); // interior untouched
}

#[test] fn union_draws_both_halves() {
  let mut image = canvas(24);
  Segment { a: P2::new(7.0, 7.0), b: P2::new(17.0, 17.0), width: 2.0 }
    .union(Segment { a: P2::new(7.0, 17.0), b: P2::new(17.0, 7.0), width: 2.0 })
    .texture(INK)
    .draw(&mut image);
  assert_eq!(*image.get_pixel(7, 7), INK);
  assert_eq!(*image.get_pixel(7, 17), INK);
}

#[test] fn clips_at_canvas_edge() {
  let mut image = canvas(24);
  Segment { a: P2::new(-10.0, 12.0), b: P2::new(40.0, 12.0), width: 2.0 }
    .texture(INK)
    .draw(&mut image);
  assert_eq!(*image.get_pixel(0, 12), INK);
  assert_eq!(*image.get_pixel(23, 12), INK);
}

#[test] fn offscreen_shape_is_ignored() {
  let mut image = canvas(24);
  Disk { center: P2::new(-20.0, -20.0), radius: 4.0 }
    .texture(INK)
    .draw(&mut image);
  assert!(image.pixels().all(|pixel| pixel.0[3] == 0));
}
