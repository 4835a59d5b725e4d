//! Procedural rendering of a small set of 24×24 UI icons.
//!
//! Shapes are modelled as signed distance functions ([`sdf`]) over the pixel
//! grid and rasterized onto a transparent RGBA canvas with one pixel of
//! antialiasing ([`drawing`]). The built-in table in [`icons`] maps every
//! icon name to the ordered list of primitives it is drawn from.
//!
//! # Basic usage
//! ```no_run
//! use icongen::icons;
//!
//! fn main() -> anyhow::Result<()> {
//!   // writes submit.png, clear.png, settings.png, sun.png, moon.png
//!   for path in icons::write_all("assets".as_ref())? {
//!     println!("✓ {}", path.display());
//!   }
//!   Ok(())
//! }
//! ```
//! Rendering a single icon without touching the filesystem:
//! ```
//! use icongen::icons;
//!
//! let moon = icons::all().into_iter().find(|icon| icon.name == "moon").unwrap();
//! assert_eq!(moon.render().dimensions(), (24, 24));
//! ```

pub mod sdf;
pub mod geometry;
pub mod drawing;
pub mod icons;
