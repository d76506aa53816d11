//! framestamp library crate.
//!
//! Stamps fixed-pitch bitmap-font text onto raw frame buffers, the way a
//! capture pipeline burns a caption into a frame before handing it to an
//! encoder. Two buffer encodings are supported (packed 1-bpp monochrome and
//! 8-bit grayscale), plus a five-pass halo composite that keeps text legible
//! over any background.

pub mod config;
pub mod font;
pub mod pnm;
pub mod raster;
