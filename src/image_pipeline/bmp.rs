//! BMP reading module
//!
//! Parses 24-bit uncompressed BMP files into a packed, bottom-up BGR [`Bitmap`].

mod reader;
mod standard_bmp_reader;
pub mod types;

#[cfg(test)]
mod tests;

pub use reader::BitmapReader;
pub use standard_bmp_reader::StandardBmpReader;
pub use types::{Bitmap, BitmapFileHeader, BitmapInfoHeader};
