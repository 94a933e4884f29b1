//! YUV 4:2:0 module
//!
//! Colour conversion from BGR bitmaps to planar YUV 4:2:0, with the row-range kernel and
//! the sequential and parallel strategies that drive it.

pub mod color;
mod plane_converter;
mod image_converter;
pub mod types;


pub use plane_converter::convert_rows;
pub use image_converter::{ParallelConverter, SequentialConverter, YuvConverter, row_ranges};
pub use types::YuvImage;
