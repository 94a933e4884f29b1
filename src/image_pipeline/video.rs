//! Raw planar YUV stream module
//!
//! Headerless I420 frames: the luma plane followed by the U and V planes, back to back.

mod reader;
mod writer;
mod raw_yuv;


pub use reader::FrameReader;
pub use writer::FrameWriter;
pub use raw_yuv::{RawYuvReader, RawYuvWriter};
