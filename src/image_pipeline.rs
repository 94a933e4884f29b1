//! Image processing pipeline module
//!
//! Loads a 24-bit BMP, converts it to planar YUV 4:2:0 and overlays it onto every frame of
//! a raw YUV stream. Split into BMP reading, colour conversion, overlay, raw frame I/O and
//! the orchestration that ties them together.

pub mod bmp;
pub mod yuv;
pub mod overlay;
pub mod video;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    PipelineTimings,
    Result,
};

pub use bmp::{
    Bitmap,
    BitmapReader,
    StandardBmpReader,
};

pub use yuv::{
    ParallelConverter,
    SequentialConverter,
    YuvConverter,
    YuvImage,
};

pub use video::{
    FrameReader,
    FrameWriter,
    RawYuvReader,
    RawYuvWriter,
};

pub use conversions::{
    BmpOverlayPipeline,
    ConversionStrategy,
    OverlayConfig,
    OverlayConfigBuilder,
    OverlayReport,
};
