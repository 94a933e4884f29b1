//! Pipeline conversions module
//!
//! Orchestrates loading the still, converting it and streaming it over the video.

mod bmp_overlay;
pub mod types;


pub use bmp_overlay::BmpOverlayPipeline;
pub use types::{ConversionStrategy, OverlayConfig, OverlayConfigBuilder, OverlayReport};
