//! Common utilities module
//!
//! Error type and step timing shared by the loader, the converters and the stream pipeline.

pub mod error;
pub mod timing;

#[cfg(test)]
mod tests;

pub use error::{ConversionError, Result};
pub use timing::{PipelineTimings, Timer};
