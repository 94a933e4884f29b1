//! Overlay configuration types

use crate::image_pipeline::common::timing::PipelineTimings;

/// How the still image is converted from BGR to YUV
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStrategy {
    /// Single thread, whole image in one pass
    Sequential,
    /// Row bands spread over a worker pool (default)
    Parallel,
}

/// Configuration for overlaying a BMP onto a raw YUV stream
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// Width of the video frames in pixels
    pub video_width: usize,
    /// Height of the video frames in pixels
    pub video_height: usize,
    /// Conversion strategy for the still image
    pub strategy: ConversionStrategy,
    /// Worker count for the parallel strategy; `None` uses hardware parallelism
    pub threads: Option<usize>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            video_width: 0,
            video_height: 0,
            strategy: ConversionStrategy::Parallel,
            threads: None,
        }
    }
}

impl OverlayConfig {
    pub fn builder() -> OverlayConfigBuilder {
        OverlayConfigBuilder::default()
    }
}

/// Builder for OverlayConfig
#[derive(Default)]
pub struct OverlayConfigBuilder {
    video_size: Option<(usize, usize)>,
    strategy: Option<ConversionStrategy>,
    threads: Option<Option<usize>>,
}

impl OverlayConfigBuilder {
    pub fn video_size(mut self, width: usize, height: usize) -> Self {
        self.video_size = Some((width, height));
        self
    }

    pub fn strategy(mut self, strategy: ConversionStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn build(self) -> OverlayConfig {
        let default = OverlayConfig::default();
        let (video_width, video_height) = self
            .video_size
            .unwrap_or((default.video_width, default.video_height));
        OverlayConfig {
            video_width,
            video_height,
            strategy: self.strategy.unwrap_or(default.strategy),
            threads: self.threads.unwrap_or(default.threads),
        }
    }
}

/// Outcome of one overlay run
#[derive(Debug)]
pub struct OverlayReport {
    /// Frames read, overlaid and written
    pub frames: u64,
    pub still_width: usize,
    pub still_height: usize,
    pub timings: PipelineTimings,
}
