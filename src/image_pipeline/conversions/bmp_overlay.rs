use tracing::{debug, info, instrument, trace};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::image_pipeline::{
    bmp::{Bitmap, BitmapReader, StandardBmpReader},
    common::error::{ConversionError, Result},
    common::timing::{PipelineTimings, Timer},
    conversions::types::{ConversionStrategy, OverlayConfig, OverlayReport},
    overlay::{check_fits, overlay},
    video::{FrameReader, FrameWriter, RawYuvReader, RawYuvWriter},
    yuv::{ParallelConverter, SequentialConverter, YuvConverter, YuvImage},
};

pub struct BmpOverlayPipeline<R: BitmapReader, F: FrameReader, W: FrameWriter> {
    reader: R,
    frame_reader: F,
    frame_writer: W,
    /// Replaces the strategy-selected converter when set.
    converter: Option<Box<dyn YuvConverter + Send + Sync>>,
    config: OverlayConfig,
}

impl BmpOverlayPipeline<StandardBmpReader, RawYuvReader, RawYuvWriter> {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            reader: StandardBmpReader,
            frame_reader: RawYuvReader,
            frame_writer: RawYuvWriter,
            converter: None,
            config,
        }
    }
}

impl<R: BitmapReader, F: FrameReader, W: FrameWriter> BmpOverlayPipeline<R, F, W> {
    pub fn with_custom(reader: R, frame_reader: F, frame_writer: W, config: OverlayConfig) -> Self {
        Self {
            reader,
            frame_reader,
            frame_writer,
            converter: None,
            config,
        }
    }

    /// Converts the still with `converter` instead of the one picked by
    /// [`OverlayConfig::strategy`].
    pub fn with_converter(mut self, converter: impl YuvConverter + Send + Sync + 'static) -> Self {
        self.converter = Some(Box::new(converter));
        self
    }

    /// Startup checks: even, non-zero frame and still sizes, a usable worker count, and a
    /// still that fits inside the frame. Any failure here stops the run before a frame is read.
    fn validate_dimensions(&self, bitmap: &Bitmap) -> Result<()> {
        let (width, height) = (self.config.video_width, self.config.video_height);
        YuvImage::check_dimensions(width, height)?;

        if self.config.threads == Some(0) {
            return Err(ConversionError::ThreadPool(
                "worker count must be >= 1 when set".to_string(),
            ));
        }

        bitmap.validate()?;
        YuvImage::check_dimensions(bitmap.width, bitmap.height)?;
        check_fits(bitmap.width, bitmap.height, width, height)
    }

    /// Decodes the BMP bytes and checks the result against the configured frame size.
    pub fn load_bitmap(&self, bmp_data: &[u8]) -> Result<Bitmap> {
        let bitmap = {
            let _span = tracing::info_span!("decode_bmp").entered();
            self.reader.read_bitmap(bmp_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = bitmap.width,
                height = bitmap.height
            ).entered();
            self.validate_dimensions(&bitmap)?;
        }

        Ok(bitmap)
    }

    /// Converts the still with the configured strategy, or with the converter set through
    /// [`Self::with_converter`].
    pub fn convert_still(&self, bitmap: &Bitmap) -> Result<YuvImage> {
        if let Some(converter) = &self.converter {
            return converter.convert(bitmap);
        }
        match self.config.strategy {
            ConversionStrategy::Sequential => SequentialConverter.convert(bitmap),
            ConversionStrategy::Parallel => ParallelConverter::new(self.config.threads).convert(bitmap),
        }
    }

    /// Overlays `still` on every whole frame of `input` and writes the result to
    /// `output`. Returns the number of frames written.
    ///
    /// One frame buffer is allocated up front and refilled for each frame.
    #[instrument(skip_all, fields(still_width = still.width(), still_height = still.height()))]
    pub fn overlay_stream(
        &self,
        still: &YuvImage,
        input: &mut dyn Read,
        output: &mut dyn Write,
    ) -> Result<u64> {
        let mut frame = YuvImage::new(self.config.video_width, self.config.video_height)?;
        check_fits(still.width(), still.height(), frame.width(), frame.height())?;
        debug!("Frame buffer allocated: {} bytes", frame.frame_len());

        let mut frames = 0u64;
        while self.frame_reader.read_frame(input, &mut frame)? {
            overlay(&mut frame, still)?;
            self.frame_writer.write_frame(&frame, output)?;
            frames += 1;
            trace!(frames, "Frame written");
        }
        output.flush()?;

        info!(frames, "Reached end of input stream");
        Ok(frames)
    }

    #[instrument(skip(self, bmp_data, input, output), fields(bmp_size = bmp_data.len()))]
    pub fn convert(
        &self,
        bmp_data: &[u8],
        input: &mut dyn Read,
        output: &mut dyn Write,
    ) -> Result<OverlayReport> {
        let mut timings = PipelineTimings::new();
        info!("Starting BMP overlay");

        let timer = Timer::start("load_bitmap");
        let bitmap = self.load_bitmap(bmp_data)?;
        timer.record(&mut timings);

        let still = self.prepare_still(&bitmap, &mut timings)?;
        self.stream(&still, input, output, timings)
    }

    fn prepare_still(&self, bitmap: &Bitmap, timings: &mut PipelineTimings) -> Result<YuvImage> {
        let timer = Timer::start("convert_still");
        let still = {
            let _span = tracing::info_span!("convert_still", strategy = ?self.config.strategy).entered();
            self.convert_still(bitmap)?
        };
        timer.record(timings);
        Ok(still)
    }

    fn stream(
        &self,
        still: &YuvImage,
        input: &mut dyn Read,
        output: &mut dyn Write,
        mut timings: PipelineTimings,
    ) -> Result<OverlayReport> {
        let timer = Timer::start("overlay_stream");
        let frames = self.overlay_stream(still, input, output)?;
        timer.record(&mut timings);

        info!(
            frames,
            width = self.config.video_width,
            height = self.config.video_height,
            "Overlay complete"
        );
        Ok(OverlayReport {
            frames,
            still_width: still.width(),
            still_height: still.height(),
            timings,
        })
    }

    #[instrument(skip(self, video_path, bmp_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>, S: AsRef<Path>>(
        &self,
        video_path: P,
        bmp_path: Q,
        output_path: S,
    ) -> Result<OverlayReport> {
        let video_path = video_path.as_ref();
        let bmp_path = bmp_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            video = %video_path.display(),
            bmp = %bmp_path.display(),
            output = %output_path.display(),
            "Overlaying file"
        );

        let mut timings = PipelineTimings::new();

        let timer = Timer::start("load_bitmap");
        let bmp_data = {
            let _span = tracing::info_span!("read_bmp_file").entered();
            std::fs::read(bmp_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", bmp_path.display(), e))
            })?
        };
        let bitmap = self.load_bitmap(&bmp_data)?;
        timer.record(&mut timings);

        // The output is only created once nothing before the stream can fail.
        let still = self.prepare_still(&bitmap, &mut timings)?;

        let input_file = {
            let _span = tracing::info_span!("open_input_file").entered();
            File::open(video_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", video_path.display(), e))
            })?
        };

        let output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            File::create(output_path).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        let mut input = BufReader::new(input_file);
        let mut output = BufWriter::new(output_file);
        self.stream(&still, &mut input, &mut output, timings)
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: OverlayConfig) {
        self.config = config;
    }
}
