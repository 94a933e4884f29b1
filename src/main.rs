use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use bmp_yuv_overlay::image_pipeline::{BmpOverlayPipeline, ConversionStrategy, OverlayConfig};
use bmp_yuv_overlay::logger;

use tracing::info;

/// Overlay BMP on VIDEO with video params WIDTHxHEIGHT and write the result to OUTPUT.
#[derive(Parser, Debug)]
#[command(name = "bmp_yuv_overlay", version)]
struct Cli {
    /// Raw planar YUV 4:2:0 input video.
    video: PathBuf,

    /// Video frame width in pixels.
    width: usize,

    /// Video frame height in pixels.
    height: usize,

    /// 24-bit BMP to overlay at the top-left corner.
    bmp: PathBuf,

    /// Output video path.
    output: PathBuf,

    /// Convert the still on a single thread.
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// Override the worker count used for conversion.
    #[arg(long, conflicts_with = "sequential")]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init();

    info!("Starting bmp_yuv_overlay...");

    let config = OverlayConfig::builder()
        .video_size(cli.width, cli.height)
        .strategy(if cli.sequential {
            ConversionStrategy::Sequential
        } else {
            ConversionStrategy::Parallel
        })
        .threads(cli.threads)
        .build();
    let pipeline = BmpOverlayPipeline::new(config);

    info!(
        "Video: {}x{}, conversion: {:?}",
        pipeline.config().video_width,
        pipeline.config().video_height,
        pipeline.config().strategy
    );

    let report = pipeline
        .convert_file(&cli.video, &cli.bmp, &cli.output)
        .with_context(|| format!("failed to overlay {} on {}", cli.bmp.display(), cli.video.display()))?;

    info!(
        "Wrote {} frames with {}x{} overlay to {}",
        report.frames,
        report.still_width,
        report.still_height,
        cli.output.display()
    );
    report.timings.log_summary();

    Ok(())
}
