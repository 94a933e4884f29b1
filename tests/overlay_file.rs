use std::fs;

use bmp_yuv_overlay::image_pipeline::{
    Bitmap, BmpOverlayPipeline, ConversionError, ConversionStrategy, OverlayConfig, Result,
    YuvConverter, YuvImage,
};
use tempfile::tempdir;

/// 24-bit bottom-up BMP with every pixel set to `bgr`.
fn solid_bmp(width: usize, height: usize, bgr: [u8; 3]) -> Vec<u8> {
    let stride = (width * 3).div_ceil(4) * 4;
    let pixel_bytes = stride * height;

    let mut out = Vec::new();
    out.extend(b"BM");
    out.extend(((54 + pixel_bytes) as u32).to_le_bytes());
    out.extend([0u8; 4]);
    out.extend(54u32.to_le_bytes());
    out.extend(40u32.to_le_bytes());
    out.extend((width as i32).to_le_bytes());
    out.extend((height as i32).to_le_bytes());
    out.extend(1u16.to_le_bytes());
    out.extend(24u16.to_le_bytes());
    out.extend(0u32.to_le_bytes());
    out.extend(0u32.to_le_bytes());
    out.extend([0u8; 16]);
    for _ in 0..height {
        for _ in 0..width {
            out.extend(bgr);
        }
        out.extend(vec![0u8; stride - width * 3]);
    }
    out
}

fn white_frames(width: usize, height: usize, count: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for _ in 0..count {
        out.extend(vec![235u8; width * height]);
        out.extend(vec![128u8; width * height / 2]);
    }
    out
}

#[test]
fn test_overlay_files_end_to_end() {
    let dir = tempdir().unwrap();
    let video = dir.path().join("input.yuv");
    let bmp = dir.path().join("logo.bmp");
    let output = dir.path().join("output.yuv");

    let (width, height) = (6, 4);
    let frame_len = width * height * 3 / 2;
    let mut input = white_frames(width, height, 3);
    input.extend([1u8; 7]);
    fs::write(&video, &input).unwrap();
    fs::write(&bmp, solid_bmp(2, 2, [0, 0, 0])).unwrap();

    let config = OverlayConfig::builder().video_size(width, height).build();
    let report = BmpOverlayPipeline::new(config)
        .convert_file(&video, &bmp, &output)
        .unwrap();

    assert_eq!(report.frames, 3);
    let written = fs::read(&output).unwrap();
    assert_eq!(written.len(), 3 * frame_len);

    for frame in written.chunks_exact(frame_len) {
        let luma = &frame[..width * height];
        for row in 0..height {
            for col in 0..width {
                let expected = if row < 2 && col < 2 { 16 } else { 235 };
                assert_eq!(luma[row * width + col], expected);
            }
        }
        assert!(frame[width * height..].iter().all(|&c| c == 128));
    }
}

#[test]
fn test_sequential_and_parallel_files_match() {
    let dir = tempdir().unwrap();
    let video = dir.path().join("input.yuv");
    let bmp = dir.path().join("logo.bmp");
    fs::write(&video, white_frames(16, 12, 2)).unwrap();
    fs::write(&bmp, solid_bmp(10, 8, [200, 40, 90])).unwrap();

    let mut outputs = Vec::new();
    for strategy in [ConversionStrategy::Sequential, ConversionStrategy::Parallel] {
        let output = dir.path().join(format!("{:?}.yuv", strategy));
        let config = OverlayConfig::builder()
            .video_size(16, 12)
            .strategy(strategy)
            .threads(Some(4))
            .build();
        BmpOverlayPipeline::new(config)
            .convert_file(&video, &bmp, &output)
            .unwrap();
        outputs.push(fs::read(&output).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_missing_video_is_input_error() {
    let dir = tempdir().unwrap();
    let bmp = dir.path().join("logo.bmp");
    fs::write(&bmp, solid_bmp(2, 2, [0, 0, 0])).unwrap();

    let config = OverlayConfig::builder().video_size(4, 4).build();
    let result = BmpOverlayPipeline::new(config).convert_file(
        dir.path().join("missing.yuv"),
        &bmp,
        dir.path().join("out.yuv"),
    );

    assert!(matches!(result, Err(ConversionError::InputReadError(_))));
}

#[test]
fn test_oversized_bmp_creates_no_output() {
    let dir = tempdir().unwrap();
    let video = dir.path().join("input.yuv");
    let bmp = dir.path().join("logo.bmp");
    let output = dir.path().join("out.yuv");
    fs::write(&video, white_frames(4, 4, 1)).unwrap();
    fs::write(&bmp, solid_bmp(8, 2, [0, 0, 0])).unwrap();

    let config = OverlayConfig::builder().video_size(4, 4).build();
    let result = BmpOverlayPipeline::new(config).convert_file(&video, &bmp, &output);

    assert!(matches!(result, Err(ConversionError::ImageTooLarge { .. })));
    assert!(!output.exists());
}

struct FailingConverter;

impl YuvConverter for FailingConverter {
    fn convert(&self, _bitmap: &Bitmap) -> Result<YuvImage> {
        Err(ConversionError::ThreadPool("no threads available".to_string()))
    }
}

#[test]
fn test_failed_still_conversion_creates_no_output() {
    let dir = tempdir().unwrap();
    let video = dir.path().join("input.yuv");
    let bmp = dir.path().join("logo.bmp");
    let output = dir.path().join("out.yuv");
    fs::write(&video, white_frames(4, 4, 1)).unwrap();
    fs::write(&bmp, solid_bmp(2, 2, [0, 0, 0])).unwrap();

    let config = OverlayConfig::builder().video_size(4, 4).build();
    let result = BmpOverlayPipeline::new(config)
        .with_converter(FailingConverter)
        .convert_file(&video, &bmp, &output);

    assert!(matches!(result, Err(ConversionError::ThreadPool(_))));
    assert!(!output.exists());
}
