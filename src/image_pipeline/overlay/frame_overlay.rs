use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::yuv::YuvImage;

/// Fails unless a `still_width x still_height` image fits inside the frame.
pub fn check_fits(
    still_width: usize,
    still_height: usize,
    frame_width: usize,
    frame_height: usize,
) -> Result<()> {
    if still_width > frame_width || still_height > frame_height {
        return Err(ConversionError::ImageTooLarge {
            image: (still_width, still_height),
            frame: (frame_width, frame_height),
        });
    }
    Ok(())
}

/// Copies `still` into the top-left corner of `frame`.
///
/// Luma is replaced over the still's full area, chroma over the matching half-size
/// region. Samples outside that area are left untouched.
pub fn overlay(frame: &mut YuvImage, still: &YuvImage) -> Result<()> {
    check_fits(still.width(), still.height(), frame.width(), frame.height())?;

    let (w, frame_w) = (still.width(), frame.width());
    let (cw, frame_cw) = (still.chroma_width(), frame.chroma_width());
    let (frame_y, frame_u, frame_v) = frame.planes_mut();

    for (src, dst) in still.y_plane().chunks_exact(w).zip(frame_y.chunks_exact_mut(frame_w)) {
        dst[..w].copy_from_slice(src);
    }

    for (src, dst) in [(still.u_plane(), frame_u), (still.v_plane(), frame_v)] {
        for (src_row, dst_row) in src.chunks_exact(cw).zip(dst.chunks_exact_mut(frame_cw)) {
            dst_row[..cw].copy_from_slice(src_row);
        }
    }

    Ok(())
}
