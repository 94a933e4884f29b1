use std::ops::Range;

use crate::image_pipeline::bmp::Bitmap;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::yuv::color;
use crate::image_pipeline::yuv::types::{PlanesMut, YuvImage};

/// Converts the bitmap rows in `rows` (bottom-up source rows) into `image`.
///
/// Source row `j` lands on luma row `height - 1 - j`, turning the bitmap's bottom-up
/// storage into top-down planes. One chroma pair is written per 2x2 block, sampled from
/// the pixel at the block's even (row, column) corner in destination order.
pub fn convert_rows(bitmap: &Bitmap, image: &mut YuvImage, rows: Range<usize>) -> Result<()> {
    bitmap.validate()?;
    if bitmap.width != image.width() || bitmap.height != image.height() {
        return Err(ConversionError::InvalidDimensions(bitmap.width, bitmap.height));
    }
    if rows.start > rows.end || rows.end > bitmap.height {
        return Err(ConversionError::InvalidRowRange {
            start: rows.start,
            end: rows.end,
            height: bitmap.height,
        });
    }

    convert_region(bitmap, rows, image.band_mut());
    Ok(())
}

/// Row-range kernel shared by both strategies.
///
/// `planes` must cover destination rows `height - rows.end .. height - rows.start`;
/// callers validate the bitmap and the range beforehand.
pub(crate) fn convert_region(bitmap: &Bitmap, rows: Range<usize>, mut planes: PlanesMut<'_>) {
    let width = planes.width;
    let chroma_width = width / 2;
    let first_row = planes.first_row;
    let first_chroma_row = planes.first_chroma_row();

    for j in rows {
        let dst_row = bitmap.height - 1 - j;
        let y_row = &mut planes.y[(dst_row - first_row) * width..][..width];
        let chroma_row = (dst_row % 2 == 0).then(|| (dst_row / 2 - first_chroma_row) * chroma_width);

        for (i, luma) in y_row.iter_mut().enumerate() {
            let [b, g, r] = bitmap.bgr(j, i);
            *luma = color::luma(r, g, b);

            if let Some(base) = chroma_row
                && i % 2 == 0
            {
                let (u, v) = color::chroma(r, g, b);
                planes.u[base + i / 2] = u;
                planes.v[base + i / 2] = v;
            }
        }
    }
}
