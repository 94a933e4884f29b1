//! BMP reader for uncompressed 24-bit files.
//!
//! Strips the 4-byte row padding BMP requires and normalizes top-down files (negative
//! height) to bottom-up row order, so callers always receive the packed layout described
//! on [`Bitmap`].

use tracing::debug;
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::bmp::reader::BitmapReader;
use crate::image_pipeline::bmp::types::{
    BI_RGB, BMP_MAGIC, Bitmap, BitmapFileHeader, BitmapInfoHeader, FILE_HEADER_LEN,
};

pub struct StandardBmpReader;

const SUPPORTED_BIT_COUNT: u16 = 24;

/// BMP rows are padded to a multiple of this many bytes.
const ROW_ALIGNMENT: usize = 4;

impl BitmapReader for StandardBmpReader {
    fn read_bitmap(&self, data: &[u8]) -> Result<Bitmap> {
        debug!("Decoding BMP image, {} bytes", data.len());

        let file_header = BitmapFileHeader::parse(data)?;
        if file_header.magic != BMP_MAGIC {
            return Err(ConversionError::DecodeError(format!(
                "not a BMP file (signature 0x{:04X})",
                file_header.magic
            )));
        }

        let info = BitmapInfoHeader::parse(&data[FILE_HEADER_LEN..])?;
        if info.bit_count != SUPPORTED_BIT_COUNT {
            return Err(ConversionError::UnsupportedFormat(format!(
                "{}-bit pixels, only 24-bit BGR is supported",
                info.bit_count
            )));
        }
        if info.compression != BI_RGB {
            return Err(ConversionError::UnsupportedFormat(format!(
                "compression method {}",
                info.compression
            )));
        }

        let width = info.width.unsigned_abs() as usize;
        let height = info.height.unsigned_abs() as usize;
        if info.width <= 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }
        let top_down = info.height < 0;

        let row_len = width * 3;
        let stride = row_len.div_ceil(ROW_ALIGNMENT) * ROW_ALIGNMENT;
        let needed = stride
            .checked_mul(height)
            .ok_or(ConversionError::InvalidDimensions(width, height))?;
        if info.image_size != 0 && (info.image_size as usize) < needed {
            return Err(ConversionError::DecodeError(format!(
                "declared image size {} is smaller than the {} bytes of a {}x{} image",
                info.image_size, needed, width, height
            )));
        }
        let offset = file_header.pixel_offset as usize;

        debug!(
            width, height, stride, offset, top_down,
            "Parsed BMP headers"
        );

        let pixels = data
            .get(offset..)
            .and_then(|rest| rest.get(..needed))
            .ok_or_else(|| {
                ConversionError::DecodeError(format!(
                    "pixel data truncated: need {} bytes at offset {}, file is {} bytes",
                    needed,
                    offset,
                    data.len()
                ))
            })?;

        let mut packed = Vec::with_capacity(row_len * height);
        let rows = pixels.chunks_exact(stride);
        if top_down {
            for row in rows.rev() {
                packed.extend_from_slice(&row[..row_len]);
            }
        } else {
            for row in rows {
                packed.extend_from_slice(&row[..row_len]);
            }
        }

        Ok(Bitmap::new(width, height, packed))
    }
}
