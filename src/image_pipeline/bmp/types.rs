//! Bitmap data types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// "BM" read as a little-endian u16.
pub const BMP_MAGIC: u16 = 0x4D42;

pub const FILE_HEADER_LEN: usize = 14;

/// Size of `BITMAPINFOHEADER`; later header versions extend it.
pub const INFO_HEADER_MIN_LEN: usize = 40;

/// Uncompressed RGB.
pub const BI_RGB: u32 = 0;

/// Decoded bitmap pixels.
///
/// `data` holds packed BGR triplets, `width * 3` bytes per row with no padding, rows
/// stored bottom-up as in the BMP file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self { width, height, data }
    }

    /// Bitmap where every pixel is the same colour.
    pub fn filled(width: usize, height: usize, [r, g, b]: [u8; 3]) -> Self {
        let data = [b, g, r].repeat(width * height);
        Self { width, height, data }
    }

    /// Byte length of the packed pixel data implied by the dimensions.
    pub fn expected_len(&self) -> Option<usize> {
        self.width.checked_mul(self.height)?.checked_mul(3)
    }

    /// Checks the dimensions are non-zero and the buffer covers every pixel.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConversionError::InvalidDimensions(self.width, self.height));
        }
        let expected = self
            .expected_len()
            .ok_or(ConversionError::InvalidDimensions(self.width, self.height))?;
        if self.data.len() < expected {
            return Err(ConversionError::BufferTooSmall {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Blue, green and red samples of the pixel at `(row, col)`, rows counted bottom-up.
    #[inline]
    pub fn bgr(&self, row: usize, col: usize) -> [u8; 3] {
        let offset = (row * self.width + col) * 3;
        [self.data[offset], self.data[offset + 1], self.data[offset + 2]]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFileHeader {
    pub magic: u16,
    pub file_size: u32,
    pub pixel_offset: u32,
}

impl BitmapFileHeader {
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < FILE_HEADER_LEN {
            return Err(ConversionError::DecodeError(format!(
                "file header needs {} bytes, got {}",
                FILE_HEADER_LEN,
                data.len()
            )));
        }
        Ok(Self {
            magic: le_u16(data, 0),
            file_size: le_u32(data, 2),
            pixel_offset: le_u32(data, 10),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapInfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// Positive for bottom-up storage, negative for top-down.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    /// Declared pixel data size; zero is allowed for BI_RGB.
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl BitmapInfoHeader {
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < INFO_HEADER_MIN_LEN {
            return Err(ConversionError::DecodeError(format!(
                "info header needs {} bytes, got {}",
                INFO_HEADER_MIN_LEN,
                data.len()
            )));
        }
        let header = Self {
            header_size: le_u32(data, 0),
            width: le_u32(data, 4) as i32,
            height: le_u32(data, 8) as i32,
            planes: le_u16(data, 12),
            bit_count: le_u16(data, 14),
            compression: le_u32(data, 16),
            image_size: le_u32(data, 20),
            x_pixels_per_meter: le_u32(data, 24) as i32,
            y_pixels_per_meter: le_u32(data, 28) as i32,
            colors_used: le_u32(data, 32),
            colors_important: le_u32(data, 36),
        };
        if (header.header_size as usize) < INFO_HEADER_MIN_LEN {
            return Err(ConversionError::UnsupportedFormat(format!(
                "info header of {} bytes",
                header.header_size
            )));
        }
        Ok(header)
    }
}

fn le_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn le_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}
