use crate::image_pipeline::bmp::{BitmapReader, StandardBmpReader};
use crate::image_pipeline::bmp::types::{BitmapFileHeader, BitmapInfoHeader, FILE_HEADER_LEN};
use crate::image_pipeline::common::error::ConversionError;

/// Encodes a BMP with the given pixel rows, which are written to the file in the order
/// given (bottom row first when `height` is positive).
fn encode_bmp(width: i32, height: i32, bit_count: u16, rows: &[Vec<u8>]) -> Vec<u8> {
    let row_len = width.unsigned_abs() as usize * (bit_count as usize / 8);
    let stride = row_len.div_ceil(4) * 4;
    let pixel_offset = 54u32;
    let file_size = pixel_offset as usize + stride * rows.len();

    let mut out = Vec::with_capacity(file_size);
    out.extend(b"BM");
    out.extend((file_size as u32).to_le_bytes());
    out.extend([0u8; 4]);
    out.extend(pixel_offset.to_le_bytes());

    out.extend(40u32.to_le_bytes());
    out.extend(width.to_le_bytes());
    out.extend(height.to_le_bytes());
    out.extend(1u16.to_le_bytes());
    out.extend(bit_count.to_le_bytes());
    out.extend(0u32.to_le_bytes());
    out.extend(((stride * rows.len()) as u32).to_le_bytes());
    out.extend([0u8; 16]);

    for row in rows {
        out.extend(row);
        out.extend(vec![0xEEu8; stride - row.len()]);
    }
    out
}

#[test]
fn test_parse_headers() {
    let bytes = encode_bmp(2, 2, 24, &[vec![0; 6], vec![0; 6]]);

    let file_header = BitmapFileHeader::parse(&bytes).unwrap();
    assert_eq!(file_header.magic, 0x4D42);
    assert_eq!(file_header.pixel_offset, 54);
    assert_eq!(file_header.file_size as usize, bytes.len());

    let info = BitmapInfoHeader::parse(&bytes[FILE_HEADER_LEN..]).unwrap();
    assert_eq!(info.width, 2);
    assert_eq!(info.height, 2);
    assert_eq!(info.bit_count, 24);
    assert_eq!(info.planes, 1);
}

#[test]
fn test_row_padding_stripped() {
    // 2 pixels per row is 6 bytes, padded to 8 on disk
    let rows = vec![
        vec![1, 2, 3, 4, 5, 6],
        vec![7, 8, 9, 10, 11, 12],
    ];
    let bitmap = StandardBmpReader.read_bitmap(&encode_bmp(2, 2, 24, &rows)).unwrap();

    assert_eq!((bitmap.width, bitmap.height), (2, 2));
    assert_eq!(bitmap.data, (1..=12).collect::<Vec<u8>>());
    assert_eq!(bitmap.bgr(1, 0), [7, 8, 9]);
}

#[test]
fn test_top_down_normalized_to_bottom_up() {
    let top = vec![1, 1, 1, 1, 1, 1];
    let bottom = vec![2, 2, 2, 2, 2, 2];

    let bottom_up = StandardBmpReader
        .read_bitmap(&encode_bmp(2, 2, 24, &[bottom.clone(), top.clone()]))
        .unwrap();
    let top_down = StandardBmpReader
        .read_bitmap(&encode_bmp(2, -2, 24, &[top, bottom]))
        .unwrap();

    assert_eq!(top_down.height, 2);
    assert_eq!(top_down, bottom_up);
}

#[test]
fn test_bad_signature() {
    let mut bytes = encode_bmp(2, 2, 24, &[vec![0; 6], vec![0; 6]]);
    bytes[0] = b'X';
    let result = StandardBmpReader.read_bitmap(&bytes);
    assert!(matches!(result, Err(ConversionError::DecodeError(_))));
}

#[test]
fn test_unsupported_bit_depth() {
    let bytes = encode_bmp(2, 2, 32, &[vec![0; 8], vec![0; 8]]);
    let result = StandardBmpReader.read_bitmap(&bytes);
    assert!(matches!(result, Err(ConversionError::UnsupportedFormat(_))));
}

#[test]
fn test_compressed_rejected() {
    let mut bytes = encode_bmp(2, 2, 24, &[vec![0; 6], vec![0; 6]]);
    bytes[FILE_HEADER_LEN + 16] = 1;
    let result = StandardBmpReader.read_bitmap(&bytes);
    assert!(matches!(result, Err(ConversionError::UnsupportedFormat(_))));
}

#[test]
fn test_truncated_pixel_data() {
    let mut bytes = encode_bmp(4, 4, 24, &vec![vec![0; 12]; 4]);
    bytes.truncate(bytes.len() - 1);
    let result = StandardBmpReader.read_bitmap(&bytes);
    assert!(matches!(result, Err(ConversionError::DecodeError(_))));
}

#[test]
fn test_truncated_header() {
    let result = StandardBmpReader.read_bitmap(b"BM\x00\x00");
    assert!(matches!(result, Err(ConversionError::DecodeError(_))));
}

#[test]
fn test_zero_and_negative_width_rejected() {
    let result = StandardBmpReader.read_bitmap(&encode_bmp(0, 2, 24, &[]));
    assert!(matches!(result, Err(ConversionError::InvalidDimensions(0, 2))));

    let result = StandardBmpReader.read_bitmap(&encode_bmp(-2, 2, 24, &[]));
    assert!(matches!(result, Err(ConversionError::InvalidDimensions(2, 2))));
}

#[test]
fn test_declared_image_size_too_small() {
    // 2x2 rows are 8 bytes after padding, so the pixel data is 16 bytes
    let mut bytes = encode_bmp(2, 2, 24, &[vec![0; 6], vec![0; 6]]);
    bytes[FILE_HEADER_LEN + 20..FILE_HEADER_LEN + 24].copy_from_slice(&12u32.to_le_bytes());
    let result = StandardBmpReader.read_bitmap(&bytes);
    assert!(matches!(result, Err(ConversionError::DecodeError(_))));
}

#[test]
fn test_zero_image_size_accepted() {
    let mut bytes = encode_bmp(2, 2, 24, &[vec![1; 6], vec![2; 6]]);
    bytes[FILE_HEADER_LEN + 20..FILE_HEADER_LEN + 24].copy_from_slice(&0u32.to_le_bytes());
    let bitmap = StandardBmpReader.read_bitmap(&bytes).unwrap();
    assert_eq!(bitmap.bgr(1, 0), [2, 2, 2]);
}
