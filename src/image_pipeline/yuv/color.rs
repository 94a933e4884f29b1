//! Per-pixel BT.601 RGB to YUV conversion.
//!
//! Computed in `f64` so values just below an integer are not rounded up before the
//! clamp truncates them.

/// Offset added to luma, mapping black to 16.
const LUMA_OFFSET: f64 = 16.0;

/// Chroma midpoint for neutral grey.
const CHROMA_OFFSET: f64 = 128.0;

/// Clamps to the 8-bit range. Values at or below 0 become 0, values at or above 255
/// become 255, anything in between is truncated toward zero.
#[inline]
pub fn clamp_sample(value: f64) -> u8 {
    if value <= 0.0 {
        0
    } else if value >= 255.0 {
        255
    } else {
        value as u8
    }
}

#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    clamp_sample(0.299 * r + 0.587 * g + 0.114 * b + LUMA_OFFSET)
}

/// Returns `(u, v)`.
#[inline]
pub fn chroma(r: u8, g: u8, b: u8) -> (u8, u8) {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    let u = -0.14713 * r - 0.28886 * g + 0.436 * b + CHROMA_OFFSET;
    let v = 0.615 * r - 0.51499 * g - 0.10001 * b + CHROMA_OFFSET;
    (clamp_sample(u), clamp_sample(v))
}
