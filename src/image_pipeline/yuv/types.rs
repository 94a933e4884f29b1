//! Planar YUV 4:2:0 image types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Planar YUV 4:2:0 image. Used both for the converted still and for the reusable
/// frame buffer of the stream loop.
#[derive(Debug, Clone, PartialEq, Eq)]
///
/// Only [`YuvImage::new`] and [`YuvImage::filled`] build one, so the dimensions are always
/// non-zero and even and every plane has its exact length.
pub struct YuvImage {
    width: usize,
    height: usize,
    /// `width * height` luma samples, top row first
    y_plane: Vec<u8>,
    /// `width/2 * height/2` samples
    u_plane: Vec<u8>,
    v_plane: Vec<u8>,
}

impl YuvImage {
    /// Allocates zeroed planes. Both dimensions must be non-zero and even.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        let luma_len = width
            .checked_mul(height)
            .ok_or(ConversionError::InvalidDimensions(width, height))?;
        Ok(Self {
            width,
            height,
            y_plane: vec![0; luma_len],
            u_plane: vec![0; luma_len / 4],
            v_plane: vec![0; luma_len / 4],
        })
    }

    /// Image with every sample of each plane set to the given value.
    pub fn filled(width: usize, height: usize, y: u8, u: u8, v: u8) -> Result<Self> {
        let mut image = Self::new(width, height)?;
        image.y_plane.fill(y);
        image.u_plane.fill(u);
        image.v_plane.fill(v);
        Ok(image)
    }

    pub fn check_dimensions(width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }
        if width % 2 != 0 || height % 2 != 0 {
            return Err(ConversionError::OddDimensions(width, height));
        }
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn y_plane(&self) -> &[u8] {
        &self.y_plane
    }

    pub fn u_plane(&self) -> &[u8] {
        &self.u_plane
    }

    pub fn v_plane(&self) -> &[u8] {
        &self.v_plane
    }

    /// Mutable `(y, u, v)` planes. The slices are fixed-length, so the layout cannot change.
    pub fn planes_mut(&mut self) -> (&mut [u8], &mut [u8], &mut [u8]) {
        (&mut self.y_plane, &mut self.u_plane, &mut self.v_plane)
    }

    pub fn luma_len(&self) -> usize {
        self.width * self.height
    }

    pub fn chroma_len(&self) -> usize {
        self.luma_len() / 4
    }

    pub fn chroma_width(&self) -> usize {
        self.width / 2
    }

    /// Total bytes of one serialized frame.
    pub fn frame_len(&self) -> usize {
        self.luma_len() + 2 * self.chroma_len()
    }

    /// The whole image as a single band for the row-range kernel.
    pub(crate) fn band_mut(&mut self) -> PlanesMut<'_> {
        PlanesMut {
            width: self.width,
            first_row: 0,
            y: &mut self.y_plane,
            u: &mut self.u_plane,
            v: &mut self.v_plane,
        }
    }
}

/// Mutable view over a horizontal band of a [`YuvImage`], starting at luma row
/// `first_row`. Bands produced by [`PlanesMut::split_at_row`] never share a sample.
#[derive(Debug)]
pub(crate) struct PlanesMut<'a> {
    pub width: usize,
    pub first_row: usize,
    pub y: &'a mut [u8],
    pub u: &'a mut [u8],
    pub v: &'a mut [u8],
}

impl<'a> PlanesMut<'a> {
    /// First chroma row covered by this band.
    pub fn first_chroma_row(&self) -> usize {
        self.first_row.div_ceil(2)
    }

    /// Splits into the rows above `row` and the rows from `row` down.
    ///
    /// `row` is an absolute luma row inside the band and must be even, as must
    /// `first_row`, so each chroma row lands in exactly one half.
    pub fn split_at_row(self, row: usize) -> (PlanesMut<'a>, PlanesMut<'a>) {
        assert!(
            row % 2 == 0 && self.first_row % 2 == 0,
            "band split at odd row {row} (band starts at {})",
            self.first_row
        );
        assert!(row >= self.first_row, "split row {row} above band start {}", self.first_row);
        let rel = row - self.first_row;
        let chroma_at = (rel / 2) * (self.width / 2);

        let (y_top, y_bottom) = self.y.split_at_mut(rel * self.width);
        let (u_top, u_bottom) = self.u.split_at_mut(chroma_at);
        let (v_top, v_bottom) = self.v.split_at_mut(chroma_at);

        (
            PlanesMut {
                width: self.width,
                first_row: self.first_row,
                y: y_top,
                u: u_top,
                v: v_top,
            },
            PlanesMut {
                width: self.width,
                first_row: row,
                y: y_bottom,
                u: u_bottom,
                v: v_bottom,
            },
        )
    }
}
