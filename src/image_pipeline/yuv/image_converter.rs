use std::ops::Range;

use tracing::{debug, info, instrument};

use crate::image_pipeline::bmp::Bitmap;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::yuv::plane_converter::convert_region;
use crate::image_pipeline::yuv::types::YuvImage;

/// Turns a whole bitmap into a freshly allocated YUV 4:2:0 image.
pub trait YuvConverter {
    fn convert(&self, bitmap: &Bitmap) -> Result<YuvImage>;
}

/// Converts every row on the calling thread.
pub struct SequentialConverter;

impl YuvConverter for SequentialConverter {
    #[instrument(skip_all, fields(width = bitmap.width, height = bitmap.height))]
    fn convert(&self, bitmap: &Bitmap) -> Result<YuvImage> {
        let mut image = prepare(bitmap)?;
        convert_region(bitmap, 0..bitmap.height, image.band_mut());
        Ok(image)
    }
}

/// Splits the rows into contiguous bands and converts them on a rayon pool.
///
/// Output is identical to [`SequentialConverter`]; bands never share a luma or chroma
/// row, so workers write without synchronization.
pub struct ParallelConverter {
    workers: Option<usize>,
}

impl ParallelConverter {
    /// `None` uses the available hardware parallelism.
    pub fn new(workers: Option<usize>) -> Self {
        Self { workers }
    }

    pub fn workers(&self) -> usize {
        self.workers
            .or_else(|| std::thread::available_parallelism().ok().map(|n| n.get()))
            .unwrap_or(1)
            .max(1)
    }
}

impl Default for ParallelConverter {
    fn default() -> Self {
        Self::new(None)
    }
}

impl YuvConverter for ParallelConverter {
    #[instrument(skip_all, fields(width = bitmap.width, height = bitmap.height))]
    fn convert(&self, bitmap: &Bitmap) -> Result<YuvImage> {
        let mut image = prepare(bitmap)?;
        let height = bitmap.height;
        let ranges = row_ranges(height, self.workers());
        info!("Converting {} rows across {} workers", height, ranges.len());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(ranges.len())
            .build()
            .map_err(|e| ConversionError::ThreadPool(format!("failed to build rayon thread pool: {e}")))?;

        // Source ranges run bottom-up, so walk them in reverse to carve destination
        // bands top-down.
        let mut jobs = Vec::with_capacity(ranges.len());
        let mut rest = image.band_mut();
        for rows in ranges.into_iter().rev() {
            let (band, tail) = rest.split_at_row(height - rows.start);
            debug!(start = rows.start, end = rows.end, first_row = band.first_row, "Queued band");
            jobs.push((rows, band));
            rest = tail;
        }
        debug_assert!(rest.y.is_empty() && rest.u.is_empty());

        pool.scope(|scope| {
            for (rows, band) in jobs {
                scope.spawn(move |_| convert_region(bitmap, rows, band));
            }
        });

        Ok(image)
    }
}

/// Partitions `0..height` into at most `workers` contiguous ranges.
///
/// Every boundary is even and the last range absorbs the remainder. The worker count is
/// capped at `height / 2` so no range is empty.
pub fn row_ranges(height: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.clamp(1, (height / 2).max(1));
    let rows_per_worker = (height / workers) & !1;

    (0..workers)
        .map(|w| {
            let start = w * rows_per_worker;
            let end = if w == workers - 1 {
                height
            } else {
                start + rows_per_worker
            };
            start..end
        })
        .collect()
}

fn prepare(bitmap: &Bitmap) -> Result<YuvImage> {
    bitmap.validate()?;
    YuvImage::new(bitmap.width, bitmap.height)
}
