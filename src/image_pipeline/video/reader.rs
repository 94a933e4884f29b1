use std::io::Read;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::yuv::YuvImage;

pub trait FrameReader {
    /// Fills `frame` in place. Returns `Ok(false)` once the input can no longer supply a
    /// whole frame.
    fn read_frame(&self, input: &mut dyn Read, frame: &mut YuvImage) -> Result<bool>;
}
