use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::yuv::YuvImage;

pub trait FrameWriter {
    fn write_frame(&self, frame: &YuvImage, output: &mut dyn Write) -> Result<()>;
}
