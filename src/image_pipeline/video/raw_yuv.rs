use std::io::{ErrorKind, Read, Write};

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::video::reader::FrameReader;
use crate::image_pipeline::video::writer::FrameWriter;
use crate::image_pipeline::yuv::YuvImage;

/// Reads frames plane by plane: Y, then U, then V.
///
/// A plane that cannot be filled completely ends the stream; whatever partial data was
/// read is discarded.
pub struct RawYuvReader;

impl FrameReader for RawYuvReader {
    fn read_frame(&self, input: &mut dyn Read, frame: &mut YuvImage) -> Result<bool> {
        let (y, u, v) = frame.planes_mut();
        for plane in [y, u, v] {
            match input.read_exact(plane) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(false),
                Err(e) => return Err(e.into()),
            }
        }
        Ok(true)
    }
}

pub struct RawYuvWriter;

impl FrameWriter for RawYuvWriter {
    fn write_frame(&self, frame: &YuvImage, output: &mut dyn Write) -> Result<()> {
        output.write_all(frame.y_plane())?;
        output.write_all(frame.u_plane())?;
        output.write_all(frame.v_plane())?;
        Ok(())
    }
}
