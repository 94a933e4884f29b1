use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::bmp::types::Bitmap;

pub trait BitmapReader {
    fn read_bitmap(&self, data: &[u8]) -> Result<Bitmap>;
}
