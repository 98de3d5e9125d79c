use std::io::Write;

use image::{codecs::png::PngEncoder, RgbaImage};

use super::super::ImageWriter;
use crate::Error;

/// Writes an RGBA buffer as 8-bit RGBA PNG, no matter what the destination is called.
pub struct PngImageWriter<'a, T: Write> {
    writer: T,
    image: &'a RgbaImage,
}

impl<'a, T: Write> PngImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a RgbaImage) -> Self {
        Self { writer, image }
    }
}

impl<T: Write> ImageWriter for PngImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        let encoder = PngEncoder::new(&mut self.writer);
        self.image
            .write_with_encoder(encoder)
            .map_err(Error::FailedToEncodeImage)?;
        self.writer.flush().map_err(Error::FailedToFlushOutputFile)
    }
}
