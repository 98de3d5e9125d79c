use std::io::{BufRead, Seek};

use image::RgbaImage;

use super::super::ImageReader;
use crate::Error;

/// Decodes any raster format the `image` crate was built with. The format is
/// sniffed from the leading bytes, file extensions play no role.
pub struct DecodingImageReader<R: BufRead + Seek> {
    reader: R,
}

impl<R: BufRead + Seek> DecodingImageReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead + Seek> ImageReader for DecodingImageReader<R> {
    fn read_image(&mut self) -> crate::Result<RgbaImage> {
        let decoder = image::ImageReader::new(&mut self.reader)
            .with_guessed_format()
            .map_err(Error::FailedToDetectImageFormat)?;
        log::debug!("Detected input format: {:?}", decoder.format());
        let image = decoder.decode().map_err(Error::FailedToDecodeImage)?;
        log::debug!("Source color type: {:?}", image.color());
        // missing alpha becomes 255
        Ok(image.into_rgba8())
    }
}
