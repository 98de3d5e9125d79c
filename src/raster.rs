use image::RgbaImage;

pub mod transformer;
pub mod reader {
    pub mod decoder;
}
pub mod writer {
    pub mod png;
}

/// Produces an 8-bit RGBA buffer, whatever color mode the source uses.
pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<RgbaImage>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}
