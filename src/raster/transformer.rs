use image::RgbaImage;

use crate::color::clear_if_near_white;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransformationSummary {
    pub width: u32,
    pub height: u32,
    pub cleared_pixels: u64,
}

impl TransformationSummary {
    pub fn total_pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Replaces every near-white pixel with transparent white. Any other pixel,
/// including its alpha, is left exactly as it was.
#[derive(Default)]
pub struct BackgroundTransformer;

impl BackgroundTransformer {
    pub fn new() -> Self {
        BackgroundTransformer
    }

    pub fn transform(&self, image: &mut RgbaImage) -> TransformationSummary {
        let cleared_pixels = image
            .pixels_mut()
            .map(clear_if_near_white)
            .filter(|cleared| *cleared)
            .count() as u64;
        TransformationSummary {
            width: image.width(),
            height: image.height(),
            cleared_pixels,
        }
    }
}
