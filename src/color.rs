use image::Rgba;

/// Every one of red, green and blue must be strictly above this value for a
/// pixel to count as background.
pub const WHITE_THRESHOLD: u8 = 240;

/// The single value every background pixel is replaced with.
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Channels are compared independently, alpha is not looked at.
pub fn is_near_white(pixel: &Rgba<u8>) -> bool {
    let [red, green, blue, _] = pixel.0;
    red > WHITE_THRESHOLD && green > WHITE_THRESHOLD && blue > WHITE_THRESHOLD
}

pub fn clear_if_near_white(pixel: &mut Rgba<u8>) -> bool {
    if !is_near_white(pixel) {
        return false;
    }
    *pixel = TRANSPARENT_WHITE;
    true
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::{clear_if_near_white, is_near_white, TRANSPARENT_WHITE};

    #[test]
    fn pure_white_is_near_white() {
        assert!(is_near_white(&Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn just_above_threshold_is_near_white() {
        assert!(is_near_white(&Rgba([241, 241, 241, 255])));
    }

    #[test]
    fn threshold_itself_is_not_near_white() {
        assert!(!is_near_white(&Rgba([240, 240, 240, 255])));
        assert!(!is_near_white(&Rgba([255, 255, 240, 255])));
    }

    #[test]
    fn each_channel_is_checked() {
        assert!(!is_near_white(&Rgba([0, 255, 255, 255])));
        assert!(!is_near_white(&Rgba([255, 0, 255, 255])));
        assert!(!is_near_white(&Rgba([255, 255, 0, 255])));
    }

    #[test]
    fn alpha_does_not_matter() {
        assert!(is_near_white(&Rgba([250, 250, 250, 0])));
        assert!(is_near_white(&Rgba([250, 250, 250, 17])));
    }

    #[test]
    fn clearing_near_white_pixel() {
        let mut pixel = Rgba([245, 250, 255, 200]);
        assert!(clear_if_near_white(&mut pixel));
        assert_eq!(pixel, TRANSPARENT_WHITE);
    }

    #[test]
    fn clearing_keeps_other_pixels_untouched() {
        let mut pixel = Rgba([12, 34, 56, 78]);
        assert!(!clear_if_near_white(&mut pixel));
        assert_eq!(pixel, Rgba([12, 34, 56, 78]));
    }

    #[test]
    fn transparent_white_is_a_fixed_point() {
        let mut pixel = TRANSPARENT_WHITE;
        assert!(clear_if_near_white(&mut pixel));
        assert_eq!(pixel, TRANSPARENT_WHITE);
    }
}
