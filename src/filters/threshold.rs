//! Adaptive thresholding with a Gaussian-weighted local mean.
use super::gaussian::gaussian_blur;
use crate::image::GrayImageU8;

/// Inverted binary adaptive threshold.
///
/// The per-pixel threshold is the Gaussian-weighted mean of the
/// `block_size × block_size` neighborhood minus `offset`. Pixels brighter
/// than their threshold become 0, everything else 255: dark creases on a
/// bright palm come out white.
pub fn adaptive_threshold_inv(src: &GrayImageU8, block_size: usize, offset: f32) -> GrayImageU8 {
    let mean = gaussian_blur(src, block_size);
    let mut out = GrayImageU8::new(src.w, src.h);
    for (i, dst) in out.data.iter_mut().enumerate() {
        let threshold = mean.data[i] as f32 - offset;
        *dst = if src.data[i] as f32 > threshold { 0 } else { 255 };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_image_goes_dark() {
        // src == mean everywhere, so src > mean - offset holds and the
        // inverted output is all zeros.
        let img = GrayImageU8::from_raw(32, 32, vec![120u8; 32 * 32]).unwrap();
        let bin = adaptive_threshold_inv(&img, 15, 3.0);
        assert!(bin.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn dark_stroke_on_bright_background_becomes_white() {
        let mut img = GrayImageU8::from_raw(48, 48, vec![200u8; 48 * 48]).unwrap();
        for x in 8..40 {
            img.set(x, 24, 40);
            img.set(x, 25, 40);
        }
        let bin = adaptive_threshold_inv(&img, 15, 3.0);
        assert_eq!(bin.get(20, 24), 255, "stroke center should be white");
        assert_eq!(bin.get(20, 5), 0, "far background should be black");
    }

    #[test]
    fn output_is_strictly_binary() {
        let mut img = GrayImageU8::new(20, 20);
        for (i, v) in img.data.iter_mut().enumerate() {
            *v = (i * 7 % 256) as u8;
        }
        let bin = adaptive_threshold_inv(&img, 15, 3.0);
        assert!(bin.data.iter().all(|&v| v == 0 || v == 255));
    }
}
