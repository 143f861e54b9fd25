//! Opaque hand-segmentation boundary and the masking contract.
//!
//! The segmentation model itself is an external capability; this module
//! only fixes the contract: a same-size mask where nonzero marks hand
//! pixels, and a helper that replaces everything outside the mask with
//! white before the image reaches the line detector.
use crate::error::{ImageProcessingError, ModelInferenceError};
use crate::image::{ColorImageU8, GrayImageU8};

/// Produces a same-size mask for the hand region of a photo.
pub trait HandSegmenter {
    /// Nonzero mask pixels mark the hand surface.
    fn segment(&self, image: &ColorImageU8) -> Result<GrayImageU8, ModelInferenceError>;

    /// Capability name for logging.
    fn name(&self) -> &'static str;
}

/// Replace pixels outside the mask with white.
pub fn apply_mask(
    image: &ColorImageU8,
    mask: &GrayImageU8,
) -> Result<ColorImageU8, ImageProcessingError> {
    if image.w != mask.w || image.h != mask.h {
        return Err(ImageProcessingError::new(
            "mask",
            format!(
                "mask {}x{} does not match image {}x{}",
                mask.w, mask.h, image.w, image.h
            ),
        ));
    }
    let mut out = image.clone();
    for (px, &m) in out.data.chunks_exact_mut(3).zip(mask.data.iter()) {
        if m == 0 {
            px.copy_from_slice(&[255, 255, 255]);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_becomes_white_and_hand_survives() {
        let mut img = ColorImageU8::new(4, 2);
        img.set(1, 0, [10, 20, 30]);
        img.set(2, 1, [40, 50, 60]);
        let mut mask = GrayImageU8::new(4, 2);
        mask.set(1, 0, 255);

        let out = apply_mask(&img, &mask).unwrap();
        assert_eq!(out.get(1, 0), [10, 20, 30]);
        assert_eq!(out.get(2, 1), [255, 255, 255]);
        assert_eq!(out.get(0, 0), [255, 255, 255]);
    }

    #[test]
    fn size_mismatch_is_an_error() {
        let img = ColorImageU8::new(4, 4);
        let mask = GrayImageU8::new(4, 3);
        let err = apply_mask(&img, &mask).unwrap_err();
        assert_eq!(err.stage, "mask");
    }
}
