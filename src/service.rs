//! Orchestration of the full reading: gate → mask → detect → narrate.
//!
//! [`PresageService`] is the seam a serving layer calls. It owns the
//! palm gate, an optional hand segmenter, the line detector and the
//! fortune teller; every stage failure propagates immediately with its
//! own context and is meant to be surfaced as the request's result, not
//! to crash the process.
use crate::detector::HandLineDetector;
use crate::error::{ImageProcessingError, PresageError};
use crate::image::io::encode_color_png;
use crate::image::ColorImageU8;
use crate::infer::{apply_mask, FortuneTeller, HandSegmenter, PalmGate};
use log::debug;

/// Outcome of one successful reading.
pub struct Reading {
    /// Annotated image in display (RGB) channel order.
    pub annotated_rgb: ColorImageU8,
    /// The fortune-telling narrative for the annotated image.
    pub narrative: String,
}

/// The full analyze flow over swappable capabilities.
pub struct PresageService {
    gate: PalmGate,
    segmenter: Option<Box<dyn HandSegmenter>>,
    detector: HandLineDetector,
    teller: FortuneTeller,
}

impl PresageService {
    pub fn new(
        gate: PalmGate,
        segmenter: Option<Box<dyn HandSegmenter>>,
        detector: HandLineDetector,
        teller: FortuneTeller,
    ) -> Self {
        Self {
            gate,
            segmenter,
            detector,
            teller,
        }
    }

    /// Run the whole pipeline on a BGR photo.
    pub fn analyze(&self, image: &ColorImageU8) -> Result<Reading, PresageError> {
        let photo_png = encode_color_png(&image.swap_channels())
            .map_err(|reason| ImageProcessingError::new("encode", reason))?;

        if !self.gate.contains_palm(&photo_png)? {
            return Err(PresageError::NotAPalm);
        }

        let working = match &self.segmenter {
            Some(segmenter) => {
                debug!("PresageService::analyze masking via {}", segmenter.name());
                let mask = segmenter.segment(image)?;
                apply_mask(image, &mask)?
            }
            None => image.clone(),
        };

        let annotated_rgb = self.detector.detect(&working)?;
        let annotated_png = encode_color_png(&annotated_rgb)
            .map_err(|reason| ImageProcessingError::new("encode", reason))?;
        let narrative = self.teller.narrate(&annotated_png)?;

        Ok(Reading {
            annotated_rgb,
            narrative,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelInferenceError;
    use crate::image::GrayImageU8;
    use crate::infer::VisionCapability;

    struct CannedReply(&'static str);

    impl VisionCapability for CannedReply {
        fn infer(&self, _image_png: &[u8]) -> Result<String, ModelInferenceError> {
            Ok(self.0.to_string())
        }

        fn name(&self) -> &'static str {
            "canned"
        }
    }

    struct FullMask;

    impl HandSegmenter for FullMask {
        fn segment(&self, image: &ColorImageU8) -> Result<GrayImageU8, ModelInferenceError> {
            Ok(GrayImageU8::from_raw(
                image.w,
                image.h,
                vec![255u8; image.w * image.h],
            )
            .expect("mask buffer"))
        }

        fn name(&self) -> &'static str {
            "full-mask"
        }
    }

    fn service(gate_reply: &'static str, segmenter: Option<Box<dyn HandSegmenter>>) -> PresageService {
        PresageService::new(
            PalmGate::over(Box::new(CannedReply(gate_reply))),
            segmenter,
            HandLineDetector::default(),
            FortuneTeller::over(Box::new(CannedReply("A bright future."))),
        )
    }

    #[test]
    fn non_palm_photos_are_rejected_before_detection() {
        let svc = service("No", None);
        let img = ColorImageU8::new(32, 32);
        assert!(matches!(svc.analyze(&img), Err(PresageError::NotAPalm)));
    }

    #[test]
    fn full_flow_produces_a_reading() {
        let svc = service("Yes", Some(Box::new(FullMask)));
        let img = ColorImageU8::new(48, 36);
        let reading = svc.analyze(&img).unwrap();
        assert_eq!(
            (reading.annotated_rgb.w, reading.annotated_rgb.h),
            (48, 36)
        );
        assert_eq!(reading.narrative, "A bright future.");
    }
}
