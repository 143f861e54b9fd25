//! End-to-end palm-line detection: extract → merge → composite.
//!
//! The [`HandLineDetector`] exposes a simple API: feed a BGR color image
//! and get back the annotated RGB image, optionally with a serializable
//! trace of per-stage timings and counts.
//!
//! Typical usage:
//! ```no_run
//! use presage::{DetectorParams, HandLineDetector};
//! use presage::image::ColorImageU8;
//!
//! # fn example(photo: ColorImageU8) {
//! let detector = HandLineDetector::new(DetectorParams::default());
//! match detector.detect(&photo) {
//!     Ok(annotated) => println!("{}x{}", annotated.w, annotated.h),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # }
//! ```
use super::params::DetectorParams;
use crate::compositor::composite_lines;
use crate::error::ImageProcessingError;
use crate::image::{ColorImageU8, GrayImageU8};
use crate::segments::{extract_lines, merge_similar_lines, LineSegment, ScaleStats};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Shape of the processed input.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Wall-clock cost of each stage in milliseconds.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct TimingBreakdown {
    pub extract_ms: f64,
    pub merge_ms: f64,
    pub composite_ms: f64,
    pub total_ms: f64,
}

/// Serializable record of one detection run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    /// Per-scale segment counts and timings from the extractor.
    pub scales: Vec<ScaleStats>,
    /// Segments pooled across scales before merging.
    pub raw_segments: usize,
    /// Representative segments after merging.
    pub merged_segments: usize,
    /// The merged lines themselves.
    pub merged: Vec<LineSegment>,
    pub timings: TimingBreakdown,
}

/// Full result of a traced detection run.
#[derive(Clone, Debug)]
pub struct Detection {
    /// Annotated image in display (RGB) channel order.
    pub annotated: ColorImageU8,
    /// Edge map of the last extraction scale.
    pub edge_map: GrayImageU8,
    /// Merged representative segments.
    pub merged: Vec<LineSegment>,
    pub trace: PipelineTrace,
}

/// Palm-line detector: stateless, one configuration per instance.
#[derive(Clone, Debug, Default)]
pub struct HandLineDetector {
    params: DetectorParams,
}

impl HandLineDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    /// Borrow the active parameters.
    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Run detection and return only the annotated RGB image.
    pub fn detect(&self, image: &ColorImageU8) -> Result<ColorImageU8, ImageProcessingError> {
        Ok(self.detect_with_trace(image)?.annotated)
    }

    /// Run detection and return the annotated image together with the
    /// edge map, the merged lines and a serializable trace.
    pub fn detect_with_trace(
        &self,
        image: &ColorImageU8,
    ) -> Result<Detection, ImageProcessingError> {
        let total_start = Instant::now();
        debug!(
            "HandLineDetector::detect start w={} h={}",
            image.w, image.h
        );

        let extract_start = Instant::now();
        let extraction = extract_lines(image, &self.params.extractor)?;
        let extract_ms = extract_start.elapsed().as_secs_f64() * 1000.0;

        let merge_start = Instant::now();
        let merged = merge_similar_lines(
            &extraction.segments,
            self.params.angle_threshold_deg,
            self.params.distance_threshold_px,
        );
        let merge_ms = merge_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "HandLineDetector::detect segments raw={} merged={}",
            extraction.segments.len(),
            merged.len()
        );

        let composite_start = Instant::now();
        let annotated = composite_lines(image, &merged);
        let composite_ms = composite_start.elapsed().as_secs_f64() * 1000.0;

        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!("HandLineDetector::detect done total_ms={total_ms:.3}");

        let trace = PipelineTrace {
            input: InputDescriptor {
                width: image.w,
                height: image.h,
            },
            scales: extraction.scales,
            raw_segments: extraction.segments.len(),
            merged_segments: merged.len(),
            merged: merged.clone(),
            timings: TimingBreakdown {
                extract_ms,
                merge_ms,
                composite_ms,
                total_ms,
            },
        };

        Ok(Detection {
            annotated,
            edge_map: extraction.edge_map,
            merged,
            trace,
        })
    }
}

/// Convenience entry point with default parameters: raw photo in,
/// annotated display-order image out.
pub fn detect_and_composite(
    image: &ColorImageU8,
) -> Result<ColorImageU8, ImageProcessingError> {
    HandLineDetector::default().detect(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_image_runs_through_with_no_lines() {
        let img = ColorImageU8::new(64, 48);
        let detection = HandLineDetector::default().detect_with_trace(&img).unwrap();
        assert_eq!(detection.trace.raw_segments, 0);
        assert_eq!(detection.trace.merged_segments, 0);
        assert_eq!((detection.annotated.w, detection.annotated.h), (64, 48));
        assert_eq!((detection.edge_map.w, detection.edge_map.h), (64, 48));
    }

    #[test]
    fn degenerate_input_propagates_the_stage_error() {
        let img = ColorImageU8::new(0, 0);
        let err = HandLineDetector::default().detect(&img).unwrap_err();
        assert_eq!(err.stage, "extract");
    }

    #[test]
    fn trace_serializes_to_json() {
        let img = ColorImageU8::new(32, 32);
        let detection = HandLineDetector::default().detect_with_trace(&img).unwrap();
        let json = serde_json::to_string(&detection.trace).unwrap();
        assert!(json.contains("\"raw_segments\":0"));
    }
}
