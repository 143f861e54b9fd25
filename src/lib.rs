#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod error;
pub mod image;
pub mod infer;
pub mod service;

// “Expert” modules – still public, but considered unstable internals.
pub mod angle;
pub mod compositor;
pub mod edges;
pub mod filters;
pub mod hough;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{detect_and_composite, Detection, DetectorParams, HandLineDetector};
pub use crate::error::{ImageProcessingError, ModelInferenceError, PresageError};
pub use crate::segments::{merge_similar_lines, LineSegment};
pub use crate::service::{PresageService, Reading};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use presage::prelude::*;
///
/// # fn main() {
/// let photo = ColorImageU8::new(640, 480);
/// let detector = HandLineDetector::new(DetectorParams::default());
/// match detector.detect(&photo) {
///     Ok(annotated) => println!("{}x{}", annotated.w, annotated.h),
///     Err(err) => eprintln!("{err}"),
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::compositor::composite_lines;
    pub use crate::detector::{detect_and_composite, DetectorParams, HandLineDetector};
    pub use crate::image::{ColorImageU8, GrayImageU8};
    pub use crate::segments::{extract_lines, merge_similar_lines, LineSegment};
}
