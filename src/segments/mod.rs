//! Line segments: extraction from a color image and merging of
//! near-duplicates.
//!
//! The extractor runs a multi-scale preprocessing chain (bilateral →
//! Gaussian → adaptive threshold → morphology → Canny → probabilistic
//! Hough) and pools the surviving segments across scales. The merger
//! collapses segments with similar angle and nearby endpoints into
//! averaged representative lines.

mod extractor;
mod merge;
mod types;

pub use extractor::{extract_lines, Extraction, ExtractorParams, ScaleStats};
pub use merge::{
    merge_similar_lines, DEFAULT_ANGLE_THRESHOLD_DEG, DEFAULT_DISTANCE_THRESHOLD_PX,
};
pub use types::LineSegment;
