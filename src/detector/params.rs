//! Parameter types configuring the detector stages.
//!
//! Defaults reproduce the reference tuning for palm photos at common
//! resolutions. For tuning, start with the merge thresholds and the
//! Hough vote threshold.

use crate::segments::ExtractorParams;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Angular similarity below which two segments may merge (degrees).
    pub angle_threshold_deg: f32,
    /// Endpoint proximity below which two segments may merge (pixels).
    pub distance_threshold_px: f32,
    /// Parameters of the multi-scale extraction chain.
    pub extractor: ExtractorParams,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            angle_threshold_deg: 15.0,
            distance_threshold_px: 25.0,
            extractor: ExtractorParams::default(),
        }
    }
}
