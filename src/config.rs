//! JSON runtime configuration for the demo binaries.
use crate::detector::DetectorParams;
use crate::infer::ModelEndpointConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Where to write the annotated RGB image.
    pub annotated: Option<PathBuf>,
    /// Where to write the last-scale edge map.
    pub edge_map: Option<PathBuf>,
    /// Where to write the JSON pipeline trace.
    pub trace_json: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub detector: DetectorParams,
    /// Model endpoint for the gate/fortune capabilities; unused by the
    /// detection-only demo but kept so one config drives the whole
    /// service.
    #[serde(default)]
    pub model: ModelEndpointConfig,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"input_path": "palm.png"}"#).unwrap();
        assert_eq!(config.input_path, PathBuf::from("palm.png"));
        assert!(config.output.annotated.is_none());
        assert_eq!(config.detector.angle_threshold_deg, 15.0);
        assert_eq!(config.model.model, "local-model");
    }

    #[test]
    fn overrides_reach_nested_params() {
        let raw = r#"{
            "input_path": "palm.png",
            "detector": {
                "angle_threshold_deg": 12.0,
                "extractor": {"smoothing_kernels": [9], "hough": {"threshold": 40}}
            }
        }"#;
        let config: RuntimeConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.detector.angle_threshold_deg, 12.0);
        assert_eq!(config.detector.distance_threshold_px, 25.0);
        assert_eq!(config.detector.extractor.smoothing_kernels, vec![9]);
        assert_eq!(config.detector.extractor.hough.threshold, 40);
        assert_eq!(config.detector.extractor.canny_low, 30.0);
    }
}
