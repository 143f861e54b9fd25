//! Error types shared across the pipeline and the capability boundary.
//!
//! Two kinds exist: [`ImageProcessingError`] for failures inside the
//! extraction/compositing stages, and [`ModelInferenceError`] for failures
//! reported by external vision-model collaborators. [`PresageError`]
//! composes both for callers driving the full service flow.

use thiserror::Error;

/// Failure during edge/line extraction or compositing.
///
/// Every stage wraps its own failures immediately with the stage name, so
/// the message always states where in the pipeline the problem occurred.
#[derive(Debug, Error)]
#[error("image processing failed in {stage}: {reason}")]
pub struct ImageProcessingError {
    /// Pipeline stage that raised the failure (e.g. `"extract"`).
    pub stage: &'static str,
    /// Underlying cause description.
    pub reason: String,
}

impl ImageProcessingError {
    pub fn new(stage: &'static str, reason: impl Into<String>) -> Self {
        Self {
            stage,
            reason: reason.into(),
        }
    }
}

/// Failure reported by an external model capability.
#[derive(Debug, Error)]
pub enum ModelInferenceError {
    /// The HTTP request never produced a response.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// The endpoint answered with a non-success status.
    #[error("model endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body did not contain a usable completion.
    #[error("malformed model response: {0}")]
    MalformedResponse(String),
}

/// Top-level error for the full analyze flow.
#[derive(Debug, Error)]
pub enum PresageError {
    #[error(transparent)]
    ImageProcessing(#[from] ImageProcessingError),
    #[error(transparent)]
    ModelInference(#[from] ModelInferenceError),
    /// The palm gate classified the photo as not containing a palm.
    #[error("the supplied image does not appear to contain a palm")]
    NotAPalm,
}
