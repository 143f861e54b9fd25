//! The single interface over every vision-model collaborator.
use super::client::{ChatVisionClient, Sampling};
use crate::error::ModelInferenceError;

/// Image in, text out. Implementations wrap a concrete endpoint; tests
/// substitute stubs.
pub trait VisionCapability {
    /// Run inference on a PNG-encoded image and return the model's text.
    fn infer(&self, image_png: &[u8]) -> Result<String, ModelInferenceError>;

    /// Capability name for logging.
    fn name(&self) -> &'static str;
}

/// A chat-completions client bound to a fixed prompt pair and sampling.
pub struct PromptedCapability {
    client: ChatVisionClient,
    name: &'static str,
    system: String,
    prompt: String,
    sampling: Sampling,
}

impl PromptedCapability {
    pub fn new(
        client: ChatVisionClient,
        name: &'static str,
        system: impl Into<String>,
        prompt: impl Into<String>,
        sampling: Sampling,
    ) -> Self {
        Self {
            client,
            name,
            system: system.into(),
            prompt: prompt.into(),
            sampling,
        }
    }
}

impl VisionCapability for PromptedCapability {
    fn infer(&self, image_png: &[u8]) -> Result<String, ModelInferenceError> {
        self.client
            .chat(&self.system, &self.prompt, image_png, self.sampling)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
