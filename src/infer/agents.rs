//! The two prompts the service runs: the palm gate and the fortune
//! teller. Both sit on top of [`VisionCapability`] so the underlying
//! model is swappable.
use super::capability::{PromptedCapability, VisionCapability};
use super::client::{ChatVisionClient, Sampling};
use crate::error::ModelInferenceError;
use log::debug;

const PALM_SYSTEM: &str =
    "You are an assistant who should classify if the given image contains a palm or not.";
const PALM_PROMPT: &str =
    "Is the given image consist of palm or not? return Yes or No in one word.";

const FORTUNE_SYSTEM: &str = "You are an assistant who specializes in creative fortune-telling \
                              by analyzing images of people's hands.";
const FORTUNE_PROMPT: &str =
    "Please provide a creative interpretation of this person's future based on their hand image.";

/// Classifies whether a photo shows a palm at all.
pub struct PalmGate {
    capability: Box<dyn VisionCapability>,
}

impl PalmGate {
    /// Wrap an arbitrary capability (stubs in tests).
    pub fn over(capability: Box<dyn VisionCapability>) -> Self {
        Self { capability }
    }

    /// Standard configuration: near-greedy sampling, single-word reply.
    pub fn with_client(client: ChatVisionClient) -> Self {
        Self::over(Box::new(PromptedCapability::new(
            client,
            "palm-gate",
            PALM_SYSTEM,
            PALM_PROMPT,
            Sampling {
                temperature: 0.1,
                max_tokens: 10,
            },
        )))
    }

    /// True when the model answers affirmatively.
    ///
    /// The reply is trimmed and matched case-insensitively against a
    /// leading "yes"; anything else counts as a rejection.
    pub fn contains_palm(&self, image_png: &[u8]) -> Result<bool, ModelInferenceError> {
        let reply = self.capability.infer(image_png)?;
        let verdict = reply.trim().to_ascii_lowercase().starts_with("yes");
        debug!(
            "{} replied {:?} -> contains_palm={}",
            self.capability.name(),
            reply.trim(),
            verdict
        );
        Ok(verdict)
    }
}

/// Produces the fortune-telling narrative from the annotated image.
pub struct FortuneTeller {
    capability: Box<dyn VisionCapability>,
}

impl FortuneTeller {
    pub fn over(capability: Box<dyn VisionCapability>) -> Self {
        Self { capability }
    }

    /// Standard configuration: creative sampling, room for a full story.
    pub fn with_client(client: ChatVisionClient) -> Self {
        Self::over(Box::new(PromptedCapability::new(
            client,
            "fortune-teller",
            FORTUNE_SYSTEM,
            FORTUNE_PROMPT,
            Sampling {
                temperature: 0.9,
                max_tokens: 1000,
            },
        )))
    }

    /// Ask for the narrative; an empty completion is treated as malformed.
    pub fn narrate(&self, image_png: &[u8]) -> Result<String, ModelInferenceError> {
        let reply = self.capability.infer(image_png)?;
        if reply.trim().is_empty() {
            return Err(ModelInferenceError::MalformedResponse(
                "empty completion".to_string(),
            ));
        }
        Ok(reply)
    }
}
