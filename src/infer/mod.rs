//! External vision-model collaborators behind narrow capability traits.
//!
//! The whole boundary is one interface: an image goes in, text comes out
//! ([`VisionCapability`]). Concrete implementations wrap an
//! OpenAI-compatible chat-completions endpoint ([`ChatVisionClient`] +
//! [`PromptedCapability`]); tests swap in stubs. On top sit the two
//! prompts the service needs (the palm gate and the fortune teller),
//! plus the opaque hand-segmentation boundary ([`HandSegmenter`]).
//!
//! Nothing in here retries; failures surface as
//! [`crate::error::ModelInferenceError`] and the calling service decides
//! what to do.

pub mod agents;
pub mod capability;
pub mod client;
pub mod mask;

pub use agents::{FortuneTeller, PalmGate};
pub use capability::{PromptedCapability, VisionCapability};
pub use client::{ChatVisionClient, ModelEndpointConfig, Sampling};
pub use mask::{apply_mask, HandSegmenter};
