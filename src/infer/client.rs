//! Blocking client for OpenAI-compatible chat-completions endpoints.
use crate::error::ModelInferenceError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Where and what to ask.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelEndpointConfig {
    /// Base URL of the OpenAI-compatible API, without the trailing route.
    pub base_url: String,
    /// Bearer token; local llama.cpp-style servers accept any value.
    pub api_key: String,
    /// Model identifier passed through to the endpoint.
    pub model: String,
}

impl Default for ModelEndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/v1".to_string(),
            api_key: "llama.cpp".to_string(),
            model: "local-model".to_string(),
        }
    }
}

/// Sampling knobs for one completion request.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Sampling {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Thin transport over the chat-completions route. Prompt content and
/// sampling live with the capability using the client.
#[derive(Clone, Debug)]
pub struct ChatVisionClient {
    http: reqwest::blocking::Client,
    config: ModelEndpointConfig,
}

impl ChatVisionClient {
    pub fn new(config: ModelEndpointConfig) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            config,
        }
    }

    /// Send one image+text turn and return the completion text.
    pub fn chat(
        &self,
        system: &str,
        prompt: &str,
        image_png: &[u8],
        sampling: Sampling,
    ) -> Result<String, ModelInferenceError> {
        let data_uri = format!("data:image/png;base64,{}", BASE64.encode(image_png));
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let body = json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": [
                    {"type": "image_url", "image_url": {"url": data_uri}},
                    {"type": "text", "text": prompt},
                ]},
            ],
            "temperature": sampling.temperature,
            "max_tokens": sampling.max_tokens,
            "n": 1,
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .map_err(|source| ModelInferenceError::Transport {
                endpoint: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ModelInferenceError::Status {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let value: serde_json::Value = response
            .json()
            .map_err(|e| ModelInferenceError::MalformedResponse(e.to_string()))?;
        let content = value["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                ModelInferenceError::MalformedResponse(
                    "missing choices[0].message.content".to_string(),
                )
            })?;
        Ok(content.to_string())
    }
}
