pub mod chat;

use thiserror::Error;

pub const PLACEHOLDER_API_KEY: &str = "your_key";

#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// True when no usable key is configured and requests should be simulated.
    pub fn is_simulated(&self) -> bool {
        is_placeholder_key(self.api_key.as_deref().unwrap_or(""))
    }
}

pub fn is_placeholder_key(key: &str) -> bool {
    key.is_empty() || key == PLACEHOLDER_API_KEY
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("failed to marshal request: {0}")]
    Marshal(#[source] serde_json::Error),
    #[error("failed to create request: {0}")]
    Build(#[from] reqwest::header::InvalidHeaderValue),
    #[error("failed to send request: {0}")]
    Send(#[source] reqwest::Error),
    #[error("failed to read response: {0}")]
    Read(#[source] reqwest::Error),
    #[error("failed to parse response: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("API error: {0}")]
    Api(String),
    #[error("no response from model")]
    EmptyChoices,
}
