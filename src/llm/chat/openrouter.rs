use async_trait::async_trait;
use log::{ debug, info, warn };
use reqwest::{Client as HttpClient, header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, AUTHORIZATION}};
use std::error::Error as StdError;

use super::ChatClient;
use crate::llm::{ is_placeholder_key, ChatError, LlmConfig };
use crate::models::chat::{ ChatRequest, ChatResponse, Message };

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

const HTTP_REFERER: &str = "https://performa.ai";
const X_TITLE: &str = "Performa AI Agent";

pub struct OpenRouterChatClient {
    http: HttpClient,
    api_key: String,
    base_url: String,
}

impl OpenRouterChatClient {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
    ) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        let api_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let http = HttpClient::builder()
            .build()
            .map_err(|e| Box::new(e) as Box<dyn StdError + Send + Sync>)?;

        Ok(Self {
            http,
            api_key,
            base_url: api_url,
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        Self::new(
            config.api_key.clone().unwrap_or_default(),
            config.base_url.clone(),
        )
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn headers(&self) -> Result<HeaderMap, ChatError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", self.api_key))?);
        headers.insert(HeaderName::from_static("http-referer"), HeaderValue::from_static(HTTP_REFERER));
        headers.insert(HeaderName::from_static("x-title"), HeaderValue::from_static(X_TITLE));
        Ok(headers)
    }
}

#[async_trait]
impl ChatClient for OpenRouterChatClient {
    async fn chat(&self, messages: &[Message], model: &str) -> Result<String, ChatError> {
        if is_placeholder_key(&self.api_key) {
            warn!("OpenRouter API key not configured, simulating response for model {}", model);
            return Ok(simulate_response(model));
        }

        let body = serde_json::to_vec(&ChatRequest { model, messages })
            .map_err(ChatError::Marshal)?;
        let headers = self.headers()?;
        let url = self.endpoint();

        info!("OpenRouter request: model={}, messages={}", model, messages.len());

        let resp = self.http.post(&url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(ChatError::Send)?;

        let status = resp.status();
        let bytes = resp.bytes().await.map_err(ChatError::Read)?;
        debug!("OpenRouter response: status={}, {} bytes", status, bytes.len());

        parse_completion(&bytes)
    }

    fn is_simulated(&self) -> bool {
        is_placeholder_key(&self.api_key)
    }
}

/// Extracts the first choice's text. An API-reported error wins over everything else.
pub fn parse_completion(body: &[u8]) -> Result<String, ChatError> {
    let resp: ChatResponse = serde_json::from_slice(body).map_err(ChatError::Parse)?;

    if let Some(err) = resp.error {
        warn!("OpenRouter returned an error: {}", err.message);
        return Err(ChatError::Api(err.message));
    }

    let choice = resp.choices.into_iter().next().ok_or(ChatError::EmptyChoices)?;
    Ok(choice.message.content.unwrap_or_default())
}

pub fn simulate_response(model: &str) -> String {
    format!(
        r#"## Security Analysis Report

**Model:** {model}
**Status:** Simulation Mode (No API Key)

### Summary
This is a simulated response. To get real AI-powered security analysis, please configure your OpenRouter API key.

### Recommendations
1. Set up your OPENROUTER_API_KEY in the environment variables
2. Restart the application
3. Run the security scan again

### Note
The system is functioning correctly. This simulation demonstrates the expected output format.
"#
    )
}
