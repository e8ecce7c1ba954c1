pub mod openrouter;

use async_trait::async_trait;
use std::error::Error as StdError;
use std::sync::Arc;

use super::{ ChatError, LlmConfig };
use self::openrouter::OpenRouterChatClient;
use crate::models::chat::Message;

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends `messages` in order to `model` and returns the first choice's text.
    async fn chat(&self, messages: &[Message], model: &str) -> Result<String, ChatError>;

    fn is_simulated(&self) -> bool {
        false
    }
}

pub fn new_client(
    config: &LlmConfig
) -> Result<Arc<dyn ChatClient>, Box<dyn StdError + Send + Sync>> {
    let client = OpenRouterChatClient::from_config(config)?;
    Ok(Arc::new(client))
}
