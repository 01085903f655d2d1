//! LLM provider trait definition.

use super::types::{CompletionResponse, Message};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Options for a completion request.
#[derive(Debug, Clone)]
pub struct CompletionOptions {
    /// Temperature for sampling (0.0 = deterministic, 1.0 = creative).
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Request timeout.
    pub timeout: Duration,
}

impl CompletionOptions {
    pub fn new(max_tokens: u32, temperature: f32, timeout: Duration) -> Self {
        Self {
            temperature,
            max_tokens: Some(max_tokens),
            timeout,
        }
    }
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Errors that can occur when interacting with an LLM provider.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Well-formed completion whose text is empty or blank.
    #[error("Empty completion content")]
    EmptyContent,

    #[error("Rate limited")]
    RateLimited,

    #[error("Request timeout")]
    Timeout,
}

/// Trait for LLM providers.
///
/// Implementations connect to a chat-completion backend; the rest of the
/// crate never sees HTTP details.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider's name (e.g., "openai").
    fn name(&self) -> &str;

    /// Get the model being used.
    fn model(&self) -> &str;

    /// Complete a conversation.
    ///
    /// # Arguments
    /// * `messages` - System and user turns, in order.
    /// * `options` - Completion options (temperature, timeout, etc.).
    async fn complete(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, LlmError>;

    /// Check that the provider answers a tiny completion.
    ///
    /// Only reachability counts: a well-formed reply with blank text (common
    /// with a 5-token budget) still passes.
    async fn probe(&self, timeout: Duration) -> Result<(), LlmError> {
        let options = CompletionOptions::new(5, 0.0, timeout);
        match self.complete(&[Message::user("Hello")], &options).await {
            Ok(_) | Err(LlmError::EmptyContent) => Ok(()),
            Err(err) => Err(err),
        }
    }
}
