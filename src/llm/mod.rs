//! LLM provider abstraction layer.
//!
//! The assistant only needs plain chat completions, so the trait is kept
//! small: one `complete` call plus a cheap probe used once at startup.

mod openai;
mod provider;
mod types;

pub use openai::OpenAIProvider;
pub use provider::{CompletionOptions, LlmError, LlmProvider};
pub use types::{CompletionResponse, FinishReason, Message, MessageRole, TokenUsage};
