//! Process-wide generation availability.
//!
//! Decided once at startup and never changed: either the gate holds a
//! provider that answered the probe, or generation is off until restart.
//! Individual call failures do not close the gate.

use crate::error::{AssistantError, AssistantResult};
use crate::llm::{CompletionOptions, LlmProvider, Message};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Sampling parameters for one kind of generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

pub const CHAT_PARAMS: GenerationParams = GenerationParams {
    max_tokens: 500,
    temperature: 0.7,
};
pub const SIMPLIFY_PARAMS: GenerationParams = GenerationParams {
    max_tokens: 300,
    temperature: 0.5,
};
pub const EXPLAIN_PARAMS: GenerationParams = GenerationParams {
    max_tokens: 200,
    temperature: 0.5,
};

pub struct GenerationGate {
    provider: Option<Arc<dyn LlmProvider>>,
    timeout: Duration,
}

impl GenerationGate {
    pub fn disabled() -> Self {
        Self {
            provider: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Opens the gate without probing.
    pub fn enabled(provider: Arc<dyn LlmProvider>, timeout: Duration) -> Self {
        Self {
            provider: Some(provider),
            timeout,
        }
    }

    /// Probes `provider` once; the gate stays closed if there is no provider
    /// or the probe fails.
    pub async fn probe(provider: Option<Arc<dyn LlmProvider>>, timeout: Duration) -> Self {
        let Some(provider) = provider else {
            info!("No generation API key configured - using knowledge-based responses");
            return Self::disabled();
        };

        match provider.probe(timeout).await {
            Ok(()) => {
                info!(
                    provider = provider.name(),
                    model = provider.model(),
                    "Generation client initialized successfully"
                );
                Self::enabled(provider, timeout)
            }
            Err(err) => {
                warn!("Generation client test failed: {}", err);
                info!("Falling back to knowledge-based responses");
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// "enabled" / "disabled", as reported by the health endpoint.
    pub fn status(&self) -> &'static str {
        if self.is_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    }

    pub fn model(&self) -> Option<&str> {
        self.provider.as_ref().map(|p| p.model())
    }

    /// Runs one system+user completion and returns the text verbatim.
    pub async fn generate(
        &self,
        system: &str,
        user: &str,
        params: GenerationParams,
    ) -> AssistantResult<String> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(AssistantError::GenerationUnavailable)?;
        let options = CompletionOptions::new(params.max_tokens, params.temperature, self.timeout);
        let messages = [Message::system(system), Message::user(user)];
        let response = provider.complete(&messages, &options).await?;
        Ok(response.message.content)
    }
}
