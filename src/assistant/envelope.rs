use crate::error::{AssistantError, AssistantResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A piece of evidence attached to an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub content: String,
    /// Always within `[0, 1]`.
    pub score: f64,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Source {
    pub fn new(content: impl Into<String>, score: f64) -> Self {
        Self {
            content: content.into(),
            score: clamp_unit(score),
            metadata: Map::new(),
        }
    }

    pub fn with_meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

/// A finished answer, ready to be returned or streamed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    pub answer: String,
    pub sources: Vec<Source>,
    /// Always within `[0, 1]`.
    pub confidence: f64,
}

impl ResponseEnvelope {
    /// Builds an envelope, clamping scores into `[0, 1]`.
    ///
    /// Fails on an empty answer or on a non-finite confidence or source score.
    pub fn new(
        answer: impl Into<String>,
        sources: Vec<Source>,
        confidence: f64,
    ) -> AssistantResult<Self> {
        let answer = answer.into();
        if answer.trim().is_empty() {
            return Err(AssistantError::Validation("empty answer".to_string()));
        }
        if !confidence.is_finite() || sources.iter().any(|s| !s.score.is_finite()) {
            return Err(AssistantError::Validation(
                "non-finite confidence or source score".to_string(),
            ));
        }
        Ok(Self {
            answer,
            sources,
            confidence: clamp_unit(confidence),
        })
    }

    /// Envelope for canned texts: no sources, fixed confidence.
    pub(crate) fn canned(answer: impl Into<String>, confidence: f64) -> Self {
        Self {
            answer: answer.into(),
            sources: Vec::new(),
            confidence: clamp_unit(confidence),
        }
    }
}

pub(crate) fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
