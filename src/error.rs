//! Failure taxonomy for the assistant core.
//!
//! None of these ever reach an HTTP caller as a 5xx: the composer and the
//! rewriter convert every variant into a personality-aware fallback text.

use crate::llm::LlmError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    /// The dataset file exists but could not be parsed.
    #[error("Malformed dataset at {path:?}: {reason}")]
    DataFormat { path: PathBuf, reason: String },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generation was never enabled for this process (no key, or the startup probe failed).
    #[error("Generation service unavailable")]
    GenerationUnavailable,

    /// A single generation call failed; the caller falls back for this call only.
    #[error("Generation call failed: {0}")]
    GenerationCallFailed(#[from] LlmError),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type AssistantResult<T> = Result<T, AssistantError>;
