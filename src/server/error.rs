use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assistant::UnknownPersonality;

/// Failures that reach the HTTP caller. Everything else degrades to a
/// fallback answer inside the assistant.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid request body: {0}")]
    MalformedBody(#[from] JsonRejection),
}

impl From<UnknownPersonality> for ApiError {
    fn from(err: UnknownPersonality) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match &self {
            ApiError::Validation(reason) => reason.clone(),
            ApiError::MalformedBody(rejection) => rejection.body_text(),
        };
        tracing::debug!("Rejecting request: {}", detail);

        (StatusCode::BAD_REQUEST, Json(json!({ "detail": detail }))).into_response()
    }
}
