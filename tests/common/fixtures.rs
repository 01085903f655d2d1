//! Test fixtures: a temporary dataset and a mock generation service

use super::constants::*;
use anyhow::Result;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Writes the fixture dataset into a fresh temp dir.
///
/// Returns the dir (keep it alive) and the dataset file path.
pub fn create_test_dataset() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("medical_qa_dataset.json");
    let records = json!([
        {
            "question": PERIOD_QUESTION,
            "answer": PERIOD_ANSWER,
            "category": PERIOD_CATEGORY,
            "tags": ["period", "duration", "bleeding"],
            "source": "fixture"
        },
        {
            "question": STRESS_QUESTION,
            "answer": STRESS_ANSWER,
            "category": "menstruation",
            "tags": ["stress", "ovulation"]
        }
    ]);
    std::fs::write(&path, serde_json::to_string_pretty(&records)?)?;
    Ok((dir, path))
}

/// How the mock generation service answers.
#[derive(Clone, Debug)]
pub enum MockBehaviour {
    /// Every request gets this text.
    Reply(String),
    /// Every request fails with this status.
    Fail(u16),
    /// The first request (the startup probe) succeeds, the rest fail with 500.
    ProbeOnly,
    /// Every request gets a 200 completion with empty content, cut at the token limit.
    EmptyReply,
}

#[derive(Clone)]
struct MockState {
    behaviour: MockBehaviour,
    requests: Arc<Mutex<Vec<Value>>>,
}

/// A local OpenAI-compatible `/chat/completions` endpoint.
pub struct MockLlmServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

async fn chat_completions(
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let index = {
        let mut requests = state.requests.lock().unwrap();
        requests.push(body);
        requests.len() - 1
    };

    let reply = match &state.behaviour {
        MockBehaviour::Reply(text) => Ok(text.clone()),
        MockBehaviour::Fail(status) => Err(*status),
        MockBehaviour::ProbeOnly if index == 0 => Ok("Hi".to_string()),
        MockBehaviour::ProbeOnly => Err(500),
        MockBehaviour::EmptyReply => {
            return Json(json!({
                "choices": [{"message": {"content": ""}, "finish_reason": "length"}]
            }))
            .into_response()
        }
    };

    match reply {
        Ok(text) => (
            StatusCode::OK,
            Json(json!({
                "choices": [{
                    "message": {"role": "assistant", "content": text},
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
            })),
        )
            .into_response(),
        Err(status) => (
            StatusCode::from_u16(status).unwrap(),
            Json(json!({"error": {"message": "mock failure"}})),
        )
            .into_response(),
    }
}

impl MockLlmServer {
    pub async fn spawn(behaviour: MockBehaviour) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            behaviour,
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/v1/chat/completions", post(chat_completions))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let port = listener.local_addr().unwrap().port();
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Mock server failed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}/v1", port),
            requests,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Request bodies received so far, in order.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockLlmServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
