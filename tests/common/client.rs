//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per endpoint. When API routes or request
//! formats change, update only this file.

use super::constants::*;
use askhercare_server::assistant::StreamChunk;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_banner(&self) -> Response {
        self.client.get(self.url("/")).send().await.unwrap()
    }

    pub async fn get_health(&self) -> Response {
        self.client.get(self.url("/health")).send().await.unwrap()
    }

    pub async fn get_categories(&self) -> Response {
        self.client.get(self.url("/categories")).send().await.unwrap()
    }

    /// Sends an arbitrary JSON body to `/chat`.
    pub async fn post_chat_raw(&self, body: Value) -> Response {
        self.client
            .post(self.url("/chat"))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn chat(&self, message: &str, mode: Option<&str>, category: Option<&str>) -> Response {
        let mut body = json!({ "message": message });
        if let Some(mode) = mode {
            body["personality_mode"] = json!(mode);
        }
        if let Some(category) = category {
            body["category"] = json!(category);
        }
        self.post_chat_raw(body).await
    }

    pub async fn chat_stream(&self, message: &str, mode: Option<&str>) -> Response {
        let mut body = json!({ "message": message });
        if let Some(mode) = mode {
            body["personality_mode"] = json!(mode);
        }
        self.client
            .post(self.url("/chat/stream"))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    /// Reads a `/chat/stream` response to the end and decodes every event.
    pub async fn collect_stream(response: Response) -> Vec<StreamChunk> {
        let text = response.text().await.unwrap();
        text.split("\n\n")
            .filter(|event| !event.is_empty())
            .map(|event| {
                let payload = event
                    .strip_prefix("data: ")
                    .unwrap_or_else(|| panic!("Unframed event: {:?}", event));
                serde_json::from_str(payload).unwrap()
            })
            .collect()
    }

    pub async fn simplify(&self, text: &str) -> Response {
        self.client
            .post(self.url("/simplify"))
            .json(&json!({ "text": text }))
            .send()
            .await
            .unwrap()
    }

    pub async fn explain_term(&self, body: Value) -> Response {
        self.client
            .post(self.url("/explain-term"))
            .json(&body)
            .send()
            .await
            .unwrap()
    }
}
