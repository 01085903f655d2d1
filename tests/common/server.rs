//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own dataset file.

use super::constants::*;
use super::fixtures::{create_test_dataset, MockLlmServer};
use askhercare_server::assistant::{GenerationGate, ResponseComposer, TermRewriter};
use askhercare_server::corpus::{CorpusStore, LoadedCorpus};
use askhercare_server::llm::{LlmProvider, OpenAIProvider};
use askhercare_server::retrieval::RelevanceScorer;
use askhercare_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated dataset
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// Path of the dataset file the server loaded
    pub dataset_path: PathBuf,

    /// Whether the startup probe enabled generation
    pub generation_enabled: bool,

    // Private fields - keep resources alive until drop
    _temp_dataset_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a server on a random port with generation disabled
    pub async fn spawn() -> Self {
        Self::spawn_inner(None).await
    }

    /// Spawns a server whose generation client points at `mock`
    ///
    /// The startup probe runs against the mock, so the resulting gate depends
    /// on the mock's behaviour.
    pub async fn spawn_with_generation(mock: &MockLlmServer) -> Self {
        let provider: Arc<dyn LlmProvider> = Arc::new(OpenAIProvider::new(
            mock.base_url.clone(),
            MOCK_MODEL,
            Some(MOCK_API_KEY.to_string()),
        ));
        Self::spawn_inner(Some(provider)).await
    }

    async fn spawn_inner(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        let (temp_dataset_dir, dataset_path) =
            create_test_dataset().expect("Failed to create test dataset");

        let LoadedCorpus { corpus, .. } = CorpusStore::new(vec![dataset_path.clone()])
            .load()
            .expect("Failed to load test dataset");
        assert_eq!(corpus.len(), FIXTURE_RECORD_COUNT);

        let gate = Arc::new(GenerationGate::probe(provider, Duration::from_secs(5)).await);
        let generation_enabled = gate.is_enabled();
        let composer = Arc::new(ResponseComposer::new(
            Arc::new(corpus),
            RelevanceScorer::default(),
            gate.clone(),
        ));
        let rewriter = Arc::new(TermRewriter::new(gate));

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            host: "127.0.0.1".to_string(),
            port,
            environment: "test".to_string(),
            stream_pacing: Duration::from_millis(1),
            ..ServerConfig::default()
        };

        let app = make_app(config, composer, rewriter).expect("Failed to build app");

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            dataset_path,
            generation_enabled,
            _temp_dataset_dir: temp_dataset_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the banner endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Send shutdown signal
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
        // TempDir will be cleaned up automatically
    }
}
