use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import modules from the library crate
use askhercare_server::assistant::{GenerationGate, ResponseComposer, TermRewriter};
use askhercare_server::config;
use askhercare_server::corpus::{CorpusSource, CorpusStore};
use askhercare_server::llm::{LlmProvider, OpenAIProvider};
use askhercare_server::retrieval::RelevanceScorer;
use askhercare_server::server::{run_server, RequestsLoggingLevel, ServerConfig};

fn parse_path(s: &str) -> Result<PathBuf, String> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(format!("Error resolving path '{}': {}", s, msg));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir().map_err(|e| format!("Failed to get current dir: {}", e))?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The address to bind to.
    #[clap(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// The port to listen on.
    #[clap(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Deployment environment name, reported by /health.
    #[clap(long, env = "ENVIRONMENT", default_value = "development")]
    pub environment: String,

    /// API key for the OpenAI-compatible generation service. Generation is
    /// disabled when absent or blank.
    #[clap(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API.
    #[clap(long, env = "OPENAI_BASE_URL", default_value = config::DEFAULT_OPENAI_BASE_URL)]
    pub openai_base_url: String,

    /// Model used for generation.
    #[clap(long, env = "OPENAI_MODEL", default_value = config::DEFAULT_OPENAI_MODEL)]
    pub openai_model: String,

    /// Timeout in seconds for each generation request.
    #[clap(long, default_value_t = 30)]
    pub generation_timeout_sec: u64,

    /// Allowed CORS origin; `*` works as a wildcard. Repeatable.
    #[clap(long = "allowed-origin")]
    pub allowed_origins: Vec<String>,

    /// Requests allowed per rate-limit window.
    #[clap(long, default_value_t = 100)]
    pub rate_limit_requests: u32,

    /// Rate-limit window length in seconds.
    #[clap(long, default_value_t = 3600)]
    pub rate_limit_window_sec: u64,

    /// Candidate dataset file, tried in order. Repeatable.
    #[clap(long = "dataset-path", value_parser = parse_path)]
    pub dataset_paths: Vec<PathBuf>,

    /// Pause between streamed chunks, in milliseconds.
    #[clap(long, default_value_t = 50)]
    pub stream_pacing_ms: u64,

    /// The maximum age of /categories in client caches, in seconds.
    #[clap(long, default_value_t = 3600)]
    pub categories_cache_age_sec: usize,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,
}

/// Convert CLI args to CliConfig for config resolution
impl From<&CliArgs> for config::CliConfig {
    fn from(args: &CliArgs) -> Self {
        config::CliConfig {
            host: args.host.clone(),
            port: args.port,
            environment: args.environment.clone(),
            openai_api_key: args.openai_api_key.clone(),
            openai_base_url: args.openai_base_url.clone(),
            openai_model: args.openai_model.clone(),
            generation_timeout_sec: args.generation_timeout_sec,
            allowed_origins: args.allowed_origins.clone(),
            rate_limit_requests: args.rate_limit_requests,
            rate_limit_window_sec: args.rate_limit_window_sec,
            dataset_paths: args.dataset_paths.clone(),
            stream_pacing_ms: args.stream_pacing_ms,
            categories_cache_age_sec: args.categories_cache_age_sec,
            logging_level: args.logging_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real environment variables still apply.
    let dotenv_result = dotenvy::dotenv();
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    if let Ok(path) = dotenv_result {
        info!("Loaded environment from {:?}", path);
    }

    // Load TOML config if provided
    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            Some(config::FileConfig::load(path)?)
        }
        None => None,
    };

    // Resolve final configuration (TOML overrides CLI)
    let cli_config: config::CliConfig = (&cli_args).into();
    let app_config = config::AppConfig::resolve(&cli_config, file_config)?;

    info!("Configuration loaded:");
    info!("  environment: {}", app_config.environment);
    info!("  bind address: {}", app_config.bind_address());
    info!("  dataset paths: {:?}", app_config.dataset_paths);
    info!("  allowed origins: {:?}", app_config.allowed_origins);
    info!(
        "  rate limit: {} requests / {}s",
        app_config.rate_limit.requests,
        app_config.rate_limit.window.as_secs()
    );

    let loaded = CorpusStore::new(app_config.dataset_paths.clone()).load_or_default();
    match &loaded.source {
        CorpusSource::File(path) => {
            info!("Using dataset {:?} ({} records)", path, loaded.corpus.len())
        }
        CorpusSource::Seed { persisted_to } => {
            if persisted_to.is_none() {
                warn!("Seed dataset is in memory only");
            }
            info!("Using seed dataset ({} records)", loaded.corpus.len())
        }
    }

    let generation = &app_config.generation;
    let provider: Option<Arc<dyn LlmProvider>> = generation.api_key.as_ref().map(|key| {
        Arc::new(OpenAIProvider::new(
            generation.base_url.clone(),
            generation.model.clone(),
            Some(key.clone()),
        )) as Arc<dyn LlmProvider>
    });
    let gate = Arc::new(GenerationGate::probe(provider, generation.timeout).await);
    info!("AI service: {}", gate.status());

    let composer = Arc::new(ResponseComposer::new(
        Arc::new(loaded.corpus),
        RelevanceScorer::default(),
        gate.clone(),
    ));
    let rewriter = Arc::new(TermRewriter::new(gate));

    info!("Ready to serve on port {}", app_config.port);
    run_server(ServerConfig::from(&app_config), composer, rewriter).await
}
