mod file_config;

pub use file_config::{FileConfig, GenerationConfig, RateLimitConfig};

use crate::corpus::DEFAULT_DATASET_PATHS;
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

pub const DEFAULT_ALLOWED_ORIGINS: [&str; 5] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "https://*.vercel.app",
    "https://*.railway.app",
    "https://*.render.com",
];

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub generation_timeout_sec: u64,
    pub allowed_origins: Vec<String>,
    pub rate_limit_requests: u32,
    pub rate_limit_window_sec: u64,
    pub dataset_paths: Vec<PathBuf>,
    pub stream_pacing_ms: u64,
    pub categories_cache_age_sec: usize,
    pub logging_level: RequestsLoggingLevel,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            environment: "development".to_string(),
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            generation_timeout_sec: 30,
            allowed_origins: Vec::new(),
            rate_limit_requests: 100,
            rate_limit_window_sec: 3600,
            dataset_paths: Vec::new(),
            stream_pacing_ms: 50,
            categories_cache_age_sec: 3600,
            logging_level: RequestsLoggingLevel::Path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Core settings
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub logging_level: RequestsLoggingLevel,
    pub allowed_origins: Vec<String>,
    pub dataset_paths: Vec<PathBuf>,
    pub stream_pacing: Duration,
    pub categories_cache_age_sec: usize,

    // Feature configs (with defaults)
    pub generation: GenerationSettings,
    pub rate_limit: RateLimitSettings,
}

#[derive(Clone)]
pub struct GenerationSettings {
    /// `None` disables generation for the whole process.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for GenerationSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Carried for the request-handling layer; the assistant core ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub requests: u32,
    pub window: Duration,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let host = file.host.unwrap_or_else(|| cli.host.clone());
        let port = file.port.unwrap_or(cli.port);
        let environment = file.environment.unwrap_or_else(|| cli.environment.clone());

        let logging_level = match file.logging_level {
            Some(s) => match parse_logging_level(&s) {
                Some(level) => level,
                None => bail!("Invalid logging_level in config file: {}", s),
            },
            None => cli.logging_level.clone(),
        };

        let allowed_origins = file
            .allowed_origins
            .or_else(|| (!cli.allowed_origins.is_empty()).then(|| cli.allowed_origins.clone()))
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect());

        let dataset_paths: Vec<PathBuf> = file
            .dataset_paths
            .map(|paths| paths.into_iter().map(PathBuf::from).collect())
            .or_else(|| (!cli.dataset_paths.is_empty()).then(|| cli.dataset_paths.clone()))
            .unwrap_or_else(|| DEFAULT_DATASET_PATHS.iter().map(PathBuf::from).collect());
        if dataset_paths.is_empty() {
            bail!("At least one dataset path is required");
        }

        let stream_pacing =
            Duration::from_millis(file.stream_pacing_ms.unwrap_or(cli.stream_pacing_ms));
        let categories_cache_age_sec = file
            .categories_cache_age_sec
            .unwrap_or(cli.categories_cache_age_sec);

        // Generation settings - merge file config with CLI/env
        let gen_file = file.generation.unwrap_or_default();
        let api_key = gen_file
            .api_key
            .or_else(|| cli.openai_api_key.clone())
            .filter(|key| !key.trim().is_empty())
            .map(|key| key.trim().to_string());
        let timeout_sec = gen_file.timeout_sec.unwrap_or(cli.generation_timeout_sec);
        if timeout_sec == 0 {
            bail!("Generation timeout must be greater than zero");
        }
        let generation = GenerationSettings {
            api_key,
            base_url: gen_file
                .base_url
                .unwrap_or_else(|| cli.openai_base_url.clone()),
            model: gen_file.model.unwrap_or_else(|| cli.openai_model.clone()),
            timeout: Duration::from_secs(timeout_sec),
        };

        let rl_file = file.rate_limit.unwrap_or_default();
        let rate_limit = RateLimitSettings {
            requests: rl_file.requests.unwrap_or(cli.rate_limit_requests),
            window: Duration::from_secs(rl_file.window_sec.unwrap_or(cli.rate_limit_window_sec)),
        };

        Ok(Self {
            host,
            port,
            environment,
            logging_level,
            allowed_origins,
            dataset_paths,
            stream_pacing,
            categories_cache_age_sec,
            generation,
            rate_limit,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
