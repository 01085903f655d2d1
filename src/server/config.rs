use super::RequestsLoggingLevel;
use crate::assistant::DEFAULT_PACING;
use crate::config::{AppConfig, DEFAULT_ALLOWED_ORIGINS};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub host: String,
    pub port: u16,
    pub environment: String,
    /// Exact origins or `*` patterns such as `https://*.vercel.app`.
    pub allowed_origins: Vec<String>,
    pub categories_cache_age_sec: usize,
    pub stream_pacing: Duration,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            host: "0.0.0.0".to_string(),
            port: 8000,
            environment: "development".to_string(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
            categories_cache_age_sec: 3600,
            stream_pacing: DEFAULT_PACING,
        }
    }
}

impl From<&AppConfig> for ServerConfig {
    fn from(config: &AppConfig) -> Self {
        ServerConfig {
            requests_logging_level: config.logging_level.clone(),
            host: config.host.clone(),
            port: config.port,
            environment: config.environment.clone(),
            allowed_origins: config.allowed_origins.clone(),
            categories_cache_age_sec: config.categories_cache_age_sec,
            stream_pacing: config.stream_pacing,
        }
    }
}
