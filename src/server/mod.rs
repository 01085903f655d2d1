mod config;
mod cors;
mod error;
mod http_layers;
#[allow(clippy::module_inception)]
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use cors::{cors_layer, origin_matches};
pub use error::ApiError;
pub use http_layers::{http_cache, log_requests, RequestsLoggingLevel};
pub use server::{make_app, run_server};
pub use state::ServerState;
