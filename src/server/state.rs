use axum::extract::FromRef;

use crate::assistant::{ResponseComposer, TermRewriter};
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedComposer = Arc<ResponseComposer>;
pub type GuardedRewriter = Arc<TermRewriter>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub composer: GuardedComposer,
    pub rewriter: GuardedRewriter,
}

impl ServerState {
    pub fn new(config: ServerConfig, composer: GuardedComposer, rewriter: GuardedRewriter) -> Self {
        ServerState {
            config,
            start_time: Instant::now(),
            composer,
            rewriter,
        }
    }
}

impl FromRef<ServerState> for GuardedComposer {
    fn from_ref(input: &ServerState) -> Self {
        input.composer.clone()
    }
}

impl FromRef<ServerState> for GuardedRewriter {
    fn from_ref(input: &ServerState) -> Self {
        input.rewriter.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
