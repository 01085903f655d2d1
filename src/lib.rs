//! AskHerCare Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod assistant;
pub mod config;
pub mod corpus;
pub mod error;
pub mod llm;
pub mod retrieval;
pub mod server;

// Re-export commonly used types for convenience
pub use assistant::{GenerationGate, PersonalityMode, ResponseComposer, TermRewriter};
pub use corpus::{CorpusStore, LoadedCorpus};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
