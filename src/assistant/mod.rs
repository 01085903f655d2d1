//! Question answering on top of the corpus and the optional LLM.
//!
//! - [`ResponseComposer`] picks between generated and dataset answers.
//! - [`stream_answer`] delivers a finished answer in word groups.
//! - [`TermRewriter`] simplifies text and explains terms.
//! - [`GenerationGate`] is the frozen "is generation available" decision.

mod categories;
mod composer;
mod envelope;
mod gate;
mod personality;
mod rewriter;
mod streaming;

pub use categories::{HealthCategory, CATEGORIES};
pub use composer::{
    build_context, build_user_prompt, error_response, generic_response, knowledge_response,
    ResponseComposer, CONTEXT_TOP_K, ERROR_CONFIDENCE, GENERATED_CONFIDENCE,
    GENERATED_WITH_CONTEXT_CONFIDENCE, GENERIC_CONFIDENCE,
};
pub use envelope::{ResponseEnvelope, Source};
pub use gate::{GenerationGate, GenerationParams, CHAT_PARAMS, EXPLAIN_PARAMS, SIMPLIFY_PARAMS};
#[cfg(test)]
pub(crate) use gate::testing;
pub use personality::{PersonalityMode, UnknownPersonality};
pub use rewriter::{
    explain_from_dictionary, simplify_with_dictionary, TermRewriter, EXPLANATIONS,
    SIMPLIFICATIONS, SIMPLIFY_PREAMBLE,
};
pub use streaming::{
    encode_event, event_lines, segment, stream_answer, StreamChunk, DEFAULT_PACING,
    STREAM_APOLOGY, WORDS_PER_CHUNK,
};
