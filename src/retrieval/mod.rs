//! Lexical relevance scoring over the in-memory corpus.
//!
//! No index and no embeddings: every request walks the whole corpus and
//! accumulates word-overlap signals per record.

mod normalize;
mod scorer;

pub use normalize::{normalize_words, qualifying_words};
pub use scorer::{RelevanceScorer, ScoredMatch, ScoringWeights};
