//! Medical Q&A corpus.
//!
//! The corpus is loaded once at startup (from the first dataset file found,
//! or from the built-in seed set) and is read-only afterwards. Request
//! handlers only ever see a shared `Arc<Corpus>`.

mod record;
mod seed;
mod store;

pub use record::{Corpus, CorpusRecord};
pub use seed::default_records;
pub use store::{CorpusSource, CorpusStore, LoadedCorpus, DEFAULT_DATASET_PATHS};
