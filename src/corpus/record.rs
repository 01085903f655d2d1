use serde::{Deserialize, Serialize};
use std::ops::Deref;

fn default_category() -> String {
    "general".to_string()
}

fn default_source() -> String {
    "unknown".to_string()
}

/// A single question/answer pair with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusRecord {
    pub question: String,
    pub answer: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_source")]
    pub source: String,
}

impl CorpusRecord {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
        tags: &[&str],
        source: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            source: source.into(),
        }
    }
}

/// Immutable, ordered collection of records.
///
/// Order matters: the scorer breaks ties by corpus position.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<CorpusRecord>,
}

impl Corpus {
    pub fn new(records: Vec<CorpusRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl Deref for Corpus {
    type Target = [CorpusRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}
