use super::{default_records, Corpus, CorpusRecord};
use crate::error::{AssistantError, AssistantResult};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Conventional dataset locations, tried in order. The first one is also
/// where the seed set gets written when no dataset exists.
pub const DEFAULT_DATASET_PATHS: [&str; 4] = [
    "./data/medical_qa_dataset.json",
    "../data/medical_qa_dataset.json",
    "./medical_qa_dataset.json",
    "./backend/data/medical_qa_dataset.json",
];

/// Where the loaded records came from.
#[derive(Debug, Clone, PartialEq)]
pub enum CorpusSource {
    File(PathBuf),
    /// Built-in seed set. `persisted_to` is set when writing it to disk succeeded.
    Seed { persisted_to: Option<PathBuf> },
}

#[derive(Debug)]
pub struct LoadedCorpus {
    pub corpus: Corpus,
    pub source: CorpusSource,
}

pub struct CorpusStore {
    candidates: Vec<PathBuf>,
}

impl CorpusStore {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    pub fn with_default_paths() -> Self {
        Self::new(DEFAULT_DATASET_PATHS.iter().map(PathBuf::from).collect())
    }

    pub fn primary_path(&self) -> Option<&Path> {
        self.candidates.first().map(|p| p.as_path())
    }

    /// Loads the first existing candidate file, or the seed set when none exists.
    ///
    /// A candidate that exists but cannot be read or parsed is an error; use
    /// [`CorpusStore::load_or_default`] to treat that as "no dataset".
    pub fn load(&self) -> AssistantResult<LoadedCorpus> {
        match self.candidates.iter().find(|p| p.exists()) {
            Some(path) => {
                let records = read_dataset(path)?;
                info!("Loaded {} medical Q&A pairs from {:?}", records.len(), path);
                Ok(LoadedCorpus {
                    corpus: Corpus::new(records),
                    source: CorpusSource::File(path.clone()),
                })
            }
            None => {
                warn!("Medical dataset not found, creating sample dataset");
                Ok(self.seed())
            }
        }
    }

    /// Like [`CorpusStore::load`], but a broken dataset file degrades to the seed set.
    pub fn load_or_default(&self) -> LoadedCorpus {
        match self.load() {
            Ok(loaded) => loaded,
            Err(err) => {
                warn!("Error loading medical data: {}", err);
                self.seed()
            }
        }
    }

    fn seed(&self) -> LoadedCorpus {
        let records = default_records();
        let persisted_to = match self.primary_path() {
            // Never clobber an existing (possibly malformed) dataset.
            Some(path) if path.exists() => None,
            Some(path) => match write_dataset(path, &records) {
                Ok(()) => {
                    info!(
                        "Created sample medical dataset with {} entries at {:?}",
                        records.len(),
                        path
                    );
                    Some(path.to_path_buf())
                }
                Err(err) => {
                    warn!("Could not save dataset to file: {}", err);
                    None
                }
            },
            None => None,
        };
        LoadedCorpus {
            corpus: Corpus::new(records),
            source: CorpusSource::Seed { persisted_to },
        }
    }
}

fn read_dataset(path: &Path) -> AssistantResult<Vec<CorpusRecord>> {
    let content = std::fs::read_to_string(path).map_err(|source| AssistantError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|e| AssistantError::DataFormat {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn write_dataset(path: &Path, records: &[CorpusRecord]) -> AssistantResult<()> {
    let io_err = |source| AssistantError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    let json = serde_json::to_string_pretty(records).map_err(|e| AssistantError::DataFormat {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    std::fs::write(path, json).map_err(io_err)
}
