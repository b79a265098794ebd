//! Term-frequency lookup over the inverted-index artifact.
//!
//! The indexing collaborator writes `inverted_index.json` into the
//! shared data repository: a JSON object mapping each term to the
//! array of book identifiers containing it. This module resolves
//! query terms to document frequencies against that artifact.
//!
//! The artifact is optional. When it is missing or unreadable the
//! lookup degrades to a fixed default frequency per term instead of
//! failing, which keeps the ranking engine available before the
//! indexer has produced output. Availability over precision is the
//! intended trade-off here.

use crate::core::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Frequency assumed for every term when the index artifact cannot
/// be read. Models "term assumed common, contributes little signal".
pub const DEFAULT_TERM_FREQUENCY: u64 = 1000;

/// Frequency assumed for a term the index does not contain. Models
/// "term assumed rare, contributes strong signal".
pub const RARE_TERM_FREQUENCY: u64 = 1;

/// File name of the inverted-index artifact inside the data
/// repository.
pub const INDEX_FILE_NAME: &str = "inverted_index.json";

/// Resolves query terms to document frequencies.
pub struct TermFrequencySource {
    index_path: PathBuf,
}

impl TermFrequencySource {
    /// Create a source reading from `data_dir/inverted_index.json`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            index_path: data_dir.as_ref().join(INDEX_FILE_NAME),
        }
    }

    /// Document frequency for every requested term.
    ///
    /// Never fails. The artifact is re-read on each call; there is no
    /// cross-request cache (a documented performance limitation, not
    /// a correctness one). Repeated terms simply resolve to the same
    /// entry.
    pub fn lookup(&self, terms: &[String]) -> HashMap<String, u64> {
        let postings = match self.read_postings() {
            Ok(postings) => postings,
            Err(e) => {
                warn!(
                    path = %self.index_path.display(),
                    error = %e,
                    "Inverted index unavailable, using default term frequencies"
                );
                return terms
                    .iter()
                    .map(|term| (term.clone(), DEFAULT_TERM_FREQUENCY))
                    .collect();
            }
        };

        terms
            .iter()
            .map(|term| {
                let frequency = postings
                    .get(term)
                    .map(|ids| ids.len() as u64)
                    .unwrap_or(RARE_TERM_FREQUENCY);
                (term.clone(), frequency)
            })
            .collect()
    }

    fn read_postings(&self) -> Result<HashMap<String, Vec<u64>>> {
        let contents = fs::read_to_string(&self.index_path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
