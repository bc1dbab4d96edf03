//! TF-IDF similarity index over resolved issues.
//!
//! The index owns a [`DocumentStore`] plus everything derived from it:
//! - one document-term set per record
//! - a corpus-wide IDF table
//! - one TF-IDF vector per record, aligned with store order
//!
//! Derived state is rebuilt in full on construction and after every
//! [`SimilarityIndex::add_document`]. There is no incremental path: adding
//! one issue changes IDF weights for every other document.
//!
//! # Example
//!
//! ```
//! use precedent::index::{SearchOptions, SimilarityIndex};
//! use precedent::model::IssueRecord;
//!
//! let mut index = SimilarityIndex::default();
//! index
//!     .add_document(
//!         IssueRecord::new(1, "API Bug Fix", "2025-01-20T10:00:00Z")
//!             .with_body("Fixed bug in API endpoint")
//!             .with_solution("Updated error handling in API"),
//!     )
//!     .unwrap();
//!
//! let matches = index.find_similar("API endpoint error", "", &SearchOptions::default());
//! assert_eq!(matches[0].issue_number, 1);
//! ```

mod shared;
mod similarity;
mod tfidf;
mod tokenize;

pub use shared::SharedIndex;
pub use similarity::{cosine_similarity, magnitude, top_contributing_terms, MAX_MATCHING_TERMS};
pub use tfidf::{compute_idf, tf, tfidf, SparseVector};
pub use tokenize::{tokenize, STOP_WORDS};

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::model::{IndexStatistics, IssueRecord, SimilarityMatch};
use crate::store::{DocumentStore, LoadStatus};

/// Default number of matches returned.
pub const DEFAULT_TOP_K: usize = 5;

/// Default minimum cosine similarity for a match.
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.1;

/// Tunable query parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Maximum matches returned; 0 returns nothing.
    pub top_k: usize,
    /// Matches scoring below this are dropped.
    pub min_similarity: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            min_similarity: DEFAULT_MIN_SIMILARITY,
        }
    }
}

impl SearchOptions {
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    #[must_use]
    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }
}

/// Vector-space index answering "which resolved issues look like this one?".
#[derive(Debug, Clone, Default)]
pub struct SimilarityIndex {
    store: DocumentStore,
    idf: BTreeMap<String, f64>,
    document_term_sets: Vec<BTreeSet<String>>,
    tfidf_vectors: Vec<SparseVector>,
}

impl SimilarityIndex {
    /// Build an index over an existing store.
    #[must_use]
    pub fn new(store: DocumentStore) -> Self {
        let mut index = Self {
            store,
            ..Self::default()
        };
        index.rebuild();
        index
    }

    /// Load the persisted store at `path` and build the index.
    ///
    /// A missing or corrupt file yields an empty index.
    #[must_use]
    pub fn open(path: &Path) -> Self {
        Self::open_with_status(path).0
    }

    /// Like [`SimilarityIndex::open`], also reporting how the load went.
    #[must_use]
    pub fn open_with_status(path: &Path) -> (Self, LoadStatus) {
        let (store, status) = DocumentStore::load_with_status(path);
        (Self::new(store), status)
    }

    /// Persist the underlying store to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.store.save(path)
    }

    /// Append a resolved issue and rebuild all derived state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DuplicateIssue`] if the issue number is
    /// already indexed; the index is unchanged in that case.
    pub fn add_document(&mut self, record: IssueRecord) -> Result<()> {
        self.store.append(record)?;
        self.rebuild();
        Ok(())
    }

    /// Recompute term sets, the IDF table and TF-IDF vectors from scratch.
    fn rebuild(&mut self) {
        let tokenized: Vec<Vec<String>> = self
            .store
            .records()
            .iter()
            .map(|record| tokenize(&record.indexed_text()))
            .collect();

        let term_sets: Vec<BTreeSet<String>> = tokenized
            .iter()
            .map(|tokens| tokens.iter().cloned().collect())
            .collect();

        let idf = compute_idf(&term_sets);
        let vectors: Vec<SparseVector> = tokenized.iter().map(|tokens| tfidf(tokens, &idf)).collect();

        debug!(
            documents = term_sets.len(),
            terms = idf.len(),
            "Rebuilt similarity index"
        );

        self.idf = idf;
        self.document_term_sets = term_sets;
        self.tfidf_vectors = vectors;
    }

    /// Rank indexed issues by similarity to a new issue's text.
    ///
    /// Returns at most `options.top_k` matches scoring at least
    /// `options.min_similarity`, best first. Equal scores keep the order in
    /// which issues were indexed. Text with no usable tokens returns an
    /// empty list.
    #[must_use]
    pub fn find_similar(&self, title: &str, body: &str, options: &SearchOptions) -> Vec<SimilarityMatch> {
        if options.top_k == 0 {
            return Vec::new();
        }

        let tokens = tokenize(&format!("{title} {body}"));
        if tokens.is_empty() {
            debug!("Query has no indexable terms");
            return Vec::new();
        }

        let query = tfidf(&tokens, &self.idf);

        let mut scored: Vec<(usize, f64)> = self
            .tfidf_vectors
            .iter()
            .enumerate()
            .map(|(i, doc)| (i, cosine_similarity(&query, doc)))
            .filter(|(_, score)| *score >= options.min_similarity)
            .collect();

        // Stable: equal scores stay in corpus order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(options.top_k);

        debug!(
            query_terms = query.len(),
            matches = scored.len(),
            "Similarity search complete"
        );

        let records = self.store.records();
        scored
            .into_iter()
            .map(|(i, score)| {
                let record = &records[i];
                SimilarityMatch {
                    issue_number: record.issue_number,
                    title: record.title.clone(),
                    similarity_score: score,
                    handler_id: record.handler_id.clone(),
                    solution_summary: record.solution_summary.clone(),
                    matching_terms: top_contributing_terms(&query, &self.tfidf_vectors[i]),
                    labels: record.labels.clone(),
                }
            })
            .collect()
    }

    /// Summary counts over the current corpus.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn statistics(&self) -> IndexStatistics {
        let total_issues = self.store.len();
        if total_issues == 0 {
            return IndexStatistics::default();
        }

        let total_terms: usize = self.document_term_sets.iter().map(BTreeSet::len).sum();

        let mut handler_counts = BTreeMap::new();
        for handler in self.store.records().iter().filter_map(|r| r.handler_id.as_ref()) {
            *handler_counts.entry(handler.clone()).or_insert(0) += 1;
        }

        IndexStatistics {
            total_issues,
            total_unique_terms: self.idf.len(),
            avg_terms_per_issue: total_terms as f64 / total_issues as f64,
            handler_counts,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[must_use]
    pub fn contains(&self, issue_number: u64) -> bool {
        self.store.contains(issue_number)
    }
}
