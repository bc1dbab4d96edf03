//! Thread-safe handle for serving one index to many callers.
//!
//! Queries take a shared read lock. `add_document` and `reload` hold the
//! write lock for the whole append + rebuild, so no reader ever sees term
//! sets and vectors of different lengths.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;
use crate::model::{IndexStatistics, IssueRecord, SimilarityMatch};
use crate::store::LoadStatus;

use super::{SearchOptions, SimilarityIndex};

/// Cloneable, lock-protected [`SimilarityIndex`].
#[derive(Debug, Clone, Default)]
pub struct SharedIndex {
    inner: Arc<RwLock<SimilarityIndex>>,
}

impl SharedIndex {
    #[must_use]
    pub fn new(index: SimilarityIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    // A panic mid-rebuild cannot leave partial state behind (derived fields
    // are swapped in at the end), so a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, SimilarityIndex> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SimilarityIndex> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn find_similar(&self, title: &str, body: &str, options: &SearchOptions) -> Vec<SimilarityMatch> {
        self.read().find_similar(title, body, options)
    }

    /// # Errors
    ///
    /// Returns [`crate::Error::DuplicateIssue`] for an already-indexed number.
    pub fn add_document(&self, record: IssueRecord) -> Result<()> {
        self.write().add_document(record)
    }

    #[must_use]
    pub fn statistics(&self) -> IndexStatistics {
        self.read().statistics()
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.read().save(path)
    }

    /// Replace the index with the one persisted at `path`.
    pub fn reload(&self, path: &Path) -> LoadStatus {
        let (index, status) = SimilarityIndex::open_with_status(path);
        *self.write() = index;
        status
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
