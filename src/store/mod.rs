//! Document store for resolved issues.
//!
//! Holds the ordered, append-only collection of [`IssueRecord`]s and reads
//! and writes the persisted JSON document:
//!
//! ```json
//! {"version":"1.0","updated_at":"2025-01-20T10:00:00Z","total_issues":1,"issues":[...]}
//! ```
//!
//! Loading never fails: a missing file is an empty store, and a file that is
//! not JSON or has no `issues` array is logged and replaced by an empty
//! store. Individual records that fail to parse are logged and skipped, so
//! the valid ones survive the next save. Saving does fail loudly.

mod file;
mod types;

pub use file::{atomic_write, read_if_exists};
pub use types::{LoadStatus, PersistedIndex, SCHEMA_VERSION};

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::model::IssueRecord;
use types::PersistedIndexRef;

/// Ordered collection of resolved issues, unique by issue number.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    records: Vec<IssueRecord>,
    numbers: HashSet<u64>,
}

impl DocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from `path`, degrading to an empty store on any problem.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        Self::load_with_status(path).0
    }

    /// Load a store from `path` and report how the load went.
    #[must_use]
    pub fn load_with_status(path: &Path) -> (Self, LoadStatus) {
        let content = match read_if_exists(path) {
            Ok(Some(content)) => content,
            Ok(None) => {
                debug!(path = %path.display(), "No persisted index, starting empty");
                return (Self::new(), LoadStatus::Missing);
            }
            Err(e) => return Self::corrupt(path, format!("unreadable: {e}")),
        };

        let persisted: PersistedIndex = match serde_json::from_str(&content) {
            Ok(persisted) => persisted,
            Err(e) => return Self::corrupt(path, format!("malformed: {e}")),
        };

        if persisted.version != SCHEMA_VERSION {
            warn!(
                path = %path.display(),
                version = %persisted.version,
                expected = SCHEMA_VERSION,
                "Unexpected index schema version, loading anyway"
            );
        }

        let mut store = Self::new();
        let mut skipped = 0usize;
        for (position, raw) in persisted.issues.into_iter().enumerate() {
            let number = raw.get("issue_number").cloned();
            let record: IssueRecord = match serde_json::from_value(raw) {
                Ok(record) => record,
                Err(e) => {
                    warn!(position, issue = ?number, error = %e, "Skipping invalid issue record");
                    skipped += 1;
                    continue;
                }
            };
            let number = record.issue_number;
            if store.append(record).is_err() {
                warn!(issue = number, "Duplicate issue in persisted index, keeping first");
                skipped += 1;
            }
        }

        if persisted.total_issues != store.len() {
            debug!(
                declared = persisted.total_issues,
                actual = store.len(),
                "Persisted total_issues disagrees with record count"
            );
        }

        info!(path = %path.display(), count = store.len(), skipped, "Loaded issue index");
        let count = store.len();
        (store, LoadStatus::Loaded { count })
    }

    fn corrupt(path: &Path, reason: String) -> (Self, LoadStatus) {
        warn!(path = %path.display(), %reason, "Ignoring corrupt issue index, starting empty");
        (Self::new(), LoadStatus::Corrupt { reason })
    }

    /// Serialize all records to `path` atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file operation fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let doc = PersistedIndexRef {
            version: SCHEMA_VERSION,
            updated_at: chrono::Utc::now().to_rfc3339(),
            total_issues: self.records.len(),
            issues: &self.records,
        };
        let mut content = serde_json::to_string_pretty(&doc)?;
        content.push('\n');
        atomic_write(path, &content)?;

        info!(path = %path.display(), count = self.records.len(), "Saved issue index");
        Ok(())
    }

    /// Append a record.
    ///
    /// Duplicate issue numbers are rejected and the store is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateIssue`] if the number is already present.
    pub fn append(&mut self, record: IssueRecord) -> Result<()> {
        if !self.numbers.insert(record.issue_number) {
            return Err(Error::DuplicateIssue {
                number: record.issue_number,
            });
        }
        self.records.push(record);
        Ok(())
    }

    #[must_use]
    pub fn records(&self) -> &[IssueRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn contains(&self, issue_number: u64) -> bool {
        self.numbers.contains(&issue_number)
    }
}
