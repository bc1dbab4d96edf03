//! On-disk layout of the persisted index.

use serde::{Deserialize, Serialize};

use crate::model::IssueRecord;

/// Schema version written by this build.
pub const SCHEMA_VERSION: &str = "1.0";

/// Top-level persisted document.
///
/// Only `issues` is required when reading; the other fields are metadata
/// rewritten on every save. Issues stay as raw JSON here so one bad record
/// can be skipped without losing the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedIndex {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub updated_at: Option<String>,

    #[serde(default)]
    pub total_issues: usize,

    pub issues: Vec<serde_json::Value>,
}

fn default_version() -> String {
    SCHEMA_VERSION.to_string()
}

/// Borrowing view used when saving, so records are not cloned.
#[derive(Serialize)]
pub(crate) struct PersistedIndexRef<'a> {
    pub version: &'a str,
    pub updated_at: String,
    pub total_issues: usize,
    pub issues: &'a [IssueRecord],
}

/// How a load attempt went.
///
/// Both `Missing` and `Corrupt` yield an empty store; the distinction is
/// for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The file was read and parsed.
    Loaded { count: usize },
    /// No file at the path.
    Missing,
    /// The file could not be read or parsed.
    Corrupt { reason: String },
}

impl LoadStatus {
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}
