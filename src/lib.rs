//! precedent - find resolved issues that look like a new one
//!
//! This crate indexes previously resolved issues (title, body, resolution
//! summary) and ranks them against new issue text with TF-IDF weighting and
//! cosine similarity.
//!
//! # Architecture
//!
//! - [`model`] - Data types (IssueRecord, SimilarityMatch, IndexStatistics)
//! - [`store`] - Append-only document store and its JSON persistence
//! - [`index`] - Tokenization, TF-IDF, cosine ranking, shared handle
//! - [`config`] - Index path resolution and search defaults
//! - [`cli`] - Command-line interface using clap
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use index::{SearchOptions, SharedIndex, SimilarityIndex};
pub use model::{IndexStatistics, IssueRecord, SimilarityMatch};
pub use store::DocumentStore;

/// Global dry-run flag for `--dry-run`.
///
/// When set, `add` previews the record without writing the index.
pub static DRY_RUN: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Global CSV output flag (set when `--format csv`).
pub static CSV_OUTPUT: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Check if dry-run mode is active.
#[inline]
pub fn is_dry_run() -> bool {
    DRY_RUN.load(std::sync::atomic::Ordering::Relaxed)
}

/// Check if CSV output is requested.
#[inline]
pub fn is_csv() -> bool {
    CSV_OUTPUT.load(std::sync::atomic::Ordering::Relaxed)
}

/// Escape a value for CSV output (wrap in quotes if it contains commas, quotes, or newlines).
pub fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
