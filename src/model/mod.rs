//! Data models for precedent.
//!
//! This module contains the value types shared by the store and the index:
//! - IssueRecord
//! - SimilarityMatch
//! - IndexStatistics

pub mod issue;
pub mod matches;

pub use issue::IssueRecord;
pub use matches::{IndexStatistics, SimilarityMatch};
