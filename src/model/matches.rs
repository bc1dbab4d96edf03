//! Query results and index statistics.

use serde::Serialize;
use std::collections::BTreeMap;

/// One historical issue that resembles the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityMatch {
    pub issue_number: u64,
    pub title: String,
    /// Cosine similarity in `[0.0, 1.0]`
    pub similarity_score: f64,
    pub handler_id: Option<String>,
    pub solution_summary: String,
    /// Shared terms that contributed most to the score (at most five)
    pub matching_terms: Vec<String>,
    pub labels: Vec<String>,
}

/// Read-only summary of the current index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndexStatistics {
    pub total_issues: usize,
    pub total_unique_terms: usize,
    pub avg_terms_per_issue: f64,
    /// Resolved-issue count per handler; unassigned issues are not counted.
    pub handler_counts: BTreeMap<String, usize>,
}
