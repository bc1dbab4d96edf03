//! Resolved issue records.

use serde::{Deserialize, Deserializer, Serialize};

/// A historical, resolved issue.
///
/// Records are append-only once indexed: the store never hands out mutable
/// access, so a record's fields never change after `add_document`.
///
/// Field names on disk follow the persisted index format, so `handler_id`
/// is stored as `agent_assigned` and `followup_ref` as `pr_number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Unique issue number
    pub issue_number: u64,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,

    /// Ordered labels (duplicates carry no extra meaning)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub labels: Vec<String>,

    /// How the issue was resolved
    #[serde(default, deserialize_with = "null_as_empty")]
    pub solution_summary: String,

    /// Who resolved it
    #[serde(rename = "agent_assigned", default)]
    pub handler_id: Option<String>,

    /// Resolution timestamp (ISO 8601)
    pub resolved_at: String,

    /// Linked follow-up, usually a pull request number
    #[serde(rename = "pr_number", default)]
    pub followup_ref: Option<u64>,
}

/// Read `null` text or label fields as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl IssueRecord {
    /// Create a record with the required fields; everything else starts empty.
    pub fn new(issue_number: u64, title: impl Into<String>, resolved_at: impl Into<String>) -> Self {
        Self {
            issue_number,
            title: title.into(),
            body: String::new(),
            labels: Vec::new(),
            solution_summary: String::new(),
            handler_id: None,
            resolved_at: resolved_at.into(),
            followup_ref: None,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    #[must_use]
    pub fn with_solution(mut self, solution_summary: impl Into<String>) -> Self {
        self.solution_summary = solution_summary.into();
        self
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_handler(mut self, handler_id: impl Into<String>) -> Self {
        self.handler_id = Some(handler_id.into());
        self
    }

    #[must_use]
    pub fn with_followup(mut self, followup_ref: u64) -> Self {
        self.followup_ref = Some(followup_ref);
        self
    }

    /// The text the index tokenizes: title, body and solution summary.
    #[must_use]
    pub fn indexed_text(&self) -> String {
        format!("{} {} {}", self.title, self.body, self.solution_summary)
    }
}
