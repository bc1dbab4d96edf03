//! Input validation for command-line arguments.
//!
//! The index itself accepts any well-typed record; these checks keep junk
//! out of the persisted file when records arrive from the command line.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use std::collections::HashSet;

use crate::error::{Error, Result};

/// Trim labels, reject blank ones, and drop repeats (first occurrence wins).
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if a label is empty after trimming.
pub fn normalize_labels(labels: &[String]) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::with_capacity(labels.len());

    for label in labels {
        let label = label.trim();
        if label.is_empty() {
            return Err(Error::InvalidArgument("label must not be empty".to_string()));
        }
        if seen.insert(label.to_string()) {
            normalized.push(label.to_string());
        }
    }

    Ok(normalized)
}

/// Validate a resolution timestamp, defaulting to now.
///
/// Accepts RFC 3339 (kept as given) or a plain `YYYY-MM-DD` date (expanded
/// to midnight UTC).
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] for anything else.
pub fn resolve_timestamp(value: Option<&str>) -> Result<String> {
    let Some(raw) = value.map(str::trim) else {
        return Ok(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
    };

    if DateTime::parse_from_rfc3339(raw).is_ok() {
        return Ok(raw.to_string());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().to_rfc3339_opts(SecondsFormat::Secs, true))
        .ok_or_else(|| Error::InvalidTimestamp {
            value: raw.to_string(),
        })
}

/// Require a non-blank value for a named field.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the value is blank.
pub fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Check a similarity threshold lies in `[0.0, 1.0]`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for NaN or out-of-range values.
pub fn validate_min_similarity(value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidArgument(format!(
            "min-score must be between 0.0 and 1.0, got {value}"
        )))
    }
}
