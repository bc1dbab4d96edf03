//! Add command: index one resolved issue and persist the index.

use crate::cli::AddArgs;
use crate::error::Result;
use crate::index::SimilarityIndex;
use crate::model::IssueRecord;
use crate::store::LoadStatus;
use crate::validate::{normalize_labels, require_text, resolve_timestamp};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Serialize)]
struct AddOutput<'a> {
    issue_number: u64,
    title: &'a str,
    total_issues: usize,
    index: &'a Path,
}

/// Build a validated record from command-line arguments.
fn build_record(args: &AddArgs) -> Result<IssueRecord> {
    require_text("title", &args.title)?;
    let labels = normalize_labels(&args.labels)?;
    let resolved_at = resolve_timestamp(args.resolved_at.as_deref())?;

    let mut record = IssueRecord::new(args.number, args.title.trim(), resolved_at)
        .with_body(args.body.as_str())
        .with_solution(args.solution.as_str())
        .with_labels(labels);
    if let Some(agent) = args.agent.as_deref().map(str::trim).filter(|a| !a.is_empty()) {
        record = record.with_handler(agent);
    }
    if let Some(pr) = args.pr {
        record = record.with_followup(pr);
    }
    Ok(record)
}

/// Execute the add command.
///
/// # Errors
///
/// Returns an error for invalid input, a duplicate issue number, or a
/// failed save.
pub fn execute(args: &AddArgs, index: Option<&PathBuf>, json: bool) -> Result<()> {
    let record = build_record(args)?;
    let path = super::index_path(index)?;

    if crate::is_dry_run() {
        if json {
            let output = serde_json::json!({
                "dry_run": true,
                "action": "add_issue",
                "index": path,
                "issue": record,
            });
            println!("{output}");
        } else {
            println!("Would add issue #{}: {}", record.issue_number, record.title);
            println!("  Index: {}", path.display());
        }
        return Ok(());
    }

    let (mut index, status) = SimilarityIndex::open_with_status(&path);
    if let LoadStatus::Corrupt { reason } = &status {
        warn!(path = %path.display(), %reason, "Replacing corrupt index contents");
    }

    let issue_number = record.issue_number;
    let title = record.title.clone();
    index.add_document(record)?;
    index.save(&path)?;

    if json {
        let output = AddOutput {
            issue_number,
            title: &title,
            total_issues: index.len(),
            index: &path,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Indexed issue #{issue_number}: {title}");
        println!("  Total issues: {}", index.len());
    }

    Ok(())
}
