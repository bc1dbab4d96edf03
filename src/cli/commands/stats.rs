//! Stats command implementation.

use crate::error::Result;
use crate::index::SimilarityIndex;
use crate::model::IndexStatistics;
use crate::store::LoadStatus;
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct StatsOutput<'a> {
    index: &'a Path,
    loaded: bool,
    #[serde(flatten)]
    statistics: &'a IndexStatistics,
}

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if the index path cannot be resolved or output fails.
pub fn execute(index: Option<&PathBuf>, json: bool) -> Result<()> {
    let path = super::index_path(index)?;
    let (index, status) = SimilarityIndex::open_with_status(&path);
    let stats = index.statistics();

    if crate::is_csv() {
        println!("handler,resolved_issues");
        for (handler, count) in &stats.handler_counts {
            println!("{},{count}", crate::csv_escape(handler));
        }
    } else if json {
        let output = StatsOutput {
            index: &path,
            loaded: status.is_loaded(),
            statistics: &stats,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", "Issue Index".bold().underline());
        println!();
        println!("Index:   {}", path.display());
        match status {
            LoadStatus::Loaded { .. } => {}
            LoadStatus::Missing => println!("{}", "  (no index file yet)".dimmed()),
            LoadStatus::Corrupt { ref reason } => {
                println!("{}", format!("  (corrupt, ignored: {reason})").yellow());
            }
        }
        println!();
        println!("Issues:          {}", stats.total_issues);
        println!("Unique terms:    {}", stats.total_unique_terms);
        println!("Terms per issue: {:.1}", stats.avg_terms_per_issue);

        if !stats.handler_counts.is_empty() {
            println!();
            println!("{}", "Resolved by:".blue().bold());
            for (handler, count) in &stats.handler_counts {
                println!("  {handler:<24} {count}");
            }
        }
    }

    Ok(())
}
