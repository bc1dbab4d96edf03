//! Search command: rank resolved issues against new issue text.

use crate::cli::SearchArgs;
use crate::config::resolve_search_options;
use crate::error::Result;
use crate::index::{SearchOptions, SimilarityIndex};
use crate::model::SimilarityMatch;
use crate::store::LoadStatus;
use crate::validate::validate_min_similarity;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Serialize)]
struct SearchOutput<'a> {
    title: &'a str,
    body: &'a str,
    top_k: usize,
    min_similarity: f64,
    indexed_issues: usize,
    matches: &'a [SimilarityMatch],
    count: usize,
}

/// Execute the search command.
///
/// # Errors
///
/// Returns an error for an out-of-range `--min-score`, or if output fails.
pub fn execute(args: &SearchArgs, index: Option<&PathBuf>, json: bool) -> Result<()> {
    let min_similarity = args.min_score.map(validate_min_similarity).transpose()?;
    let options = resolve_search_options(args.top.map(clamp_top), min_similarity);

    let path = super::index_path(index)?;
    let (index, status) = SimilarityIndex::open_with_status(&path);

    info!(
        title = %args.title,
        top_k = options.top_k,
        min_similarity = options.min_similarity,
        documents = index.len(),
        "Searching for similar issues"
    );
    let matches = index.find_similar(&args.title, &args.body, &options);

    if crate::is_csv() {
        print_csv(&matches);
    } else if json {
        let output = SearchOutput {
            title: &args.title,
            body: &args.body,
            top_k: options.top_k,
            min_similarity: options.min_similarity,
            indexed_issues: index.len(),
            matches: &matches,
            count: matches.len(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        print_table(&matches, &options, index.len(), &status);
    }

    Ok(())
}

/// Non-positive `--top` values mean "no results".
fn clamp_top(top: i64) -> usize {
    usize::try_from(top).unwrap_or(0)
}

fn print_csv(matches: &[SimilarityMatch]) {
    println!("issue_number,similarity_score,title,handler_id,matching_terms,labels");
    for m in matches {
        println!(
            "{},{:.4},{},{},{},{}",
            m.issue_number,
            m.similarity_score,
            crate::csv_escape(&m.title),
            crate::csv_escape(m.handler_id.as_deref().unwrap_or("")),
            crate::csv_escape(&m.matching_terms.join(" ")),
            crate::csv_escape(&m.labels.join(" ")),
        );
    }
}

fn print_table(matches: &[SimilarityMatch], options: &SearchOptions, indexed: usize, status: &LoadStatus) {
    if indexed == 0 {
        match status {
            LoadStatus::Corrupt { .. } => {
                println!("{}", "Index file is corrupt; treating it as empty.".yellow());
            }
            _ => println!("Index is empty. Add resolved issues with 'precedent add'."),
        }
        return;
    }

    if matches.is_empty() {
        println!(
            "No similar issues found among {indexed} (min score {:.2}).",
            options.min_similarity
        );
        return;
    }

    println!(
        "{}",
        format!("Similar issues ({} of {indexed} indexed):", matches.len())
            .bold()
            .underline()
    );
    println!();

    for m in matches {
        println!(
            "{} {}  {}",
            format!("#{}", m.issue_number).cyan().bold(),
            m.title,
            format!("{:.1}%", m.similarity_score * 100.0).green()
        );
        if let Some(ref handler) = m.handler_id {
            println!("  Resolved by: {handler}");
        }
        if !m.labels.is_empty() {
            println!("  Labels:      {}", m.labels.join(", "));
        }
        if !m.matching_terms.is_empty() {
            println!("  Terms:       {}", m.matching_terms.join(", ").dimmed());
        }
        if !m.solution_summary.is_empty() {
            let summary = if m.solution_summary.chars().count() > 100 {
                let cut: String = m.solution_summary.chars().take(100).collect();
                format!("{cut}...")
            } else {
                m.solution_summary.clone()
            };
            println!("  Solution:    {summary}");
        }
        println!();
    }
}
