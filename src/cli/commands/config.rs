//! Config command: show or change saved search defaults.

use crate::cli::ConfigArgs;
use crate::config::{load_settings, resolve_search_options, save_settings, SearchSettings, Settings};
use crate::error::Result;
use crate::validate::validate_min_similarity;
use serde::Serialize;

#[derive(Serialize)]
struct ConfigOutput {
    saved: Option<SearchSettings>,
    effective_top_k: usize,
    effective_min_similarity: f64,
}

/// Execute the config command.
///
/// With no flags, prints saved and effective defaults. With `--top-k` or
/// `--min-score`, merges the values into the config file. `--reset` clears
/// them.
///
/// # Errors
///
/// Returns an error if the config file is unreadable or cannot be written,
/// or a value is out of range.
pub fn execute(args: &ConfigArgs, json: bool) -> Result<()> {
    let settings = if args.reset {
        // A malformed config file must not block the reset
        let settings = Settings::default();
        save_settings(&settings)?;
        settings
    } else {
        update_settings(args)?
    };

    print_settings(settings, json)
}

/// Load saved settings and merge in any values given on the command line.
fn update_settings(args: &ConfigArgs) -> Result<Settings> {
    let mut settings = load_settings()?;
    if args.top_k.is_some() || args.min_score.is_some() {
        let min_similarity = args.min_score.map(validate_min_similarity).transpose()?;
        let existing = settings.search.unwrap_or_default();
        settings.search = Some(SearchSettings {
            top_k: args.top_k.or(existing.top_k),
            min_similarity: min_similarity.or(existing.min_similarity),
        });
        save_settings(&settings)?;
    }
    Ok(settings)
}

fn print_settings(settings: Settings, json: bool) -> Result<()> {
    let effective = resolve_search_options(None, None);

    if json {
        let output = ConfigOutput {
            saved: settings.search,
            effective_top_k: effective.top_k,
            effective_min_similarity: effective.min_similarity,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        let saved = settings.search.unwrap_or_default();
        let show = |v: Option<String>| v.unwrap_or_else(|| "(default)".to_string());
        println!("Search defaults");
        println!("  top_k:          {}", show(saved.top_k.map(|v| v.to_string())));
        println!("  min_similarity: {}", show(saved.min_similarity.map(|v| v.to_string())));
        println!();
        println!(
            "Effective: top_k={}, min_similarity={}",
            effective.top_k, effective.min_similarity
        );
    }

    Ok(())
}
