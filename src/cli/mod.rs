//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for query commands.
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table (default)
    #[default]
    Table,
    /// JSON (same as --json)
    Json,
    /// Comma-separated values
    Csv,
}

pub mod commands;

/// precedent - find resolved issues similar to a new one
#[derive(Parser, Debug)]
#[command(name = "precedent", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Index file (default: .precedent/index.json in the project, else ~/.precedent/index.json)
    #[arg(long, global = true, env = "PRECEDENT_INDEX")]
    pub index: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (table, json, csv)
    #[arg(long, value_enum, global = true, default_value_t)]
    pub format: OutputFormat,

    /// Preview changes without writing the index
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty issue index
    Init {
        /// Use global location (~/.precedent/)
        #[arg(long)]
        global: bool,

        /// Replace an existing index with an empty one
        #[arg(long)]
        force: bool,
    },

    /// Find resolved issues similar to a new one
    Search(SearchArgs),

    /// Index a resolved issue
    Add(AddArgs),

    /// Show index statistics
    Stats,

    /// Show or change search defaults
    Config(ConfigArgs),

    /// Print version information
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Title of the new issue
    pub title: String,

    /// Body of the new issue
    #[arg(short, long, default_value = "")]
    pub body: String,

    /// Maximum matches to return (0 or less returns none)
    #[arg(short, long, allow_negative_numbers = true)]
    pub top: Option<i64>,

    /// Minimum similarity score (0.0-1.0)
    #[arg(short, long)]
    pub min_score: Option<f64>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Issue number
    #[arg(short, long)]
    pub number: u64,

    /// Issue title
    #[arg(short, long)]
    pub title: String,

    /// Issue body
    #[arg(short, long, default_value = "")]
    pub body: String,

    /// How the issue was resolved
    #[arg(short, long)]
    pub solution: String,

    /// Who resolved it
    #[arg(short, long)]
    pub agent: Option<String>,

    /// Labels (space separated)
    #[arg(short, long, num_args = 1..)]
    pub labels: Vec<String>,

    /// Linked pull request number
    #[arg(long)]
    pub pr: Option<u64>,

    /// Resolution time, RFC 3339 or YYYY-MM-DD (default: now)
    #[arg(long)]
    pub resolved_at: Option<String>,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Default number of matches
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Default minimum similarity score (0.0-1.0)
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Remove saved search defaults
    #[arg(long, conflicts_with_all = ["top_k", "min_score"])]
    pub reset: bool,
}
