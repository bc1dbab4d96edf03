//! Search settings.
//!
//! Loads and saves defaults from `~/.precedent/config.json`:
//!
//! ```json
//! { "search": { "top_k": 5, "min_similarity": 0.1 } }
//! ```
//!
//! Resolution priority for each value: CLI flag > environment variable >
//! config file > built-in default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::index::{SearchOptions, DEFAULT_MIN_SIMILARITY, DEFAULT_TOP_K};
use crate::store::atomic_write;

/// Environment variable overriding the default result count.
pub const TOP_K_ENV: &str = "PRECEDENT_TOP_K";

/// Environment variable overriding the default similarity threshold.
pub const MIN_SIMILARITY_ENV: &str = "PRECEDENT_MIN_SIMILARITY";

/// Search defaults stored in the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_similarity: Option<f64>,
}

/// Config file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub search: Option<SearchSettings>,
}

/// Get the config file path.
fn config_path() -> Result<PathBuf> {
    super::global_dir()
        .map(|dir| dir.join("config.json"))
        .ok_or(Error::Config("Could not determine home directory".into()))
}

/// Load settings from the global config file.
///
/// # Errors
///
/// Returns [`Error::Config`] if the file exists but cannot be read or parsed.
pub fn load_settings() -> Result<Settings> {
    load_settings_from(&config_path()?)
}

/// Load settings from an explicit path; a missing file yields defaults.
///
/// # Errors
///
/// Returns [`Error::Config`] if the file exists but cannot be read or parsed.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read config file: {e}")))?;

    serde_json::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse config file: {e}")))
}

/// Save settings to the global config file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(&config_path()?, settings)
}

/// Save settings to an explicit path.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
    atomic_write(path, &content)
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Pick `top_k` from an env value, then settings, then the default.
///
/// Unparseable env values are ignored.
#[must_use]
pub fn pick_top_k(env: Option<&str>, settings: Option<&SearchSettings>) -> usize {
    env.and_then(|v| v.trim().parse().ok())
        .or_else(|| settings.and_then(|s| s.top_k))
        .unwrap_or(DEFAULT_TOP_K)
}

/// Pick `min_similarity` from an env value, then settings, then the default.
///
/// Values that are not finite numbers in `[0.0, 1.0]` are ignored.
#[must_use]
pub fn pick_min_similarity(env: Option<&str>, settings: Option<&SearchSettings>) -> f64 {
    let valid = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
    env.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| valid(*v))
        .or_else(|| settings.and_then(|s| s.min_similarity).filter(|v| valid(*v)))
        .unwrap_or(DEFAULT_MIN_SIMILARITY)
}

fn search_settings() -> Option<SearchSettings> {
    load_settings().ok().and_then(|s| s.search)
}

/// Resolve the default result count.
#[must_use]
pub fn resolve_top_k() -> usize {
    pick_top_k(env_value(TOP_K_ENV).as_deref(), search_settings().as_ref())
}

/// Resolve the default similarity threshold.
#[must_use]
pub fn resolve_min_similarity() -> f64 {
    pick_min_similarity(env_value(MIN_SIMILARITY_ENV).as_deref(), search_settings().as_ref())
}

/// Resolve search options, letting explicit values win.
#[must_use]
pub fn resolve_search_options(top_k: Option<usize>, min_similarity: Option<f64>) -> SearchOptions {
    SearchOptions {
        top_k: top_k.unwrap_or_else(resolve_top_k),
        min_similarity: min_similarity.unwrap_or_else(resolve_min_similarity),
    }
}
