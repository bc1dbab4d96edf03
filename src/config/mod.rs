//! Configuration management.
//!
//! This module resolves where the persisted index lives and which search
//! defaults apply.
//!
//! # Layout
//!
//! - **Project index**: `.precedent/index.json` at the project root, created
//!   by `precedent init`
//! - **Global index**: `~/.precedent/index.json`, created by
//!   `precedent init --global`
//! - **Settings**: `~/.precedent/config.json` (see [`settings`])

pub mod settings;

pub use settings::{
    load_settings, resolve_min_similarity, resolve_search_options, resolve_top_k, save_settings,
    SearchSettings, Settings,
};

use std::path::{Path, PathBuf};

/// Name of the per-project and global data directory.
pub const DATA_DIR_NAME: &str = ".precedent";

/// File name of the persisted index inside the data directory.
pub const INDEX_FILE_NAME: &str = "index.json";

/// Discover the project-level `.precedent/` directory.
///
/// Resolution strategy:
/// 1. Check the **git root** first, so a nested directory cannot shadow the
///    real project root.
/// 2. Fall back to walking up from CWD (for non-git projects).
#[must_use]
pub fn discover_project_dir() -> Option<PathBuf> {
    if let Some(git_root) = git_toplevel() {
        let candidate = git_root.join(DATA_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }
    }

    let cwd = std::env::current_dir().ok()?;
    find_data_dir_upwards(&cwd)
}

/// Walk up from `start` looking for a `.precedent/` directory.
#[must_use]
pub fn find_data_dir_upwards(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DATA_DIR_NAME))
        .find(|candidate| candidate.is_dir())
}

/// Get the git repository root directory.
fn git_toplevel() -> Option<PathBuf> {
    std::process::Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| PathBuf::from(String::from_utf8_lossy(&o.stdout).trim().to_string()))
}

/// Get the global `~/.precedent/` directory.
#[must_use]
pub fn global_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(DATA_DIR_NAME))
}

/// Resolve the index file path.
///
/// Priority:
/// 1. `explicit_path` (the `--index` flag, which also reads `PRECEDENT_INDEX`)
/// 2. Project `.precedent/index.json`
/// 3. Global `~/.precedent/index.json`
///
/// Returns `None` only if no home directory can be determined.
#[must_use]
pub fn resolve_index_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    discover_project_dir()
        .or_else(global_dir)
        .map(|dir| dir.join(INDEX_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_index_path_with_explicit() {
        let explicit = PathBuf::from("/custom/path/issues.json");
        let result = resolve_index_path(Some(&explicit));
        assert_eq!(result, Some(explicit));
    }

    #[test]
    fn test_resolve_index_path_default_ends_with_index_file() {
        let result = resolve_index_path(None).unwrap();
        assert!(result.ends_with(INDEX_FILE_NAME));
        assert!(result.parent().unwrap().ends_with(DATA_DIR_NAME));
    }

    #[test]
    fn test_global_dir_returns_some() {
        assert!(global_dir().is_some());
    }

    #[test]
    fn test_find_data_dir_upwards() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join(DATA_DIR_NAME);
        fs::create_dir_all(&data_dir).unwrap();
        let nested = temp_dir.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_data_dir_upwards(&nested), Some(data_dir));
    }

    #[test]
    fn test_find_data_dir_ignores_plain_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(DATA_DIR_NAME), "not a dir").unwrap();

        let found = find_data_dir_upwards(temp_dir.path());
        assert_ne!(found, Some(temp_dir.path().join(DATA_DIR_NAME)));
    }
}
