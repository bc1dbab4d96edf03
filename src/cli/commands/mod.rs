//! Command implementations.

pub mod add;
pub mod completions;
pub mod config;
pub mod init;
pub mod search;
pub mod stats;
pub mod version;

use crate::config::resolve_index_path;
use crate::error::{Error, Result};
use std::path::PathBuf;

/// Resolve the index file for a command, honoring `--index`.
pub(crate) fn index_path(explicit: Option<&PathBuf>) -> Result<PathBuf> {
    resolve_index_path(explicit.map(PathBuf::as_path)).ok_or(Error::NotInitialized)
}
