//! Create an empty issue index.
//!
//! - **Project init (`precedent init`)**: creates `.precedent/index.json` in
//!   the current directory. Later commands run anywhere inside the project
//!   find it by walking up.
//! - **Global init (`precedent init --global`)**: creates
//!   `~/.precedent/index.json`, used when no project index exists.
//!
//! An explicit `--index` path takes precedence over both.

use crate::config::{global_dir, DATA_DIR_NAME, INDEX_FILE_NAME};
use crate::error::{Error, Result};
use crate::store::DocumentStore;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Serialize)]
struct InitOutput {
    path: PathBuf,
    global: bool,
}

/// Execute the init command.
///
/// # Errors
///
/// Returns [`Error::AlreadyInitialized`] if an index exists and `force` is
/// not set, or an I/O error if the file cannot be written.
pub fn execute(explicit: Option<&PathBuf>, global: bool, force: bool, json: bool) -> Result<()> {
    let path = match explicit {
        Some(path) => path.clone(),
        None if global => global_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?
            .join(INDEX_FILE_NAME),
        None => Path::new(".").join(DATA_DIR_NAME).join(INDEX_FILE_NAME),
    };

    create_index(&path, force)?;

    if json {
        let output = InitOutput { path, global };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Initialized empty issue index");
        println!("  Index: {}", path.display());
        println!();
        println!("Next: add resolved issues with 'precedent add --number <n> --title ... --solution ...'");
    }

    Ok(())
}

/// Write an empty index at `path`.
fn create_index(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::AlreadyInitialized {
            path: path.to_path_buf(),
        });
    }

    DocumentStore::new().save(path)?;
    info!(path = %path.display(), "Created empty index");
    Ok(())
}
