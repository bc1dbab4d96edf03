//! Version command: binary version plus the index schema it reads and writes.

use crate::error::Result;
use crate::store::SCHEMA_VERSION;
use serde::Serialize;

#[derive(Serialize)]
struct VersionOutput {
    version: &'static str,
    index_schema: &'static str,
    profile: &'static str,
}

impl VersionOutput {
    fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            index_schema: SCHEMA_VERSION,
            profile: if cfg!(debug_assertions) { "debug" } else { "release" },
        }
    }
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    let info = VersionOutput::current();

    if json {
        println!("{}", serde_json::to_string(&info)?);
    } else {
        println!(
            "precedent {} (index schema {}, {} build)",
            info.version, info.index_schema, info.profile
        );
    }
    Ok(())
}
