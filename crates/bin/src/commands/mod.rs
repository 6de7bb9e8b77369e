//! Subcommand implementations.

use std::path::Path;

use dataops::json::{JsonData, io};

pub mod get;
pub mod inspect;
pub mod keys;
pub mod remove;
pub mod set;

/// Reads a document, or starts an empty one when the file does not exist.
pub(crate) fn read_or_default(path: &Path) -> dataops::Result<JsonData> {
    if path.exists() {
        io::read(path)
    } else {
        tracing::info!(path = %path.display(), "Starting a new document");
        Ok(JsonData::new())
    }
}
