//! Command implementations.

pub mod bookmark;
pub mod completions;
pub mod init;
pub mod list;
pub mod note;
pub mod todo;
pub mod version;

use crate::config::resolve_db_path;
use crate::error::{Error, Result};
use crate::storage::SqliteStorage;
use std::path::PathBuf;

/// Resolve the database path or fail with a config error.
pub(crate) fn require_db_path(db_path: Option<&PathBuf>) -> Result<PathBuf> {
    resolve_db_path(db_path.map(PathBuf::as_path))
        .ok_or_else(|| Error::Config("Could not determine database location".to_string()))
}

/// Open the storage handle every command goes through.
///
/// Refuses to run against a database that `cairn init` has not
/// created yet.
pub(crate) fn open_storage(db_path: Option<&PathBuf>) -> Result<SqliteStorage> {
    let path = require_db_path(db_path)?;

    if !path.exists() {
        return Err(Error::NotInitialized);
    }

    SqliteStorage::open(&path)
}

/// Render a millisecond timestamp for human output.
pub(crate) fn format_ts(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map_or_else(|| ms.to_string(), |dt| dt.format("%Y-%m-%d %H:%M").to_string())
}
