//! Initialize the Cairn database.

use crate::error::{Error, Result};
use crate::storage::SqliteStorage;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use super::require_db_path;

#[derive(Serialize)]
struct InitOutput {
    database: PathBuf,
}

/// Execute the init command.
///
/// Creates the database file (and its parent directory), applies the
/// schema, and runs all migrations. With `--force`, an existing
/// database is removed first.
///
/// # Errors
///
/// Returns [`Error::AlreadyInitialized`] if the database exists and
/// `--force` was not given, or an error if creation fails.
pub fn execute(force: bool, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let path = require_db_path(db_path)?;

    if path.exists() {
        if !force {
            return Err(Error::AlreadyInitialized { path });
        }
        fs::remove_file(&path)?;
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Opening creates the file, applies schema, and migrates
    let _storage = SqliteStorage::open(&path)?;
    info!(path = %path.display(), "initialized database");

    if json {
        let output = InitOutput {
            database: path.clone(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Initialized database at {}", path.display());
    }

    Ok(())
}
