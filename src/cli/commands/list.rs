//! Dashboard listing: every entry, most recently updated first.

use crate::error::Result;
use crate::model::{Entry, EntryType};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use super::{format_ts, open_storage};

#[derive(Serialize)]
struct ListOutput {
    entries: Vec<Entry>,
    count: usize,
}

/// Execute the list command.
pub fn execute(db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let storage = open_storage(db_path)?;
    let entries = storage.list_entries()?;

    if json {
        let output = ListOutput {
            count: entries.len(),
            entries,
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No entries yet. Try `cairn note add \"My first note\"`.");
        return Ok(());
    }

    for entry in &entries {
        let tag = match entry.entry_type {
            EntryType::Note => "note    ".blue(),
            EntryType::Bookmark => "bookmark".magenta(),
            EntryType::Todo => "todo    ".yellow(),
        };
        println!(
            "{}  {}  {}  {}",
            entry.id.dimmed(),
            tag,
            format_ts(entry.updated_at).dimmed(),
            entry.title
        );
    }

    Ok(())
}
