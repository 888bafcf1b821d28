//! Note command implementations.

use crate::cli::NoteCommands;
use crate::error::Result;
use crate::model::Entry;
use serde::Serialize;
use std::path::PathBuf;

use super::{format_ts, open_storage};

#[derive(Serialize)]
struct NoteOutput {
    #[serde(flatten)]
    entry: Entry,
    body: String,
}

#[derive(Serialize)]
struct IdOutput<'a> {
    id: &'a str,
}

/// Execute note commands.
pub fn execute(command: &NoteCommands, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    match command {
        NoteCommands::Add { title, body } => add(title, body, db_path, json),
        NoteCommands::Show { id } => show(id, db_path, json),
        NoteCommands::Edit { id, title, body } => {
            edit(id, title.as_deref(), body.as_deref(), db_path, json)
        }
        NoteCommands::Rm { id } => rm(id, db_path, json),
    }
}

fn add(title: &str, body: &str, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut storage = open_storage(db_path)?;
    let id = storage.create_note(title, body)?;

    if json {
        println!("{}", serde_json::to_string(&IdOutput { id: &id })?);
    } else {
        println!("Created note {id}");
    }
    Ok(())
}

fn show(id: &str, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let storage = open_storage(db_path)?;
    let (entry, note) = storage.get_note(id)?;

    if json {
        let output = NoteOutput {
            entry,
            body: note.body,
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    print_header(&entry);
    if !note.body.is_empty() {
        println!();
        println!("{}", note.body);
    }
    Ok(())
}

fn edit(
    id: &str,
    title: Option<&str>,
    body: Option<&str>,
    db_path: Option<&PathBuf>,
    json: bool,
) -> Result<()> {
    let mut storage = open_storage(db_path)?;

    // Edits are whole-payload updates; fill the gaps from current state
    let (entry, note) = storage.get_note(id)?;
    let title = title.unwrap_or(&entry.title);
    let body = body.unwrap_or(&note.body);
    storage.update_note(id, title, body)?;

    if json {
        println!("{}", serde_json::to_string(&IdOutput { id })?);
    } else {
        println!("Updated note {id}");
    }
    Ok(())
}

fn rm(id: &str, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut storage = open_storage(db_path)?;
    storage.delete_entry(id)?;

    if json {
        println!("{}", serde_json::to_string(&IdOutput { id })?);
    } else {
        println!("Deleted {id}");
    }
    Ok(())
}

fn print_header(entry: &Entry) {
    println!("{}  {}", entry.id, entry.entry_type);
    println!("{}", entry.title);
    println!(
        "created {}  updated {}",
        format_ts(entry.created_at),
        format_ts(entry.updated_at)
    );
}
