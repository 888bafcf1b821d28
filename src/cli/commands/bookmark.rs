//! Bookmark command implementations.

use crate::checker;
use crate::cli::BookmarkCommands;
use crate::error::Result;
use crate::model::{Bookmark, Entry};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use super::{format_ts, open_storage};

#[derive(Serialize)]
struct BookmarkOutput {
    #[serde(flatten)]
    entry: Entry,
    url: String,
    last_status: Option<i64>,
    last_checked_at: Option<i64>,
    content_hash: Option<String>,
}

#[derive(Serialize)]
struct IdOutput<'a> {
    id: &'a str,
}

/// Execute bookmark commands.
pub fn execute(command: &BookmarkCommands, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    match command {
        BookmarkCommands::Add { title, url } => add(title, url, db_path, json),
        BookmarkCommands::Show { id } => show(id, db_path, json),
        BookmarkCommands::Edit { id, title, url } => {
            edit(id, title.as_deref(), url.as_deref(), db_path, json)
        }
        BookmarkCommands::Rm { id } => rm(id, db_path, json),
        BookmarkCommands::Check { id } => check(id, db_path, json),
    }
}

fn add(title: &str, url: &str, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut storage = open_storage(db_path)?;
    let id = storage.create_bookmark(title, url)?;

    if json {
        println!("{}", serde_json::to_string(&IdOutput { id: &id })?);
    } else {
        println!("Created bookmark {id}");
    }
    Ok(())
}

fn show(id: &str, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let storage = open_storage(db_path)?;
    let (entry, bookmark) = storage.get_bookmark(id)?;

    if json {
        let output = BookmarkOutput {
            entry,
            url: bookmark.url,
            last_status: bookmark.last_status,
            last_checked_at: bookmark.last_checked_at,
            content_hash: bookmark.content_hash,
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("{}  {}", entry.id, entry.entry_type);
    println!("{}", entry.title);
    println!("{}", bookmark.url.underline());
    println!(
        "created {}  updated {}",
        format_ts(entry.created_at),
        format_ts(entry.updated_at)
    );
    println!("{}", liveness_line(&bookmark));
    Ok(())
}

fn edit(
    id: &str,
    title: Option<&str>,
    url: Option<&str>,
    db_path: Option<&PathBuf>,
    json: bool,
) -> Result<()> {
    let mut storage = open_storage(db_path)?;

    let (entry, bookmark) = storage.get_bookmark(id)?;
    let title = title.unwrap_or(&entry.title);
    let url = url.unwrap_or(&bookmark.url);
    storage.update_bookmark(id, title, url)?;

    if json {
        println!("{}", serde_json::to_string(&IdOutput { id })?);
    } else {
        println!("Updated bookmark {id}");
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

fn check(id: &str, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut storage = open_storage(db_path)?;
    let outcome = checker::check(&mut storage, id)?;

    if json {
        println!("{}", serde_json::to_string(&outcome)?);
        return Ok(());
    }

    if outcome.fetch_failed() {
        println!("{id}: {}", "fetch failed".red());
    } else {
        let status = outcome.status.to_string();
        let status = if (200..300).contains(&outcome.status) {
            status.green()
        } else {
            status.yellow()
        };
        let hash = outcome.content_hash.as_deref().unwrap_or("-");
        println!("{id}: {status}  {hash}");
    }
    Ok(())
}

/// One-line liveness summary for human output.
fn liveness_line(bookmark: &Bookmark) -> String {
    match (bookmark.last_status, bookmark.last_checked_at) {
        (Some(0), Some(at)) => {
            format!("last check {}  {}", format_ts(at), "fetch failed".red())
        }
        (Some(status), Some(at)) => {
            format!("last check {}  status {status}", format_ts(at))
        }
        _ => "never checked".dimmed().to_string(),
    }
}
