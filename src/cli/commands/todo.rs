//! Todo command implementations.

use crate::cli::{TodoCommands, TodoItemCommands};
use crate::error::Result;
use crate::model::{Entry, TodoItem};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use super::{format_ts, open_storage};

#[derive(Serialize)]
struct TodoOutput {
    #[serde(flatten)]
    entry: Entry,
    items: Vec<TodoItem>,
}

#[derive(Serialize)]
struct IdOutput<'a> {
    id: &'a str,
}

/// Execute todo commands.
pub fn execute(command: &TodoCommands, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    match command {
        TodoCommands::Add { title } => add(title, db_path, json),
        TodoCommands::Show { id } => show(id, db_path, json),
        TodoCommands::Edit { id, title } => edit(id, title, db_path, json),
        TodoCommands::Rm { id } => rm(id, db_path, json),
        TodoCommands::Item { command } => execute_item(command, db_path, json),
    }
}

fn execute_item(
    command: &TodoItemCommands,
    db_path: Option<&PathBuf>,
    json: bool,
) -> Result<()> {
    match command {
        TodoItemCommands::Add { entry_id, body } => item_add(entry_id, body, db_path, json),
        TodoItemCommands::Edit { item_id, body } => item_edit(item_id, body, db_path, json),
        TodoItemCommands::Toggle { item_id } => item_toggle(item_id, db_path, json),
        TodoItemCommands::Rm { item_id } => item_rm(item_id, db_path, json),
    }
}

fn add(title: &str, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut storage = open_storage(db_path)?;
    let id = storage.create_todo(title)?;

    if json {
        println!("{}", serde_json::to_string(&IdOutput { id: &id })?);
    } else {
        println!("Created todo {id}");
    }
    Ok(())
}

fn show(id: &str, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let storage = open_storage(db_path)?;
    let (entry, items) = storage.get_todo(id)?;

    if json {
        let output = TodoOutput { entry, items };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("{}  {}", entry.id, entry.entry_type);
    println!("{}", entry.title);
    println!(
        "created {}  updated {}",
        format_ts(entry.created_at),
        format_ts(entry.updated_at)
    );

    if items.is_empty() {
        println!();
        println!("{}", "no items".dimmed());
        return Ok(());
    }

    println!();
    for item in &items {
        let mark = if item.is_done { "[x]" } else { "[ ]" };
        let body = if item.is_done {
            item.body.dimmed().strikethrough().to_string()
        } else {
            item.body.clone()
        };
        println!("{mark} {body}  {}", item.id.dimmed());
    }
    Ok(())
}

fn edit(id: &str, title: &str, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut storage = open_storage(db_path)?;
    storage.update_todo(id, title)?;

    if json {
        println!("{}", serde_json::to_string(&IdOutput { id })?);
    } else {
        println!("Updated todo {id}");
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

fn item_add(entry_id: &str, body: &str, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut storage = open_storage(db_path)?;
    let item_id = storage.add_todo_item(entry_id, body)?;

    if json {
        println!("{}", serde_json::to_string(&IdOutput { id: &item_id })?);
    } else {
        println!("Added item {item_id}");
    }
    Ok(())
}

fn item_edit(item_id: &str, body: &str, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut storage = open_storage(db_path)?;
    storage.update_todo_item(item_id, body)?;

    if json {
        println!("{}", serde_json::to_string(&IdOutput { id: item_id })?);
    } else {
        println!("Updated item {item_id}");
    }
    Ok(())
}

fn item_toggle(item_id: &str, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut storage = open_storage(db_path)?;
    storage.toggle_todo_item(item_id)?;

    if json {
        println!("{}", serde_json::to_string(&IdOutput { id: item_id })?);
    } else {
        println!("Toggled item {item_id}");
    }
    Ok(())
}

fn item_rm(item_id: &str, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut storage = open_storage(db_path)?;
    storage.delete_todo_item(item_id)?;

    if json {
        println!("{}", serde_json::to_string(&IdOutput { id: item_id })?);
    } else {
        println!("Deleted item {item_id}");
    }
    Ok(())
}
