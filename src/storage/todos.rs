//! Todo extension store.
//!
//! The parent entry carries the title only; the payload is the 1:many
//! item list. Item sub-mutations leave the parent's `updated_at` alone.

use crate::error::{Error, Result};
use crate::model::{entry::new_entry_id, todo::new_item_id, Entry, TodoItem};
use crate::validate::require_non_empty;
use rusqlite::OptionalExtension;

use super::sqlite::{entry_from_row, SqliteStorage};

impl SqliteStorage {
    /// Create a todo entry. There is no extension row at creation; the
    /// item table starts empty.
    ///
    /// Returns the new entry's ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequiredField`] when the title trims to empty,
    /// or a storage error if the insert fails.
    pub fn create_todo(&mut self, title: &str) -> Result<String> {
        let title = require_non_empty("title", title)?.to_string();
        let id = new_entry_id();
        let now = chrono::Utc::now().timestamp_millis();

        self.mutate(|tx| {
            tx.execute(
                "INSERT INTO entries (id, entry_type, title, created_at, updated_at)
                 VALUES (?1, 'todo', ?2, ?3, ?3)",
                rusqlite::params![id, title, now],
            )?;
            Ok(())
        })?;

        Ok(id)
    }

    /// Get a todo entry with its items in position order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntryNotFound`] if no todo entry with that ID
    /// exists.
    pub fn get_todo(&self, id: &str) -> Result<(Entry, Vec<TodoItem>)> {
        let entry = self
            .conn()
            .query_row(
                "SELECT id, entry_type, title, created_at, updated_at
                 FROM entries
                 WHERE id = ?1 AND entry_type = 'todo'",
                [id],
                entry_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::EntryNotFound { id: id.to_string() })?;

        let mut stmt = self.conn().prepare(
            "SELECT id, entry_id, body, is_done, position, created_at
             FROM todo_items
             WHERE entry_id = ?1
             ORDER BY position",
        )?;

        let items = stmt
            .query_map([id], |row| {
                Ok(TodoItem {
                    id: row.get(0)?,
                    entry_id: row.get(1)?,
                    body: row.get(2)?,
                    is_done: row.get(3)?,
                    position: row.get(4)?,
                    created_at: row.get(5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((entry, items))
    }

    /// Update a todo's title.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequiredField`] on an empty title or
    /// [`Error::EntryNotFound`] if the entry does not exist.
    pub fn update_todo(&mut self, id: &str, title: &str) -> Result<()> {
        let title = require_non_empty("title", title)?.to_string();
        let now = chrono::Utc::now().timestamp_millis();

        let rows = self.conn().execute(
            "UPDATE entries SET title = ?1, updated_at = ?2
             WHERE id = ?3 AND entry_type = 'todo'",
            rusqlite::params![title, now, id],
        )?;

        if rows == 0 {
            return Err(Error::EntryNotFound { id: id.to_string() });
        }
        Ok(())
    }

    /// Append an item to a todo at `max(position)+1` (1 when empty).
    ///
    /// Returns the new item's ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequiredField`] on an empty body or
    /// [`Error::EntryNotFound`] if the entry is missing or not a todo.
    pub fn add_todo_item(&mut self, entry_id: &str, body: &str) -> Result<String> {
        let body = require_non_empty("body", body)?.to_string();
        let id = new_item_id();
        let now = chrono::Utc::now().timestamp_millis();

        self.mutate(|tx| {
            let owner: Option<String> = tx
                .query_row(
                    "SELECT id FROM entries WHERE id = ?1 AND entry_type = 'todo'",
                    [entry_id],
                    |row| row.get(0),
                )
                .optional()?;

            if owner.is_none() {
                return Err(Error::EntryNotFound {
                    id: entry_id.to_string(),
                });
            }

            tx.execute(
                "INSERT INTO todo_items (id, entry_id, body, is_done, position, created_at)
                 VALUES (?1, ?2, ?3, 0,
                         COALESCE((SELECT MAX(position) FROM todo_items WHERE entry_id = ?2), 0) + 1,
                         ?4)",
                rusqlite::params![id, entry_id, body, now],
            )?;

            Ok(())
        })?;

        Ok(id)
    }

    /// Replace an item's body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequiredField`] on an empty body or
    /// [`Error::ItemNotFound`] if the item does not exist.
    pub fn update_todo_item(&mut self, item_id: &str, body: &str) -> Result<()> {
        let body = require_non_empty("body", body)?.to_string();

        let rows = self.conn().execute(
            "UPDATE todo_items SET body = ?1 WHERE id = ?2",
            rusqlite::params![body, item_id],
        )?;

        if rows == 0 {
            return Err(Error::ItemNotFound {
                id: item_id.to_string(),
            });
        }
        Ok(())
    }

    /// Flip an item's done flag. No-op if the item is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn toggle_todo_item(&mut self, item_id: &str) -> Result<()> {
        self.conn().execute(
            "UPDATE todo_items SET is_done = NOT is_done WHERE id = ?1",
            [item_id],
        )?;
        Ok(())
    }

    /// Delete an item. Deleting a missing ID is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_todo_item(&mut self, item_id: &str) -> Result<()> {
        self.conn()
            .execute("DELETE FROM todo_items WHERE id = ?1", [item_id])?;
        Ok(())
    }
}
