//! Note extension store.

use crate::error::{Error, Result};
use crate::model::{entry::new_entry_id, Entry, Note};
use crate::validate::require_non_empty;
use rusqlite::OptionalExtension;

use super::sqlite::{entry_from_row, SqliteStorage};

impl SqliteStorage {
    /// Create a note: the entry row and the note row land in one
    /// transaction, so either both exist or neither does.
    ///
    /// Returns the new entry's ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequiredField`] when the title trims to empty,
    /// or a storage error if an insert fails.
    pub fn create_note(&mut self, title: &str, body: &str) -> Result<String> {
        let title = require_non_empty("title", title)?.to_string();
        let id = new_entry_id();
        let now = chrono::Utc::now().timestamp_millis();

        self.mutate(|tx| {
            tx.execute(
                "INSERT INTO entries (id, entry_type, title, created_at, updated_at)
                 VALUES (?1, 'note', ?2, ?3, ?3)",
                rusqlite::params![id, title, now],
            )?;

            tx.execute(
                "INSERT INTO notes (entry_id, body) VALUES (?1, ?2)",
                rusqlite::params![id, body],
            )?;

            Ok(())
        })?;

        Ok(id)
    }

    /// Get a note entry with its payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntryNotFound`] if no note entry with that ID
    /// joins to a payload row.
    pub fn get_note(&self, id: &str) -> Result<(Entry, Note)> {
        let found = self
            .conn()
            .query_row(
                "SELECT e.id, e.entry_type, e.title, e.created_at, e.updated_at, n.body
                 FROM entries e
                 JOIN notes n ON n.entry_id = e.id
                 WHERE e.id = ?1 AND e.entry_type = 'note'",
                [id],
                |row| {
                    let entry = entry_from_row(row)?;
                    let body: String = row.get(5)?;
                    Ok((entry, body))
                },
            )
            .optional()?;

        let (entry, body) = found.ok_or_else(|| Error::EntryNotFound { id: id.to_string() })?;
        let note = Note {
            entry_id: entry.id.clone(),
            body,
        };
        Ok((entry, note))
    }

    /// Update a note's title and body as one atomic unit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequiredField`] on an empty title,
    /// [`Error::EntryNotFound`] if the entry does not exist, or a
    /// storage error (partial failure leaves prior state unchanged).
    pub fn update_note(&mut self, id: &str, title: &str, body: &str) -> Result<()> {
        let title = require_non_empty("title", title)?.to_string();
        let now = chrono::Utc::now().timestamp_millis();

        self.mutate(|tx| {
            let rows = tx.execute(
                "UPDATE entries SET title = ?1, updated_at = ?2
                 WHERE id = ?3 AND entry_type = 'note'",
                rusqlite::params![title, now, id],
            )?;

            if rows == 0 {
                return Err(Error::EntryNotFound { id: id.to_string() });
            }

            tx.execute(
                "UPDATE notes SET body = ?1 WHERE entry_id = ?2",
                rusqlite::params![body, id],
            )?;

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_get_round_trip() {
        let mut storage = SqliteStorage::open_memory().unwrap();
        let id = storage.create_note("  Groceries  ", "milk, eggs").unwrap();

        let (entry, note) = storage.get_note(&id).unwrap();
        assert_eq!(entry.id, id);
        assert_eq!(entry.title, "Groceries"); // stored trimmed
        assert_eq!(entry.entry_type, crate::model::EntryType::Note);
        assert_eq!(entry.created_at, entry.updated_at);
        assert_eq!(note.body, "milk, eggs");
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let mut storage = SqliteStorage::open_memory().unwrap();
        assert!(matches!(
            storage.create_note("   ", "body"),
            Err(Error::RequiredField { field: "title" })
        ));
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let storage = SqliteStorage::open_memory().unwrap();
        assert!(matches!(
            storage.get_note("ent_missing"),
            Err(Error::EntryNotFound { .. })
        ));
    }

    #[test]
    fn test_get_rejects_type_mismatch() {
        let mut storage = SqliteStorage::open_memory().unwrap();
        let id = storage.create_bookmark("b", "https://example.com").unwrap();

        // A bookmark ID is not visible through the note store
        assert!(matches!(
            storage.get_note(&id),
            Err(Error::EntryNotFound { .. })
        ));
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut storage = SqliteStorage::open_memory().unwrap();
        let id = storage.create_note("t", "b").unwrap();

        storage.update_note(&id, "new title", "new body").unwrap();
        let (first_entry, first_note) = storage.get_note(&id).unwrap();

        storage.update_note(&id, "new title", "new body").unwrap();
        let (second_entry, second_note) = storage.get_note(&id).unwrap();

        assert_eq!(first_entry.title, second_entry.title);
        assert_eq!(first_note.body, second_note.body);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut storage = SqliteStorage::open_memory().unwrap();
        assert!(matches!(
            storage.update_note("ent_missing", "t", "b"),
            Err(Error::EntryNotFound { .. })
        ));
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let mut storage = SqliteStorage::open_memory().unwrap();
        let id = storage.create_note("t", "b").unwrap();

        storage.delete_entry(&id).unwrap();
        assert!(matches!(
            storage.get_note(&id),
            Err(Error::EntryNotFound { .. })
        ));

        // Cascade removed the payload row too
        let orphans: i64 = storage
            .conn()
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[test]
    fn test_create_is_all_or_nothing() {
        let mut storage = SqliteStorage::open_memory().unwrap();

        // Force the second insert of the create unit to fail
        storage.conn().execute_batch("DROP TABLE notes").unwrap();
        assert!(storage.create_note("t", "b").is_err());

        // No orphan entry row may survive
        let count: i64 = storage
            .conn()
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
