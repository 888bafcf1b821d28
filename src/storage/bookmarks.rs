//! Bookmark extension store.

use crate::error::{Error, Result};
use crate::model::{entry::new_entry_id, Bookmark, Entry};
use crate::validate::require_non_empty;
use rusqlite::OptionalExtension;
use tracing::debug;

use super::sqlite::{entry_from_row, SqliteStorage};

impl SqliteStorage {
    /// Create a bookmark: entry row plus bookmark row in one
    /// transaction. The liveness fields start out NULL (never checked).
    ///
    /// Returns the new entry's ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequiredField`] when title or url trims to
    /// empty, or a storage error if an insert fails.
    pub fn create_bookmark(&mut self, title: &str, url: &str) -> Result<String> {
        let title = require_non_empty("title", title)?.to_string();
        let url = require_non_empty("url", url)?.to_string();
        let id = new_entry_id();
        let now = chrono::Utc::now().timestamp_millis();

        self.mutate(|tx| {
            tx.execute(
                "INSERT INTO entries (id, entry_type, title, created_at, updated_at)
                 VALUES (?1, 'bookmark', ?2, ?3, ?3)",
                rusqlite::params![id, title, now],
            )?;

            tx.execute(
                "INSERT INTO bookmarks (entry_id, url) VALUES (?1, ?2)",
                rusqlite::params![id, url],
            )?;

            Ok(())
        })?;

        Ok(id)
    }

    /// Get a bookmark entry with its payload and liveness metadata.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntryNotFound`] if no bookmark entry with that
    /// ID joins to a payload row.
    pub fn get_bookmark(&self, id: &str) -> Result<(Entry, Bookmark)> {
        let found = self
            .conn()
            .query_row(
                "SELECT e.id, e.entry_type, e.title, e.created_at, e.updated_at,
                        b.url, b.last_status, b.last_checked_at, b.content_hash
                 FROM entries e
                 JOIN bookmarks b ON b.entry_id = e.id
                 WHERE e.id = ?1 AND e.entry_type = 'bookmark'",
                [id],
                |row| {
                    let entry = entry_from_row(row)?;
                    let bookmark = Bookmark {
                        entry_id: entry.id.clone(),
                        url: row.get(5)?,
                        last_status: row.get(6)?,
                        last_checked_at: row.get(7)?,
                        content_hash: row.get(8)?,
                    };
                    Ok((entry, bookmark))
                },
            )
            .optional()?;

        found.ok_or_else(|| Error::EntryNotFound { id: id.to_string() })
    }

    /// Update a bookmark's title and URL as one atomic unit.
    ///
    /// Liveness metadata is left alone; only the checker writes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequiredField`] on empty title/url,
    /// [`Error::EntryNotFound`] if the entry does not exist, or a
    /// storage error (partial failure leaves prior state unchanged).
    pub fn update_bookmark(&mut self, id: &str, title: &str, url: &str) -> Result<()> {
        let title = require_non_empty("title", title)?.to_string();
        let url = require_non_empty("url", url)?.to_string();
        let now = chrono::Utc::now().timestamp_millis();

        self.mutate(|tx| {
            let rows = tx.execute(
                "UPDATE entries SET title = ?1, updated_at = ?2
                 WHERE id = ?3 AND entry_type = 'bookmark'",
                rusqlite::params![title, now, id],
            )?;

            if rows == 0 {
                return Err(Error::EntryNotFound { id: id.to_string() });
            }

            tx.execute(
                "UPDATE bookmarks SET url = ?1 WHERE entry_id = ?2",
                rusqlite::params![url, id],
            )?;

            Ok(())
        })
    }

    /// Record the outcome of a liveness check.
    ///
    /// Writes status, content hash, and a fresh `last_checked_at`
    /// together. Does not touch `entries.updated_at`: a check is not an
    /// edit. Recording against a bookmark deleted mid-check is a silent
    /// no-op (the check is best-effort once the URL was read).
    ///
    /// Returns the timestamp that was recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn record_bookmark_check(
        &mut self,
        entry_id: &str,
        status: i64,
        content_hash: Option<&str>,
    ) -> Result<i64> {
        let now = chrono::Utc::now().timestamp_millis();

        let rows = self.conn().execute(
            "UPDATE bookmarks
             SET last_status = ?1, last_checked_at = ?2, content_hash = ?3
             WHERE entry_id = ?4",
            rusqlite::params![status, now, content_hash, entry_id],
        )?;
        debug!(entry_id, status, rows, "recorded link check");

        Ok(now)
    }
}
