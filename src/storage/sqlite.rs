//! Storage handle and entry-level operations.
//!
//! `SqliteStorage` is the injected storage dependency every store
//! operation goes through: the CLI opens one handle per invocation and
//! passes it explicitly, never through global state. Extension stores
//! add their operations in sibling modules as further `impl` blocks.

use crate::error::Result;
use crate::model::Entry;
use rusqlite::{Connection, Row, Transaction};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// SQLite-based storage backend.
#[derive(Debug)]
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open a database at the given path.
    ///
    /// Creates the database, applies schema, and runs pending
    /// migrations if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established, the
    /// schema fails, or a migration fails to apply.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_timeout(path, None)
    }

    /// Open a database with an optional busy timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or schema fails.
    pub fn open_with_timeout(path: &Path, timeout_ms: Option<u64>) -> Result<Self> {
        let conn = Connection::open(path)?;

        if let Some(timeout) = timeout_ms {
            conn.busy_timeout(Duration::from_millis(timeout))?;
        } else {
            // Default 5 second timeout
            conn.busy_timeout(Duration::from_secs(5))?;
        }

        super::schema::apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        super::schema::apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Get a reference to the underlying connection (for read operations).
    #[must_use]
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Execute a multi-statement mutation as one atomic unit.
    ///
    /// Begins an IMMEDIATE transaction (for write locking), runs the
    /// closure, and commits. Any error rolls the whole unit back, so
    /// entry+extension writes either both land or neither does.
    ///
    /// # Errors
    ///
    /// Returns the closure's error after rollback, or a storage error
    /// from begin/commit.
    pub fn mutate<F, R>(&mut self, f: F) -> Result<R>
    where
        F: FnOnce(&Transaction) -> Result<R>,
    {
        let tx = self
            .conn
            .transaction_with_behavior(rusqlite::TransactionBehavior::Immediate)?;

        let result = f(&tx)?;

        tx.commit()?;
        Ok(result)
    }

    // ================
    // Entry Operations
    // ================

    /// List all entries, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_entries(&self) -> Result<Vec<Entry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, entry_type, title, created_at, updated_at
             FROM entries
             ORDER BY updated_at DESC",
        )?;

        let entries = stmt
            .query_map([], entry_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(entries)
    }

    /// Delete an entry by ID, cascading to its extension row(s).
    ///
    /// Deleting a missing ID is not an error (delete is idempotent).
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_entry(&mut self, id: &str) -> Result<()> {
        let rows = self.conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
        debug!(id, rows, "deleted entry");
        Ok(())
    }
}

/// Map an entry row in `(id, entry_type, title, created_at, updated_at)`
/// column order, as selected by every entry/extension query.
pub(crate) fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        entry_type: row.get(1)?,
        title: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}
