//! Entry model: the shared identity every typed record hangs off.
//!
//! An entry is created together with exactly one extension payload
//! (note body, bookmark URL, or todo item list). The `entry_type` tag
//! tells which extension table owns the payload.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The extension type an entry is paired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Note,
    Bookmark,
    Todo,
}

impl EntryType {
    /// Lowercase tag stored in the `entries.entry_type` column.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Note => "note",
            Self::Bookmark => "bookmark",
            Self::Todo => "todo",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "note" => Ok(Self::Note),
            "bookmark" => Ok(Self::Bookmark),
            "todo" => Ok(Self::Todo),
            other => Err(format!("unknown entry type: {other}")),
        }
    }
}

impl FromSql for EntryType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

impl ToSql for EntryType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

/// Shared identity row for every record.
///
/// Extension rows reference `id` with cascading foreign keys, so an
/// entry and its payload live and die together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier (`ent_` + short UUID)
    pub id: String,

    /// Which extension table holds the payload
    pub entry_type: EntryType,

    /// Display title
    pub title: String,

    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,

    /// Last edit timestamp (Unix milliseconds). Changes only on
    /// title/payload edits, never on reads or todo-item mutations.
    pub updated_at: i64,
}

/// Generate a new entry ID.
#[must_use]
pub fn new_entry_id() -> String {
    format!("ent_{}", &uuid::Uuid::new_v4().to_string()[..12])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_round_trip() {
        for t in [EntryType::Note, EntryType::Bookmark, EntryType::Todo] {
            assert_eq!(t.as_str().parse::<EntryType>().unwrap(), t);
        }
    }

    #[test]
    fn test_entry_type_rejects_unknown() {
        assert!("page".parse::<EntryType>().is_err());
    }

    #[test]
    fn test_new_entry_id_shape() {
        let id = new_entry_id();
        assert!(id.starts_with("ent_"));
        assert_eq!(id.len(), "ent_".len() + 12);
    }

    #[test]
    fn test_entry_type_serde_lowercase() {
        let json = serde_json::to_string(&EntryType::Bookmark).unwrap();
        assert_eq!(json, "\"bookmark\"");
    }
}
