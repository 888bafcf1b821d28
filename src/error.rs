//! Error types for the Cairn CLI.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (2=db, 3=not_found, 4=validation, etc.)
//! - Context-aware recovery hints
//! - Structured JSON output for piped / non-TTY consumers

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Cairn operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
///
/// Each code maps to a SCREAMING_SNAKE string and a category-based
/// exit code. Scripts match on the string or on the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Database (exit 2)
    NotInitialized,
    AlreadyInitialized,
    DatabaseError,

    // Not Found (exit 3)
    EntryNotFound,
    ItemNotFound,

    // Validation (exit 4)
    RequiredField,
    InvalidArgument,

    // Config (exit 7)
    ConfigError,

    // I/O (exit 8)
    IoError,
    JsonError,

    // Network (exit 9)
    NetworkError,

    // Internal (exit 1)
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::AlreadyInitialized => "ALREADY_INITIALIZED",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::EntryNotFound => "ENTRY_NOT_FOUND",
            Self::ItemNotFound => "ITEM_NOT_FOUND",
            Self::RequiredField => "REQUIRED_FIELD",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::NetworkError => "NETWORK_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Category-based exit code (1-9).
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::NotInitialized | Self::AlreadyInitialized | Self::DatabaseError => 2,
            Self::EntryNotFound | Self::ItemNotFound => 3,
            Self::RequiredField | Self::InvalidArgument => 4,
            Self::ConfigError => 7,
            Self::IoError | Self::JsonError => 8,
            Self::NetworkError => 9,
        }
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in Cairn operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Not initialized: run `cairn init` first")]
    NotInitialized,

    #[error("Already initialized at {path}")]
    AlreadyInitialized { path: PathBuf },

    #[error("Entry not found: {id}")]
    EntryNotFound { id: String },

    #[error("Todo item not found: {id}")]
    ItemNotFound { id: String },

    #[error("Required field is empty: {field}")]
    RequiredField { field: &'static str },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotInitialized => ErrorCode::NotInitialized,
            Self::AlreadyInitialized { .. } => ErrorCode::AlreadyInitialized,
            Self::EntryNotFound { .. } => ErrorCode::EntryNotFound,
            Self::ItemNotFound { .. } => ErrorCode::ItemNotFound,
            Self::RequiredField { .. } => ErrorCode::RequiredField,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Database(_) => ErrorCode::DatabaseError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::JsonError,
            Self::Http(_) => ErrorCode::NetworkError,
            Self::Config(_) => ErrorCode::ConfigError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint for humans and scripts.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::NotInitialized => {
                Some("Run `cairn init` to create the database".to_string())
            }

            Self::AlreadyInitialized { path } => Some(format!(
                "Database already exists at {}. Use `--force` to reinitialize.",
                path.display()
            )),

            Self::EntryNotFound { .. } => {
                Some("Use `cairn list` to see available entries.".to_string())
            }

            Self::ItemNotFound { id } => Some(format!(
                "No todo item with ID '{id}'. Use `cairn todo show <entry-id>` to list items."
            )),

            Self::RequiredField { field } => {
                Some(format!("Provide a non-empty {field} (whitespace only does not count)."))
            }

            Self::InvalidArgument(_)
            | Self::Database(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::Http(_)
            | Self::Config(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    ///
    /// Includes error code, message, exit code, and optional recovery hint.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(Error::NotInitialized.exit_code(), 2);
        assert_eq!(
            Error::EntryNotFound { id: "ent_x".into() }.exit_code(),
            3
        );
        assert_eq!(Error::RequiredField { field: "title" }.exit_code(), 4);
        assert_eq!(Error::Config("bad".into()).exit_code(), 7);
    }

    #[test]
    fn test_structured_json_includes_hint() {
        let err = Error::EntryNotFound { id: "ent_abc".into() };
        let json = err.to_structured_json();
        assert_eq!(json["error"]["code"], "ENTRY_NOT_FOUND");
        assert_eq!(json["error"]["exit_code"], 3);
        assert!(json["error"]["hint"].is_string());
    }

    #[test]
    fn test_structured_json_without_hint() {
        let err = Error::InvalidArgument("nope".into());
        let json = err.to_structured_json();
        assert_eq!(json["error"]["code"], "INVALID_ARGUMENT");
        assert!(json["error"].get("hint").is_none());
    }
}
