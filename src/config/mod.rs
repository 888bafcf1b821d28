//! Configuration management.
//!
//! Cairn keeps a single SQLite database. Its location is resolved from,
//! in order: the `--db` flag, the `CAIRN_DB` environment variable
//! (handled by clap), and the default local development target
//! `~/.cairn/cairn.db`.

use std::path::{Path, PathBuf};

/// Default database location: `~/.cairn/cairn.db`.
///
/// Returns `None` when no home directory can be determined.
#[must_use]
pub fn default_db_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".cairn").join("cairn.db"))
}

/// Resolve the database path from an explicit override or the default.
#[must_use]
pub fn resolve_db_path(flag: Option<&Path>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf).or_else(default_db_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_default() {
        let explicit = PathBuf::from("/tmp/elsewhere.db");
        assert_eq!(resolve_db_path(Some(&explicit)), Some(explicit));
    }

    #[test]
    fn test_default_ends_with_cairn_db() {
        if let Some(path) = resolve_db_path(None) {
            assert!(path.ends_with(".cairn/cairn.db"));
        }
    }
}
