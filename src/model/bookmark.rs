//! Bookmark payload: a URL plus link-liveness metadata.

use serde::{Deserialize, Serialize};

/// A bookmark's extension row.
///
/// The three liveness fields start out `None` ("never checked") and are
/// written together by the link checker. `last_status` of 0 is the
/// fetch-failure sentinel, distinct from any real HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    /// Owning entry ID
    pub entry_id: String,

    /// Target URL (stored as given; no format validation beyond non-empty)
    pub url: String,

    /// HTTP status from the last check, 0 on fetch failure
    pub last_status: Option<i64>,

    /// When the last check ran (Unix milliseconds)
    pub last_checked_at: Option<i64>,

    /// SHA-256 hex of the fetched body, `None` when the fetch failed
    pub content_hash: Option<String>,
}

impl Bookmark {
    /// Whether the last check recorded a fetch failure.
    #[must_use]
    pub fn fetch_failed(&self) -> bool {
        self.last_status == Some(0)
    }
}
