//! Bookmark link-liveness checker.
//!
//! A check is a manually-triggered, single-attempt, synchronous fetch:
//! no retry, no backoff, no scheduling. Transport failures (DNS, TLS,
//! timeout, refused connection, a read error mid-body) are recorded as
//! status 0 with no hash rather than surfaced as errors.

use crate::error::Result;
use crate::storage::SqliteStorage;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::io::Read;
use std::time::Duration;
use tracing::debug;

/// Total wall-clock budget for one fetch, connect through body read.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// How much of the response body is read and hashed; the rest is
/// discarded, which is not an error.
pub const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// What one check recorded onto the bookmark.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    /// The checked entry
    pub entry_id: String,

    /// HTTP status, or 0 when the fetch failed
    pub status: i64,

    /// SHA-256 hex of the (possibly truncated) body
    pub content_hash: Option<String>,

    /// Recorded check time (Unix milliseconds)
    pub checked_at: i64,
}

impl CheckOutcome {
    /// Whether this check recorded a fetch failure.
    #[must_use]
    pub fn fetch_failed(&self) -> bool {
        self.status == 0
    }
}

/// Check a bookmark's URL and record the outcome.
///
/// Looks the URL up through the bookmark store, fetches it within
/// [`FETCH_TIMEOUT`] reading at most [`MAX_BODY_BYTES`], and writes
/// status + hash + `last_checked_at` back in both the success and the
/// failure outcome.
///
/// # Errors
///
/// Returns [`crate::Error::EntryNotFound`] if the ID is not a bookmark,
/// or a storage error if the lookup or the recording fails. Fetch
/// failures do not surface here.
pub fn check(storage: &mut SqliteStorage, entry_id: &str) -> Result<CheckOutcome> {
    let (_, bookmark) = storage.get_bookmark(entry_id)?;

    let (status, content_hash) = fetch(&bookmark.url)?;
    let checked_at = storage.record_bookmark_check(entry_id, status, content_hash.as_deref())?;

    Ok(CheckOutcome {
        entry_id: entry_id.to_string(),
        status,
        content_hash,
        checked_at,
    })
}

/// Fetch a URL, returning `(status, body hash)` or the failure
/// sentinel `(0, None)`.
fn fetch(url: &str) -> Result<(i64, Option<String>)> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;

    let response = match client.get(url).send() {
        Ok(response) => response,
        Err(err) => {
            debug!(url, %err, "fetch failed");
            return Ok((0, None));
        }
    };

    let status = i64::from(response.status().as_u16());

    let mut body = Vec::new();
    if let Err(err) = response.take(MAX_BODY_BYTES).read_to_end(&mut body) {
        debug!(url, %err, "body read failed");
        return Ok((0, None));
    }

    let hash = format!("{:x}", Sha256::digest(&body));
    debug!(url, status, bytes = body.len(), "fetched");
    Ok((status, Some(hash)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::TcpListener;

    /// sha256("hello"), hex-encoded.
    const HELLO_SHA256: &str =
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

    /// Serve one canned HTTP response on a local port.
    fn one_shot_server(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = std::io::Read::read(&mut stream, &mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/")
    }

    #[test]
    fn test_unreachable_host_records_failure_sentinel() {
        let mut storage = SqliteStorage::open_memory().unwrap();
        // Port 1 on loopback: connection refused
        let id = storage
            .create_bookmark("dead", "http://127.0.0.1:1/")
            .unwrap();

        let outcome = check(&mut storage, &id).unwrap();
        assert!(outcome.fetch_failed());
        assert_eq!(outcome.content_hash, None);

        let (_, bookmark) = storage.get_bookmark(&id).unwrap();
        assert_eq!(bookmark.last_status, Some(0));
        assert_eq!(bookmark.content_hash, None);
        assert_eq!(bookmark.last_checked_at, Some(outcome.checked_at));
    }

    #[test]
    fn test_ok_response_records_status_and_hash() {
        let url = one_shot_server(
            "HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello",
        );

        let mut storage = SqliteStorage::open_memory().unwrap();
        let id = storage.create_bookmark("live", &url).unwrap();

        let outcome = check(&mut storage, &id).unwrap();
        assert_eq!(outcome.status, 200);
        assert_eq!(outcome.content_hash.as_deref(), Some(HELLO_SHA256));

        let (_, bookmark) = storage.get_bookmark(&id).unwrap();
        assert_eq!(bookmark.last_status, Some(200));
        assert_eq!(bookmark.content_hash.as_deref(), Some(HELLO_SHA256));
        assert!(bookmark.last_checked_at.is_some());
    }

    #[test]
    fn test_error_status_is_recorded_not_raised() {
        let url = one_shot_server(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );

        let mut storage = SqliteStorage::open_memory().unwrap();
        let id = storage.create_bookmark("gone", &url).unwrap();

        let outcome = check(&mut storage, &id).unwrap();
        assert_eq!(outcome.status, 404);
        // A 404 still has a (possibly empty) body to hash
        assert!(outcome.content_hash.is_some());
    }

    #[test]
    fn test_invalid_url_records_failure() {
        let mut storage = SqliteStorage::open_memory().unwrap();
        let id = storage.create_bookmark("loose", "not a url").unwrap();

        let outcome = check(&mut storage, &id).unwrap();
        assert!(outcome.fetch_failed());
    }

    #[test]
    fn test_check_missing_entry_is_not_found() {
        let mut storage = SqliteStorage::open_memory().unwrap();
        assert!(matches!(
            check(&mut storage, "ent_missing"),
            Err(crate::Error::EntryNotFound { .. })
        ));
    }
}
