//! Input validation shared by the extension stores.
//!
//! Required text fields must be non-empty after trimming surrounding
//! whitespace, and that is all. Bookmark URLs are not parsed; a dead or
//! malformed URL is surfaced by the link checker as a recorded failure,
//! not rejected at save time.

use crate::error::{Error, Result};

/// Trim `value` and require the result to be non-empty.
///
/// Returns the trimmed slice, which is what the stores persist.
///
/// # Errors
///
/// Returns [`Error::RequiredField`] naming `field` when the trimmed
/// value is empty.
pub fn require_non_empty<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::RequiredField { field });
    }
    Ok(trimmed)
}
