//! Note payload: free-form text attached 1:1 to an entry.

use serde::{Deserialize, Serialize};

/// A note's extension row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Owning entry ID
    pub entry_id: String,

    /// Note text
    pub body: String,
}
