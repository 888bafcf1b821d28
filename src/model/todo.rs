//! Todo item payload: ordered checklist rows attached 1:many to an entry.

use serde::{Deserialize, Serialize};

/// A single checklist item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier (`item_` + short UUID)
    pub id: String,

    /// Owning todo entry ID
    pub entry_id: String,

    /// Item text
    pub body: String,

    /// Checked off
    pub is_done: bool,

    /// Ordering key within the entry; new items append at max+1
    pub position: i64,

    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,
}

/// Generate a new todo item ID.
#[must_use]
pub fn new_item_id() -> String {
    format!("item_{}", &uuid::Uuid::new_v4().to_string()[..12])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_id_shape() {
        let id = new_item_id();
        assert!(id.starts_with("item_"));
        assert_eq!(id.len(), "item_".len() + 12);
    }
}
