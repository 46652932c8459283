use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Journal entry entity - the storage-facing representation.
///
/// `id` and `creation_time` are `None` until the repository persists the
/// entry for the first time; the storage adapter owns both fields. The
/// identifier is immutable once assigned, and `creation_time` reflects the
/// store's write time, never client input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub creation_time: Option<DateTime<Utc>>,
}

impl JournalEntry {
    /// Create an unsaved entry. The repository assigns `id` and
    /// `creation_time` on first save.
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: None,
            title,
            content,
            creation_time: None,
        }
    }
}
