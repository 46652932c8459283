//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Wire representation of a journal entry.
///
/// `id` is empty on create requests and always set on responses.
/// `creationTime` is server-assigned; whatever a client sends for it is
/// ignored, so it is effectively read-only on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub title: String,

    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
}
