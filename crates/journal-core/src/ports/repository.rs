use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::JournalEntry;
use crate::error::RepoError;

/// Persistence port for journal entries.
///
/// Implementations own identifier and timestamp assignment: the first
/// `save` of an entry with `id: None` must fill in both `id` and
/// `creation_time`, and subsequent saves must preserve them. Atomicity of
/// concurrent find-then-save sequences is the implementation's concern;
/// callers hold no locks.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Find an entry by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<JournalEntry>, RepoError>;

    /// Fetch all entries, in whatever order the store enumerates them.
    async fn find_all(&self) -> Result<Vec<JournalEntry>, RepoError>;

    /// Save an entry (create or update) and return the persisted form.
    async fn save(&self, entry: JournalEntry) -> Result<JournalEntry, RepoError>;

    /// Delete an entry by its ID.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
