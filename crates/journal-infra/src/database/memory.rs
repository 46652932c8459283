//! In-memory repository implementation - used when no database is
//! configured, and as the default adapter for local development.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use journal_core::domain::JournalEntry;
use journal_core::error::RepoError;
use journal_core::ports::EntryRepository;

/// In-memory entry store using a HashMap behind an async RwLock.
///
/// Note: data is lost on process restart. Enumeration order of `find_all`
/// is whatever the map yields; callers must not rely on it.
#[derive(Default)]
pub struct InMemoryEntryRepository {
    store: RwLock<HashMap<Uuid, JournalEntry>>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<JournalEntry>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<JournalEntry>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn save(&self, mut entry: JournalEntry) -> Result<JournalEntry, RepoError> {
        let mut store = self.store.write().await;

        let id = match entry.id {
            Some(id) => {
                // Update path: the stored creation time wins, whatever the
                // caller put on the entry.
                if let Some(existing) = store.get(&id) {
                    entry.creation_time = existing.creation_time;
                } else if entry.creation_time.is_none() {
                    // Save with an unknown id acts as a first write
                    entry.creation_time = Some(Utc::now());
                }
                id
            }
            None => {
                // First save: the store assigns identifier and creation time.
                let id = Uuid::new_v4();
                entry.id = Some(id);
                entry.creation_time = Some(Utc::now());
                id
            }
        };

        store.insert(id, entry.clone());
        Ok(entry)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        match store.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}
