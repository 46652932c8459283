//! Entry service - CRUD orchestration over the repository port.

use std::sync::Arc;

use journal_shared::dto::JournalEntryDto;

use crate::error::DomainError;
use crate::mapper::EntryMapper;
use crate::ports::EntryRepository;

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Orchestrates create/read/update/delete by composing the mapper with the
/// repository port.
///
/// The service is stateless apart from its collaborator references, so a
/// single instance may serve concurrent callers without locking; isolation
/// of the find-then-save sequences is the repository's concern.
#[derive(Clone)]
pub struct EntryService {
    repository: Arc<dyn EntryRepository>,
    mapper: EntryMapper,
}

impl EntryService {
    pub fn new(repository: Arc<dyn EntryRepository>) -> Self {
        Self {
            repository,
            mapper: EntryMapper::new(),
        }
    }

    /// Create a new entry and return its persisted wire form.
    ///
    /// A DTO that already carries a non-empty id is rejected: identifiers
    /// are store-assigned, and accepting one here would turn create into
    /// an implicit upsert.
    pub async fn create_entry(&self, dto: &JournalEntryDto) -> Result<JournalEntryDto, DomainError> {
        if dto.id.as_deref().is_some_and(|id| !id.is_empty()) {
            return Err(DomainError::Validation(
                "id must not be supplied when creating an entry".to_string(),
            ));
        }

        let entry = self.mapper.to_entity(dto)?;
        let saved = self.repository.save(entry).await?;
        tracing::debug!(id = ?saved.id, "created journal entry");

        self.mapper.to_dto(&saved)
    }

    /// Fetch every entry, in the repository's own enumeration order.
    pub async fn get_all_entries(&self) -> Result<Vec<JournalEntryDto>, DomainError> {
        self.repository
            .find_all()
            .await?
            .iter()
            .map(|entry| self.mapper.to_dto(entry))
            .collect()
    }

    /// Look up a single entry. `Ok(None)` signals not-found; it is not an
    /// error.
    pub async fn get_entry_by_id(&self, id: &str) -> Result<Option<JournalEntryDto>, DomainError> {
        let id = EntryMapper::parse_id(id)?;

        match self.repository.find_by_id(id).await? {
            Some(entry) => Ok(Some(self.mapper.to_dto(&entry)?)),
            None => Ok(None),
        }
    }

    /// Update title and content of an existing entry.
    ///
    /// Returns `Ok(None)` without writing anything when the id is unknown;
    /// update never implicitly creates. The entry's id and creation time
    /// are left untouched.
    pub async fn update_entry(
        &self,
        id: &str,
        dto: &JournalEntryDto,
    ) -> Result<Option<JournalEntryDto>, DomainError> {
        let id = EntryMapper::parse_id(id)?;

        let Some(mut entry) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        entry.title = dto.title.clone();
        entry.content = dto.content.clone();
        let saved = self.repository.save(entry).await?;
        tracing::debug!(%id, "updated journal entry");

        Ok(Some(self.mapper.to_dto(&saved)?))
    }

    /// Delete an entry. A missing id is reported as `NotFound`, never as
    /// an error; once deleted, an id cannot be resurrected.
    pub async fn delete_entry(&self, id: &str) -> Result<DeleteOutcome, DomainError> {
        let id = EntryMapper::parse_id(id)?;

        if self.repository.find_by_id(id).await?.is_none() {
            return Ok(DeleteOutcome::NotFound);
        }

        self.repository.delete(id).await?;
        tracing::debug!(%id, "deleted journal entry");

        Ok(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::domain::JournalEntry;
    use crate::error::RepoError;

    use super::*;

    /// In-memory spy repository: behaves like a real store and counts
    /// `save` calls so tests can prove a path performed no write.
    #[derive(Default)]
    struct SpyRepository {
        entries: Mutex<HashMap<Uuid, JournalEntry>>,
        save_calls: AtomicUsize,
    }

    impl SpyRepository {
        fn save_count(&self) -> usize {
            self.save_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EntryRepository for SpyRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<JournalEntry>, RepoError> {
            Ok(self.entries.lock().unwrap().get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<JournalEntry>, RepoError> {
            Ok(self.entries.lock().unwrap().values().cloned().collect())
        }

        async fn save(&self, mut entry: JournalEntry) -> Result<JournalEntry, RepoError> {
            self.save_calls.fetch_add(1, Ordering::SeqCst);

            if entry.id.is_none() {
                entry.id = Some(Uuid::new_v4());
                entry.creation_time = Some(Utc::now());
            }
            let id = entry.id.ok_or(RepoError::Query("missing id".to_string()))?;
            self.entries.lock().unwrap().insert(id, entry.clone());
            Ok(entry)
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
            match self.entries.lock().unwrap().remove(&id) {
                Some(_) => Ok(()),
                None => Err(RepoError::NotFound),
            }
        }
    }

    fn service() -> (EntryService, Arc<SpyRepository>) {
        let repo = Arc::new(SpyRepository::default());
        (EntryService::new(repo.clone()), repo)
    }

    fn dto(title: &str, content: &str) -> JournalEntryDto {
        JournalEntryDto {
            id: None,
            title: title.to_string(),
            content: content.to_string(),
            creation_time: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_creation_time() {
        let (service, _) = service();

        let created = service.create_entry(&dto("T1", "C1")).await.unwrap();

        assert!(created.id.as_deref().is_some_and(|id| !id.is_empty()));
        assert_eq!(created.title, "T1");
        assert_eq!(created.content, "C1");
        let time = created.creation_time.unwrap();
        assert!(
            chrono::NaiveDateTime::parse_from_str(&time, "%Y-%m-%dT%H:%M:%S").is_ok(),
            "unexpected creation time rendering: {time}"
        );
    }

    #[tokio::test]
    async fn test_create_rejects_caller_supplied_id() {
        let (service, repo) = service();

        let mut request = dto("T", "C");
        request.id = Some(Uuid::new_v4().to_string());

        let err = service.create_entry(&request).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn test_get_all_returns_every_entry() {
        let (service, _) = service();
        service.create_entry(&dto("A", "1")).await.unwrap();
        service.create_entry(&dto("B", "2")).await.unwrap();

        let all = service.get_all_entries().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_unknown_id_is_absent_not_error() {
        let (service, _) = service();

        let result = service
            .get_entry_by_id(&Uuid::new_v4().to_string())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_by_malformed_id_is_an_error() {
        let (service, _) = service();

        let err = service.get_entry_by_id("garbage").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[tokio::test]
    async fn test_update_missing_entry_returns_none_and_never_writes() {
        let (service, repo) = service();

        let result = service
            .update_entry(&Uuid::new_v4().to_string(), &dto("T", "C"))
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn test_update_changes_only_title_and_content() {
        let (service, _) = service();

        let created = service.create_entry(&dto("T1", "C1")).await.unwrap();
        let id = created.id.clone().unwrap();

        let updated = service
            .update_entry(&id, &dto("T2", "C2"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.creation_time, created.creation_time);
        assert_eq!(updated.title, "T2");
        assert_eq!(updated.content, "C2");
    }

    #[tokio::test]
    async fn test_delete_then_get_is_absent() {
        let (service, _) = service();

        let created = service.create_entry(&dto("T", "C")).await.unwrap();
        let id = created.id.clone().unwrap();

        assert_eq!(
            service.delete_entry(&id).await.unwrap(),
            DeleteOutcome::Deleted
        );
        assert!(service.get_entry_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_reports_not_found() {
        let (service, _) = service();

        let outcome = service
            .delete_entry(&Uuid::new_v4().to_string())
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_create_update_delete_lifecycle() {
        let (service, _) = service();

        let created = service.create_entry(&dto("T1", "C1")).await.unwrap();
        let id = created.id.clone().unwrap();

        let updated = service
            .update_entry(&id, &dto("T2", "C2"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id.as_deref(), Some(id.as_str()));
        assert_eq!(updated.creation_time, created.creation_time);
        assert_eq!(updated.title, "T2");

        assert_eq!(
            service.delete_entry(&id).await.unwrap(),
            DeleteOutcome::Deleted
        );
        assert!(service.get_entry_by_id(&id).await.unwrap().is_none());
    }
}
