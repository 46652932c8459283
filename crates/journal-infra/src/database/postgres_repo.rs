//! PostgreSQL repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DbConn, EntityTrait, Set};
use uuid::Uuid;

use journal_core::domain::JournalEntry;
use journal_core::error::RepoError;
use journal_core::ports::EntryRepository;

use super::entity::journal_entry::{self, Entity as JournalEntryEntity};

/// PostgreSQL entry repository.
///
/// Owns the identifier/timestamp contract of the port: an entry arriving
/// with `id: None` is inserted with a fresh UUID and the current time as
/// its creation time; an entry with an id is updated, and the
/// `creation_time` column is never rewritten.
pub struct PostgresEntryRepository {
    db: DbConn,
}

impl PostgresEntryRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_save_err(e: sea_orm::DbErr) -> RepoError {
    let err_str = e.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint("Entry already exists".to_string())
    } else {
        RepoError::Query(err_str)
    }
}

#[async_trait]
impl EntryRepository for PostgresEntryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<JournalEntry>, RepoError> {
        let result = JournalEntryEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<JournalEntry>, RepoError> {
        let result = JournalEntryEntity::find()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn save(&self, entry: JournalEntry) -> Result<JournalEntry, RepoError> {
        let model = match entry.id {
            None => {
                let active = journal_entry::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    title: Set(entry.title),
                    content: Set(entry.content),
                    creation_time: Set(Utc::now().into()),
                };
                active.insert(&self.db).await.map_err(map_save_err)?
            }
            Some(id) => {
                let active = journal_entry::ActiveModel {
                    id: Set(id),
                    title: Set(entry.title),
                    content: Set(entry.content),
                    // never rewritten after the first save
                    creation_time: NotSet,
                };
                active.update(&self.db).await.map_err(map_save_err)?
            }
        };

        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = JournalEntryEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
