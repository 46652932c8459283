//! Journal entry entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "journal_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub creation_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain entity. A row read back
/// from the database is persisted by definition, so id and creation time
/// are always present.
impl From<Model> for journal_core::domain::JournalEntry {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            content: model.content,
            creation_time: Some(model.creation_time.into()),
        }
    }
}
