//! DTO ⇄ entity mapping.

use uuid::Uuid;

use journal_shared::dto::JournalEntryDto;

use crate::domain::JournalEntry;
use crate::error::DomainError;

/// Wire rendering of creation times, seconds precision.
const CREATION_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Stateless converter between the wire DTO and the storage entity.
///
/// This is the only place identifier strings are parsed or rendered and
/// the only place timestamps are formatted; the service stays agnostic of
/// both representations.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryMapper;

impl EntryMapper {
    pub fn new() -> Self {
        Self
    }

    /// Convert a persisted entity to its wire form.
    ///
    /// Only valid for entries that completed at least one save; an entry
    /// with an unassigned id or creation time yields
    /// `DomainError::InvalidState`.
    pub fn to_dto(&self, entry: &JournalEntry) -> Result<JournalEntryDto, DomainError> {
        let id = entry
            .id
            .ok_or(DomainError::InvalidState("entry id was never assigned"))?;
        let creation_time = entry.creation_time.ok_or(DomainError::InvalidState(
            "entry creation time was never assigned",
        ))?;

        Ok(JournalEntryDto {
            id: Some(id.to_string()),
            title: entry.title.clone(),
            content: entry.content.clone(),
            creation_time: Some(creation_time.format(CREATION_TIME_FORMAT).to_string()),
        })
    }

    /// Convert a wire DTO to an entity ready for persistence.
    ///
    /// The identifier is carried over only when the DTO holds a non-empty
    /// one (update intent); a create-path DTO produces an entity the store
    /// identifies on first save. `creation_time` is never taken from the
    /// DTO - assigning it is the repository's job.
    pub fn to_entity(&self, dto: &JournalEntryDto) -> Result<JournalEntry, DomainError> {
        let mut entry = JournalEntry::new(dto.title.clone(), dto.content.clone());

        if let Some(id) = dto.id.as_deref().filter(|id| !id.is_empty()) {
            entry.id = Some(Self::parse_id(id)?);
        }

        Ok(entry)
    }

    /// Parse an identifier string from the wire into the opaque id type.
    pub fn parse_id(id: &str) -> Result<Uuid, DomainError> {
        Uuid::parse_str(id).map_err(|_| DomainError::InvalidId(id.to_string()))
    }
}
