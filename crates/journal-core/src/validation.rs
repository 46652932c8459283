//! Field validation for incoming DTOs.
//!
//! Runs at the boundary, before any DTO is mapped to an entity; a DTO
//! that fails here never reaches the service.

use std::fmt;

use journal_shared::dto::JournalEntryDto;

/// Maximum title length, in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// A single field constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate an entry DTO, collecting every violation rather than stopping
/// at the first.
pub fn validate_entry(dto: &JournalEntryDto) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if dto.title.trim().is_empty() {
        errors.push(FieldError::new("title", "Title cannot be blank"));
    } else if dto.title.chars().count() > MAX_TITLE_LENGTH {
        errors.push(FieldError::new(
            "title",
            format!("Title cannot exceed {MAX_TITLE_LENGTH} characters"),
        ));
    }

    if dto.content.trim().is_empty() {
        errors.push(FieldError::new("content", "Content is required"));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(title: &str, content: &str) -> JournalEntryDto {
        JournalEntryDto {
            id: None,
            title: title.to_string(),
            content: content.to_string(),
            creation_time: None,
        }
    }

    #[test]
    fn test_valid_dto_passes() {
        assert!(validate_entry(&dto("A day", "It rained.")).is_empty());
    }

    #[test]
    fn test_blank_title_and_content_are_both_reported() {
        let errors = validate_entry(&dto("  ", ""));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "title");
        assert_eq!(errors[1].field, "content");
    }

    #[test]
    fn test_title_at_limit_passes_and_over_limit_fails() {
        let at_limit = "x".repeat(MAX_TITLE_LENGTH);
        assert!(validate_entry(&dto(&at_limit, "c")).is_empty());

        let over = "x".repeat(MAX_TITLE_LENGTH + 1);
        let errors = validate_entry(&dto(&over, "c"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn test_title_limit_counts_characters_not_bytes() {
        // 100 multibyte characters is still within the limit
        let title = "ä".repeat(MAX_TITLE_LENGTH);
        assert!(validate_entry(&dto(&title, "c")).is_empty());
    }
}
