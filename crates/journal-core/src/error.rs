//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
///
/// Not-found is deliberately absent here: read and update paths signal a
/// missing entry with `Ok(None)`, not an error.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An identifier string could not be parsed into a UUID.
    #[error("Invalid entry id: {0}")]
    InvalidId(String),

    /// An entry that never completed a save was handed to a mapping or
    /// update path that requires a persisted entry.
    #[error("Invalid entity state: {0}")]
    InvalidState(&'static str),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Collaborator-originated failure, passed through untranslated.
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
