//! # Journal Infrastructure
//!
//! Concrete implementations of the ports defined in `journal-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repository via SeaORM
//! - `minimal` - in-memory repository only, no external dependencies

pub mod database;

pub use database::InMemoryEntryRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresEntryRepository, connect};
