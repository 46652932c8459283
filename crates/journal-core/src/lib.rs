//! # Journal Core
//!
//! The domain layer of the journal service.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod mapper;
pub mod ports;
pub mod service;
pub mod validation;

pub use error::DomainError;
pub use mapper::EntryMapper;
pub use service::{DeleteOutcome, EntryService};
