//! Domain entities - the core business objects.

mod entry;

pub use entry::JournalEntry;
