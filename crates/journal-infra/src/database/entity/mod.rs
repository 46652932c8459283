//! SeaORM entity definitions.

pub mod journal_entry;
