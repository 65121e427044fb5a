//! Entries read from tree objects in the database

pub mod database_entry;
