//! SQLite persistence.
//!
//! - [`database`] - Pool setup and embedded migrations
//! - [`SqliteAliasRepository`] - Alias binding storage

pub mod database;
pub mod sqlite_alias_repository;

pub use database::{MIGRATOR, PoolSettings, connect};
pub use sqlite_alias_repository::SqliteAliasRepository;
