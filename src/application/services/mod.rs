//! Business logic services for the application layer.

pub mod alias_store;

pub use alias_store::{AliasStore, DEFAULT_MAX_ATTEMPTS, StoreOptions};
