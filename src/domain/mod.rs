//! Domain layer containing the binding entity and the repository contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP layer. Business rules
//! (alias generation, retry on collision) live in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
