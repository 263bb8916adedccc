//! # Alias Shortener
//!
//! Maps short human-typeable aliases to target URLs and resolves them on
//! lookup. Built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The binding entity and the repository trait
//! - **Application Layer** ([`application`]) - [`AliasStore`]: create, resolve, delete
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations and repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! Alias uniqueness is enforced by a `UNIQUE` constraint in the database;
//! generated aliases are retried on collision a bounded number of times.
//!
//! ## Quick Start
//!
//! ```bash
//! export HTTP_USER=admin HTTP_PASSWORD=secret
//! cargo run
//!
//! curl -u admin:secret -H "Content-Type: application/json" -d '{"url":"https://google.com","alias":"google"}' localhost:8082/url
//! curl -i localhost:8082/google
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use application::services::AliasStore;
pub use error::{AppError, StoreError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AliasStore, StoreOptions};
    pub use crate::domain::entities::{Binding, NewBinding};
    pub use crate::domain::repositories::AliasRepository;
    pub use crate::error::{AppError, StoreError};
    pub use crate::infrastructure::persistence::SqliteAliasRepository;
    pub use crate::state::{AppState, Credentials, SqliteAliasStore};
}
