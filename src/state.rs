//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::AliasStore;
use crate::infrastructure::persistence::SqliteAliasRepository;

/// Alias store backed by SQLite, as used by the server and the admin CLI.
pub type SqliteAliasStore = AliasStore<SqliteAliasRepository>;

/// Basic-auth credentials guarding the mutating `/url` routes.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SqliteAliasStore>,
    pub credentials: Arc<Credentials>,
}

impl AppState {
    pub fn new(store: Arc<SqliteAliasStore>, credentials: Credentials) -> Self {
        Self {
            store,
            credentials: Arc::new(credentials),
        }
    }
}
