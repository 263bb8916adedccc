#![allow(dead_code)]

use alias_shortener::application::services::{AliasStore, StoreOptions};
use alias_shortener::infrastructure::persistence::{self, PoolSettings, SqliteAliasRepository};
use alias_shortener::state::{AppState, Credentials, SqliteAliasStore};
use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub const TEST_USER: &str = "test_user";
pub const TEST_PASSWORD: &str = "test_password";

/// `Basic base64("test_user:test_password")`
pub const VALID_AUTH: &str = "Basic dGVzdF91c2VyOnRlc3RfcGFzc3dvcmQ=";
/// `Basic base64("test_user:wrong")`
pub const WRONG_AUTH: &str = "Basic dGVzdF91c2VyOndyb25n";

/// A pool on a fresh database file. Keep the `TempDir` alive for the
/// duration of the test.
pub async fn test_pool() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let pool = open_pool(&dir.path().join("storage.db")).await;
    (pool, dir)
}

pub async fn open_pool(path: &Path) -> SqlitePool {
    let url = format!("sqlite://{}", path.display());
    let settings = PoolSettings {
        max_connections: 8,
        busy_timeout: Duration::from_secs(30),
    };

    persistence::connect(&url, settings).await.unwrap()
}

pub fn create_test_store(pool: SqlitePool) -> SqliteAliasStore {
    create_test_store_with(pool, StoreOptions::default())
}

pub fn create_test_store_with(pool: SqlitePool, options: StoreOptions) -> SqliteAliasStore {
    let repository = Arc::new(SqliteAliasRepository::new(Arc::new(pool)));
    AliasStore::with_options(repository, options)
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(
        Arc::new(create_test_store(pool)),
        Credentials {
            user: TEST_USER.to_string(),
            password: TEST_PASSWORD.to_string(),
        },
    )
}

pub async fn create_test_binding(pool: &SqlitePool, alias: &str, target: &str) -> i64 {
    sqlx::query("INSERT INTO bindings (alias, target) VALUES (?, ?)")
        .bind(alias)
        .bind(target)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn target_of(pool: &SqlitePool, alias: &str) -> Option<String> {
    sqlx::query_scalar::<_, String>("SELECT target FROM bindings WHERE alias = ?")
        .bind(alias)
        .fetch_optional(pool)
        .await
        .unwrap()
}
