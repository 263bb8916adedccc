//! SQLite implementation of the alias repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Binding, NewBinding};
use crate::domain::repositories::AliasRepository;
use crate::error::{StoreError, map_sqlx_error};

/// SQLite repository for alias bindings.
///
/// Every method is one autocommit statement. Uniqueness comes from the
/// `UNIQUE` constraint on `bindings.alias`; a violation surfaces as
/// [`StoreError::AliasExists`].
pub struct SqliteAliasRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAliasRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AliasRepository for SqliteAliasRepository {
    async fn insert(&self, new_binding: NewBinding) -> Result<Binding, StoreError> {
        let result = sqlx::query("INSERT INTO bindings (alias, target) VALUES (?, ?)")
            .bind(&new_binding.alias)
            .bind(&new_binding.target)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| map_sqlx_error(e, &new_binding.alias))?;

        Ok(new_binding.into_binding(result.last_insert_rowid()))
    }

    async fn find_target(&self, alias: &str) -> Result<Option<String>, StoreError> {
        let target = sqlx::query_scalar::<_, String>("SELECT target FROM bindings WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(target)
    }

    async fn delete(&self, alias: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM bindings WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bindings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
