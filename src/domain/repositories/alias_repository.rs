//! Repository trait for alias binding storage.

use crate::domain::entities::{Binding, NewBinding};
use crate::error::StoreError;
use async_trait::async_trait;

/// Storage-engine side of the alias store.
///
/// Every method is a single atomic operation in the backend. Implementations
/// must enforce alias uniqueness themselves (a unique constraint, not a
/// read-then-write), so that concurrent inserts of the same alias cannot both
/// succeed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteAliasRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// Inserts a binding and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AliasExists`] if a live binding already uses the alias.
    /// Returns [`StoreError::Storage`] on database errors.
    async fn insert(&self, new_binding: NewBinding) -> Result<Binding, StoreError>;

    /// Looks up the target for an alias.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(target))` if a live binding exists
    /// - `Ok(None)` otherwise
    async fn find_target(&self, alias: &str) -> Result<Option<String>, StoreError>;

    /// Removes the binding for an alias.
    ///
    /// Returns `Ok(true)` if a binding was removed, `Ok(false)` if none existed.
    async fn delete(&self, alias: &str) -> Result<bool, StoreError>;

    /// Counts live bindings.
    async fn count(&self) -> Result<i64, StoreError>;
}
