//! Alias creation, resolution and deletion.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{Binding, NewBinding};
use crate::domain::repositories::AliasRepository;
use crate::error::StoreError;
use crate::utils::alias_generator::{self, DEFAULT_ALIAS_LENGTH};

/// Default ceiling on generated-alias insert attempts.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Tuning for the auto-alias path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Length of generated aliases.
    pub alias_length: usize,
    /// Insert attempts before giving up with [`StoreError::ExhaustedRetries`].
    pub max_attempts: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            alias_length: DEFAULT_ALIAS_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Owner of alias→target bindings.
///
/// The store keeps no locks of its own. Each public operation maps onto one
/// atomic repository call, and alias uniqueness is decided by the repository's
/// constraint. Cloning is cheap; all clones share the same repository.
pub struct AliasStore<R: AliasRepository> {
    repository: Arc<R>,
    options: StoreOptions,
}

impl<R: AliasRepository> Clone for AliasStore<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            options: self.options,
        }
    }
}

impl<R: AliasRepository> AliasStore<R> {
    /// Creates a store with default options.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_options(repository, StoreOptions::default())
    }

    pub fn with_options(repository: Arc<R>, options: StoreOptions) -> Self {
        Self {
            repository,
            options,
        }
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Binds `alias` (or a generated one) to `target`.
    ///
    /// A supplied non-empty alias is inserted once; if it is taken the call
    /// fails with [`StoreError::AliasExists`] and the existing binding is left
    /// untouched. A missing or empty alias is replaced by a generated one,
    /// retried on collision up to `max_attempts` times.
    ///
    /// Returns the stored binding, whose `alias` is the one actually used.
    ///
    /// # Errors
    ///
    /// - [`StoreError::AliasExists`] for a taken caller-supplied alias
    /// - [`StoreError::ExhaustedRetries`] if every generated candidate collided
    /// - [`StoreError::Storage`] on database errors
    pub async fn create(&self, target: &str, alias: Option<&str>) -> Result<Binding, StoreError> {
        match alias.filter(|a| !a.is_empty()) {
            Some(alias) => {
                self.repository
                    .insert(NewBinding::new(alias, target))
                    .await
            }
            None => self.create_with_generated_alias(target).await,
        }
    }

    /// Returns the target bound to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no live binding exists.
    pub async fn resolve(&self, alias: &str) -> Result<String, StoreError> {
        self.repository
            .find_target(alias)
            .await?
            .ok_or_else(|| StoreError::NotFound(alias.to_string()))
    }

    /// Removes the binding for `alias`, making the alias available again.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no live binding exists.
    pub async fn delete(&self, alias: &str) -> Result<(), StoreError> {
        if self.repository.delete(alias).await? {
            Ok(())
        } else {
            Err(StoreError::NotFound(alias.to_string()))
        }
    }

    /// Number of live bindings.
    pub async fn count(&self) -> Result<i64, StoreError> {
        self.repository.count().await
    }

    async fn create_with_generated_alias(&self, target: &str) -> Result<Binding, StoreError> {
        let attempts = self.options.max_attempts;

        for attempt in 1..=attempts {
            let candidate = alias_generator::generate(self.options.alias_length);

            match self
                .repository
                .insert(NewBinding::new(candidate, target))
                .await
            {
                Err(StoreError::AliasExists(taken)) => {
                    debug!(alias = %taken, attempt, "generated alias collided, retrying");
                }
                result => return result,
            }
        }

        warn!(attempts, "no free alias found");
        Err(StoreError::ExhaustedRetries { attempts })
    }
}
