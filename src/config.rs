//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export APP_ENV="local"                      # local | dev | prod
//! export STORAGE_PATH="./storage/storage.db"  # or DATABASE_URL="sqlite://..."
//! export HTTP_USER="admin"
//! export HTTP_PASSWORD="secret"
//! ```
//!
//! ## Required Variables
//!
//! - `HTTP_USER`, `HTTP_PASSWORD` - Basic-auth credentials for `/url` routes
//!
//! ## Optional Variables
//!
//! - `APP_ENV` - Deployment environment, selects log format (default: `local`)
//! - `DATABASE_URL` - SQLite URL (default: built from `STORAGE_PATH`)
//! - `STORAGE_PATH` - SQLite file (default: `./storage/storage.db`)
//! - `LISTEN` - Bind address (default: `localhost:8082`)
//! - `HTTP_TIMEOUT` - Request timeout in seconds (default: 4)
//! - `ALIAS_LENGTH` - Generated alias length (default: 6)
//! - `ALIAS_MAX_ATTEMPTS` - Generated alias attempts (default: 10)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! - `DB_BUSY_TIMEOUT` - Write-lock wait in seconds, below `HTTP_TIMEOUT` (default: 3)
//! - `RUST_LOG` - Overrides the level implied by `APP_ENV`

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::application::services::StoreOptions;
use crate::infrastructure::persistence::PoolSettings;

const DEFAULT_STORAGE_PATH: &str = "./storage/storage.db";

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    /// Human-readable logs at debug level.
    Local,
    /// JSON logs at debug level.
    Dev,
    /// JSON logs at info level.
    Prod,
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "local" => Ok(AppEnv::Local),
            "dev" => Ok(AppEnv::Dev),
            "prod" => Ok(AppEnv::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{}'", other),
        }
    }
}

impl AppEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnv::Local => "local",
            AppEnv::Dev => "dev",
            AppEnv::Prod => "prod",
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: AppEnv,
    pub database_url: String,
    pub listen_addr: String,
    /// Per-request timeout in seconds (`HTTP_TIMEOUT`).
    pub http_timeout: u64,
    pub http_user: String,
    pub http_password: String,
    pub alias_length: usize,
    pub alias_max_attempts: usize,
    pub db_max_connections: u32,
    /// SQLite busy timeout in seconds (`DB_BUSY_TIMEOUT`).
    pub db_busy_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing or `APP_ENV` is unknown.
    pub fn from_env() -> Result<Self> {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "local".to_string())
            .parse()?;

        let database_url = Self::load_database_url();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "localhost:8082".to_string());

        let http_user = env::var("HTTP_USER").context("HTTP_USER must be set")?;
        let http_password = env::var("HTTP_PASSWORD").context("HTTP_PASSWORD must be set")?;

        Ok(Self {
            env,
            database_url,
            listen_addr,
            http_timeout: env_or("HTTP_TIMEOUT", 4),
            http_user,
            http_password,
            alias_length: env_or("ALIAS_LENGTH", 6),
            alias_max_attempts: env_or("ALIAS_MAX_ATTEMPTS", 10),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            db_busy_timeout: env_or("DB_BUSY_TIMEOUT", 3),
        })
    }

    /// Loads database URL with fallback to the storage path.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `sqlite://` + `STORAGE_PATH` (or the default path)
    fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let path = env::var("STORAGE_PATH").unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_string());

        format!("sqlite://{}", path)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range or malformed.
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.http_timeout == 0 {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }

        if self.db_busy_timeout >= self.http_timeout {
            anyhow::bail!(
                "DB_BUSY_TIMEOUT ({}s) must be less than HTTP_TIMEOUT ({}s)",
                self.db_busy_timeout,
                self.http_timeout
            );
        }

        if self.http_user.is_empty() || self.http_password.is_empty() {
            anyhow::bail!("HTTP_USER and HTTP_PASSWORD must not be empty");
        }

        if self.alias_length == 0 || self.alias_length > 32 {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 1 and 32, got {}",
                self.alias_length
            );
        }

        if self.alias_max_attempts == 0 || self.alias_max_attempts > 100 {
            anyhow::bail!(
                "ALIAS_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.alias_max_attempts
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            alias_length: self.alias_length,
            max_attempts: self.alias_max_attempts,
        }
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.db_max_connections,
            busy_timeout: Duration::from_secs(self.db_busy_timeout),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env.as_str());
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  HTTP user: {} (password: ***)", self.http_user);
        tracing::info!("  Request timeout: {}s", self.http_timeout);
        tracing::info!(
            "  Generated aliases: {} chars, {} attempts",
            self.alias_length,
            self.alias_max_attempts
        );
    }
}

/// Reads and parses an optional variable, falling back to `default` when it is
/// unset or unparsable.
pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Database URL from `DATABASE_URL`, else built from `STORAGE_PATH`.
///
/// Used by tools that need the database but not the HTTP settings.
pub fn database_url_from_env() -> String {
    Config::load_database_url()
}

/// Loads and validates configuration from environment variables.
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
