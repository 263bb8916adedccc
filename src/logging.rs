//! Tracing subscriber setup.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::AppEnv;

/// Level used when `RUST_LOG` is not set.
pub fn default_level(env: AppEnv) -> &'static str {
    match env {
        AppEnv::Local | AppEnv::Dev => "debug",
        AppEnv::Prod => "info",
    }
}

/// Installs the global subscriber: human-readable text for `local`, JSON
/// lines for `dev` and `prod`. `RUST_LOG` overrides the default level.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(env: AppEnv) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(env)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match env {
        AppEnv::Local => builder.try_init(),
        AppEnv::Dev | AppEnv::Prod => builder.json().try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!(e))
}
