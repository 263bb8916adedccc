//! CLI administration tool for alias-shortener.
//!
//! Operates on the same database as the server, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Bind a URL, with or without a chosen alias
//! cargo run --bin admin -- add https://google.com --alias google
//! cargo run --bin admin -- add https://example.com
//!
//! # Look up an alias
//! cargo run --bin admin -- get google
//!
//! # Remove an alias
//! cargo run --bin admin -- remove google
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `STORAGE_PATH`: SQLite database (see `config`)
//! - `ALIAS_LENGTH`, `ALIAS_MAX_ATTEMPTS`: generated alias tuning

use alias_shortener::api::dto::save::SaveRequest;
use alias_shortener::application::services::{AliasStore, StoreOptions};
use alias_shortener::config::{database_url_from_env, env_or};
use alias_shortener::error::{AppError, StoreError};
use alias_shortener::infrastructure::persistence::{self, PoolSettings, SqliteAliasRepository};
use alias_shortener::state::SqliteAliasStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite database URL (defaults to DATABASE_URL, then STORAGE_PATH)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Bind a URL to an alias
    Add {
        /// Target URL
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show the target of an alias
    Get {
        alias: String,
    },

    /// Remove an alias
    Remove {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = cli.database_url.clone().unwrap_or_else(database_url_from_env);

    let pool = persistence::connect(&database_url, PoolSettings::default())
        .await
        .context("Failed to connect to database")?;

    let repository = Arc::new(SqliteAliasRepository::new(Arc::new(pool.clone())));
    let store = AliasStore::with_options(repository, store_options());

    let result = match cli.command {
        Commands::Add { url, alias } => add(&store, &url, alias.as_deref()).await,
        Commands::Get { alias } => get(&store, &alias).await,
        Commands::Remove { alias, yes } => remove(&store, &alias, yes).await,
        Commands::Db {
            action: DbAction::Check,
        } => check(&store, &database_url).await,
    };

    pool.close().await;

    result
}

fn store_options() -> StoreOptions {
    let defaults = StoreOptions::default();

    StoreOptions {
        alias_length: env_or("ALIAS_LENGTH", defaults.alias_length).max(1),
        max_attempts: env_or("ALIAS_MAX_ATTEMPTS", defaults.max_attempts).max(1),
    }
}

/// Validates the input like `POST /url` does, then creates a binding and
/// prints the alias that was stored.
async fn add(store: &SqliteAliasStore, url: &str, alias: Option<&str>) -> Result<()> {
    let request = SaveRequest {
        url: url.to_string(),
        alias: alias.map(str::to_string),
    };

    if let Err(errors) = request.validate() {
        return Err(AppError::from(errors).into());
    }

    match store.create(&request.url, request.alias.as_deref()).await {
        Ok(binding) => {
            println!("{} {}", "✔".green(), "Alias created".green().bold());
            println!("  {} {}", "Alias:".bright_black(), binding.alias.bold());
            println!("  {} {}", "Target:".bright_black(), binding.target);
            Ok(())
        }
        Err(StoreError::AliasExists(alias)) => {
            anyhow::bail!("Alias '{}' already exists", alias)
        }
        Err(e) => Err(e).context("Failed to create alias"),
    }
}

async fn get(store: &SqliteAliasStore, alias: &str) -> Result<()> {
    match store.resolve(alias).await {
        Ok(target) => {
            println!("{} {} {}", alias.bold(), "→".bright_black(), target);
            Ok(())
        }
        Err(StoreError::NotFound(_)) => {
            anyhow::bail!("Alias '{}' not found", alias)
        }
        Err(e) => Err(e).context("Failed to resolve alias"),
    }
}

/// Removes a binding after confirmation (unless `--yes`).
async fn remove(store: &SqliteAliasStore, alias: &str, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove alias '{}'?", alias))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    match store.delete(alias).await {
        Ok(()) => {
            println!("{} Alias '{}' removed", "✔".green(), alias);
            Ok(())
        }
        Err(StoreError::NotFound(_)) => {
            anyhow::bail!("Alias '{}' not found", alias)
        }
        Err(e) => Err(e).context("Failed to remove alias"),
    }
}

async fn check(store: &SqliteAliasStore, database_url: &str) -> Result<()> {
    let count = store.count().await.context("Database query failed")?;

    println!("{}", "Database connection OK".green().bold());
    println!("  {} {}", "URL:".bright_black(), database_url);
    println!("  {} {}", "Aliases:".bright_black(), count);

    Ok(())
}
