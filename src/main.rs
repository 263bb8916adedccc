use alias_shortener::{config, logging, server};
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    logging::init(config.env)?;

    tracing::info!(env = config.env.as_str(), "starting alias-shortener");
    tracing::debug!("debug messages are enabled");
    config.print_summary();

    server::run(config).await
}
