//! Toyval reference Platform server entry point.

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use toyval_config::ToyvalConfig;
use toyval_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (optional path as first argument)
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ToyvalConfig::load(config_path.as_deref())
        .context("failed to load configuration")?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Toyval Platform Server v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &config_path {
        info!("Loaded configuration from {}", path.display());
    }

    Server::new(config.server)
        .start()
        .await
        .context("server stopped with an error")?;

    Ok(())
}
