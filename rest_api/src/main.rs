// rest_api/src/main.rs

// Entry point for the bed-risk REST API server: loads configuration from
// the environment, opens the record store, wires up the feed client and
// serves until interrupted.

use anyhow::{Context, Result};
use ingest::{FeedClient, FeedConfig};
use rest_api::config::ServerConfig;
use rest_api::{AppState, start_server};
use storage::BedStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::load()?;
    let feed_config = FeedConfig::from_env()?;

    let store = BedStore::open(&config.data_dir)
        .with_context(|| format!("failed to open record store at {}", config.data_dir.display()))?;
    let feed = FeedClient::new(feed_config).context("failed to build feed client")?;

    let state = AppState::new(store, feed, config.target_regions.clone());
    start_server(&config, state).await
}
