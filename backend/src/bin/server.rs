//! Explorer HTTP Server Binary
//!
//! Loads the datasets named in the configuration, then serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! EXPLORER_CONFIG=backend/explorer.toml cargo run --bin explorer-server
//! ```
//!
//! # Environment Variables
//!
//! - `EXPLORER_CONFIG`: Path to the TOML configuration (default: ./explorer.toml)
//! - `HOST`: Server host, overrides `[server].host`
//! - `PORT`: Server port, overrides `[server].port`
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use forest_explorer::http::{create_router, AppState};
use forest_explorer::io::DatasetLoader;
use forest_explorer::store::{DatasetRepository, ExplorerConfig, InMemoryRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Forest Explorer HTTP Server");

    let mut config = ExplorerConfig::from_default_location()
        .context("failed to load explorer configuration")?;
    config
        .apply_env_overrides()
        .context("invalid HOST/PORT override")?;

    // A missing or malformed source stops startup
    let datasets = DatasetLoader::load(&config.data).context("failed to load datasets")?;
    info!("Dataset checksum {}", datasets.checksum);

    let repository: Arc<dyn DatasetRepository> = Arc::new(InMemoryRepository::new(datasets));
    let state = AppState::new(repository).with_years(config.ui.year_range());

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid bind address")?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
