//! Targets Manager - Application Entry Point
//!
//! This is the main entry point for the targets manager server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use targets_manager::{
    config::Config,
    handlers,
    runtime::{DockerInspector, ShellCommandRunner},
    services::CatalogService,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting targets manager...");

    // Load the benchmark catalog, then check Docker
    let catalog = CatalogService::load(&config.catalog.benchmarks_file).await;
    let inspector = Arc::new(DockerInspector::new(config.docker.clone()));
    let catalog = CatalogService::check_runtime(inspector.as_ref(), catalog).await;

    tracing::info!(targets = catalog.len(), "Benchmarks loaded");

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    // Create application state
    let state = AppState::new(config, catalog, Arc::new(ShellCommandRunner::new()), inspector);

    // Start the server
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, handlers::app(state)).await?;

    Ok(())
}
