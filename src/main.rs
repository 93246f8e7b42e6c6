//! Issue search server entry point

use anyhow::Result;
use issue_search::{
    config,
    store::{Dataset, MemoryIndex},
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let settings_path = config::locate();
    let settings = config::load(settings_path.as_deref())?;

    // RUST_LOG wins over the debug flag
    let default_level = if settings.general.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    info!("Starting issue-search v{}", issue_search::VERSION);
    match &settings_path {
        Some(path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }
    info!("Loaded configuration for instance: {}", settings.general.instance_name);

    let dataset = match &settings.storage.dataset {
        Some(path) => {
            info!("Loading dataset from: {}", path.display());
            Dataset::from_file(path)?
        }
        None => {
            info!("No dataset configured, starting with an empty index");
            Dataset::default()
        }
    };
    let index = Arc::new(MemoryIndex::new(dataset, settings.policy()));

    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);
    let app = create_router(AppState::new(settings, index));

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
