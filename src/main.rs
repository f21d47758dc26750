//! Cinerent Server - Movie Rental Shop Management
//!
//! A Rust REST API server for a movie-rental shop dashboard.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinerent_server::{
    api,
    config::AppConfig,
    repository::{MemoryStore, SharedStore},
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("cinerent_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Cinerent Server v{}", env!("CARGO_PKG_VERSION"));

    // Construct the store; the in-memory ledger is transient, so optionally
    // seed it with the demo fixture for the dashboard
    let store: SharedStore = if config.store.seed_demo {
        let store = MemoryStore::with_demo_data().expect("Failed to seed demo data");
        tracing::info!("Store seeded with demo data");
        Arc::new(store)
    } else {
        Arc::new(MemoryStore::new())
    };

    // Create services and application state
    let services = Services::new(store);
    let state = AppState {
        config: Arc::new(config.clone()),
        services: Arc::new(services),
    };

    // Build router
    let app = api::router(state);

    // Start server
    let addr = SocketAddr::new(
        config.server.host.parse().expect("Invalid host address"),
        config.server.port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
