// API Server Binary Entry Point
//
// Purpose: Start the Axum API server for the dashboard
// Usage: cargo run --features api --bin api_server

use anyhow::Context;
use crop_advisor::{create_router, AdvisorConfig, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "crop_advisor=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = AdvisorConfig::from_env().context("invalid configuration")?;

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", config.port);
    tracing::info!(
        "  CROP_TABLE_PATH: {}",
        config
            .crop_table_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string())
    );
    tracing::info!("  PRICE_REFRESH_SECS: {}", config.price_refresh.as_secs());
    tracing::info!("  WEATHER_REFRESH_SECS: {}", config.weather_refresh.as_secs());
    tracing::info!("  PRICE_JITTER: {}", config.price_jitter);
    tracing::info!("  WEATHER_LOCATION: {}", config.weather_location);

    // Initialize application state (crop table, providers, feed caches)
    let state = AppState::new(&config)?;
    tracing::info!("Application state initialized successfully");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
