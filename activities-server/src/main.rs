use std::sync::Arc;

use activities_core::ActivityRegistry;
use activities_server::{
    config::{ServerConfig, DEFAULT_LOG_FILTER},
    errors::ServerResult,
    monitoring::{self, MonitoringLayer},
    router, AppState,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ServerResult<()> {
    let config = ServerConfig::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    // Print startup banner if monitoring is enabled
    if config.monitoring {
        use colored::*;
        tracing::info!("{}", "🚀 Activities Server with Monitoring".bold().cyan());
        tracing::info!("{}", "===================================".cyan());
        tracing::info!("");
    }

    let registry = ActivityRegistry::seeded();
    tracing::info!(activities = registry.len(), "Seeded activity registry");

    let mut app_state = AppState::new(registry);
    if config.monitoring {
        let (tx, rx) = tokio::sync::mpsc::channel(1000);
        monitoring::spawn_monitoring_display(rx).await;
        app_state = app_state.with_monitoring(MonitoringLayer::new(tx));
    }

    let app = router(Arc::new(app_state), &config.static_dir);

    tracing::info!("Starting activities server on {}", config.bind_address);

    let listener = match tokio::net::TcpListener::bind(&config.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%e, addr = %config.bind_address, "Failed to bind");
            return Err(e.into());
        }
    };
    axum::serve(listener, app).await?;

    Ok(())
}
