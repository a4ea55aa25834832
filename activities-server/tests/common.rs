use std::sync::Arc;

use activities_core::ActivityRegistry;
use activities_server::{router, AppState};
use anyhow::{Context, Result};

/// Serves a freshly seeded registry on an ephemeral port.
///
/// Returns the base URL and a handle to the registry the server mutates.
pub async fn spawn_server() -> Result<(String, ActivityRegistry)> {
    let registry = ActivityRegistry::seeded();
    let state = Arc::new(AppState::new(registry.clone()));
    let app = router(state, env!("CARGO_MANIFEST_DIR"));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("Failed to bind test listener")?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok((format!("http://{}", addr), registry))
}
