pub mod api;
pub mod config;
pub mod errors;
pub mod monitoring;

use std::path::Path;
use std::sync::Arc;

use activities_core::ActivityRegistry;
use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub registry: ActivityRegistry,
    pub monitoring: Option<monitoring::MonitoringLayer>,
}

impl AppState {
    pub fn new(registry: ActivityRegistry) -> Self {
        Self {
            registry,
            monitoring: None,
        }
    }

    pub fn with_monitoring(mut self, monitoring: monitoring::MonitoringLayer) -> Self {
        self.monitoring = Some(monitoring);
        self
    }
}

/// Builds the HTTP application around an already constructed state.
pub fn router(state: Arc<AppState>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        // Activity registry
        .route("/activities", get(api::list_activities))
        .route("/activities/:name", get(api::get_activity))
        .route("/activities/:name/signup", post(api::signup))
        .route("/activities/:name/unregister", delete(api::unregister))
        // Fallback removal by email across all activities
        .route("/api/unregister", delete(api::unregister_anywhere))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
