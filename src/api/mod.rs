pub mod config;
pub mod error;
pub mod response;
pub mod validation;
pub mod handlers;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::error::ApiError;
use crate::api::handlers::{grid_data::*, health, sources::get_sources};
use crate::utils::app_config::AppConfig;

/// Builds the HTTP router with all routes and layers.
pub fn router(app_config: AppConfig) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Dashboard endpoints
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/data", get(get_raw_history))
        .route("/api/sources", get(get_sources))
        .fallback(|| async { ApiError::not_found("Route") })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_config)
}
