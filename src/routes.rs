//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Health check: database, expiry scheduler
//! - `/api/*`      - REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router, trimming trailing slashes before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
