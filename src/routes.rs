//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`       - Health check: database, cache (public)
//! - `/characters*`       - Character listing and detail
//! - `/favorites*`        - Favorites listing, add, remove
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, only_get};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes, state and tracing applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler).fallback(only_get))
        .merge(api::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] behind trailing-slash
/// normalization, so `/characters/` and `/characters` are the same route.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
