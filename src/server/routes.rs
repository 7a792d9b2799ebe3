//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
///
/// `/health` is a static path, so axum matches it before the `/:query`
/// capture; everything else becomes a geocode lookup.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/:query", get(handlers::geocode))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
