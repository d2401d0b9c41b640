//! API Routes
//!
//! Configures the Axum router with all proxy server endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cleanup_handler, clear_handler, delete_handler, health_handler, proxy_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /proxy/*path` - Read-through fetch from the upstream API
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
/// - `POST /cache/cleanup` - Remove stale entries now
/// - `DELETE /cache` - Clear the cache and its statistics
/// - `DELETE /cache/entries/*key` - Invalidate one cache key
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/proxy/*path", get(proxy_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/cache", delete(clear_handler))
        .route("/cache/cleanup", post(cleanup_handler))
        .route("/cache/entries/*key", delete(delete_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
