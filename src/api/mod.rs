//! API Module
//!
//! HTTP handlers and routing for the proxy server REST API.
//!
//! # Endpoints
//! - `GET /proxy/*path` - Read-through fetch from the upstream API
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint
//! - `POST /cache/cleanup` - Remove stale entries now
//! - `DELETE /cache` - Clear the cache
//! - `DELETE /cache/entries/*key` - Invalidate one cache key

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
