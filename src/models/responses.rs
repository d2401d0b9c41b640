//! Response DTOs for the proxy server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::upstream::Fetched;

/// Response body for the proxy endpoint (GET /proxy/*path)
#[derive(Debug, Clone, Serialize)]
pub struct ProxyResponse {
    /// Cache key the request resolved to
    pub key: String,
    /// Whether the data was served from cache
    pub cached: bool,
    /// Upstream JSON document
    pub data: Value,
}

impl ProxyResponse {
    pub fn new(key: impl Into<String>, fetched: Fetched) -> Self {
        Self {
            key: key.into(),
            cached: fetched.cached,
            data: fetched.data,
        }
    }
}

/// Response body for a manual sweep (POST /cache/cleanup)
#[derive(Debug, Clone, Serialize)]
pub struct CleanupResponse {
    /// Number of stale entries removed
    pub removed: usize,
    /// Entries left afterwards
    pub size: usize,
}

impl CleanupResponse {
    pub fn new(removed: usize, size: usize) -> Self {
        Self { removed, size }
    }
}

/// Response body for the DELETE operations
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The key that was deleted, absent when the whole cache was cleared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl DeleteResponse {
    /// Creates a response for a single deleted key
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            key: Some(key),
        }
    }

    /// Creates a response for a full clear
    pub fn cleared() -> Self {
        Self {
            message: "Cache cleared".to_string(),
            key: None,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
