//! Response DTOs for the todo front end
//!
//! Defines the structure of outgoing JSON response bodies.

use serde::Serialize;

use crate::image_cache::CacheStats;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Calls answered with a fresh image
    pub fresh_hits: u64,
    /// Calls answered with the stale image during the grace period
    pub stale_serves: u64,
    /// Successful downloads from the image source
    pub fetches: u64,
    /// Failed downloads from the image source
    pub fetch_failures: u64,
    /// Timestamp of the last successful download, ISO 8601
    pub last_updated_utc: Option<String>,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats) -> Self {
        Self {
            fresh_hits: stats.fresh_hits,
            stale_serves: stats.stale_serves,
            fetches: stats.fetches,
            fetch_failures: stats.fetch_failures,
            last_updated_utc: stats.last_updated_utc.map(|t| t.to_rfc3339()),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
