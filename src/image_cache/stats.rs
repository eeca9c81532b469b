//! Cache Statistics Module
//!
//! Counts how image requests were answered.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Cache Stats ==
/// Tracks image cache activity since process start.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Calls answered from a fresh image
    pub fresh_hits: u64,
    /// Calls answered from the stale image during the grace period
    pub stale_serves: u64,
    /// Successful downloads from the image source
    pub fetches: u64,
    /// Failed downloads from the image source
    pub fetch_failures: u64,
    /// Time of the last successful download
    pub last_updated_utc: Option<DateTime<Utc>>,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the fresh hit counter.
    pub fn record_fresh_hit(&mut self) {
        self.fresh_hits += 1;
    }

    /// Increments the stale serve counter.
    pub fn record_stale_serve(&mut self) {
        self.stale_serves += 1;
    }

    /// Records a successful download made at `at`.
    pub fn record_fetch(&mut self, at: DateTime<Utc>) {
        self.fetches += 1;
        self.last_updated_utc = Some(at);
    }

    /// Increments the fetch failure counter.
    pub fn record_fetch_failure(&mut self) {
        self.fetch_failures += 1;
    }

    // == Totals ==
    /// Total number of answered or failed cache calls.
    pub fn total_calls(&self) -> u64 {
        self.fresh_hits + self.stale_serves + self.fetches + self.fetch_failures
    }
}
