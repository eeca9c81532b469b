//! Refresh Decision Module
//!
//! The freshness / grace-period state machine, kept free of I/O.

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::CacheMetadata;

// == Decision ==
/// What a call to the image cache has to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// No usable metadata or no image file: download before answering
    ColdStart,
    /// Image is younger than the freshness window: serve it as is
    Fresh,
    /// Image expired and the grace period is unused: serve it once more and
    /// persist the contained metadata, which has the grace marked as used
    ServeStale(CacheMetadata),
    /// Image expired and the grace period is spent: download a new one
    Refresh,
}

impl Decision {
    /// True when answering requires a download from the image source.
    pub fn needs_fetch(&self) -> bool {
        matches!(self, Decision::ColdStart | Decision::Refresh)
    }
}

/// Decides how to answer a call made at `now`.
///
/// A timestamp in the future counts as fresh.
pub fn decide(
    metadata: Option<CacheMetadata>,
    image_exists: bool,
    now: DateTime<Utc>,
    max_age: Duration,
) -> Decision {
    let Some(metadata) = metadata else {
        return Decision::ColdStart;
    };
    if !image_exists {
        return Decision::ColdStart;
    }

    let expired = match (now - metadata.last_updated_utc).to_std() {
        Ok(age) => age >= max_age,
        Err(_) => false,
    };

    if !expired {
        Decision::Fresh
    } else if !metadata.grace_used() {
        Decision::ServeStale(metadata.with_grace_used())
    } else {
        Decision::Refresh
    }
}
