//! Cache Metadata Module
//!
//! The persisted record paired with the cached image file.

use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::warn;

use super::write::write_atomic;

// == Cache Metadata ==
/// Freshness record for the cached image.
///
/// Serialized with PascalCase field names so records written by earlier
/// deployments keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CacheMetadata {
    /// When the image file was last downloaded
    pub last_updated_utc: DateTime<Utc>,
    /// 0 until the stale image has been served once past expiry, then 1
    pub served_after_expiry_count: u32,
}

impl CacheMetadata {
    // == Constructor ==
    /// Metadata for an image downloaded at `now`.
    pub fn fresh(now: DateTime<Utc>) -> Self {
        Self {
            last_updated_utc: now,
            served_after_expiry_count: 0,
        }
    }

    /// Returns a copy with the grace period marked as used.
    pub fn with_grace_used(self) -> Self {
        Self {
            served_after_expiry_count: 1,
            ..self
        }
    }

    /// True once the stale image has already been served past expiry.
    pub fn grace_used(&self) -> bool {
        self.served_after_expiry_count >= 1
    }

    // == Load ==
    /// Reads the record at `path`.
    ///
    /// A missing, unreadable or malformed record yields `None`, which callers
    /// treat as a cold start.
    pub async fn load(path: &Path) -> Option<Self> {
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read image metadata");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Discarding corrupt image metadata");
                None
            }
        }
    }

    // == Save ==
    /// Replaces the record at `path` with this one.
    pub async fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_vec(self).map_err(io::Error::other)?;
        write_atomic(path, &json).await
    }
}
