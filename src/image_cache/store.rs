//! Image Cache Store Module
//!
//! Owns the on-disk image and metadata pair and serializes every refresh
//! decision made against them.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::fs;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use super::write::write_atomic;
use super::{
    decide, CacheMetadata, CacheStats, Decision, ImageSource, DEFAULT_MAX_AGE, IMAGE_FILE_NAME,
    METADATA_FILE_NAME,
};
use crate::error::Result;

// == Image Cache ==
/// Single cached image with a one-time stale grace period.
///
/// Construct one per process and share it behind an `Arc`.
pub struct ImageCache {
    /// Directory holding both cache files
    dir: PathBuf,
    /// Cached image file
    image_path: PathBuf,
    /// Metadata record paired with the image
    metadata_path: PathBuf,
    /// Where new images are downloaded from
    source: Arc<dyn ImageSource>,
    /// Age at which the image becomes stale
    max_age: Duration,
    /// Held from metadata load until the last write of a decision
    decision_lock: Mutex<()>,
    /// Activity counters
    stats: RwLock<CacheStats>,
}

impl ImageCache {
    // == Constructor ==
    /// Creates a cache rooted at `dir` that downloads from `source`.
    ///
    /// Nothing touches the filesystem until the first call.
    pub fn new(dir: impl Into<PathBuf>, source: Arc<dyn ImageSource>) -> Self {
        let dir = dir.into();
        Self {
            image_path: dir.join(IMAGE_FILE_NAME),
            metadata_path: dir.join(METADATA_FILE_NAME),
            dir,
            source,
            max_age: DEFAULT_MAX_AGE,
            decision_lock: Mutex::new(()),
            stats: RwLock::new(CacheStats::new()),
        }
    }

    /// Overrides the freshness window.
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    pub fn metadata_path(&self) -> &Path {
        &self.metadata_path
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    // == Current Image ==
    /// Returns the path of an image that is safe to serve right now,
    /// downloading a new one first when required.
    pub async fn current_image_path(&self) -> Result<PathBuf> {
        self.current_image_path_at(Utc::now()).await
    }

    /// Same as [`current_image_path`](Self::current_image_path) for a call
    /// made at `now`.
    ///
    /// A failed download returns the error and leaves both files as they
    /// were, so the next call decides again from the same state.
    pub async fn current_image_path_at(&self, now: DateTime<Utc>) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).await?;

        let _guard = self.decision_lock.lock().await;

        let metadata = CacheMetadata::load(&self.metadata_path).await;
        let image_exists = fs::try_exists(&self.image_path).await.unwrap_or(false);
        let decision = decide(metadata, image_exists, now, self.max_age);
        debug!(?decision, image_exists, "Image cache decision");

        match decision {
            Decision::Fresh => {
                self.stats.write().await.record_fresh_hit();
            }
            Decision::ServeStale(marked) => {
                marked.save(&self.metadata_path).await?;
                self.stats.write().await.record_stale_serve();
                info!(
                    last_updated_utc = %marked.last_updated_utc,
                    "Serving expired image once more"
                );
            }
            Decision::ColdStart | Decision::Refresh => {
                self.refresh(now).await?;
            }
        }

        Ok(self.image_path.clone())
    }

    // == Refresh ==
    /// Downloads a new image and persists it, image first, then metadata.
    async fn refresh(&self, now: DateTime<Utc>) -> Result<()> {
        let bytes = match self.source.fetch().await {
            Ok(bytes) => bytes,
            Err(e) => {
                self.stats.write().await.record_fetch_failure();
                warn!(error = %e, "Image download failed, keeping cached files untouched");
                return Err(e);
            }
        };

        write_atomic(&self.image_path, &bytes).await?;
        CacheMetadata::fresh(now).save(&self.metadata_path).await?;

        self.stats.write().await.record_fetch(now);
        info!(
            path = %self.image_path.display(),
            bytes = bytes.len(),
            "Cached new image"
        );
        Ok(())
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    pub async fn stats(&self) -> CacheStats {
        self.stats.read().await.clone()
    }
}
