//! In-memory image sources for tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::ImageSource;
use crate::error::{AppError, Result};

/// Returns a distinct body per call (`image-1`, `image-2`, ...) and counts
/// calls. Can be switched to failing and slowed down.
#[derive(Debug, Default)]
pub(crate) struct CountingSource {
    calls: AtomicUsize,
    failing: AtomicBool,
    delay: Option<Duration>,
}

impl CountingSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub(crate) fn failing() -> Self {
        let source = Self::default();
        source.set_failing(true);
        source
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of fetch attempts, failed ones included.
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageSource for CountingSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::ImageFetch("image source unavailable".to_string()));
        }
        Ok(format!("image-{}", n).into_bytes())
    }
}
