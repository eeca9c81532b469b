//! Image Source Module
//!
//! Where new images come from.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{AppError, Result};

/// Produces the bytes of a new random image.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Downloads one complete image.
    ///
    /// Fails with [`AppError::ImageFetch`] rather than returning partial or
    /// empty content.
    async fn fetch(&self) -> Result<Vec<u8>>;
}

// == HTTP Image Source ==
/// Downloads images from a fixed URL such as `https://picsum.photos/1200`.
#[derive(Debug, Clone)]
pub struct HttpImageSource {
    client: Client,
    url: String,
}

impl HttpImageSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        let fetch_error = |e: reqwest::Error| AppError::ImageFetch(e.to_string());

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(fetch_error)?
            .error_for_status()
            .map_err(fetch_error)?;

        let bytes = response.bytes().await.map_err(fetch_error)?;
        if bytes.is_empty() {
            return Err(AppError::ImageFetch(format!(
                "{} returned an empty body",
                self.url
            )));
        }

        debug!(url = %self.url, bytes = bytes.len(), "Downloaded image");
        Ok(bytes.to_vec())
    }
}
