//! Image Cache Module
//!
//! Keeps one randomly chosen image on disk next to a small JSON metadata
//! record and decides on every call whether to serve it, serve it once more
//! past expiry, or download a new one.

mod decision;
mod metadata;
mod source;
mod stats;
mod store;
mod write;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export public types
pub use decision::{decide, Decision};
pub use metadata::CacheMetadata;
pub use source::{HttpImageSource, ImageSource};
pub use stats::CacheStats;
pub use store::ImageCache;

// == Public Constants ==
/// File name of the cached image inside the cache directory
pub const IMAGE_FILE_NAME: &str = "home-image.jpg";

/// File name of the metadata record inside the cache directory
pub const METADATA_FILE_NAME: &str = "home-image-meta.json";

/// Age after which the cached image is stale
pub const DEFAULT_MAX_AGE: std::time::Duration = std::time::Duration::from_secs(10 * 60);
