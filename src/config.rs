//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default random image source.
pub const DEFAULT_IMAGE_SOURCE_URL: &str = "https://picsum.photos/1200";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream todo API
    pub todo_api_base_url: String,
    /// Directory holding the cached image and its metadata
    pub image_dir: PathBuf,
    /// URL the random image is downloaded from
    pub image_source_url: String,
    /// Age in seconds after which the cached image is stale
    pub image_max_age_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 8080)
    /// - `TODO_API_BASE_URL` - Upstream todo API (default: http://localhost:3000)
    /// - `HOME_IMAGE_DIR` - Image cache directory (default: /app/images)
    /// - `IMAGE_SOURCE_URL` - Random image source (default: https://picsum.photos/1200)
    /// - `IMAGE_MAX_AGE_SECS` - Freshness window in seconds (default: 600)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            todo_api_base_url: env::var("TODO_API_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.todo_api_base_url),
            image_dir: env::var("HOME_IMAGE_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.image_dir),
            image_source_url: env::var("IMAGE_SOURCE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.image_source_url),
            image_max_age_secs: env::var("IMAGE_MAX_AGE_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.image_max_age_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            todo_api_base_url: "http://localhost:3000".to_string(),
            image_dir: PathBuf::from("/app/images"),
            image_source_url: DEFAULT_IMAGE_SOURCE_URL.to_string(),
            image_max_age_secs: 600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.todo_api_base_url, "http://localhost:3000");
        assert_eq!(config.image_dir, PathBuf::from("/app/images"));
        assert_eq!(config.image_source_url, DEFAULT_IMAGE_SOURCE_URL);
        assert_eq!(config.image_max_age_secs, 600);
    }

    // Single test touching the process environment so parallel tests don't race.
    #[test]
    fn test_config_from_env() {
        env::remove_var("PORT");
        env::remove_var("TODO_API_BASE_URL");
        env::remove_var("HOME_IMAGE_DIR");
        env::remove_var("IMAGE_SOURCE_URL");
        env::remove_var("IMAGE_MAX_AGE_SECS");

        let config = Config::from_env();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.image_max_age_secs, 600);

        // Invalid port falls back to the default
        env::set_var("PORT", "not-a-port");
        assert_eq!(Config::from_env().server_port, 8080);

        env::set_var("PORT", "9090");
        env::set_var("TODO_API_BASE_URL", "http://todo-backend:2345/");
        env::set_var("HOME_IMAGE_DIR", "/tmp/images");
        let config = Config::from_env();
        assert_eq!(config.server_port, 9090);
        assert_eq!(config.todo_api_base_url, "http://todo-backend:2345");
        assert_eq!(config.image_dir, PathBuf::from("/tmp/images"));

        env::remove_var("PORT");
        env::remove_var("TODO_API_BASE_URL");
        env::remove_var("HOME_IMAGE_DIR");
    }
}
