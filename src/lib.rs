//! Todo Frontend - Server-rendered todo page
//!
//! Proxies a todo list from an upstream API into an HTML page and serves a
//! random image cached on disk with a one-time stale grace period.

pub mod api;
pub mod config;
pub mod error;
pub mod image_cache;
pub mod models;
pub mod page;
pub mod todos;

pub use api::AppState;
pub use config::Config;
pub use image_cache::ImageCache;
