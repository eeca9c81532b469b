//! API Handlers
//!
//! HTTP request handlers for each front end endpoint.

use std::io;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use tokio::fs;
use tracing::warn;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::image_cache::{HttpImageSource, ImageCache};
use crate::models::StatsResponse;
use crate::page::TodoPage;
use crate::todos::TodoClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide image cache
    pub image_cache: Arc<ImageCache>,
    /// Upstream todo API client
    pub todos: Arc<TodoClient>,
    /// Port the server listens on, reported by `/Home`
    pub server_port: u16,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(image_cache: ImageCache, todos: TodoClient, server_port: u16) -> Self {
        Self {
            image_cache: Arc::new(image_cache),
            todos: Arc::new(todos),
            server_port,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Both upstreams share one HTTP connection pool.
    pub fn from_config(config: &Config) -> Self {
        let client = reqwest::Client::new();
        let source = HttpImageSource::new(client.clone(), config.image_source_url.clone());
        let image_cache = ImageCache::new(config.image_dir.clone(), Arc::new(source))
            .with_max_age(std::time::Duration::from_secs(config.image_max_age_secs));
        let todos = TodoClient::new(client, config.todo_api_base_url.clone());

        Self::new(image_cache, todos, config.server_port)
    }
}

/// Handler for GET /
pub async fn root_handler() -> &'static str {
    "Ok"
}

/// Handler for GET /Home
pub async fn home_handler(State(state): State<AppState>) -> String {
    format!("Server started in port {}", state.server_port)
}

/// Handler for GET /todo
///
/// Always renders a page. Upstream failures become an inline message.
pub async fn todo_page_handler(State(state): State<AppState>) -> Html<String> {
    let page = match state.todos.list().await {
        Ok(todos) => TodoPage::loaded(todos),
        Err(e) => {
            warn!(error = %e, base_url = state.todos.base_url(), "Failed to load todos");
            TodoPage::failed(e.to_string())
        }
    };

    Html(page.render())
}

/// Handler for GET /todo/image
///
/// Serves the cached image as JPEG. A failed download answers 502, a
/// missing file 404.
pub async fn image_handler(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let path = state.image_cache.current_image_path().await?;

    let bytes = match fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(AppError::NotFound("Image not found".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], bytes))
}

/// Handler for POST /api/todos
///
/// Forwards the todo to the upstream API and mirrors its answer.
pub async fn create_todo_handler(
    State(state): State<AppState>,
    Json(todo): Json<String>,
) -> Result<StatusCode> {
    state.todos.create(&todo).await
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.image_cache.stats().await;
    Json(StatsResponse::new(&stats))
}
