//! API Routes
//!
//! Configures the Axum router with all front end endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_todo_handler, home_handler, image_handler, root_handler, stats_handler,
    todo_page_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/Home", get(home_handler))
        .route("/todo", get(todo_page_handler))
        .route("/todo/image", get(image_handler))
        .route("/api/todos", post(create_todo_handler))
        .route("/stats", get(stats_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::image_cache::{test_support::CountingSource, ImageCache};
    use crate::todos::TodoClient;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, TempDir) {
        let dir = tempdir().unwrap();
        let cache = ImageCache::new(dir.path(), Arc::new(CountingSource::new()));
        let todos = TodoClient::new(reqwest::Client::new(), "http://127.0.0.1:1");
        (create_router(AppState::new(cache, todos, 8080)), dir)
    }

    async fn get_status(uri: &str) -> StatusCode {
        let (app, _dir) = create_test_app();
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_get_routes() {
        for uri in ["/", "/Home", "/todo", "/todo/image", "/stats"] {
            assert_eq!(get_status(uri).await, StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_unknown_route() {
        assert_eq!(get_status("/nope").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_api_todos_is_post_only() {
        assert_eq!(get_status("/api/todos").await, StatusCode::METHOD_NOT_ALLOWED);
    }
}
