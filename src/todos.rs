//! Upstream Todo API Client
//!
//! Thin reqwest wrapper around `GET/POST <base>/api/todos`.

use axum::http::StatusCode;
use reqwest::Client;
use tracing::debug;

use crate::error::{AppError, Result};

/// HTTP client for the todo backend.
#[derive(Debug, Clone)]
pub struct TodoClient {
    client: Client,
    base_url: String,
}

impl TodoClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn todos_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    /// Fetches all todos. A JSON `null` body counts as an empty list.
    pub async fn list(&self) -> Result<Vec<String>> {
        let todos = self
            .client
            .get(self.todos_url())
            .send()
            .await?
            .error_for_status()?
            .json::<Option<Vec<String>>>()
            .await?
            .unwrap_or_default();

        debug!(count = todos.len(), "Loaded todos from upstream");
        Ok(todos)
    }

    /// Submits a new todo as a JSON string.
    ///
    /// Returns the upstream success status. A failure status comes back as
    /// [`AppError::Upstream`] carrying the upstream's status and body text.
    pub async fn create(&self, todo: &str) -> Result<StatusCode> {
        let response = self.client.post(self.todos_url()).json(todo).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(status);
        }

        let message = response.text().await.unwrap_or_default();
        Err(AppError::Upstream {
            status: Some(status),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Json, Router};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    #[test]
    fn test_base_url_is_trimmed() {
        let client = TodoClient::new(Client::new(), "http://backend:3000///");
        assert_eq!(client.base_url(), "http://backend:3000");
        assert_eq!(client.todos_url(), "http://backend:3000/api/todos");
    }

    #[tokio::test]
    async fn test_list_todos() {
        let base = serve(Router::new().route(
            "/api/todos",
            get(|| async { Json(vec!["buy milk", "walk dog"]) }),
        ))
        .await;

        let todos = TodoClient::new(Client::new(), base).list().await.unwrap();
        assert_eq!(todos, vec!["buy milk".to_string(), "walk dog".to_string()]);
    }

    #[tokio::test]
    async fn test_list_null_is_empty() {
        let base = serve(Router::new().route(
            "/api/todos",
            get(|| async { ([("content-type", "application/json")], "null") }),
        ))
        .await;

        let todos = TodoClient::new(Client::new(), base).list().await.unwrap();
        assert!(todos.is_empty());
    }

    #[tokio::test]
    async fn test_list_error_status() {
        let base = serve(Router::new().route(
            "/api/todos",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "db down") }),
        ))
        .await;

        let err = TodoClient::new(Client::new(), base).list().await.unwrap_err();
        assert!(matches!(err, AppError::Upstream { status: None, .. }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_create_passes_status_and_text() {
        let base = serve(Router::new().route(
            "/api/todos",
            get(|| async { Json(Vec::<String>::new()) }).post(|Json(todo): Json<String>| async move {
                if todo.len() > 140 {
                    (StatusCode::BAD_REQUEST, "Todo too long".to_string())
                } else {
                    (StatusCode::CREATED, todo)
                }
            }),
        ))
        .await;
        let client = TodoClient::new(Client::new(), base);

        assert_eq!(client.create("short").await.unwrap(), StatusCode::CREATED);

        match client.create(&"x".repeat(141)).await.unwrap_err() {
            AppError::Upstream { status, message } => {
                assert_eq!(status, Some(StatusCode::BAD_REQUEST));
                assert_eq!(message, "Todo too long");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
