//! Page Module
//!
//! Server-side rendering of the todo page.

mod template;

pub use template::{escape_html, render};

/// Page shell with `{{name}}` placeholders.
const TODO_PAGE_TEMPLATE: &str = include_str!("todo_page.html");

/// Endpoint the page's image tag points at
pub const IMAGE_URL: &str = "/todo/image";

/// Endpoint the page's form posts new todos to
pub const POST_TODO_URL: &str = "/api/todos";

/// Longest todo the page's form accepts
pub const MAX_TODO_LENGTH: usize = 140;

/// Data shown on one rendering of the todo page.
#[derive(Debug, Clone, Default)]
pub struct TodoPage {
    /// Todos as returned by the upstream API
    pub todos: Vec<String>,
    /// Message of the failure that prevented loading todos, if any
    pub load_error: Option<String>,
}

impl TodoPage {
    pub fn loaded(todos: Vec<String>) -> Self {
        Self {
            todos,
            load_error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            todos: Vec::new(),
            load_error: Some(message.into()),
        }
    }

    /// Renders the full HTML document.
    pub fn render(&self) -> String {
        let max_len = MAX_TODO_LENGTH.to_string();
        let todos = self.todos_html();
        let error = self.error_html();

        render(
            TODO_PAGE_TEMPLATE,
            &[
                ("image_url", IMAGE_URL),
                ("post_url", POST_TODO_URL),
                ("max_todo_length", max_len.as_str()),
                ("error", error.as_str()),
                ("todos", todos.as_str()),
            ],
        )
    }

    fn todos_html(&self) -> String {
        if self.todos.is_empty() {
            return "<li><i>No todos yet</i></li>".to_string();
        }
        self.todos
            .iter()
            .map(|todo| format!("<li>{}</li>", escape_html(todo)))
            .collect::<Vec<_>>()
            .join("\n    ")
    }

    fn error_html(&self) -> String {
        match self.load_error.as_deref() {
            Some(message) if !message.trim().is_empty() => format!(
                r#"<div class="error">Failed to load todos: {}</div>"#,
                escape_html(message)
            ),
            _ => String::new(),
        }
    }
}
