//! API Module
//!
//! HTTP handlers and routing for the todo front end.
//!
//! # Endpoints
//! - `GET /` - Liveness text
//! - `GET /Home` - Reports the listening port
//! - `GET /todo` - Rendered todo page
//! - `GET /todo/image` - Current cached image
//! - `POST /api/todos` - Forward a new todo to the upstream API
//! - `GET /stats` - Image cache statistics

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
