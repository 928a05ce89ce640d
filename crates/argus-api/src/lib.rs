//! Argus API crate - axum HTTP server, route handlers, SSE streaming.
//!
//! Provides the REST API for the Argus application, including the supplier
//! roster, structured search, the chat endpoint and its turn log, live turn
//! event streaming (SSE), and health checks.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
