//! HTTP API server for the assist, analytics, and health endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::{create_router, metrics_router};
