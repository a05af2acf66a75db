//! HTTP API handlers.

use axum::{response::IntoResponse, Json};
use serde::Serialize;

/// Greeting returned by the root route.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Service greeting.
    pub message: &'static str,
}

/// Root handler - always returns the service greeting with 200.
pub async fn root() -> impl IntoResponse {
    Json(RootResponse {
        message: "Event Swipe API",
    })
}
