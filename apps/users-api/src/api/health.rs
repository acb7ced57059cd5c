//! Health check endpoint

use axum::{Json, Router, routing::get};
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    success: bool,
    message: &'static str,
    timestamp: String,
}

/// Create the health check router
pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Liveness check - always 200 while the process is serving
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "API is healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}
