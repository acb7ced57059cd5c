use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorBody;

/// Handler for unmatched routes.
///
/// Install as the router fallback.
pub async fn endpoint_not_found() -> Response {
    let body = Json(ErrorBody::new("Endpoint not found"));

    (StatusCode::NOT_FOUND, body).into_response()
}
