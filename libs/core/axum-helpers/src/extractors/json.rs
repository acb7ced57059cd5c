//! JSON extractor with a structured rejection body.

use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::errors::ErrorBody;

/// JSON extractor whose rejection is a structured envelope.
///
/// A body that is not valid JSON (or does not deserialize into `T`) is
/// rejected at the boundary with HTTP 400 and
/// `{"success": false, "error": "Invalid JSON"}`, before any handler runs.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ApiJson;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct CreateUser {
///     name: Option<String>,
/// }
///
/// async fn create_user(ApiJson(payload): ApiJson<CreateUser>) {
///     // payload deserialized, malformed bodies already rejected
/// }
/// ```
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Rejected malformed request body: {}", rejection);

            (
                StatusCode::BAD_REQUEST,
                axum::Json(ErrorBody::new("Invalid JSON")),
            )
                .into_response()
        })?;

        Ok(ApiJson(data))
    }
}
