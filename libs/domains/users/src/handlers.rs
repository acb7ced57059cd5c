use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::ApiJson;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateUserRequest, User, UserPatch, UserStats};
use crate::service::{DUPLICATE_EMAIL_ERROR, NOT_FOUND_ERROR, UserService};
use crate::store::UserStore;

/// OpenAPI documentation for the users endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, user_stats, get_user, update_user, delete_user),
    components(schemas(User, CreateUserRequest, UserPatch, UserStats)),
    tags((name = "Users", description = "User management endpoints"))
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints.
///
/// `/stats` is registered ahead of `/{id}` so the literal segment wins over
/// the parameterized route.
pub fn router<S: UserStore + 'static>(service: UserService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/stats", get(user_stats))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(shared_service)
}

/// Status for a failure envelope on single-resource operations.
///
/// The service encodes the failure kind in the error text, so the mapping
/// switches on it verbatim.
fn failure_status(error: &str) -> StatusCode {
    match error {
        NOT_FOUND_ERROR => StatusCode::NOT_FOUND,
        DUPLICATE_EMAIL_ERROR => StatusCode::CONFLICT,
        _ => StatusCode::BAD_REQUEST,
    }
}

/// List all users
///
/// GET /users
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "All users wrapped in a result envelope"),
        (status = 500, description = "Store failure")
    )
)]
async fn list_users<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
) -> impl IntoResponse {
    let envelope = service.get_all_users().await;
    let status = if envelope.is_success() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(envelope))
}

/// Create a new user
///
/// POST /users
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Email already in use")
    )
)]
async fn create_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    ApiJson(input): ApiJson<CreateUserRequest>,
) -> impl IntoResponse {
    let envelope = service.create_user(input).await;
    let status = match envelope.error() {
        None => StatusCode::CREATED,
        Some(error) => failure_status(error),
    };

    (status, Json(envelope))
}

/// Aggregate user statistics
///
/// GET /users/stats
#[utoipa::path(
    get,
    path = "/stats",
    tag = "Users",
    responses(
        (status = 200, description = "Statistics over the current listing"),
        (status = 500, description = "Store failure")
    )
)]
async fn user_stats<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
) -> impl IntoResponse {
    let envelope = service.get_user_stats().await;
    let status = if envelope.is_success() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(envelope))
}

/// Get a user by ID
///
/// GET /users/:id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found"),
        (status = 404, description = "No user with this id")
    )
)]
async fn get_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let envelope = service.get_user_by_id(&id).await;
    let status = match envelope.error() {
        None => StatusCode::OK,
        Some(error) => failure_status(error),
    };

    (status, Json(envelope))
}

/// Update a user
///
/// PUT /users/:id
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    request_body = UserPatch,
    responses(
        (status = 200, description = "User updated"),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "No user with this id"),
        (status = 409, description = "Email already in use")
    )
)]
async fn update_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<UserPatch>,
) -> impl IntoResponse {
    let envelope = service.update_user(&id, patch).await;
    let status = match envelope.error() {
        None => StatusCode::OK,
        Some(error) => failure_status(error),
    };

    (status, Json(envelope))
}

/// Delete a user
///
/// DELETE /users/:id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "No user with this id")
    )
)]
async fn delete_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let envelope = service.delete_user(&id).await;
    let status = match envelope.error() {
        None => StatusCode::OK,
        Some(error) => failure_status(error),
    };

    (status, Json(envelope))
}
