//! Handler tests for the Users domain
//!
//! These tests verify that the HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Envelope serialization (Rust structs → JSON)
//! - HTTP status codes per failure kind
//! - Boundary rejection of malformed bodies
//!
//! Unlike E2E tests, these drive ONLY the users domain router, not the full
//! application with its fallback and middleware stack.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_users::{InMemoryUserStore, UserService, UserStore, handlers};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

async fn app() -> (Router, InMemoryUserStore) {
    let store = InMemoryUserStore::new();
    store.connect().await.unwrap();
    let router = handlers::router(UserService::new(store.clone()));
    (router, store)
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_list_users_returns_seeds_in_insertion_order() {
    let (app, _) = app().await;

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["email"], "john@example.com");
    assert_eq!(body["data"][1]["email"], "jane@example.com");
}

#[tokio::test]
async fn test_crud_scenario_roundtrip() {
    let (app, _) = app().await;

    // Create
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": "Test User", "email": "test@example.com", "age": 25 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["age"], 25);
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    // Read back
    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["name"], "Test User");

    // Update a single field
    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/{}", id), json!({ "age": 26 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["age"], 26);
    assert_eq!(body["data"]["email"], "test@example.com");

    // Delete
    let response = app
        .clone()
        .oneshot(
            Request::delete(format!("/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User deleted successfully");
    assert!(body.get("data").is_none());

    // Gone
    let response = app
        .oneshot(
            Request::get(format!("/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_create_invalid_payload_returns_400_with_all_messages() {
    let (app, _) = app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": "A", "email": "invalid", "age": 200 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("Name must be between 2 and 100 characters"));
    assert!(error.contains("Invalid email format"));
    assert!(error.contains("Age must be between 0 and 150"));
}

#[tokio::test]
async fn test_create_missing_fields_returns_400() {
    let (app, _) = app().await;

    let response = app
        .oneshot(json_request("POST", "/", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Validation failed");
}

#[tokio::test]
async fn test_create_duplicate_email_returns_409() {
    let (app, _) = app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": "Impostor", "email": "john@example.com", "age": 50 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "User with this email already exists");
    assert_eq!(body["message"], "Duplicate email address");
}

#[tokio::test]
async fn test_update_duplicate_email_returns_409() {
    let (app, store) = app().await;
    let jane = store
        .find_by_email("jane@example.com")
        .await
        .unwrap()
        .unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", jane.id),
            json!({ "email": "john@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "User with this email already exists");
    assert_eq!(body["message"], "Failed to update user");
}

#[tokio::test]
async fn test_update_unknown_id_returns_404() {
    let (app, _) = app().await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", uuid::Uuid::now_v7()),
            json!({ "age": 42 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_rejected_at_boundary() {
    let (app, _) = app().await;

    let response = app
        .oneshot(
            Request::post("/")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid JSON");
}

#[tokio::test]
async fn test_stats_route_wins_over_id_route() {
    let (app, _) = app().await;

    let response = app
        .oneshot(Request::get("/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // Seeds are 30 and 25 years old
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["totalUsers"], 2);
    assert_eq!(body["data"]["averageAge"], 27.5);
    assert_eq!(body["data"]["youngestUser"], 25);
    assert_eq!(body["data"]["oldestUser"], 30);
}

#[tokio::test]
async fn test_stats_on_empty_store_is_all_zeroes() {
    let (app, store) = app().await;
    store.clear().await.unwrap();

    let response = app
        .oneshot(Request::get("/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["totalUsers"], 0);
    assert_eq!(body["data"]["averageAge"], 0.0);
    assert_eq!(body["data"]["youngestUser"], 0);
    assert_eq!(body["data"]["oldestUser"], 0);
}

#[tokio::test]
async fn test_disconnected_store_maps_to_500() {
    let (app, store) = app().await;
    store.disconnect().await.unwrap();

    let response = app
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Database not connected");
    assert_eq!(body["message"], "Failed to retrieve users");

    let response = app
        .oneshot(Request::get("/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_get_user_timestamps_serialize_camel_case() {
    let (app, store) = app().await;
    let john = store
        .find_by_email("john@example.com")
        .await
        .unwrap()
        .unwrap();

    let response = app
        .oneshot(
            Request::get(format!("/{}", john.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = json_body(response.into_body()).await;
    assert!(body["data"]["createdAt"].is_string());
    assert!(body["data"]["updatedAt"].is_string());
    assert!(body["data"].get("created_at").is_none());
}
