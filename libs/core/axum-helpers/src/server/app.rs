use crate::errors::ErrorBody;
use crate::errors::handlers::endpoint_not_found;
use crate::http::create_permissive_cors_layer;

use super::shutdown::shutdown_signal;
use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use core_config::server::ServerConfig;
use std::any::Any;
use std::io;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Starts the Axum server with graceful shutdown.
///
/// # Arguments
/// * `router` - The configured Axum router
/// * `server_config` - Server configuration with host and port
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI documentation (Swagger UI at `/docs`)
/// - Common middleware (request tracing, permissive CORS)
/// - Panic-to-500 conversion so a faulty handler still produces structured JSON
/// - 404 fallback handler
///
/// Domain routers should apply their own state; this function combines them
/// with the cross-cutting concerns.
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
///
/// # Arguments
/// * `apis` - Router with all routes (state already applied to individual routes)
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_swagger_ui::SwaggerUi;

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", T::openapi()))
        .merge(apis)
        .fallback(endpoint_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(create_permissive_cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Converts a handler panic into a structured HTTP 500 response.
///
/// Clients always receive `{success, error, message}` JSON, never a bare
/// connection reset or an HTML error page.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown error".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::with_message(detail, "Internal server error")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(utoipa::OpenApi)]
    #[openapi()]
    struct TestDoc;

    #[tokio::test]
    async fn test_unmatched_route_returns_endpoint_not_found() {
        let app = create_router::<TestDoc>(Router::new());

        let response = app
            .oneshot(Request::get("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Endpoint not found");
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_500_envelope() {
        let routes = Router::new().route(
            "/boom",
            get(|| async {
                panic!("service exploded");
                #[allow(unreachable_code)]
                StatusCode::OK
            }),
        );
        let app = create_router::<TestDoc>(routes);

        let response = app
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "service exploded");
        assert_eq!(body["message"], "Internal server error");
    }
}
