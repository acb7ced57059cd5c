//! HTTP middleware helpers.

use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Allows any origin, method, and header. Suitable for a public sample API;
/// restrict the origin list before fronting real user data.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
