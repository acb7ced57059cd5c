//! API route wiring

pub mod health;
pub mod users;

use axum::Router;
use domain_users::InMemoryUserStore;

/// Compose all API routes.
///
/// `/users` carries the domain router; `/health` sits beside it at the root.
pub fn routes(store: &InMemoryUserStore) -> Router {
    Router::new()
        .nest("/users", users::router(store))
        .merge(health::router())
}
