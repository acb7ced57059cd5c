//! Users API routes
//!
//! This module wires up the users domain to HTTP routes.

use axum::Router;
use domain_users::{InMemoryUserStore, UserService, handlers};

/// Create the users router
pub fn router(store: &InMemoryUserStore) -> Router {
    // The store is shared; cloning hands the service the same backing map
    let service = UserService::new(store.clone());

    // Return the domain's router
    handlers::router(service)
}
