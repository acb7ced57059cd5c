//! Users Domain
//!
//! This module provides a complete domain implementation for user management.
//!
//! # Features
//!
//! - User CRUD operations over an in-memory store
//! - Connect/disconnect gate simulating external-resource acquisition
//! - Pure payload validation with ordered, human-readable messages
//! - Uniform result envelopes mapped onto HTTP status codes
//! - Aggregate user statistics
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, envelope → status code mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, result envelopes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← Keyed in-memory records (trait + implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, statistics
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{InMemoryUserStore, UserService, handlers};
//!
//! // Create store and service
//! let store = InMemoryUserStore::new();
//! let service = UserService::new(store);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use envelope::Envelope;
pub use error::{StoreError, StoreResult};
pub use handlers::ApiDoc;
pub use models::{CreateUserRequest, NewUser, User, UserPatch, UserStats};
pub use service::UserService;
pub use store::{InMemoryUserStore, UserStore};
