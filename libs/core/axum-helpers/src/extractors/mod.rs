//! Custom extractors for Axum handlers.
//!
//! This module provides reusable extractors that standardize boundary
//! error handling across the API.

pub mod json;

pub use json::ApiJson;
