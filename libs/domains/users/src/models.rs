use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User entity
///
/// Serialized camelCase on the wire (`createdAt`/`updatedAt` as RFC 3339).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned by the store, immutable
    pub id: Uuid,
    /// Display name, 2-100 characters after trimming
    pub name: String,
    /// Email address, unique across all stored users
    pub email: String,
    /// Age in years, 0-150 inclusive
    pub age: i64,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful mutation
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a user.
///
/// Every field is optional so that a missing field reaches the validator,
/// which reports it, instead of being rejected during deserialization.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
}

/// Partial update for an existing user; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
}

/// Validated creation input handed to the store.
///
/// The store assigns the id and both timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// Aggregate statistics over the full user listing
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_users: usize,
    pub average_age: f64,
    pub youngest_user: i64,
    pub oldest_user: i64,
}

impl UserStats {
    /// Compute statistics; all zeroes for an empty listing.
    pub fn from_users(users: &[User]) -> Self {
        if users.is_empty() {
            return Self {
                total_users: 0,
                average_age: 0.0,
                youngest_user: 0,
                oldest_user: 0,
            };
        }

        let sum: i64 = users.iter().map(|u| u.age).sum();

        Self {
            total_users: users.len(),
            average_age: sum as f64 / users.len() as f64,
            youngest_user: users.iter().map(|u| u.age).min().unwrap_or(0),
            oldest_user: users.iter().map(|u| u.age).max().unwrap_or(0),
        }
    }
}
