//! User service - business logic layer.
//!
//! Translates store outcomes and validation results into uniform result
//! envelopes. The service never returns a raw error: every store failure is
//! absorbed into a `Failure` envelope with a fixed per-operation message.

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::envelope::Envelope;
use crate::models::{CreateUserRequest, User, UserPatch, UserStats};
use crate::store::UserStore;
use crate::validation::{validate_for_create, validate_for_update};

// The handlers switch on these error strings to pick status codes, so they
// are part of the HTTP contract.
pub(crate) const NOT_FOUND_ERROR: &str = "User not found";
pub(crate) const DUPLICATE_EMAIL_ERROR: &str = "User with this email already exists";

const NOT_FOUND_MESSAGE: &str = "User with the specified ID does not exist";
const INVALID_INPUT_ERROR: &str = "User ID is required";
const INVALID_INPUT_MESSAGE: &str = "Invalid input";
const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

/// Service layer for user operations
#[derive(Clone)]
pub struct UserService<S: UserStore> {
    store: Arc<S>,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// List every user.
    #[instrument(skip(self))]
    pub async fn get_all_users(&self) -> Envelope<Vec<User>> {
        match self.store.list_all().await {
            Ok(users) => Envelope::success(users, "Users retrieved successfully"),
            Err(err) => Envelope::failure(err.to_string(), "Failed to retrieve users"),
        }
    }

    /// Fetch a single user by its id.
    ///
    /// An empty id is rejected before the store is consulted. An id that does
    /// not parse as a UUID can never name a stored record, so it resolves to
    /// the not-found envelope directly.
    #[instrument(skip(self))]
    pub async fn get_user_by_id(&self, id: &str) -> Envelope<User> {
        if id.is_empty() {
            return Envelope::failure(INVALID_INPUT_ERROR, INVALID_INPUT_MESSAGE);
        }

        let Ok(id) = Uuid::parse_str(id) else {
            return Self::not_found();
        };

        match self.store.find_by_id(id).await {
            Ok(Some(user)) => Envelope::success(user, "User retrieved successfully"),
            Ok(None) => Self::not_found(),
            Err(err) => Envelope::failure(err.to_string(), "Failed to retrieve user"),
        }
    }

    /// Create a user from a raw payload.
    ///
    /// Validation runs first; the store is not consulted for the existing
    /// email until the payload is known to be well-formed.
    #[instrument(skip(self, input))]
    pub async fn create_user(&self, input: CreateUserRequest) -> Envelope<User> {
        let data = match validate_for_create(&input) {
            Ok(data) => data,
            Err(errors) => {
                return Envelope::failure(errors.join(", "), VALIDATION_FAILED_MESSAGE);
            }
        };

        match self.store.find_by_email(&data.email).await {
            Ok(None) => {}
            Ok(Some(_)) => {
                return Envelope::failure(DUPLICATE_EMAIL_ERROR, "Duplicate email address");
            }
            Err(err) => return Envelope::failure(err.to_string(), "Failed to create user"),
        }

        match self.store.create(data).await {
            Ok(user) => Envelope::success(user, "User created successfully"),
            Err(err) => Envelope::failure(err.to_string(), "Failed to create user"),
        }
    }

    /// Update a user.
    ///
    /// The patch is validated before existence is checked; a well-formed
    /// patch against a missing id yields the not-found envelope.
    #[instrument(skip(self, patch))]
    pub async fn update_user(&self, id: &str, patch: UserPatch) -> Envelope<User> {
        if id.is_empty() {
            return Envelope::failure(INVALID_INPUT_ERROR, INVALID_INPUT_MESSAGE);
        }

        if let Err(errors) = validate_for_update(&patch) {
            return Envelope::failure(errors.join(", "), VALIDATION_FAILED_MESSAGE);
        }

        let Ok(id) = Uuid::parse_str(id) else {
            return Self::not_found();
        };

        match self.store.find_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Self::not_found(),
            Err(err) => return Envelope::failure(err.to_string(), "Failed to update user"),
        }

        match self.store.update(id, patch).await {
            Ok(user) => Envelope::success(user, "User updated successfully"),
            Err(err) => Envelope::failure(err.to_string(), "Failed to update user"),
        }
    }

    /// Delete a user.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> Envelope<User> {
        if id.is_empty() {
            return Envelope::failure(INVALID_INPUT_ERROR, INVALID_INPUT_MESSAGE);
        }

        let Ok(id) = Uuid::parse_str(id) else {
            return Self::not_found();
        };

        match self.store.find_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Self::not_found(),
            Err(err) => return Envelope::failure(err.to_string(), "Failed to delete user"),
        }

        match self.store.delete(id).await {
            Ok(()) => Envelope::success_message("User deleted successfully"),
            Err(err) => Envelope::failure(err.to_string(), "Failed to delete user"),
        }
    }

    /// Aggregate statistics over the current listing.
    #[instrument(skip(self))]
    pub async fn get_user_stats(&self) -> Envelope<UserStats> {
        match self.store.list_all().await {
            Ok(users) => Envelope::success(
                UserStats::from_users(&users),
                "User statistics retrieved successfully",
            ),
            Err(err) => Envelope::failure(err.to_string(), "Failed to retrieve user statistics"),
        }
    }

    fn not_found<T>() -> Envelope<T> {
        Envelope::failure(NOT_FOUND_ERROR, NOT_FOUND_MESSAGE)
    }
}
