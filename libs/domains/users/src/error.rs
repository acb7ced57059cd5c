use thiserror::Error;

/// Store-level failures.
///
/// The display strings double as the `error` field of failure envelopes and
/// the HTTP layer switches on them, so they are part of the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Database not connected")]
    NotConnected,

    #[error("User not found")]
    NotFound,

    #[error("User with this email already exists")]
    DuplicateEmail,
}

pub type StoreResult<T> = Result<T, StoreError>;
