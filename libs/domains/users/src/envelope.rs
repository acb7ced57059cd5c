//! Uniform result wrapper returned by every service operation.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Tagged result of a service operation.
///
/// Serializes flat as `{"success": bool, "data"?: T, "error"?: string,
/// "message": string}`. The two variants make an envelope carrying both a
/// payload and an error unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success {
        /// Operation payload; `None` for operations with no body (delete)
        data: Option<T>,
        message: String,
    },
    Failure {
        error: String,
        message: String,
    },
}

impl<T> Envelope<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Envelope::Success {
            data: Some(data),
            message: message.into(),
        }
    }

    /// Success without a payload.
    pub fn success_message(message: impl Into<String>) -> Self {
        Envelope::Success {
            data: None,
            message: message.into(),
        }
    }

    pub fn failure(error: impl Into<String>, message: impl Into<String>) -> Self {
        Envelope::Failure {
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Envelope::Success { message, .. } | Envelope::Failure { message, .. } => message,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Envelope::Success { data, .. } => data.as_ref(),
            Envelope::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Envelope::Success { .. } => None,
            Envelope::Failure { error, .. } => Some(error),
        }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Envelope::Success { data, message } => {
                let len = if data.is_some() { 3 } else { 2 };
                let mut state = serializer.serialize_struct("Envelope", len)?;
                state.serialize_field("success", &true)?;
                if let Some(data) = data {
                    state.serialize_field("data", data)?;
                }
                state.serialize_field("message", message)?;
                state.end()
            }
            Envelope::Failure { error, message } => {
                let mut state = serializer.serialize_struct("Envelope", 3)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.serialize_field("message", message)?;
                state.end()
            }
        }
    }
}
