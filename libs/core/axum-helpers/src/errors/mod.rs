pub mod handlers;

use serde::Serialize;

/// Standard boundary error response structure.
///
/// Returned for failures that never reach a handler: malformed request
/// bodies, unmatched routes, and panics inside the handler stack. The shape
/// mirrors the domain result envelope so clients always parse the same
/// fields:
///
/// ```json
/// {
///   "success": false,
///   "error": "Invalid JSON"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Always `false`
    pub success: bool,
    /// Human-readable error description
    pub error: String,
    /// Optional operation-level message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: Some(message.into()),
        }
    }
}
