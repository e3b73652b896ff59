//! Generic API response envelope.
//!
//! Every REST endpoint replies with the same JSON shape: a `success` flag,
//! an optional `error` message, and the payload fields flattened into the
//! top level of the object.

use serde::Serialize;

/// Standard response wrapper for the REST API.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,

    /// Error message if the operation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// The response payload (flattened into the response)
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with data.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    /// Create an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            data: None,
        }
    }
}
