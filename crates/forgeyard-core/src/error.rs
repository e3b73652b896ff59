//! Error types for forgeyard.
//!
//! This module defines the error enum shared by the matching core, the
//! catalog store, and the LLM boundary, plus the HTTP status mapping the
//! server layer uses.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the forgeyard library.
#[derive(Debug, Error)]
pub enum ForgeyardError {
    // Network errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        /// Optional cause description
        cause: Option<String>,
    },

    #[error("Request timeout after {0:?}")]
    Timeout(std::time::Duration),

    // Normalization boundary errors
    #[error("Operation normalization failed: {reason}")]
    NormalizationFailed { reason: String },

    // Planner boundary errors
    #[error("Failed to generate {what}: {reason}")]
    GenerationFailed { what: String, reason: String },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Catalog errors
    #[error("Manufacturer not found: {id}")]
    ManufacturerNotFound { id: String },

    // Validation errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for forgeyard operations.
pub type Result<T> = std::result::Result<T, ForgeyardError>;

// Conversion implementations for common error types

impl From<std::io::Error> for ForgeyardError {
    fn from(err: std::io::Error) -> Self {
        ForgeyardError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for ForgeyardError {
    fn from(err: serde_json::Error) -> Self {
        ForgeyardError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for ForgeyardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ForgeyardError::Timeout(std::time::Duration::from_secs(0))
        } else {
            ForgeyardError::Network {
                message: err.to_string(),
                cause: Some(err.to_string()),
            }
        }
    }
}

impl ForgeyardError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        ForgeyardError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// HTTP status code for this error, used by the REST layer.
    ///
    /// - 400: bad input (validation)
    /// - 404: missing resource
    /// - 502: an upstream dependency failed (text service, network)
    /// - 500: everything else
    pub fn http_status(&self) -> u16 {
        match self {
            ForgeyardError::Validation { .. } => 400,

            ForgeyardError::ManufacturerNotFound { .. } => 404,

            ForgeyardError::Network { .. }
            | ForgeyardError::Timeout(_)
            | ForgeyardError::NormalizationFailed { .. }
            | ForgeyardError::GenerationFailed { .. } => 502,

            // All other errors are internal errors
            _ => 500,
        }
    }

    /// Check if this error should trigger a retry at the caller's level.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ForgeyardError::Network { .. } | ForgeyardError::Timeout(_)
        )
    }
}
