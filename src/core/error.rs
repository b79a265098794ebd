//! Error types and error handling for the librank service.
//!
//! This module defines the error taxonomy used throughout the
//! application. Protocol-specific error handling (HTTP status codes)
//! lives in the HTTP adapter module.
//!
//! Note that the ranking engine itself never returns an error:
//! degraded-data conditions (missing index artifact, unknown terms)
//! resolve to documented defaults inside the term-frequency source.
//! The variants below cover the transport boundary and the catalog
//! collaborator.

use thiserror::Error;

/// Result type alias for librank operations
pub type Result<T> = std::result::Result<T, LibrankError>;

/// Main error type for the librank service
#[derive(Error, Debug)]
pub enum LibrankError {
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid filter '{field}': {message}")]
    InvalidFilter { field: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl LibrankError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            LibrankError::InvalidQuery(_) | LibrankError::InvalidFilter { .. }
        )
    }
}
