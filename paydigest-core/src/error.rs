//! Core error types for paydigest.

use thiserror::Error;

/// Core error type for paydigest operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Fetching events or invoices for an account failed.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid data from an API response.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
