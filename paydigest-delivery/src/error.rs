//! Delivery error types.

use thiserror::Error;

/// Error type for report delivery.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// A required configuration value is absent.
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    /// A configuration value is present but unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A sender or recipient address did not parse.
    #[error("Invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP submission failed.
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the mail API.
    #[error("Mail API returned status {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },
}
