//! Stripe-specific error types.

use thiserror::Error;

/// Errors from the Stripe API client.
#[derive(Debug, Error)]
pub enum StripeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API key rejected by Stripe.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Non-success response from the API.
    #[error("API returned status {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// Response body did not parse.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
