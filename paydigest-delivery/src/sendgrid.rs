//! SendGrid delivery via the v3 mail send API.
//!
//! # API Endpoint
//!
//! ```text
//! POST https://api.sendgrid.com/v3/mail/send
//! Authorization: Bearer <api key>
//! ```
//!
//! A successful submission returns `202 Accepted` with an empty body.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::channel::{DeliveryChannel, ReportMessage};
use crate::error::DeliveryError;

// ============================================================================
// Constants
// ============================================================================

/// Base URL for the SendGrid API.
pub const API_BASE_URL: &str = "https://api.sendgrid.com";

/// Mail send endpoint.
pub const SEND_ENDPOINT: &str = "/v3/mail/send";

// ============================================================================
// Request Payload
// ============================================================================

#[derive(Debug, Serialize)]
struct MailSendRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: EmailAddress<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<EmailAddress<'a>>,
}

#[derive(Debug, Serialize)]
struct EmailAddress<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

fn build_payload(message: &ReportMessage) -> MailSendRequest<'_> {
    MailSendRequest {
        personalizations: vec![Personalization {
            to: message
                .recipients
                .iter()
                .map(|email| EmailAddress { email, name: None })
                .collect(),
        }],
        from: EmailAddress {
            email: &message.from_email,
            name: message.from_name.as_deref(),
        },
        subject: &message.subject,
        content: vec![Content {
            content_type: "text/html",
            value: &message.html,
        }],
    }
}

// ============================================================================
// Channel
// ============================================================================

/// Delivers the digest through the SendGrid HTTP API.
pub struct SendgridChannel {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SendgridChannel {
    /// Creates a channel against the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    /// Creates a channel with a custom base URL.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl DeliveryChannel for SendgridChannel {
    fn id(&self) -> &'static str {
        "sendgrid"
    }

    #[instrument(skip(self, message))]
    async fn deliver(&self, message: &ReportMessage) -> Result<(), DeliveryError> {
        let url = format!("{}{}", self.base_url, SEND_ENDPOINT);
        let payload = build_payload(message);

        debug!(url = %url, recipients = message.recipients.len(), "Submitting report via SendGrid");

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Mail API request failed");
            return Err(DeliveryError::Api {
                status: status.as_u16(),
                body,
            });
        }

        info!("Report delivered via SendGrid");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
