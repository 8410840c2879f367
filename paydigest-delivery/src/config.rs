//! Delivery configuration from the environment.
//!
//! All values come from environment variables and are resolved up front
//! so a misconfigured run fails before any provider call:
//!
//! | Variable           | Meaning                                      |
//! |--------------------|----------------------------------------------|
//! | `TO_EMAIL`         | Recipients, comma-separated (required)       |
//! | `FROM_EMAIL`       | Sender address (required)                    |
//! | `FROM_NAME`        | Sender display name (optional)               |
//! | `SENDGRID_API_KEY` | Selects the SendGrid channel when set        |
//! | `SMTP_HOST`        | SMTP server (required without SendGrid)      |
//! | `SMTP_PORT`        | Submission port, default 587                 |
//! | `SMTP_USERNAME`    | SMTP login (required without SendGrid)       |
//! | `SMTP_PASSWORD`    | SMTP password (required without SendGrid)    |

use crate::channel::{DeliveryChannel, ReportMessage};
use crate::error::DeliveryError;
use crate::sendgrid::SendgridChannel;
use crate::smtp::{DEFAULT_SMTP_PORT, SmtpChannel, SmtpConfig};

/// Which channel carries the digest.
#[derive(Debug, Clone)]
pub enum ChannelConfig {
    /// Direct SMTP submission.
    Smtp(SmtpConfig),
    /// SendGrid HTTP API.
    Sendgrid {
        /// API key for the mail send endpoint.
        api_key: String,
    },
}

/// Resolved delivery settings for one run.
#[derive(Debug, Clone)]
pub struct DeliveryConfig {
    /// Sender address.
    pub from_email: String,
    /// Optional sender display name.
    pub from_name: Option<String>,
    /// Recipient addresses, at least one.
    pub recipients: Vec<String>,
    /// Selected channel.
    pub channel: ChannelConfig,
}

impl DeliveryConfig {
    /// Loads delivery settings from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when a required variable is absent or unusable, naming it.
    pub fn from_env() -> Result<Self, DeliveryError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads delivery settings through an arbitrary lookup function.
    ///
    /// # Errors
    ///
    /// Fails when a required value is absent or unusable, naming it.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DeliveryError> {
        let recipients = parse_recipients(&required(&lookup, "TO_EMAIL")?);
        if recipients.is_empty() {
            return Err(DeliveryError::InvalidConfig(
                "TO_EMAIL holds no addresses".to_string(),
            ));
        }

        let from_email = required(&lookup, "FROM_EMAIL")?;
        let from_name = lookup("FROM_NAME");

        let channel = if let Some(api_key) = lookup("SENDGRID_API_KEY") {
            ChannelConfig::Sendgrid { api_key }
        } else {
            let port = match lookup("SMTP_PORT") {
                Some(raw) => raw.parse().map_err(|_| {
                    DeliveryError::InvalidConfig(format!("SMTP_PORT is not a port: {raw}"))
                })?,
                None => DEFAULT_SMTP_PORT,
            };
            ChannelConfig::Smtp(SmtpConfig {
                host: required(&lookup, "SMTP_HOST")?,
                port,
                username: required(&lookup, "SMTP_USERNAME")?,
                password: required(&lookup, "SMTP_PASSWORD")?,
            })
        };

        Ok(Self {
            from_email,
            from_name,
            recipients,
            channel,
        })
    }

    /// Builds the configured delivery channel.
    pub fn build_channel(&self) -> Box<dyn DeliveryChannel> {
        match &self.channel {
            ChannelConfig::Smtp(config) => Box::new(SmtpChannel::new(config.clone())),
            ChannelConfig::Sendgrid { api_key } => Box::new(SendgridChannel::new(api_key.clone())),
        }
    }

    /// Composes a deliverable message from a subject and HTML body.
    pub fn message(&self, subject: impl Into<String>, html: impl Into<String>) -> ReportMessage {
        ReportMessage {
            subject: subject.into(),
            html: html.into(),
            from_email: self.from_email.clone(),
            from_name: self.from_name.clone(),
            recipients: self.recipients.clone(),
        }
    }
}

fn required(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Result<String, DeliveryError> {
    lookup(name).ok_or_else(|| DeliveryError::MissingConfig(name.to_string()))
}

/// Splits a comma-separated recipient list, trimming whitespace.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
