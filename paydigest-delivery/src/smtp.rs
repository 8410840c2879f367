//! SMTP delivery via STARTTLS submission.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info, instrument};

use crate::channel::{DeliveryChannel, ReportMessage};
use crate::error::DeliveryError;

/// Default submission port when `SMTP_PORT` is unset.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// SMTP server settings.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Server hostname.
    pub host: String,
    /// Submission port.
    pub port: u16,
    /// Login username.
    pub username: String,
    /// Login password.
    pub password: String,
}

/// Delivers the digest over SMTP with STARTTLS.
pub struct SmtpChannel {
    config: SmtpConfig,
}

impl SmtpChannel {
    /// Creates a channel for the given server settings.
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl DeliveryChannel for SmtpChannel {
    fn id(&self) -> &'static str {
        "smtp"
    }

    #[instrument(skip(self, message))]
    async fn deliver(&self, message: &ReportMessage) -> Result<(), DeliveryError> {
        let from = Mailbox::new(message.from_name.clone(), message.from_email.parse()?);

        let mut builder = Message::builder().from(from).subject(&message.subject);
        for recipient in &message.recipients {
            builder = builder.to(recipient.parse()?);
        }
        let email = builder
            .header(ContentType::TEXT_HTML)
            .body(message.html.clone())?;

        debug!(
            host = %self.config.host,
            port = self.config.port,
            recipients = message.recipients.len(),
            "Submitting report via SMTP"
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
            .port(self.config.port)
            .credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ))
            .build();

        transport.send(email).await?;

        info!("Report delivered via SMTP");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
