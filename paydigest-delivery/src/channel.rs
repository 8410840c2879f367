//! The delivery channel seam.

use async_trait::async_trait;

use crate::error::DeliveryError;

/// A composed digest, ready to hand to any channel.
#[derive(Debug, Clone)]
pub struct ReportMessage {
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
    /// Sender address.
    pub from_email: String,
    /// Optional sender display name.
    pub from_name: Option<String>,
    /// Recipient addresses, at least one.
    pub recipients: Vec<String>,
}

/// A way to get the digest to its recipients.
///
/// Channels attempt delivery once; retry and backoff belong to whatever
/// scheduler re-invokes the whole run.
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// Short identifier for logs.
    fn id(&self) -> &'static str;

    /// Attempts to deliver the message.
    async fn deliver(&self, message: &ReportMessage) -> Result<(), DeliveryError>;
}
