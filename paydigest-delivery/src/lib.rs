// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # paydigest Delivery
//!
//! HTML digest composition and delivery channels for paydigest.
//!
//! The digest is only composed and sent when the report has results;
//! that decision belongs to the caller. This crate provides:
//!
//! - [`render_html`] - the digest body (heading + per-account lists)
//! - [`DeliveryChannel`] - the channel seam
//! - [`SmtpChannel`] - direct SMTP submission with STARTTLS
//! - [`SendgridChannel`] - the SendGrid v3 mail send API
//! - [`DeliveryConfig`] - environment-derived settings that fail fast

pub mod channel;
pub mod config;
pub mod error;
pub mod html;
pub mod sendgrid;
pub mod smtp;

pub use channel::{DeliveryChannel, ReportMessage};
pub use config::{ChannelConfig, DeliveryConfig, parse_recipients};
pub use error::DeliveryError;
pub use html::{REPORT_SUBJECT, render_html};
pub use sendgrid::SendgridChannel;
pub use smtp::{DEFAULT_SMTP_PORT, SmtpChannel, SmtpConfig};
