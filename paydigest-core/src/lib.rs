// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # paydigest Core
//!
//! Core models, summarizers, and report aggregation for paydigest.
//!
//! This crate holds everything with real domain rules: which events
//! qualify for the digest, how each event and invoice is rendered as a
//! display line, and how per-account results roll up into one report.
//! Fetching is abstracted behind [`ProviderClient`] so the logic runs
//! against the live Stripe API in production and a mock in tests.
//!
//! ## Key Types
//!
//! - [`Event`] / [`Invoice`] - raw provider records
//! - [`Account`] / [`AccountSet`] - the accounts to poll, in order
//! - [`ReportResult`] - account name → summary lines, with the
//!   [`ReportResult::has_results`] send/skip decision
//! - [`Reporter`] - the per-account aggregation loop
//! - [`summary`] - the event and invoice line formatters

pub mod error;
pub mod models;
pub mod report;
pub mod summary;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Accounts
    Account,
    AccountSet,
    // Events
    Event,
    EventData,
    EventObject,
    REPORTABLE_EVENT_TYPES,
    icon_for,
    is_reportable,
    // Invoices
    INVOICE_STATUS_OPEN,
    Invoice,
    // Report
    ReportResult,
};

// Re-export the aggregator and the provider seam
pub use report::Reporter;
pub use traits::{PAGE_LIMIT, ProviderClient};
