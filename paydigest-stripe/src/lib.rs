// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # paydigest Stripe
//!
//! Stripe API client for paydigest.
//!
//! Implements the [`paydigest_core::ProviderClient`] seam against the
//! live Stripe REST API: one bounded page of allow-listed events and one
//! bounded page of open invoices per account, authenticated per call
//! with that account's secret key.

pub mod api;
pub mod error;

pub use api::{API_BASE_URL, EVENTS_ENDPOINT, INVOICES_ENDPOINT, ListObject, StripeApiClient};
pub use error::StripeError;
