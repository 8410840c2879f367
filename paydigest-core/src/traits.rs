//! Trait definitions for paydigest.
//!
//! This module defines the seam between the report logic and the payment
//! provider's API.

use crate::error::CoreError;
use crate::models::{Event, Invoice};

/// Items requested per fetch. Only the first page is read; higher-volume
/// accounts truncate.
pub const PAGE_LIMIT: u32 = 100;

/// Capability to fetch recent account activity from the payment provider.
///
/// Implementors are responsible for:
/// - Authenticating each call with the supplied credential — there is no
///   process-wide key, so concurrent per-account fetches stay safe
/// - Restricting events to [`REPORTABLE_EVENT_TYPES`] and invoices to
///   `open` status on the request itself
/// - Returning at most [`PAGE_LIMIT`] items per call
///
/// The summarizers still re-check what they can, so a lax implementation
/// degrades to extra filtering rather than a wrong digest.
///
/// [`REPORTABLE_EVENT_TYPES`]: crate::models::REPORTABLE_EVENT_TYPES
pub trait ProviderClient: Send + Sync {
    /// Fetches the most recent reportable events for one account.
    fn recent_events(
        &self,
        credential: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Event>, CoreError>> + Send;

    /// Fetches the open invoices for one account.
    fn open_invoices(
        &self,
        credential: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Invoice>, CoreError>> + Send;
}
