//! Event types.
//!
//! A Stripe event is an opaque record; the digest only cares about its
//! `id`, `type`, `created` timestamp, and the optional payment fields
//! nested under `data.object`. Unknown payload fields are ignored.

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Event categories included in the digest.
///
/// Also sent as the `types` filter on the events fetch; Stripe caps that
/// filter at 20 entries.
pub const REPORTABLE_EVENT_TYPES: [&str; 7] = [
    "customer.source.created",
    "customer.source.updated",
    "customer.subscription.created",
    "customer.subscription.deleted",
    "customer.subscription.trial_will_end",
    "invoice.payment_failed",
    "invoice.payment_succeeded",
];

/// Returns true if events of this type belong in the digest.
pub fn is_reportable(event_type: &str) -> bool {
    REPORTABLE_EVENT_TYPES.contains(&event_type)
}

/// Returns the presentation glyph for an event type.
///
/// Only subscription signups and successful payments carry a glyph; every
/// other reportable type renders without one.
pub fn icon_for(event_type: &str) -> &'static str {
    match event_type {
        "customer.subscription.created" => "🚀",
        "invoice.payment_succeeded" => "💵",
        _ => "",
    }
}

// ============================================================================
// Event Model
// ============================================================================

/// One event from the Stripe events feed.
///
/// `id`, `type`, and `created` are mandatory; a payload missing any of
/// them fails deserialization and surfaces as a fetch error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Event identifier (`evt_...`), used to link to the dashboard.
    pub id: String,
    /// Event category, e.g. `invoice.payment_succeeded`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Creation time in seconds since the epoch.
    pub created: i64,
    /// Nested payload container.
    #[serde(default)]
    pub data: EventData,
}

/// Container for the event payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventData {
    /// The object the event describes.
    #[serde(default)]
    pub object: EventObject,
}

/// The fields of the event payload the digest reads.
///
/// Both fields are optional; absence degrades to empty output rather than
/// an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventObject {
    /// Amount paid in minor currency units, when the payload carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<i64>,
    /// Customer email, when the payload carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================
