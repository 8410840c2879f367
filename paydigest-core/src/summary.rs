//! Summary line derivation.
//!
//! These functions turn raw provider records into the display lines that
//! make up the digest. Each line is a small HTML fragment (an anchor plus
//! context); the report renderer wraps them in a list without further
//! escaping.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Event, Invoice, icon_for, is_reportable};

/// Dashboard page for a single event, keyed by event id.
const EVENT_DASHBOARD_URL: &str = "https://dashboard.stripe.com/events";

/// How far back an event may be and still count as recent.
const REPORT_WINDOW_HOURS: i64 = 24;

// ============================================================================
// Event Summaries
// ============================================================================

/// Formats the qualifying events into display lines.
///
/// An event qualifies when its type is on the allow-list and it was
/// created within the trailing 24-hour window ending at `now`. The fetch
/// already restricts types upstream, but unfiltered input is re-checked
/// here; anything that does not qualify is silently dropped. Input order
/// is preserved.
pub fn summarize_events(events: &[Event], now: DateTime<Utc>) -> Vec<String> {
    let cutoff = (now - Duration::hours(REPORT_WINDOW_HOURS)).timestamp();

    let mut lines = Vec::new();
    for event in events {
        if !is_reportable(&event.event_type) {
            continue;
        }
        if event.created < cutoff {
            continue;
        }

        let object = &event.data.object;
        let amount = match object.amount_paid {
            Some(cents) if cents != 0 => format_amount(cents),
            _ => String::new(),
        };
        let customer_email = object.customer_email.as_deref().unwrap_or("");
        let icon = icon_for(&event.event_type);

        lines.push(format!(
            "{icon} <a href='{EVENT_DASHBOARD_URL}/{}'>{}</a>: {customer_email} {amount}",
            event.id, event.event_type
        ));
    }

    lines
}

// ============================================================================
// Invoice Summaries
// ============================================================================

/// Formats open invoices into display lines.
///
/// The fetch requests only open invoices; the status is still re-checked
/// here so unfiltered input cannot leak paid or draft invoices into the
/// digest. Input order is preserved.
pub fn summarize_invoices(invoices: &[Invoice]) -> Vec<String> {
    invoices
        .iter()
        .filter(|invoice| invoice.is_open())
        .map(|invoice| {
            let url = invoice.hosted_invoice_url.as_deref().unwrap_or("");
            let customer_email = invoice.customer_email.as_deref().unwrap_or("");
            format!(
                "🧾 <a href='{url}'>Open invoice</a>: {customer_email} {} {}",
                format_amount(invoice.total),
                invoice.collection_method
            )
        })
        .collect()
}

/// Formats an amount in minor currency units as `$X.XX`.
#[allow(clippy::cast_precision_loss)]
pub fn format_amount(cents: i64) -> String {
    format!("${:.2}", cents as f64 / 100.0)
}

// ============================================================================
// Tests
// ============================================================================
