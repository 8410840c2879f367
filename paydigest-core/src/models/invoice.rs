//! Invoice types.

use serde::{Deserialize, Serialize};

/// Invoice status the digest reports on.
pub const INVOICE_STATUS_OPEN: &str = "open";

/// One invoice from the Stripe invoices feed.
///
/// `total` is mandatory; a payload without it fails deserialization and
/// surfaces as a fetch error. The remaining fields degrade to empty
/// output when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice total in minor currency units.
    pub total: i64,
    /// Customer email, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    /// Link to the hosted invoice page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosted_invoice_url: Option<String>,
    /// How the invoice is collected, e.g. `charge_automatically` or
    /// `send_invoice`.
    #[serde(default)]
    pub collection_method: String,
    /// Invoice status; only `open` invoices are summarized.
    #[serde(default)]
    pub status: String,
}

impl Invoice {
    /// Returns true if the invoice is open (unpaid and awaiting collection).
    pub fn is_open(&self) -> bool {
        self.status == INVOICE_STATUS_OPEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_open() {
        let mut invoice = Invoice {
            total: 500,
            customer_email: None,
            hosted_invoice_url: None,
            collection_method: String::new(),
            status: "open".to_string(),
        };
        assert!(invoice.is_open());

        invoice.status = "paid".to_string();
        assert!(!invoice.is_open());

        invoice.status = String::new();
        assert!(!invoice.is_open());
    }
}
