//! Stripe API client for event and invoice listing.
//!
//! # API Endpoints
//!
//! ```text
//! GET https://api.stripe.com/v1/events?limit=100&types[]=...
//! GET https://api.stripe.com/v1/invoices?status=open&limit=100
//! Authorization: Bearer <secret key>
//! ```
//!
//! Both endpoints return a list envelope:
//!
//! ```json
//! {"object": "list", "data": [...], "has_more": false}
//! ```
//!
//! The credential is a per-call parameter; the client itself holds no
//! key, so one client instance can serve every account in a run.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use paydigest_core::{
    CoreError, Event, INVOICE_STATUS_OPEN, Invoice, PAGE_LIMIT, ProviderClient,
    REPORTABLE_EVENT_TYPES,
};

use crate::error::StripeError;

// ============================================================================
// Constants
// ============================================================================

/// Base URL for the Stripe API.
pub const API_BASE_URL: &str = "https://api.stripe.com";

/// Events listing endpoint.
pub const EVENTS_ENDPOINT: &str = "/v1/events";

/// Invoices listing endpoint.
pub const INVOICES_ENDPOINT: &str = "/v1/invoices";

// ============================================================================
// API Response Structures
// ============================================================================

/// A Stripe list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ListObject<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Whether further pages exist. Only the first page is consumed.
    #[serde(default)]
    pub has_more: bool,
}

// ============================================================================
// API Client
// ============================================================================

/// Stripe API client.
#[derive(Debug, Clone)]
pub struct StripeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for StripeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl StripeApiClient {
    /// Creates a client against the production API.
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Lists the most recent events of the given types.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, or an unparseable
    /// body.
    #[instrument(skip(self, api_key, types))]
    pub async fn list_events(
        &self,
        api_key: &str,
        types: &[&str],
        limit: u32,
    ) -> Result<Vec<Event>, StripeError> {
        let url = format!("{}{}", self.base_url, EVENTS_ENDPOINT);
        let query = events_query(types, limit);

        debug!(url = %url, types = types.len(), "Listing events");

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .query(&query)
            .send()
            .await?;

        read_list(response).await
    }

    /// Lists invoices with the given status.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, or an unparseable
    /// body.
    #[instrument(skip(self, api_key))]
    pub async fn list_invoices(
        &self,
        api_key: &str,
        status: &str,
        limit: u32,
    ) -> Result<Vec<Invoice>, StripeError> {
        let url = format!("{}{}", self.base_url, INVOICES_ENDPOINT);
        let query = [("status", status.to_string()), ("limit", limit.to_string())];

        debug!(url = %url, status = %status, "Listing invoices");

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .query(&query)
            .send()
            .await?;

        read_list(response).await
    }
}

/// Checks the response status and unwraps the list envelope.
async fn read_list<T: DeserializeOwned>(response: reqwest::Response) -> Result<Vec<T>, StripeError> {
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(StripeError::AuthenticationFailed(
            "API key rejected".to_string(),
        ));
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, body = %body, "API request failed");
        return Err(StripeError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await?;

    debug!(len = body.len(), "Received API response");

    let list: ListObject<T> = serde_json::from_str(&body)?;
    Ok(list.data)
}

/// Builds the query for an events listing.
fn events_query(types: &[&str], limit: u32) -> Vec<(&'static str, String)> {
    let mut query = Vec::with_capacity(types.len() + 1);
    query.push(("limit", limit.to_string()));
    for event_type in types {
        query.push(("types[]", (*event_type).to_string()));
    }
    query
}

// ============================================================================
// Provider Client Implementation
// ============================================================================

impl ProviderClient for StripeApiClient {
    async fn recent_events(&self, credential: &str) -> Result<Vec<Event>, CoreError> {
        self.list_events(credential, &REPORTABLE_EVENT_TYPES, PAGE_LIMIT)
            .await
            .map_err(|e| CoreError::Fetch(e.to_string()))
    }

    async fn open_invoices(&self, credential: &str) -> Result<Vec<Invoice>, CoreError> {
        self.list_invoices(credential, INVOICE_STATUS_OPEN, PAGE_LIMIT)
            .await
            .map_err(|e| CoreError::Fetch(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_list() {
        let json = r#"{
            "object": "list",
            "data": [
                {
                    "id": "evt_1",
                    "type": "invoice.payment_succeeded",
                    "created": 1700000000,
                    "data": {
                        "object": {
                            "amount_paid": 1050,
                            "customer_email": "a@x.com"
                        }
                    }
                },
                {
                    "id": "evt_2",
                    "type": "customer.subscription.deleted",
                    "created": 1700000100,
                    "data": {"object": {}}
                }
            ],
            "has_more": false
        }"#;

        let list: ListObject<Event> = serde_json::from_str(json).unwrap();
        assert_eq!(list.data.len(), 2);
        assert!(!list.has_more);
        assert_eq!(list.data[0].id, "evt_1");
        assert_eq!(list.data[0].data.object.amount_paid, Some(1050));
        assert_eq!(list.data[1].data.object.amount_paid, None);
    }

    #[test]
    fn test_parse_invoice_list() {
        let json = r#"{
            "object": "list",
            "data": [
                {
                    "total": 250000,
                    "customer_email": "b@x.com",
                    "hosted_invoice_url": "https://pay.stripe.com/invoice/inv_1",
                    "collection_method": "send_invoice",
                    "status": "open"
                }
            ],
            "has_more": true
        }"#;

        let list: ListObject<Invoice> = serde_json::from_str(json).unwrap();
        assert_eq!(list.data.len(), 1);
        assert!(list.has_more);
        assert_eq!(list.data[0].total, 250_000);
        assert!(list.data[0].is_open());
    }

    #[test]
    fn test_events_query_carries_limit_and_every_type() {
        let query = events_query(&REPORTABLE_EVENT_TYPES, PAGE_LIMIT);

        assert_eq!(query[0], ("limit", "100".to_string()));
        let types: Vec<&str> = query
            .iter()
            .filter(|(k, _)| *k == "types[]")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(types, REPORTABLE_EVENT_TYPES.to_vec());
    }

    #[test]
    fn test_client_creation() {
        let client = StripeApiClient::new();
        assert_eq!(client.base_url, API_BASE_URL);

        let custom = StripeApiClient::with_base_url("http://localhost:12111");
        assert_eq!(custom.base_url, "http://localhost:12111");
    }
}
