//! Per-account report aggregation.

use chrono::{DateTime, Utc};

use crate::error::CoreError;
use crate::models::{Account, AccountSet, ReportResult};
use crate::summary::{summarize_events, summarize_invoices};
use crate::traits::ProviderClient;

/// Builds the digest for a set of accounts.
///
/// Accounts are polled one at a time, in supplied order, each with its
/// own credential; no state is shared between them. A fetch failure on
/// any account aborts the run and propagates to the caller — there is no
/// retry logic at this level.
pub struct Reporter<C> {
    client: C,
    accounts: AccountSet,
}

impl<C: ProviderClient> Reporter<C> {
    /// Creates a reporter over the given provider client and accounts.
    pub fn new(client: C, accounts: AccountSet) -> Self {
        Self { client, accounts }
    }

    /// Runs one report pass against the current wall clock.
    ///
    /// Each call is an independent snapshot; nothing is memoized between
    /// runs.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error encountered.
    pub async fn run(&self) -> Result<ReportResult, CoreError> {
        self.run_at(Utc::now()).await
    }

    /// Runs one report pass with an explicit reference time.
    ///
    /// The reference time anchors the trailing 24-hour event window for
    /// the whole run, so every account is filtered against the same
    /// cutoff.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error encountered.
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<ReportResult, CoreError> {
        let mut result = ReportResult::new();

        for account in &self.accounts {
            let lines = self.lines_for(account, now).await?;
            result.insert(account.name.clone(), lines);
        }

        Ok(result)
    }

    /// Fetches and summarizes one account: event lines, then invoice lines.
    async fn lines_for(&self, account: &Account, now: DateTime<Utc>) -> Result<Vec<String>, CoreError> {
        let events = self.client.recent_events(&account.credential).await?;
        let invoices = self.client.open_invoices(&account.credential).await?;

        let mut lines = summarize_events(&events, now);
        lines.extend(summarize_invoices(&invoices));
        Ok(lines)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Event, EventData, EventObject, Invoice};
    use chrono::TimeZone;
    use std::collections::HashMap;

    /// Mock provider keyed by credential, mirroring how the real client
    /// scopes every call to one account's key.
    #[derive(Default)]
    struct MockClient {
        events: HashMap<String, Vec<Event>>,
        invoices: HashMap<String, Vec<Invoice>>,
        fail_for: Option<String>,
    }

    impl ProviderClient for MockClient {
        async fn recent_events(&self, credential: &str) -> Result<Vec<Event>, CoreError> {
            if self.fail_for.as_deref() == Some(credential) {
                return Err(CoreError::Fetch("boom".to_string()));
            }
            Ok(self.events.get(credential).cloned().unwrap_or_default())
        }

        async fn open_invoices(&self, credential: &str) -> Result<Vec<Invoice>, CoreError> {
            Ok(self.invoices.get(credential).cloned().unwrap_or_default())
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn accounts(pairs: &[(&str, &str)]) -> AccountSet {
        pairs
            .iter()
            .map(|(name, key)| Account::new(*name, *key))
            .collect()
    }

    fn subscription_event(created: i64, email: &str) -> Event {
        Event {
            id: "evt_sub".to_string(),
            event_type: "customer.subscription.created".to_string(),
            created,
            data: EventData {
                object: EventObject {
                    amount_paid: None,
                    customer_email: Some(email.to_string()),
                },
            },
        }
    }

    fn open_invoice(total: i64, email: &str) -> Invoice {
        Invoice {
            total,
            customer_email: Some(email.to_string()),
            hosted_invoice_url: Some("https://pay.stripe.com/invoice/inv_1".to_string()),
            collection_method: "charge_automatically".to_string(),
            status: "open".to_string(),
        }
    }

    #[tokio::test]
    async fn test_two_account_scenario() {
        let now = fixed_now();
        let mut client = MockClient::default();
        client
            .events
            .insert("k1".to_string(), vec![subscription_event(now.timestamp() - 60, "a@x.com")]);
        client
            .invoices
            .insert("k2".to_string(), vec![open_invoice(500, "b@x.com")]);

        let reporter = Reporter::new(client, accounts(&[("acme", "k1"), ("beta", "k2")]));
        let result = reporter.run_at(now).await.unwrap();

        let acme = result.get("acme").unwrap();
        assert_eq!(acme.len(), 1);
        assert!(acme[0].contains("🚀"));
        assert!(acme[0].contains("a@x.com"));
        assert!(!acme[0].contains('$'));

        let beta = result.get("beta").unwrap();
        assert_eq!(beta.len(), 1);
        assert!(beta[0].contains("🧾"));
        assert!(beta[0].contains("b@x.com"));
        assert!(beta[0].contains("$5.00"));
        assert!(beta[0].contains("charge_automatically"));

        assert!(result.has_results());
    }

    #[tokio::test]
    async fn test_stale_event_yields_empty_account() {
        let now = fixed_now();
        let mut client = MockClient::default();
        client.events.insert(
            "k1".to_string(),
            vec![subscription_event((now - chrono::Duration::hours(25)).timestamp(), "a@x.com")],
        );

        let reporter = Reporter::new(client, accounts(&[("acme", "k1")]));
        let result = reporter.run_at(now).await.unwrap();

        assert_eq!(result.get("acme"), Some(&[] as &[String]));
        assert!(!result.has_results());
    }

    #[tokio::test]
    async fn test_result_keys_match_supplied_accounts_in_order() {
        let client = MockClient::default();
        let reporter = Reporter::new(client, accounts(&[("zulu", "k1"), ("alpha", "k2")]));
        let result = reporter.run_at(fixed_now()).await.unwrap();

        let names: Vec<&str> = result.account_names().collect();
        assert_eq!(names, vec!["zulu", "alpha"]);
        assert!(!result.has_results());
    }

    #[tokio::test]
    async fn test_event_lines_precede_invoice_lines() {
        let now = fixed_now();
        let mut client = MockClient::default();
        client
            .events
            .insert("k1".to_string(), vec![subscription_event(now.timestamp(), "a@x.com")]);
        client
            .invoices
            .insert("k1".to_string(), vec![open_invoice(500, "a@x.com")]);

        let reporter = Reporter::new(client, accounts(&[("acme", "k1")]));
        let result = reporter.run_at(now).await.unwrap();

        let lines = result.get("acme").unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("🚀"));
        assert!(lines[1].contains("🧾"));
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let client = MockClient {
            fail_for: Some("k2".to_string()),
            ..MockClient::default()
        };

        let reporter = Reporter::new(client, accounts(&[("acme", "k1"), ("beta", "k2")]));
        let err = reporter.run_at(fixed_now()).await.unwrap_err();
        assert!(matches!(err, CoreError::Fetch(_)));
    }
}
