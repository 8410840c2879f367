//! Report result types.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The aggregated digest for one run: account name → summary lines.
///
/// Every polled account is present, including those with no lines. Event
/// lines precede invoice lines, each group in the order the provider
/// returned them. Entries keep the order accounts were supplied in, and
/// that order survives a JSON round trip.
///
/// A result is built fresh each run and never merged with a prior run's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportResult {
    entries: Vec<(String, Vec<String>)>,
}

impl ReportResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an account's line list.
    pub fn insert(&mut self, name: impl Into<String>, lines: Vec<String>) {
        self.entries.push((name.into(), lines));
    }

    /// Returns the lines recorded for an account, if it was polled.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, lines)| lines.as_slice())
    }

    /// Iterates over `(account name, lines)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, lines)| (name.as_str(), lines.as_slice()))
    }

    /// Iterates over the account names in insertion order.
    pub fn account_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the number of accounts in the result.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no accounts were polled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if at least one account produced a line.
    ///
    /// This is the sole trigger for composing and sending the digest.
    pub fn has_results(&self) -> bool {
        self.entries.iter().any(|(_, lines)| !lines.is_empty())
    }
}

impl Serialize for ReportResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, lines) in &self.entries {
            map.serialize_entry(name, lines)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ReportResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ReportResultVisitor;

        impl<'de> Visitor<'de> for ReportResultVisitor {
            type Value = ReportResult;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of account name to summary lines")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, lines)) = access.next_entry::<String, Vec<String>>()? {
                    entries.push((name, lines));
                }
                Ok(ReportResult { entries })
            }
        }

        deserializer.deserialize_map(ReportResultVisitor)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_results_requires_a_nonempty_account() {
        let mut result = ReportResult::new();
        assert!(!result.has_results());

        result.insert("acme", vec![]);
        assert!(!result.has_results());

        result.insert("beta", vec!["line".to_string()]);
        assert!(result.has_results());
    }

    #[test]
    fn test_empty_accounts_stay_present() {
        let mut result = ReportResult::new();
        result.insert("acme", vec![]);

        assert_eq!(result.len(), 1);
        assert_eq!(result.get("acme"), Some(&[] as &[String]));
        assert_eq!(result.get("missing"), None);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut result = ReportResult::new();
        result.insert("zulu", vec![]);
        result.insert("alpha", vec![]);

        let names: Vec<&str> = result.account_names().collect();
        assert_eq!(names, vec!["zulu", "alpha"]);
    }
}
