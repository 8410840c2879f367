//! Account types.
//!
//! An [`Account`] names one Stripe account and holds the secret key used
//! to poll it. [`AccountSet`] keeps the supplied order, which fixes the
//! order accounts appear in the final report.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Account
// ============================================================================

/// One Stripe account to poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Display name, unique within a run.
    pub name: String,
    /// Secret API key for this account.
    pub credential: String,
}

impl Account {
    /// Creates a new account.
    pub fn new(name: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            credential: credential.into(),
        }
    }
}

// ============================================================================
// AccountSet
// ============================================================================

/// An ordered set of accounts.
///
/// Serializes as a JSON object mapping account name to credential, in
/// insertion order; deserializing preserves the document order of the
/// source object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountSet {
    accounts: Vec<Account>,
}

impl AccountSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an account.
    pub fn push(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// Returns the number of accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if the set holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Iterates over the accounts in supplied order.
    pub fn iter(&self) -> std::slice::Iter<'_, Account> {
        self.accounts.iter()
    }

    /// Iterates over the account names in supplied order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.accounts.iter().map(|a| a.name.as_str())
    }
}

impl FromIterator<Account> for AccountSet {
    fn from_iter<I: IntoIterator<Item = Account>>(iter: I) -> Self {
        Self {
            accounts: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Account>> for AccountSet {
    fn from(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }
}

impl<'a> IntoIterator for &'a AccountSet {
    type Item = &'a Account;
    type IntoIter = std::slice::Iter<'a, Account>;

    fn into_iter(self) -> Self::IntoIter {
        self.accounts.iter()
    }
}

impl Serialize for AccountSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.accounts.len()))?;
        for account in &self.accounts {
            map.serialize_entry(&account.name, &account.credential)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AccountSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AccountSetVisitor;

        impl<'de> Visitor<'de> for AccountSetVisitor {
            type Value = AccountSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of account name to credential")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut accounts = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, credential)) = access.next_entry::<String, String>()? {
                    accounts.push(Account { name, credential });
                }
                Ok(AccountSet { accounts })
            }
        }

        deserializer.deserialize_map(AccountSetVisitor)
    }
}

// ============================================================================
// Tests
// ============================================================================
