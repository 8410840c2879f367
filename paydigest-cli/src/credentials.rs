//! Credential sourcing.
//!
//! Accounts come from one of three places, first match wins:
//!
//! 1. An inline JSON mapping (`--accounts-json '{"acme": "sk_..."}'`)
//! 2. `STRIPE_ACCOUNTS`, whitespace-separated `name=key` pairs
//! 3. Every `STRIPE_KEY_<name>` environment variable
//!
//! Resolution happens before any provider call; an empty or malformed
//! source is an error, not an empty report.

use anyhow::{Context, Result, bail};
use paydigest_core::{Account, AccountSet};

/// Env var holding whitespace-separated `name=key` pairs.
pub const COMBINED_VAR: &str = "STRIPE_ACCOUNTS";

/// Prefix for per-account secret key variables.
pub const KEY_PREFIX: &str = "STRIPE_KEY_";

/// Resolves the account set for this run.
pub fn resolve(accounts_json: Option<&str>) -> Result<AccountSet> {
    if let Some(json) = accounts_json {
        return parse_inline_json(json);
    }
    if let Ok(combined) = std::env::var(COMBINED_VAR) {
        return parse_combined(&combined);
    }

    let accounts = from_prefixed_vars(std::env::vars());
    if accounts.is_empty() {
        bail!(
            "No accounts configured: pass --accounts-json, or set {COMBINED_VAR} or {KEY_PREFIX}<name> variables"
        );
    }
    Ok(accounts)
}

fn parse_inline_json(json: &str) -> Result<AccountSet> {
    let set: AccountSet =
        serde_json::from_str(json).context("--accounts-json is not a name-to-key JSON object")?;
    if set.is_empty() {
        bail!("--accounts-json holds no accounts");
    }
    Ok(set)
}

fn parse_combined(raw: &str) -> Result<AccountSet> {
    let mut set = AccountSet::new();
    for pair in raw.split_whitespace() {
        let Some((name, key)) = pair.split_once('=') else {
            bail!("{COMBINED_VAR} entry is not name=key: {pair}");
        };
        if name.is_empty() || key.is_empty() {
            bail!("{COMBINED_VAR} entry is not name=key: {pair}");
        }
        set.push(Account::new(name, key));
    }
    if set.is_empty() {
        bail!("{COMBINED_VAR} holds no accounts");
    }
    Ok(set)
}

fn from_prefixed_vars(vars: impl Iterator<Item = (String, String)>) -> AccountSet {
    let mut accounts: Vec<Account> = vars
        .filter_map(|(name, value)| {
            name.strip_prefix(KEY_PREFIX)
                .filter(|suffix| !suffix.is_empty())
                .map(|suffix| Account::new(suffix, value))
        })
        .collect();

    // Environment iteration order is unspecified; sort by name so the
    // report order is stable across runs.
    accounts.sort_by(|a, b| a.name.cmp(&b.name));
    accounts.into()
}

// ============================================================================
// Tests
// ============================================================================
