//! Run command - build the report once, print it, deliver it.

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use paydigest_core::Reporter;
use paydigest_delivery::{DeliveryConfig, REPORT_SUBJECT, render_html};
use paydigest_stripe::StripeApiClient;

use crate::credentials;

/// Arguments for the run command.
#[derive(Args, Default)]
pub struct RunArgs {
    /// Inline JSON mapping of account name to secret key.
    #[arg(long, value_name = "JSON")]
    pub accounts_json: Option<String>,

    /// Print the report without emailing it.
    #[arg(long)]
    pub no_email: bool,
}

/// Runs the report once.
pub async fn run(args: &RunArgs) -> Result<()> {
    let accounts = credentials::resolve(args.accounts_json.as_deref())?;

    // Delivery settings resolve before the first provider call, so a
    // misconfigured run fails without burning API requests.
    let delivery = if args.no_email {
        None
    } else {
        Some(DeliveryConfig::from_env()?)
    };

    info!(accounts = accounts.len(), "Building report");

    let reporter = Reporter::new(StripeApiClient::new(), accounts);
    let result = reporter.run().await?;

    // The JSON snapshot goes to stdout whether or not anything is sent.
    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.has_results() {
        debug!("Nothing to report, skipping delivery");
        return Ok(());
    }

    if let Some(config) = delivery {
        let message = config.message(REPORT_SUBJECT, render_html(&result));
        let channel = config.build_channel();
        channel
            .deliver(&message)
            .await
            .with_context(|| format!("delivery via {} failed", channel.id()))?;
    }

    Ok(())
}
