//! Serve command - expose the report builder over HTTP.
//!
//! A scheduler POSTs the account mapping to `/report` and receives the
//! JSON result; when delivery is configured and the report is non-empty,
//! the digest email goes out as well.

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use clap::Args;
use tracing::{info, warn};

use paydigest_core::{AccountSet, ReportResult, Reporter};
use paydigest_delivery::{DeliveryConfig, REPORT_SUBJECT, render_html};
use paydigest_stripe::StripeApiClient;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: String,
}

#[derive(Clone)]
struct AppState {
    client: StripeApiClient,
}

/// Runs the HTTP entry point.
pub async fn run(args: &ServeArgs) -> Result<()> {
    let state = AppState {
        client: StripeApiClient::new(),
    };
    let app = Router::new()
        .route("/report", post(report))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!(bind = %args.bind, "Listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn report(
    State(state): State<AppState>,
    Json(accounts): Json<AccountSet>,
) -> Result<Json<ReportResult>, (StatusCode, String)> {
    let reporter = Reporter::new(state.client.clone(), accounts);
    let result = reporter
        .run()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    if result.has_results() {
        deliver(&result).await;
    }

    Ok(Json(result))
}

/// Sends the digest when delivery is configured. The caller already has
/// the result in the response body, so delivery problems only log here.
async fn deliver(result: &ReportResult) {
    let config = match DeliveryConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Delivery not configured, skipping email");
            return;
        }
    };

    let message = config.message(REPORT_SUBJECT, render_html(result));
    let channel = config.build_channel();
    if let Err(e) = channel.deliver(&message).await {
        warn!(error = %e, channel = channel.id(), "Delivery failed");
    }
}
