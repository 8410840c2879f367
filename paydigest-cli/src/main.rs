// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! paydigest CLI - daily Stripe activity digest.
//!
//! # Examples
//!
//! ```bash
//! # Poll every STRIPE_KEY_* account, print JSON, email if non-empty
//! paydigest
//!
//! # Same, with the account mapping supplied inline
//! paydigest run --accounts-json '{"acme": "sk_live_..."}'
//!
//! # Print only, never email
//! paydigest run --no-email
//!
//! # Serve POST /report for a scheduler
//! paydigest serve --bind 0.0.0.0:8080
//! ```

mod commands;
mod credentials;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{run, serve};

// ============================================================================
// CLI Definition
// ============================================================================

/// paydigest CLI - Stripe activity digest.
#[derive(Parser)]
#[command(name = "paydigest")]
#[command(about = "Daily Stripe activity digest, printed and emailed")]
#[command(long_about = r#"
paydigest polls recent events and open invoices for a set of Stripe
accounts, prints the aggregate report as JSON, and emails an HTML digest
when there is anything to report.

Accounts come from --accounts-json, the STRIPE_ACCOUNTS variable
(name=key pairs), or STRIPE_KEY_<name> variables.

Examples:
  paydigest                                  # env accounts, print + email
  paydigest run --no-email                   # print only
  paydigest run --accounts-json '{"a":"k"}'  # inline accounts
  paydigest serve --bind 0.0.0.0:8080        # HTTP entry point
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'run' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Build the report once, print it, and email it if non-empty (default).
    #[command(visible_alias = "r")]
    Run(run::RunArgs),

    /// Serve the report builder over HTTP for a scheduler to call.
    Serve(serve::ServeArgs),
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new(
            "paydigest_cli=debug,paydigest_core=debug,paydigest_stripe=debug,paydigest_delivery=debug,info",
        )
    } else {
        EnvFilter::new("paydigest_cli=warn,paydigest_stripe=warn,paydigest_delivery=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Run(args)) => run::run(args).await,
        Some(Commands::Serve(args)) => serve::run(args).await,
        None => {
            // Default to the run command
            run::run(&run::RunArgs::default()).await
        }
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(ExitCode::Error as i32);
    }

    Ok(())
}
