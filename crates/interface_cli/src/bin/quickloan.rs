//! QuickLoan - Command-line Binary
//!
//! # Usage
//!
//! ```bash
//! # Loan calculator defaults
//! quickloan quote --principal 10000 --rate 4.99 --term 12
//!
//! # Processing fees for a typed amount
//! quickloan fees --amount '$25,000'
//!
//! # Check step 2 of the loan application
//! echo '{"loanType":"personal","loanAmount":"25000","income":"72000"}' \
//!     | quickloan validate --form loan-application --step 2
//! ```
//!
//! # Environment Variables
//!
//! * `QUICKLOAN_LOAN_AMOUNT_MIN` - Smallest accepted loan amount (default: 1000)
//! * `QUICKLOAN_LOAN_AMOUNT_MAX` - Largest accepted loan amount (default: 500000)
//! * `QUICKLOAN_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `RUST_LOG` - Overrides the log filter entirely

use anyhow::Context;
use clap::Parser;
use domain_application::ApplicationConfig;
use interface_cli::{execute, Cli, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_config()?;
    init_tracing(&config.log_level, cli.log_format);

    tracing::debug!(
        loan_amount_min = config.loan_amount_min,
        loan_amount_max = config.loan_amount_max,
        "Loaded configuration"
    );

    let output = execute(&cli.command, &config)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("failed to render output")?
    );
    Ok(())
}

/// Loads and checks `QUICKLOAN_*` configuration
fn load_config() -> anyhow::Result<ApplicationConfig> {
    let config = ApplicationConfig::from_env().context("failed to read QUICKLOAN_* variables")?;
    config.validate()?;
    Ok(config)
}

/// Initializes the tracing subscriber; logs go to stderr so stdout stays JSON
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
