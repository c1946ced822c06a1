//! Retail Ledger CLI
//!
//! Command-line interface for replaying account commands from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --accounts accounts.csv commands.csv > balances.csv
//! cargo run -- --accounts accounts.csv --credit-scores scores.csv commands.csv > balances.csv
//! cargo run -- --strategy shared --min-score 650 --accounts accounts.csv commands.csv
//! cargo run -- --accounts accounts.csv --statements statements.txt commands.csv
//! ```
//!
//! Final account states go to stdout; logs go to stderr (`RUST_LOG`
//! overrides the default `info` level).
//!
//! # Exit Codes
//!
//! - 0: Success (including runs where some commands were rejected)
//! - 1: Error (missing arguments, file not found, malformed accounts file, etc.)

use retail_ledger::cli::{self, CliArgs};
use retail_ledger::io::write_statements;
use retail_ledger::strategy::{self, LedgerReport};
use retail_ledger::LedgerError;
use std::fs::File;
use std::io::BufWriter;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::parse_args();

    match run(&args) {
        Ok(report) => tracing::info!(
            applied = report.applied,
            rejected = report.rejected,
            malformed = report.malformed,
            "ledger run complete"
        ),
        Err(e) => {
            tracing::error!(error = %e, "ledger run failed");
            process::exit(1);
        }
    }
}

fn run(args: &CliArgs) -> Result<LedgerReport, LedgerError> {
    let strategy = strategy::create_strategy(args.strategy, args.to_ledger_config());

    let mut output = std::io::stdout();
    let report = strategy.process(&args.input_files(), &mut output)?;

    if let Some(path) = &args.statements_file {
        let mut writer = BufWriter::new(File::create(path)?);
        write_statements(&report.statements, &mut writer)?;
    }

    Ok(report)
}
