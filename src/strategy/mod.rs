//! Processing strategy module
//!
//! This module defines the Strategy pattern for complete ledger runs: load
//! the accounts roster and credit scores, replay a command script, then write
//! the final account states. Strategies differ only in which account store
//! backs the run, and are selected at runtime.

use crate::cli::StrategyType;
use crate::core::{AccountLedger, ScoreTable, MIN_CREDIT_SCORE, UNKNOWN_CLIENT_SCORE};
use crate::io::{load_accounts, load_credit_scores, write_accounts_csv, CommandReader};
use crate::types::{LedgerError, Statement};
use std::io::Write;
use std::path::PathBuf;

pub mod shared;
pub mod sync;

pub use shared::SharedProcessingStrategy;
pub use sync::SyncProcessingStrategy;

/// Tunable rules for a ledger run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Lowest credit score that may still withdraw (inclusive)
    pub min_credit_score: i32,
    /// Score reported for clients absent from the credit-score file
    pub default_credit_score: i32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            min_credit_score: MIN_CREDIT_SCORE,
            default_credit_score: UNKNOWN_CLIENT_SCORE,
        }
    }
}

/// Files consumed by one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputFiles {
    /// Accounts roster: `client,name,balance,status`
    pub accounts: PathBuf,
    /// Command script: `type,client,amount,target,status`
    pub commands: PathBuf,
    /// Optional credit scores: `client,score`
    pub credit_scores: Option<PathBuf>,
}

/// Summary of a completed run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LedgerReport {
    /// Commands that took effect
    pub applied: usize,
    /// Well-formed commands the ledger refused
    pub rejected: usize,
    /// Records that could not be parsed
    pub malformed: usize,
    /// Final statement of every account, sorted by client ID
    pub statements: Vec<Statement>,
}

/// Processing strategy trait for complete ledger runs
pub trait ProcessingStrategy: Send + Sync {
    /// Run the command script against the roster and write account states
    ///
    /// # Errors
    ///
    /// Returns an error only for fatal conditions: an input file that cannot
    /// be opened, a malformed accounts file, or output that cannot be
    /// written. Rejected and malformed commands are logged and counted in the
    /// report; processing continues with the next command.
    fn process(
        &self,
        input: &InputFiles,
        output: &mut dyn Write,
    ) -> Result<LedgerReport, LedgerError>;
}

/// Create a processing strategy based on the specified strategy type
pub fn create_strategy(
    strategy_type: StrategyType,
    config: LedgerConfig,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(config)),
        StrategyType::Shared => Box::new(SharedProcessingStrategy::new(config)),
    }
}

/// Credit scores for a run: the file if one was given, otherwise an empty
/// table that reports the configured default for everyone
fn score_table(input: &InputFiles, config: &LedgerConfig) -> Result<ScoreTable, LedgerError> {
    match &input.credit_scores {
        Some(path) => load_credit_scores(path, config.default_credit_score),
        None => Ok(ScoreTable::with_default(config.default_credit_score)),
    }
}

/// Shared pipeline behind every strategy
fn run<L: AccountLedger>(
    ledger: &mut L,
    input: &InputFiles,
    output: &mut dyn Write,
) -> Result<LedgerReport, LedgerError> {
    for account in load_accounts(&input.accounts)? {
        ledger.open(account)?;
    }

    let mut report = LedgerReport::default();
    for result in CommandReader::new(&input.commands)? {
        let command = match result {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed command");
                report.malformed += 1;
                continue;
            }
        };

        let command_type = command.command_type();
        let client = command.client().to_string();
        match ledger.apply(command) {
            Ok(()) => report.applied += 1,
            Err(e) => {
                tracing::warn!(
                    command = command_type.as_str(),
                    client = %client,
                    error = %e,
                    "command rejected"
                );
                report.rejected += 1;
            }
        }
    }

    write_accounts_csv(&ledger.get_accounts(), output)?;
    report.statements = ledger.statements();
    Ok(report)
}
