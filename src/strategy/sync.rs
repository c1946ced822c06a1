//! Synchronous processing strategy
//!
//! Replays the command script one command at a time against a
//! single-threaded [`Ledger`]. Commands are streamed from the reader, so
//! memory usage is O(accounts + history), not O(script length).

use crate::core::{CreditGate, Ledger};
use crate::strategy::{run, score_table, InputFiles, LedgerConfig, LedgerReport, ProcessingStrategy};
use crate::types::LedgerError;
use std::io::Write;

/// Synchronous processing strategy backed by [`Ledger`]
///
/// # Examples
///
/// ```no_run
/// use retail_ledger::strategy::{InputFiles, LedgerConfig, ProcessingStrategy, SyncProcessingStrategy};
/// use std::io;
///
/// let strategy = SyncProcessingStrategy::new(LedgerConfig::default());
/// let input = InputFiles {
///     accounts: "accounts.csv".into(),
///     commands: "commands.csv".into(),
///     credit_scores: Some("scores.csv".into()),
/// };
///
/// let report = strategy.process(&input, &mut io::stdout()).expect("Processing failed");
/// println!("{} commands applied", report.applied);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncProcessingStrategy {
    config: LedgerConfig,
}

impl SyncProcessingStrategy {
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(
        &self,
        input: &InputFiles,
        output: &mut dyn Write,
    ) -> Result<LedgerReport, LedgerError> {
        let scores = score_table(input, &self.config)?;
        let gate = CreditGate::with_threshold(scores, self.config.min_credit_score);
        let mut ledger = Ledger::new(gate);

        run(&mut ledger, input, output)
    }
}
