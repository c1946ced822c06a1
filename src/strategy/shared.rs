//! Shared-store processing strategy
//!
//! Replays the command script against a [`SharedLedger`], the per-account
//! locking store that embedders can also drive from many threads. Commands
//! from one script are still applied in file order, so the output is
//! identical to the synchronous strategy for the same input.

use crate::core::{CreditGate, SharedLedger};
use crate::strategy::{run, score_table, InputFiles, LedgerConfig, LedgerReport, ProcessingStrategy};
use crate::types::LedgerError;
use std::io::Write;

/// Processing strategy backed by [`SharedLedger`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedProcessingStrategy {
    config: LedgerConfig,
}

impl SharedProcessingStrategy {
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for SharedProcessingStrategy {
    fn process(
        &self,
        input: &InputFiles,
        output: &mut dyn Write,
    ) -> Result<LedgerReport, LedgerError> {
        let scores = score_table(input, &self.config)?;
        let gate = CreditGate::with_threshold(scores, self.config.min_credit_score);
        let mut ledger = SharedLedger::new(gate);

        run(&mut ledger, input, output)
    }
}
