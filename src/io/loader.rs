//! Loaders for the accounts roster and credit-score table
//!
//! Unlike command scripts, these files are read in full before processing
//! starts. A bad account row is fatal since every later command depends on
//! the roster; a bad score row is skipped with a warning and the client
//! falls back to the default score.

use crate::core::ScoreTable;
use crate::io::csv_format::{convert_account_row, convert_score_row, AccountRow, ScoreRow};
use crate::io::open_csv;
use crate::types::{Account, LedgerError};
use csv::Trim;
use std::collections::HashSet;
use std::path::Path;

/// Read every account from an accounts file
///
/// # Errors
///
/// `FileNotFound`/`IoError` if the file cannot be opened, `ParseError` (with
/// the line number) for a malformed row, `DuplicateAccount` if a client ID
/// appears twice.
pub fn load_accounts(path: &Path) -> Result<Vec<Account>, LedgerError> {
    let mut reader = open_csv(path, Trim::All)?;
    let mut seen = HashSet::new();
    let mut accounts = Vec::new();

    for (index, result) in reader.deserialize::<AccountRow>().enumerate() {
        let line = index as u64 + 2;
        let account = convert_account_row(result?)
            .map_err(|e| LedgerError::parse_error(Some(line), &e.to_string()))?;

        if !seen.insert(account.client_id().to_string()) {
            return Err(LedgerError::duplicate_account(account.client_id()));
        }
        accounts.push(account);
    }

    tracing::debug!(count = accounts.len(), path = %path.display(), "loaded accounts");
    Ok(accounts)
}

/// Read a credit-score table
///
/// Clients absent from the file score `default_score`. Later rows for the
/// same client replace earlier ones.
pub fn load_credit_scores(path: &Path, default_score: i32) -> Result<ScoreTable, LedgerError> {
    let mut reader = open_csv(path, Trim::All)?;
    let mut table = ScoreTable::with_default(default_score);

    for (index, result) in reader.deserialize::<ScoreRow>().enumerate() {
        let line = index as u64 + 2;
        match result.map_err(LedgerError::from).and_then(convert_score_row) {
            Ok((client, score)) => table.insert(client, score),
            Err(e) => tracing::warn!(line, error = %e, "skipping credit score row"),
        }
    }

    tracing::debug!(count = table.len(), path = %path.display(), "loaded credit scores");
    Ok(table)
}
