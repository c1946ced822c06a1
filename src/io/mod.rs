//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - Row structures, conversion to domain types, output serialization
//! - `command_reader` - Streaming iterator over a command script
//! - `loader` - Eager loading of the accounts roster and credit-score table

pub mod command_reader;
pub mod csv_format;
pub mod loader;

pub use command_reader::CommandReader;
pub use csv_format::{write_accounts_csv, write_statements};
pub use loader::{load_accounts, load_credit_scores};

use crate::types::LedgerError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Open a headed CSV file with flexible row lengths
///
/// `trim` selects whether field whitespace is stripped by the reader or left
/// for the row conversion to handle.
pub(crate) fn open_csv(path: &Path, trim: Trim) -> Result<csv::Reader<File>, LedgerError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LedgerError::file_not_found(&path.display().to_string()),
        _ => LedgerError::from(e),
    })?;

    Ok(ReaderBuilder::new()
        .trim(trim)
        .flexible(true)
        .buffer_capacity(8 * 1024)
        .from_reader(file))
}
