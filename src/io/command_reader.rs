//! Streaming command-script reader
//!
//! Provides an iterator over commands read from a CSV file. Format concerns
//! are delegated to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record errors are yielded as `Err` items, tagged with the
//!   line they came from, and iteration continues with the next record
//!
//! Only headers are trimmed by the reader. Fields are trimmed during
//! conversion, except a withdrawal amount, which reaches the credit gate
//! exactly as written.
//!
//! ```no_run
//! use retail_ledger::io::CommandReader;
//! use std::path::Path;
//!
//! let reader = CommandReader::new(Path::new("commands.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(command) => println!("Command: {:?}", command),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::io::csv_format::{convert_command_row, CommandRow};
use crate::io::open_csv;
use crate::types::{Command, LedgerError};
use csv::Trim;
use std::fs::File;
use std::path::Path;

/// Iterator over the commands of a CSV script
#[derive(Debug)]
pub struct CommandReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl CommandReader {
    /// Open a command script
    ///
    /// # Errors
    ///
    /// `FileNotFound` if the path does not exist, `IoError` if it cannot be
    /// opened.
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        Ok(Self {
            reader: open_csv(path, Trim::Headers)?,
            line_num: 1,
        })
    }
}

impl Iterator for CommandReader {
    type Item = Result<Command, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CommandRow>();
        let result = deserializer.next()?;
        self.line_num += 1;

        Some(match result {
            Ok(row) => convert_command_row(row)
                .map_err(|e| LedgerError::parse_error(Some(self.line_num), &e.to_string())),
            Err(e) => Err(LedgerError::parse_error(Some(self.line_num), &e.to_string())),
        })
    }
}
