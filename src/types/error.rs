//! Error types for the retail ledger
//!
//! This module defines the application-level error type. Account and
//! processor operations report plain booleans; the ledgers translate those
//! into the descriptive variants below.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed CSV, unknown command types, bad values
//! - **Ledger Errors**: Unknown accounts, self transfers, rejected operations

use super::outcome::WithdrawalRejection;
use thiserror::Error;

/// Main error type for the retail ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable for command scripts (the record is skipped), fatal for
    /// the accounts file.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Unknown command type in a command script
    #[error("Invalid command type '{command}' for client {client}")]
    InvalidCommand {
        /// The unrecognised command text
        command: String,
        /// Client the command was addressed to
        client: String,
    },

    /// Unknown account status name
    #[error("Invalid account status '{value}'")]
    InvalidStatus {
        /// The unrecognised status text
        value: String,
    },

    /// Amount that could not be parsed as a decimal
    #[error("Invalid amount '{amount}'")]
    InvalidAmount {
        /// The raw amount text
        amount: String,
    },

    /// Credit score that could not be parsed as an integer
    #[error("Invalid credit score '{value}' for client {client}")]
    InvalidCreditScore {
        /// Client the score belongs to
        client: String,
        /// The raw score text
        value: String,
    },

    /// A field required by the command type is absent
    #[error("{command} command for client {client} requires {field}")]
    MissingField {
        /// Command type that requires the field
        command: String,
        /// Client ID
        client: String,
        /// Name of the missing field
        field: String,
    },

    /// No account exists for the identifier
    #[error("Account {client} not found")]
    AccountNotFound {
        /// The unknown client ID
        client: String,
    },

    /// An account with this identifier is already open
    #[error("Account {client} already exists")]
    DuplicateAccount {
        /// The duplicated client ID
        client: String,
    },

    /// Source and destination of a transfer are the same account
    #[error("Cannot transfer to yourself (account {client})")]
    SelfTransfer {
        /// Client ID of the account
        client: String,
    },

    /// The processor refused the operation
    ///
    /// Covers ineligible status, non-positive amounts and overdrafts without
    /// distinguishing between them.
    #[error("{operation} rejected for account {client}")]
    Rejected {
        /// Operation that was refused
        operation: String,
        /// Client ID
        client: String,
    },

    /// The credit gate refused a withdrawal
    #[error("Withdrawal rejected for account {client}: {reason}")]
    WithdrawalRejected {
        /// Client ID
        client: String,
        /// Reason reported by the gate
        reason: WithdrawalRejection,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    pub fn file_not_found(path: &str) -> Self {
        LedgerError::FileNotFound {
            path: path.to_string(),
        }
    }

    pub fn parse_error(line: Option<u64>, message: &str) -> Self {
        LedgerError::ParseError {
            line,
            message: message.to_string(),
        }
    }

    pub fn invalid_command(command: &str, client: &str) -> Self {
        LedgerError::InvalidCommand {
            command: command.to_string(),
            client: client.to_string(),
        }
    }

    pub fn invalid_status(value: &str) -> Self {
        LedgerError::InvalidStatus {
            value: value.to_string(),
        }
    }

    pub fn invalid_amount(amount: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    pub fn invalid_credit_score(client: &str, value: &str) -> Self {
        LedgerError::InvalidCreditScore {
            client: client.to_string(),
            value: value.to_string(),
        }
    }

    pub fn missing_field(command: &str, client: &str, field: &str) -> Self {
        LedgerError::MissingField {
            command: command.to_string(),
            client: client.to_string(),
            field: field.to_string(),
        }
    }

    pub fn account_not_found(client: &str) -> Self {
        LedgerError::AccountNotFound {
            client: client.to_string(),
        }
    }

    pub fn duplicate_account(client: &str) -> Self {
        LedgerError::DuplicateAccount {
            client: client.to_string(),
        }
    }

    pub fn self_transfer(client: &str) -> Self {
        LedgerError::SelfTransfer {
            client: client.to_string(),
        }
    }

    pub fn rejected(operation: &str, client: &str) -> Self {
        LedgerError::Rejected {
            operation: operation.to_string(),
            client: client.to_string(),
        }
    }

    pub fn withdrawal_rejected(client: &str, reason: WithdrawalRejection) -> Self {
        LedgerError::WithdrawalRejected {
            client: client.to_string(),
            reason,
        }
    }

    /// Whether processing can continue past this error
    ///
    /// Everything except missing or unreadable input files is recoverable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            LedgerError::FileNotFound { .. } | LedgerError::IoError { .. }
        )
    }
}
