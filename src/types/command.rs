//! Command types for the retail ledger
//!
//! A command is one request against the ledger, as read from a command
//! script. Commands carry already-converted values except for withdrawals,
//! whose raw amount text is handed to the credit gate for parsing.

use super::account::ClientId;
use super::status::AccountStatus;
use rust_decimal::Decimal;

/// Command kinds supported by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    /// Credit funds to an account
    Deposit,

    /// Debit funds through the credit gate
    Withdraw,

    /// Move funds from one account to another
    Transfer,

    /// Reassign an account's status
    Status,
}

impl CommandType {
    pub fn as_str(self) -> &'static str {
        match self {
            CommandType::Deposit => "deposit",
            CommandType::Withdraw => "withdraw",
            CommandType::Transfer => "transfer",
            CommandType::Status => "status",
        }
    }
}

/// A single ledger command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Deposit {
        client: ClientId,
        amount: Decimal,
    },
    Withdraw {
        client: ClientId,
        /// Raw amount text; `None` when the field was absent
        amount: Option<String>,
    },
    Transfer {
        from: ClientId,
        to: ClientId,
        amount: Decimal,
    },
    Status {
        client: ClientId,
        status: AccountStatus,
    },
}

impl Command {
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Deposit { .. } => CommandType::Deposit,
            Command::Withdraw { .. } => CommandType::Withdraw,
            Command::Transfer { .. } => CommandType::Transfer,
            Command::Status { .. } => CommandType::Status,
        }
    }

    /// The client that issued the command (the source for transfers)
    pub fn client(&self) -> &str {
        match self {
            Command::Deposit { client, .. }
            | Command::Withdraw { client, .. }
            | Command::Status { client, .. } => client,
            Command::Transfer { from, .. } => from,
        }
    }
}
