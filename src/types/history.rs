//! Per-account transaction history and statements

use super::account::{Account, ClientId};
use super::status::AccountStatus;
use rust_decimal::Decimal;
use std::fmt;

/// One line of an account's history
///
/// Only successful operations are recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerEntry {
    Deposit {
        amount: Decimal,
    },
    Withdrawal {
        amount: Decimal,
    },
    TransferOut {
        amount: Decimal,
        /// Display name of the receiving account
        to: String,
    },
    TransferIn {
        amount: Decimal,
        /// Display name of the sending account
        from: String,
    },
    StatusChange {
        from: AccountStatus,
        to: AccountStatus,
    },
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerEntry::Deposit { amount } => write!(f, "Deposit: ${}", amount),
            LedgerEntry::Withdrawal { amount } => write!(f, "Withdrawal: ${}", amount),
            LedgerEntry::TransferOut { amount, to } => {
                write!(f, "Transferred ${} to {}", amount, to)
            }
            LedgerEntry::TransferIn { amount, from } => {
                write!(f, "Received ${} from {}", amount, from)
            }
            LedgerEntry::StatusChange { from, to } => {
                write!(f, "Status changed from {} to {}", from, to)
            }
        }
    }
}

/// An account together with its history
///
/// This is the unit stored by both ledgers.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountRecord {
    pub account: Account,
    pub history: Vec<LedgerEntry>,
}

impl AccountRecord {
    pub fn new(account: Account) -> Self {
        AccountRecord {
            account,
            history: Vec::new(),
        }
    }

    pub fn record(&mut self, entry: LedgerEntry) {
        self.history.push(entry);
    }

    /// Snapshot the record as a statement
    pub fn statement(&self) -> Statement {
        Statement {
            client_id: self.account.client_id().to_string(),
            client_name: self.account.client_name().to_string(),
            status: self.account.status(),
            balance: self.account.balance(),
            entries: self.history.clone(),
        }
    }
}

/// Point-in-time account statement
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub client_id: ClientId,
    pub client_name: String,
    pub status: AccountStatus,
    pub balance: Decimal,
    pub entries: Vec<LedgerEntry>,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Statement ---")?;
        writeln!(f, "Name: {}", self.client_name)?;
        writeln!(f, "Acc#: {}", self.client_id)?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Balance: ${}", self.balance)?;
        writeln!(f, "Transactions:")?;
        if self.entries.is_empty() {
            writeln!(f, " (No transactions)")?;
        } else {
            for entry in &self.entries {
                writeln!(f, " - {}", entry)?;
            }
        }
        writeln!(f, "-----------------")
    }
}
