//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `status`: Account status policy
//! - `account`: The Account entity and its balance primitives
//! - `outcome`: Tagged withdrawal outcomes produced by the credit gate
//! - `history`: Per-account history and statements
//! - `command`: Ledger commands read from scripts
//! - `error`: Error types for the ledger

pub mod account;
pub mod command;
pub mod error;
pub mod history;
pub mod outcome;
pub mod status;

pub use account::{Account, ClientId};
pub use command::{Command, CommandType};
pub use error::LedgerError;
pub use history::{AccountRecord, LedgerEntry, Statement};
pub use outcome::{RejectionCategory, WithdrawalOutcome, WithdrawalReceipt, WithdrawalRejection};
pub use status::AccountStatus;
