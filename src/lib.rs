//! Retail Ledger Library
//! # Overview
//!
//! This library implements a small retail-banking ledger: accounts with a
//! lifecycle status, deposits, withdrawals and two-account transfers, and a
//! credit-score gate in front of every withdrawal. A CSV batch front end
//! replays command scripts against an accounts roster using either a
//! single-threaded or a per-account locking store.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, AccountStatus, Command, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::processor`] - Balance rules for deposits, withdrawals and transfers
//!   - [`core::credit_gate`] - Ordered withdrawal checks ending in the credit score
//!   - [`core::ledger`] - Single-threaded account store with history
//!   - [`core::shared_ledger`] - Thread-safe account store with one lock per account
//! - [`io`] - CSV reading and output
//! - [`strategy`] - Runtime-selectable processing pipelines
//!
//! # Account Statuses
//!
//! | Status       | Deposit | Withdraw | Transfer out |
//! |--------------|---------|----------|--------------|
//! | `UNVERIFIED` | yes     | no       | no           |
//! | `VERIFIED`   | yes     | yes      | yes          |
//! | `SUSPENDED`  | yes     | no       | no           |
//! | `CLOSED`     | no      | no       | no           |
//!
//! # Withdrawal Checks
//!
//! A withdrawal is checked in this order and stops at the first failure:
//! account present, amount present, amount numeric, amount positive, account
//! verified, credit score at or above the threshold (600 by default),
//! sufficient balance.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{
    AccountLedger, CreditGate, CreditScoreProvider, Ledger, SharedLedger, TransactionProcessor,
};
pub use io::write_accounts_csv;
pub use types::{
    Account, AccountStatus, ClientId, Command, LedgerError, WithdrawalOutcome, WithdrawalReceipt,
    WithdrawalRejection,
};
