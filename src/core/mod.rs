//! Core business logic module
//!
//! This module contains the transaction-validation pipeline:
//! - `traits` - Credit score capability and the ledger abstraction
//! - `processor` - Deposit, withdrawal and two-account transfer rules
//! - `credit_gate` - Ordered withdrawal checks including the credit score
//! - `amount` - Amount syntax and range classification
//! - `credit` - In-process credit score providers
//! - `ledger` - Single-threaded account store
//! - `shared_ledger` - Thread-safe account store with one lock per account

pub mod amount;
pub mod credit;
pub mod credit_gate;
pub mod ledger;
pub mod processor;
pub mod shared_ledger;
pub mod traits;

pub use amount::{parse_amount, parse_amount_input, ParsedAmount};
pub use credit::{FixedScore, ScoreTable, UNKNOWN_CLIENT_SCORE};
pub use credit_gate::{CreditGate, MIN_CREDIT_SCORE};
pub use ledger::Ledger;
pub use processor::TransactionProcessor;
pub use shared_ledger::SharedLedger;
pub use traits::{AccountLedger, CreditScoreProvider};
