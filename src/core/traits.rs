//! Core traits for credit scoring and ledger operations
//!
//! `CreditScoreProvider` is the single external capability the core depends
//! on. `AccountLedger` lets the single-threaded and shared ledgers be driven
//! interchangeably by the processing strategies.

use crate::types::{
    Account, AccountStatus, Command, LedgerError, Statement, WithdrawalReceipt,
};
use rust_decimal::Decimal;

/// External credit-score lookup
///
/// Given a client identifier, returns an integer score. There is no failure
/// mode: providers report an unknown client with a sentinel low score.
pub trait CreditScoreProvider {
    fn credit_score(&self, client_id: &str) -> i32;
}

impl<F> CreditScoreProvider for F
where
    F: Fn(&str) -> i32,
{
    fn credit_score(&self, client_id: &str) -> i32 {
        self(client_id)
    }
}

/// Store of accounts keyed by client identifier
///
/// All balance mutation goes through the transaction processor and the
/// credit gate; callers never touch account fields directly.
pub trait AccountLedger {
    /// Add an account to the ledger
    fn open(&mut self, account: Account) -> Result<(), LedgerError>;

    /// Credit funds to an account
    fn deposit(&mut self, client: &str, amount: Decimal) -> Result<(), LedgerError>;

    /// Withdraw funds through the credit gate
    ///
    /// `amount` is the raw user input; parsing is part of the gate's checks.
    fn withdraw(
        &mut self,
        client: &str,
        amount: Option<&str>,
    ) -> Result<WithdrawalReceipt, LedgerError>;

    /// Move funds between two distinct accounts
    fn transfer(&mut self, from: &str, to: &str, amount: Decimal) -> Result<(), LedgerError>;

    /// Overwrite an account's status
    fn set_status(&mut self, client: &str, status: AccountStatus) -> Result<(), LedgerError>;

    /// Snapshot every account, sorted by client ID
    fn get_accounts(&self) -> Vec<Account>;

    /// Statement for one account
    fn statement(&self, client: &str) -> Option<Statement>;

    /// Statements for every account, sorted by client ID
    fn statements(&self) -> Vec<Statement> {
        self.get_accounts()
            .iter()
            .filter_map(|account| self.statement(account.client_id()))
            .collect()
    }

    /// Route a command to the matching operation
    fn apply(&mut self, command: Command) -> Result<(), LedgerError> {
        match command {
            Command::Deposit { client, amount } => self.deposit(&client, amount),
            Command::Withdraw { client, amount } => {
                self.withdraw(&client, amount.as_deref()).map(|_| ())
            }
            Command::Transfer { from, to, amount } => self.transfer(&from, &to, amount),
            Command::Status { client, status } => self.set_status(&client, status),
        }
    }
}
