//! Account-related types for the retail ledger
//!
//! This module defines the Account entity: identity, balance and lifecycle
//! status, together with the self-validating balance primitives.

use super::status::AccountStatus;
use rust_decimal::Decimal;

/// Client identifier
///
/// Opaque string, unique within a ledger and immutable after account creation.
pub type ClientId = String;

/// A client account
///
/// The balance only changes through [`Account::deposit`], [`Account::withdraw`]
/// and [`Account::transfer`]; every failed call leaves it untouched. The status
/// is owned by an external authority and can be overwritten at any time via
/// [`Account::set_status`].
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    client_id: ClientId,
    client_name: String,
    balance: Decimal,
    status: AccountStatus,
}

impl Account {
    /// Create an account from an initial snapshot
    ///
    /// # Arguments
    ///
    /// * `client_id` - Unique client identifier
    /// * `client_name` - Display name
    /// * `balance` - Opening balance
    /// * `status` - Opening status
    pub fn new(
        client_id: impl Into<ClientId>,
        client_name: impl Into<String>,
        balance: Decimal,
        status: AccountStatus,
    ) -> Self {
        Account {
            client_id: client_id.into(),
            client_name: client_name.into(),
            balance,
            status,
        }
    }

    /// Credit funds to the account
    ///
    /// Succeeds iff the status permits deposits (anything but `CLOSED`) and
    /// `amount > 0`. An amount whose addition would overflow the decimal range
    /// is rejected.
    ///
    /// # Returns
    ///
    /// `true` if the balance was increased by `amount`, `false` otherwise
    pub fn deposit(&mut self, amount: Decimal) -> bool {
        if !self.status.allows_deposit() || amount <= Decimal::ZERO {
            return false;
        }

        match self.balance.checked_add(amount) {
            Some(balance) => {
                self.balance = balance;
                true
            }
            None => false,
        }
    }

    /// Debit funds from the account
    ///
    /// Succeeds iff the account is `VERIFIED`, `amount > 0` and
    /// `amount <= balance`.
    ///
    /// # Returns
    ///
    /// `true` if the balance was decreased by `amount`, `false` otherwise
    pub fn withdraw(&mut self, amount: Decimal) -> bool {
        self.status.allows_withdrawal() && self.debit(amount)
    }

    /// Debit the outgoing side of a transfer
    ///
    /// Same eligibility as [`Account::withdraw`]. This only deducts from this
    /// account; crediting the counterpart is the processor's job.
    pub fn transfer(&mut self, amount: Decimal) -> bool {
        self.status.allows_transfer() && self.debit(amount)
    }

    fn debit(&mut self, amount: Decimal) -> bool {
        if amount <= Decimal::ZERO || amount > self.balance {
            return false;
        }

        match self.balance.checked_sub(amount) {
            Some(balance) => {
                self.balance = balance;
                true
            }
            None => false,
        }
    }

    /// Put back a balance captured before a debit whose paired credit failed
    pub(crate) fn restore_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    /// Overwrite the status unconditionally
    pub fn set_status(&mut self, status: AccountStatus) {
        self.status = status;
    }
}
