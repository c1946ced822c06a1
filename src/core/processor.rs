//! Transaction processor
//!
//! Orchestrates deposits, withdrawals and transfers over one or two accounts.
//! Absent accounts and non-positive amounts are rejected here before the
//! account's own rules run. Every outcome is a plain boolean; reason
//! discrimination is the credit gate's job.

use crate::types::Account;
use rust_decimal::Decimal;

/// Stateless transaction processor
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionProcessor;

impl TransactionProcessor {
    pub fn new() -> Self {
        TransactionProcessor
    }

    /// Credit `amount` to `account`
    ///
    /// Fails without mutation if the account is absent or `amount <= 0`;
    /// otherwise delegates to [`Account::deposit`].
    pub fn process_deposit(&self, account: Option<&mut Account>, amount: Decimal) -> bool {
        match account {
            Some(account) if amount > Decimal::ZERO => account.deposit(amount),
            _ => false,
        }
    }

    /// Debit `amount` from `account`
    ///
    /// Fails without mutation if the account is absent or `amount <= 0`;
    /// otherwise delegates to [`Account::withdraw`], which re-checks status
    /// and overdraft.
    pub fn process_withdraw(&self, account: Option<&mut Account>, amount: Decimal) -> bool {
        match account {
            Some(account) if amount > Decimal::ZERO => account.withdraw(amount),
            _ => false,
        }
    }

    /// Move `amount` from `from` to `to`
    ///
    /// The source is debited through [`Account::withdraw`], so it must be
    /// `VERIFIED` and covered. The destination's status is not re-checked:
    /// any destination that accepts deposits (including `SUSPENDED` and
    /// `UNVERIFIED`) is credited.
    ///
    /// If the credit is refused (a `CLOSED` destination, or an overflowing
    /// balance) the source is restored to its prior balance and the transfer
    /// fails. Either both balances change or neither does.
    pub fn process_transfer(
        &self,
        from: Option<&mut Account>,
        to: Option<&mut Account>,
        amount: Decimal,
    ) -> bool {
        let (Some(from), Some(to)) = (from, to) else {
            return false;
        };
        if amount <= Decimal::ZERO {
            return false;
        }

        let source_balance = from.balance();
        if !from.withdraw(amount) {
            return false;
        }

        if !to.deposit(amount) {
            from.restore_balance(source_balance);
            return false;
        }

        true
    }
}
