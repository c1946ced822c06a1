//! Withdrawal outcomes produced by the credit gate
//!
//! The gate reports every outcome as a tagged value instead of a bare string,
//! so callers can branch on the category while still showing the stable
//! human-readable message.

use super::account::ClientId;
use super::status::AccountStatus;
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Coarse classification of a rejected withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionCategory {
    InvalidInput,
    WrongStatus,
    LowCreditScore,
    InsufficientFunds,
}

/// Reason a withdrawal was rejected
///
/// Variants are listed in the order the gate evaluates them. The display text
/// is the message shown to the account holder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WithdrawalRejection {
    /// No account reference was supplied
    #[error("Error: No account selected.")]
    NoAccountSelected,

    /// The amount input was absent or empty
    #[error("Error: Amount field is empty.")]
    AmountMissing,

    /// The amount input could not be parsed as a number
    #[error("Error: Amount must be a numeric value.")]
    AmountNotNumeric {
        /// The raw input
        input: String,
    },

    /// The amount was zero or negative
    #[error("Error: Amount must be greater than zero.")]
    NonPositiveAmount {
        /// The raw input
        input: String,
    },

    /// The account is not `VERIFIED`
    #[error("Error: Transactions allowed only for VERIFIED accounts.")]
    AccountNotVerified {
        /// Status at the time of the request
        status: AccountStatus,
    },

    /// The external credit score is below the pass threshold
    #[error("Transaction blocked: Credit score too low.")]
    CreditScoreTooLow {
        /// Score reported by the provider
        score: i32,
        /// Minimum passing score
        threshold: i32,
    },

    /// The amount is positive but finer than the smallest unit a balance
    /// can hold
    #[error("Error: Amount is below the smallest supported unit.")]
    AmountBelowPrecision {
        /// The raw input
        input: String,
    },

    /// The processor refused the debit (overdraft)
    #[error("Error: Insufficient balance.")]
    InsufficientBalance {
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested amount, saturated at `Decimal::MAX`
        requested: Decimal,
    },
}

impl WithdrawalRejection {
    pub fn category(&self) -> RejectionCategory {
        match self {
            WithdrawalRejection::NoAccountSelected
            | WithdrawalRejection::AmountMissing
            | WithdrawalRejection::AmountNotNumeric { .. }
            | WithdrawalRejection::NonPositiveAmount { .. } => RejectionCategory::InvalidInput,
            WithdrawalRejection::AccountNotVerified { .. } => RejectionCategory::WrongStatus,
            WithdrawalRejection::CreditScoreTooLow { .. } => RejectionCategory::LowCreditScore,
            WithdrawalRejection::AmountBelowPrecision { .. } => RejectionCategory::InvalidInput,
            WithdrawalRejection::InsufficientBalance { .. } => {
                RejectionCategory::InsufficientFunds
            }
        }
    }
}

/// Confirmation of a completed withdrawal
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawalReceipt {
    pub client_id: ClientId,
    pub amount: Decimal,
    /// Balance after the debit
    pub balance: Decimal,
}

impl fmt::Display for WithdrawalReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Withdrawal successful.")
    }
}

/// Result of a gated withdrawal request
pub type WithdrawalOutcome = Result<WithdrawalReceipt, WithdrawalRejection>;
