//! Credit gate for withdrawals
//!
//! Sits in front of the transaction processor and adds input parsing, a
//! status re-check and an external credit-score check. The checks run in a
//! fixed order and the first failure wins:
//!
//! 1. account present
//! 2. amount present and non-empty
//! 3. amount numeric
//! 4. amount greater than zero
//! 5. account `VERIFIED`
//! 6. credit score at or above the threshold
//! 7. amount representable as a balance
//! 8. processor withdrawal (overdraft)
//!
//! A well-formed number outside the `Decimal` range is still numeric. If
//! positive, it fails at step 7 when finer than the smallest unit and at
//! step 8 when larger than any balance.
//!
//! No later check runs once an earlier one fails, so the balance is untouched
//! on every rejection.

use crate::core::amount::{parse_amount_input, ParsedAmount};
use crate::core::processor::TransactionProcessor;
use crate::core::traits::CreditScoreProvider;
use crate::types::{Account, AccountStatus, WithdrawalOutcome, WithdrawalReceipt, WithdrawalRejection};
use rust_decimal::Decimal;

/// Lowest credit score that passes the gate
pub const MIN_CREDIT_SCORE: i32 = 600;

/// Withdrawal gate backed by a credit score provider
#[derive(Debug, Clone)]
pub struct CreditGate<P> {
    provider: P,
    processor: TransactionProcessor,
    threshold: i32,
}

impl<P: CreditScoreProvider> CreditGate<P> {
    /// Create a gate with the standard [`MIN_CREDIT_SCORE`] threshold
    pub fn new(provider: P) -> Self {
        Self::with_threshold(provider, MIN_CREDIT_SCORE)
    }

    /// Create a gate with a custom passing score (inclusive)
    pub fn with_threshold(provider: P, threshold: i32) -> Self {
        CreditGate {
            provider,
            processor: TransactionProcessor::new(),
            threshold,
        }
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Validate and execute a withdrawal request
    ///
    /// # Arguments
    ///
    /// * `account` - The selected account, if any
    /// * `amount` - Raw amount input, if any
    ///
    /// # Returns
    ///
    /// * `Ok(WithdrawalReceipt)` - the account was debited
    /// * `Err(WithdrawalRejection)` - the first failing check; balance unchanged
    pub fn handle_withdrawal(
        &self,
        account: Option<&mut Account>,
        amount: Option<&str>,
    ) -> WithdrawalOutcome {
        let result = self.evaluate(account, amount);
        if let Err(reason) = &result {
            tracing::debug!(reason = %reason, category = ?reason.category(), "withdrawal rejected");
        }
        result
    }

    fn evaluate(&self, account: Option<&mut Account>, amount: Option<&str>) -> WithdrawalOutcome {
        let account = account.ok_or(WithdrawalRejection::NoAccountSelected)?;

        let input = match amount {
            Some(input) if !input.is_empty() => input,
            _ => return Err(WithdrawalRejection::AmountMissing),
        };

        let parsed = parse_amount_input(input).ok_or_else(|| {
            WithdrawalRejection::AmountNotNumeric {
                input: input.to_string(),
            }
        })?;

        if !parsed.is_positive() {
            return Err(WithdrawalRejection::NonPositiveAmount {
                input: input.to_string(),
            });
        }

        if account.status() != AccountStatus::Verified {
            return Err(WithdrawalRejection::AccountNotVerified {
                status: account.status(),
            });
        }

        let score = self.provider.credit_score(account.client_id());
        if score < self.threshold {
            return Err(WithdrawalRejection::CreditScoreTooLow {
                score,
                threshold: self.threshold,
            });
        }

        let balance = account.balance();
        let amount = match parsed {
            ParsedAmount::Value(amount) => amount,
            ParsedAmount::TooSmall { .. } => {
                return Err(WithdrawalRejection::AmountBelowPrecision {
                    input: input.to_string(),
                })
            }
            ParsedAmount::TooLarge { .. } => {
                return Err(WithdrawalRejection::InsufficientBalance {
                    balance,
                    requested: Decimal::MAX,
                })
            }
        };

        if !self.processor.process_withdraw(Some(&mut *account), amount) {
            return Err(WithdrawalRejection::InsufficientBalance {
                balance,
                requested: amount,
            });
        }

        Ok(WithdrawalReceipt {
            client_id: account.client_id().to_string(),
            amount,
            balance: account.balance(),
        })
    }
}
