//! Single-threaded account ledger
//!
//! This module provides the `Ledger` struct, the explicit store of accounts
//! keyed by client identifier. It owns every account exclusively and routes
//! all mutation through the transaction processor (deposits, transfers) and
//! the credit gate (withdrawals).
//!
//! The Ledger is responsible for:
//! - Rejecting duplicate account IDs on open
//! - Resolving client IDs to accounts and reporting unknown ones
//! - Turning boolean processor outcomes into descriptive errors
//! - Recording successful operations in each account's history

use crate::core::credit_gate::CreditGate;
use crate::core::processor::TransactionProcessor;
use crate::core::traits::{AccountLedger, CreditScoreProvider};
use crate::types::{
    Account, AccountRecord, AccountStatus, ClientId, LedgerEntry, LedgerError, Statement,
    WithdrawalReceipt,
};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Store of accounts for single-threaded use
pub struct Ledger<P> {
    records: HashMap<ClientId, AccountRecord>,
    processor: TransactionProcessor,
    gate: CreditGate<P>,
}

impl<P: CreditScoreProvider> Ledger<P> {
    /// Create an empty ledger whose withdrawals pass through `gate`
    pub fn new(gate: CreditGate<P>) -> Self {
        Ledger {
            records: HashMap::new(),
            processor: TransactionProcessor::new(),
            gate,
        }
    }

    /// Look up an account by client ID
    pub fn account(&self, client: &str) -> Option<&Account> {
        self.records.get(client).map(|record| &record.account)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn record_mut(&mut self, client: &str) -> Result<&mut AccountRecord, LedgerError> {
        self.records
            .get_mut(client)
            .ok_or_else(|| LedgerError::account_not_found(client))
    }
}

impl<P: CreditScoreProvider> AccountLedger for Ledger<P> {
    fn open(&mut self, account: Account) -> Result<(), LedgerError> {
        if self.records.contains_key(account.client_id()) {
            return Err(LedgerError::duplicate_account(account.client_id()));
        }

        self.records.insert(
            account.client_id().to_string(),
            AccountRecord::new(account),
        );
        Ok(())
    }

    fn deposit(&mut self, client: &str, amount: Decimal) -> Result<(), LedgerError> {
        let processor = self.processor;
        let record = self.record_mut(client)?;

        if !processor.process_deposit(Some(&mut record.account), amount) {
            return Err(LedgerError::rejected("deposit", client));
        }

        record.record(LedgerEntry::Deposit { amount });
        Ok(())
    }

    fn withdraw(
        &mut self,
        client: &str,
        amount: Option<&str>,
    ) -> Result<WithdrawalReceipt, LedgerError> {
        // An unknown ID reaches the gate as "no account selected"
        let record = self.records.get_mut(client);
        let outcome = match record {
            Some(record) => {
                let outcome = self.gate.handle_withdrawal(Some(&mut record.account), amount);
                if let Ok(receipt) = &outcome {
                    record.record(LedgerEntry::Withdrawal {
                        amount: receipt.amount,
                    });
                }
                outcome
            }
            None => self.gate.handle_withdrawal(None, amount),
        };

        outcome.map_err(|reason| LedgerError::withdrawal_rejected(client, reason))
    }

    fn transfer(&mut self, from: &str, to: &str, amount: Decimal) -> Result<(), LedgerError> {
        if from == to {
            return Err(LedgerError::self_transfer(from));
        }
        if !self.records.contains_key(to) {
            return Err(LedgerError::account_not_found(to));
        }

        // Take the source out so both accounts can be borrowed mutably
        let mut source = self
            .records
            .remove(from)
            .ok_or_else(|| LedgerError::account_not_found(from))?;

        let result = match self.records.get_mut(to) {
            Some(destination) => {
                let moved = self.processor.process_transfer(
                    Some(&mut source.account),
                    Some(&mut destination.account),
                    amount,
                );
                if moved {
                    destination.record(LedgerEntry::TransferIn {
                        amount,
                        from: source.account.client_name().to_string(),
                    });
                    source.record(LedgerEntry::TransferOut {
                        amount,
                        to: destination.account.client_name().to_string(),
                    });
                    Ok(())
                } else {
                    Err(LedgerError::rejected("transfer", from))
                }
            }
            None => Err(LedgerError::account_not_found(to)),
        };

        self.records.insert(from.to_string(), source);
        result
    }

    fn set_status(&mut self, client: &str, status: AccountStatus) -> Result<(), LedgerError> {
        let record = self.record_mut(client)?;
        let previous = record.account.status();

        record.account.set_status(status);
        record.record(LedgerEntry::StatusChange {
            from: previous,
            to: status,
        });
        Ok(())
    }

    fn get_accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self
            .records
            .values()
            .map(|record| record.account.clone())
            .collect();
        accounts.sort_by(|a, b| a.client_id().cmp(b.client_id()));
        accounts
    }

    fn statement(&self, client: &str) -> Option<Statement> {
        self.records.get(client).map(AccountRecord::statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::credit::{FixedScore, ScoreTable};
    use crate::types::{Command, WithdrawalRejection};
    use rust_decimal_macros::dec;

    /// The demo roster: two verified, one suspended, one unverified
    fn ledger_with_score(score: i32) -> Ledger<FixedScore> {
        let mut ledger = Ledger::new(CreditGate::new(FixedScore(score)));
        ledger
            .open(Account::new("1001", "Hania", dec!(1000.0), AccountStatus::Verified))
            .unwrap();
        ledger
            .open(Account::new("1002", "Mai", dec!(500.0), AccountStatus::Verified))
            .unwrap();
        ledger
            .open(Account::new("1003", "Maryam", dec!(300.0), AccountStatus::Suspended))
            .unwrap();
        ledger
            .open(Account::new("1004", "Nourhan", dec!(800.0), AccountStatus::Unverified))
            .unwrap();
        ledger
    }

    fn balance(ledger: &Ledger<impl CreditScoreProvider>, client: &str) -> Decimal {
        ledger.account(client).unwrap().balance()
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new(CreditGate::new(FixedScore(620)));
        assert!(ledger.is_empty());
        assert!(ledger.get_accounts().is_empty());
    }

    #[test]
    fn test_open_rejects_duplicate_id() {
        let mut ledger = ledger_with_score(620);

        let result = ledger.open(Account::new("1001", "Other", dec!(1), AccountStatus::Verified));
        assert_eq!(result, Err(LedgerError::duplicate_account("1001")));
        assert_eq!(ledger.account("1001").unwrap().client_name(), "Hania");
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn test_get_accounts_sorted_by_id() {
        let ledger = ledger_with_score(620);
        let ids: Vec<String> = ledger
            .get_accounts()
            .iter()
            .map(|a| a.client_id().to_string())
            .collect();
        assert_eq!(ids, ["1001", "1002", "1003", "1004"]);
    }

    #[test]
    fn test_deposit_records_history() {
        let mut ledger = ledger_with_score(620);

        ledger.deposit("1004", dec!(200)).unwrap();

        assert_eq!(balance(&ledger, "1004"), dec!(1000.0));
        let statement = ledger.statement("1004").unwrap();
        assert_eq!(statement.entries, vec![LedgerEntry::Deposit { amount: dec!(200) }]);
    }

    #[test]
    fn test_deposit_into_closed_account_is_rejected() {
        let mut ledger = ledger_with_score(620);
        ledger.set_status("1002", AccountStatus::Closed).unwrap();

        let result = ledger.deposit("1002", dec!(100));
        assert_eq!(result, Err(LedgerError::rejected("deposit", "1002")));
        assert_eq!(balance(&ledger, "1002"), dec!(500.0));
    }

    #[test]
    fn test_deposit_into_unknown_account() {
        let mut ledger = ledger_with_score(620);
        let result = ledger.deposit("9999", dec!(100));
        assert_eq!(result, Err(LedgerError::account_not_found("9999")));
    }

    #[test]
    fn test_withdraw_through_gate() {
        let mut ledger = ledger_with_score(620);

        let receipt = ledger.withdraw("1001", Some("250")).unwrap();

        assert_eq!(receipt.balance, dec!(750.0));
        assert_eq!(balance(&ledger, "1001"), dec!(750.0));
        let statement = ledger.statement("1001").unwrap();
        assert_eq!(statement.entries, vec![LedgerEntry::Withdrawal { amount: dec!(250) }]);
    }

    #[test]
    fn test_withdraw_from_unknown_account_reports_no_selection() {
        let mut ledger = ledger_with_score(620);

        let result = ledger.withdraw("9999", Some("10"));
        assert_eq!(
            result,
            Err(LedgerError::withdrawal_rejected(
                "9999",
                WithdrawalRejection::NoAccountSelected
            ))
        );
    }

    #[test]
    fn test_withdraw_rejection_leaves_no_history() {
        let mut ledger = ledger_with_score(599);

        let result = ledger.withdraw("1001", Some("100"));
        assert!(matches!(
            result,
            Err(LedgerError::WithdrawalRejected {
                reason: WithdrawalRejection::CreditScoreTooLow { .. },
                ..
            })
        ));
        assert_eq!(balance(&ledger, "1001"), dec!(1000.0));
        assert!(ledger.statement("1001").unwrap().entries.is_empty());
    }

    #[test]
    fn test_transfer_between_accounts() {
        let mut ledger = ledger_with_score(620);

        ledger.transfer("1001", "1002", dec!(200)).unwrap();

        assert_eq!(balance(&ledger, "1001"), dec!(800.0));
        assert_eq!(balance(&ledger, "1002"), dec!(700.0));
        assert_eq!(
            ledger.statement("1001").unwrap().entries,
            vec![LedgerEntry::TransferOut {
                amount: dec!(200),
                to: "Mai".to_string()
            }]
        );
        assert_eq!(
            ledger.statement("1002").unwrap().entries,
            vec![LedgerEntry::TransferIn {
                amount: dec!(200),
                from: "Hania".to_string()
            }]
        );
    }

    #[test]
    fn test_transfer_from_suspended_account_fails() {
        let mut ledger = ledger_with_score(620);

        let result = ledger.transfer("1003", "1001", dec!(100));
        assert_eq!(result, Err(LedgerError::rejected("transfer", "1003")));
        assert_eq!(balance(&ledger, "1003"), dec!(300.0));
        assert_eq!(balance(&ledger, "1001"), dec!(1000.0));
    }

    #[test]
    fn test_transfer_into_suspended_account_succeeds() {
        let mut ledger = ledger_with_score(620);

        ledger.transfer("1001", "1003", dec!(50)).unwrap();
        assert_eq!(balance(&ledger, "1001"), dec!(950.0));
        assert_eq!(balance(&ledger, "1003"), dec!(350.0));
    }

    #[test]
    fn test_transfer_to_self_is_rejected() {
        let mut ledger = ledger_with_score(620);

        let result = ledger.transfer("1001", "1001", dec!(10));
        assert_eq!(result, Err(LedgerError::self_transfer("1001")));
        assert_eq!(balance(&ledger, "1001"), dec!(1000.0));
    }

    #[test]
    fn test_transfer_to_unknown_target() {
        let mut ledger = ledger_with_score(620);

        let result = ledger.transfer("1001", "9999", dec!(10));
        assert_eq!(result, Err(LedgerError::account_not_found("9999")));
        assert_eq!(balance(&ledger, "1001"), dec!(1000.0));
    }

    #[test]
    fn test_transfer_from_unknown_source() {
        let mut ledger = ledger_with_score(620);

        let result = ledger.transfer("9999", "1001", dec!(10));
        assert_eq!(result, Err(LedgerError::account_not_found("9999")));
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn test_failed_transfer_keeps_source_in_ledger() {
        let mut ledger = ledger_with_score(620);

        assert!(ledger.transfer("1002", "1001", dec!(10000)).is_err());
        assert_eq!(ledger.len(), 4);
        assert_eq!(balance(&ledger, "1002"), dec!(500.0));
    }

    #[test]
    fn test_status_lifecycle() {
        let mut ledger = ledger_with_score(620);

        // UNVERIFIED: deposit only
        ledger.deposit("1004", dec!(500)).unwrap();
        assert!(ledger.withdraw("1004", Some("100")).is_err());

        // VERIFIED: everything
        ledger.set_status("1004", AccountStatus::Verified).unwrap();
        ledger.withdraw("1004", Some("300")).unwrap();

        // SUSPENDED: deposit only
        ledger.set_status("1004", AccountStatus::Suspended).unwrap();
        ledger.deposit("1004", dec!(100)).unwrap();
        assert!(ledger.withdraw("1004", Some("50")).is_err());

        // CLOSED: nothing
        ledger.set_status("1004", AccountStatus::Closed).unwrap();
        assert!(ledger.deposit("1004", dec!(100)).is_err());
        assert!(ledger.withdraw("1004", Some("50")).is_err());

        assert_eq!(balance(&ledger, "1004"), dec!(1100.0));
        let entries = ledger.statement("1004").unwrap().entries;
        assert_eq!(entries.len(), 6);
        assert_eq!(
            entries[1],
            LedgerEntry::StatusChange {
                from: AccountStatus::Unverified,
                to: AccountStatus::Verified
            }
        );
    }

    #[test]
    fn test_set_status_unknown_account() {
        let mut ledger = ledger_with_score(620);
        let result = ledger.set_status("9999", AccountStatus::Closed);
        assert_eq!(result, Err(LedgerError::account_not_found("9999")));
    }

    #[test]
    fn test_apply_routes_commands() {
        let scores: ScoreTable = [("1001", 700)].into_iter().collect();
        let mut ledger = Ledger::new(CreditGate::new(scores));
        ledger
            .open(Account::new("1001", "Hania", dec!(100), AccountStatus::Verified))
            .unwrap();
        ledger
            .open(Account::new("1002", "Mai", dec!(0), AccountStatus::Unverified))
            .unwrap();

        ledger
            .apply(Command::Deposit {
                client: "1001".to_string(),
                amount: dec!(50),
            })
            .unwrap();
        ledger
            .apply(Command::Withdraw {
                client: "1001".to_string(),
                amount: Some("30".to_string()),
            })
            .unwrap();
        ledger
            .apply(Command::Transfer {
                from: "1001".to_string(),
                to: "1002".to_string(),
                amount: dec!(20),
            })
            .unwrap();
        ledger
            .apply(Command::Status {
                client: "1002".to_string(),
                status: AccountStatus::Verified,
            })
            .unwrap();

        assert_eq!(balance(&ledger, "1001"), dec!(100));
        assert_eq!(balance(&ledger, "1002"), dec!(20));
        assert_eq!(
            ledger.account("1002").unwrap().status(),
            AccountStatus::Verified
        );
        assert_eq!(ledger.statements().len(), 2);
    }
}
