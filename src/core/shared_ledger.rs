//! Thread-safe account ledger
//!
//! This module provides the `SharedLedger` struct, which offers the same
//! operations as [`Ledger`](crate::core::Ledger) through `&self` so it can be
//! shared across threads.
//!
//! # Design
//!
//! Accounts live in a `DashMap` keyed by client ID, each behind its own
//! `parking_lot::Mutex`. The map only resolves IDs to account handles; the map
//! guard is dropped before any account lock is taken, so the two kinds of lock
//! are never held together.
//!
//! # Thread Safety
//!
//! - Deposits, withdrawals and status changes lock a single account.
//! - Transfers lock both accounts in ascending client-ID order, so two
//!   opposing transfers cannot deadlock, and apply the debit and credit while
//!   both locks are held. No observer can see one side without the other.
//! - Snapshots from `get_accounts` hold every account lock at once, taken in
//!   the same ascending order, so a snapshot never sees half a transfer.

use crate::core::credit_gate::CreditGate;
use crate::core::processor::TransactionProcessor;
use crate::core::traits::{AccountLedger, CreditScoreProvider};
use crate::types::{
    Account, AccountRecord, AccountStatus, ClientId, LedgerEntry, LedgerError, Statement,
    WithdrawalReceipt,
};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;

type SharedRecord = Arc<Mutex<AccountRecord>>;

/// Store of accounts with one lock per account
pub struct SharedLedger<P> {
    records: DashMap<ClientId, SharedRecord>,
    processor: TransactionProcessor,
    gate: CreditGate<P>,
}

impl<P: CreditScoreProvider> SharedLedger<P> {
    /// Create an empty ledger whose withdrawals pass through `gate`
    pub fn new(gate: CreditGate<P>) -> Self {
        SharedLedger {
            records: DashMap::new(),
            processor: TransactionProcessor::new(),
            gate,
        }
    }

    /// Clone the handle for an account, releasing the map guard immediately
    fn handle(&self, client: &str) -> Result<SharedRecord, LedgerError> {
        self.records
            .get(client)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| LedgerError::account_not_found(client))
    }

    /// Snapshot of one account
    pub fn account(&self, client: &str) -> Option<Account> {
        self.handle(client)
            .ok()
            .map(|record| record.lock().account.clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add an account; fails if the ID is already present
    pub fn open(&self, account: Account) -> Result<(), LedgerError> {
        match self.records.entry(account.client_id().to_string()) {
            Entry::Occupied(_) => Err(LedgerError::duplicate_account(account.client_id())),
            Entry::Vacant(vacant) => {
                vacant.insert(Arc::new(Mutex::new(AccountRecord::new(account))));
                Ok(())
            }
        }
    }

    pub fn deposit(&self, client: &str, amount: Decimal) -> Result<(), LedgerError> {
        let handle = self.handle(client)?;
        let mut record = handle.lock();

        if !self
            .processor
            .process_deposit(Some(&mut record.account), amount)
        {
            return Err(LedgerError::rejected("deposit", client));
        }

        record.record(LedgerEntry::Deposit { amount });
        Ok(())
    }

    pub fn withdraw(
        &self,
        client: &str,
        amount: Option<&str>,
    ) -> Result<WithdrawalReceipt, LedgerError> {
        let outcome = match self.handle(client) {
            Ok(handle) => {
                let mut record = handle.lock();
                let outcome = self.gate.handle_withdrawal(Some(&mut record.account), amount);
                if let Ok(receipt) = &outcome {
                    record.record(LedgerEntry::Withdrawal {
                        amount: receipt.amount,
                    });
                }
                outcome
            }
            Err(_) => self.gate.handle_withdrawal(None, amount),
        };

        outcome.map_err(|reason| LedgerError::withdrawal_rejected(client, reason))
    }

    pub fn transfer(&self, from: &str, to: &str, amount: Decimal) -> Result<(), LedgerError> {
        if from == to {
            return Err(LedgerError::self_transfer(from));
        }
        let destination = self.handle(to)?;
        let source = self.handle(from)?;

        // Lock in a total order over client IDs
        let (mut source, mut destination) = if from < to {
            let source = source.lock();
            (source, destination.lock())
        } else {
            let destination = destination.lock();
            (source.lock(), destination)
        };

        let moved = self.processor.process_transfer(
            Some(&mut source.account),
            Some(&mut destination.account),
            amount,
        );
        if !moved {
            return Err(LedgerError::rejected("transfer", from));
        }

        let source_name = source.account.client_name().to_string();
        let destination_name = destination.account.client_name().to_string();
        source.record(LedgerEntry::TransferOut {
            amount,
            to: destination_name,
        });
        destination.record(LedgerEntry::TransferIn {
            amount,
            from: source_name,
        });
        Ok(())
    }

    pub fn set_status(&self, client: &str, status: AccountStatus) -> Result<(), LedgerError> {
        let handle = self.handle(client)?;
        let mut record = handle.lock();
        let previous = record.account.status();

        record.account.set_status(status);
        record.record(LedgerEntry::StatusChange {
            from: previous,
            to: status,
        });
        Ok(())
    }

    /// Snapshot every account, sorted by client ID
    ///
    /// All account locks are held together while copying, so the snapshot is
    /// consistent with respect to transfers. Accounts opened while the
    /// snapshot is being taken may or may not appear in it.
    pub fn get_accounts(&self) -> Vec<Account> {
        let mut handles: Vec<(ClientId, SharedRecord)> = self
            .records
            .iter()
            .map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
            .collect();
        handles.sort_by(|a, b| a.0.cmp(&b.0));

        // Same order as transfers
        let guards: Vec<_> = handles.iter().map(|(_, record)| record.lock()).collect();
        guards.iter().map(|record| record.account.clone()).collect()
    }

    pub fn statement(&self, client: &str) -> Option<Statement> {
        self.handle(client)
            .ok()
            .map(|record| record.lock().statement())
    }
}

impl<P: CreditScoreProvider> AccountLedger for SharedLedger<P> {
    fn open(&mut self, account: Account) -> Result<(), LedgerError> {
        SharedLedger::open(self, account)
    }

    fn deposit(&mut self, client: &str, amount: Decimal) -> Result<(), LedgerError> {
        SharedLedger::deposit(self, client, amount)
    }

    fn withdraw(
        &mut self,
        client: &str,
        amount: Option<&str>,
    ) -> Result<WithdrawalReceipt, LedgerError> {
        SharedLedger::withdraw(self, client, amount)
    }

    fn transfer(&mut self, from: &str, to: &str, amount: Decimal) -> Result<(), LedgerError> {
        SharedLedger::transfer(self, from, to, amount)
    }

    fn set_status(&mut self, client: &str, status: AccountStatus) -> Result<(), LedgerError> {
        SharedLedger::set_status(self, client, status)
    }

    fn get_accounts(&self) -> Vec<Account> {
        SharedLedger::get_accounts(self)
    }

    fn statement(&self, client: &str) -> Option<Statement> {
        SharedLedger::statement(self, client)
    }
}
