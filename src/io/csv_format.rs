//! CSV format handling for accounts, credit scores and commands
//!
//! This module centralizes all CSV format concerns, providing:
//! - Row structures for deserialization
//! - Conversion from rows to domain types
//! - Account and statement output
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::core::amount::parse_amount;
use crate::types::{Account, AccountStatus, ClientId, Command, LedgerError, Statement};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;

/// Row of the accounts file: `client,name,balance,status`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AccountRow {
    pub client: ClientId,
    pub name: String,
    pub balance: String,
    pub status: String,
}

/// Row of the credit scores file: `client,score`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScoreRow {
    pub client: ClientId,
    pub score: String,
}

/// Row of a command script: `type,client,amount,target,status`
///
/// Only `type` and `client` are always required; which of the remaining
/// columns must be filled depends on the command type.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CommandRow {
    #[serde(rename = "type")]
    pub command_type: String,
    pub client: ClientId,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Convert an accounts-file row into an Account
///
/// The opening balance may be any decimal, including zero; the status name
/// is case-insensitive.
pub fn convert_account_row(row: AccountRow) -> Result<Account, LedgerError> {
    let balance: Decimal =
        parse_amount(&row.balance).ok_or_else(|| LedgerError::invalid_amount(&row.balance))?;
    let status: AccountStatus = row.status.parse()?;

    Ok(Account::new(row.client, row.name, balance, status))
}

/// Convert a credit-score row into a `(client, score)` pair
pub fn convert_score_row(row: ScoreRow) -> Result<(ClientId, i32), LedgerError> {
    let score = row
        .score
        .trim()
        .parse::<i32>()
        .map_err(|_| LedgerError::invalid_credit_score(&row.client, &row.score))?;

    Ok((row.client, score))
}

/// Convert a command-script row into a Command
///
/// - `deposit` requires `amount`
/// - `withdraw` (or `withdrawal`) passes `amount` through untouched; the
///   credit gate validates it
/// - `transfer` requires `target` and `amount`
/// - `status` requires `status`
///
/// Every other field is trimmed here.
pub fn convert_command_row(row: CommandRow) -> Result<Command, LedgerError> {
    let command = row.command_type.trim().to_lowercase();
    let client = row.client.trim().to_string();

    match command.as_str() {
        "deposit" => {
            let amount = required_amount(row.amount, &command, &client)?;
            Ok(Command::Deposit { client, amount })
        }
        "withdraw" | "withdrawal" => Ok(Command::Withdraw {
            client,
            amount: row.amount,
        }),
        "transfer" => {
            let to = row
                .target
                .map(|target| target.trim().to_string())
                .filter(|target| !target.is_empty())
                .ok_or_else(|| LedgerError::missing_field(&command, &client, "target"))?;
            let amount = required_amount(row.amount, &command, &client)?;
            Ok(Command::Transfer {
                from: client,
                to,
                amount,
            })
        }
        "status" => {
            let status: AccountStatus = row
                .status
                .filter(|status| !status.trim().is_empty())
                .ok_or_else(|| LedgerError::missing_field(&command, &client, "status"))?
                .parse()?;
            Ok(Command::Status { client, status })
        }
        _ => Err(LedgerError::invalid_command(row.command_type.trim(), &client)),
    }
}

fn required_amount(
    amount: Option<String>,
    command: &str,
    client: &str,
) -> Result<Decimal, LedgerError> {
    let amount = amount
        .filter(|amount| !amount.trim().is_empty())
        .ok_or_else(|| LedgerError::missing_field(command, client, "amount"))?;

    parse_amount(&amount).ok_or_else(|| LedgerError::invalid_amount(&amount))
}

/// Write account states to CSV format
///
/// Writes accounts with columns: client, name, status, balance.
/// Accounts are sorted by client ID for deterministic output; balances are
/// printed with four decimal places.
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["client", "name", "status", "balance"])?;

    let mut sorted_accounts: Vec<&Account> = accounts.iter().collect();
    sorted_accounts.sort_by(|a, b| a.client_id().cmp(b.client_id()));

    for account in sorted_accounts {
        let balance = format!("{:.4}", account.balance());
        writer.write_record([
            account.client_id(),
            account.client_name(),
            account.status().as_str(),
            balance.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write statements one after another in their text form
pub fn write_statements(statements: &[Statement], output: &mut dyn Write) -> Result<(), LedgerError> {
    for statement in statements {
        write!(output, "{}", statement)?;
    }
    output.flush()?;
    Ok(())
}
