use crate::core::{MIN_CREDIT_SCORE, UNKNOWN_CLIENT_SCORE};
use crate::strategy::{InputFiles, LedgerConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Replay account commands against a retail ledger with a credit-score gate
#[derive(Parser, Debug)]
#[command(name = "retail-ledger")]
#[command(about = "Replay account commands against a retail ledger", long_about = None)]
pub struct CliArgs {
    /// Command script to replay
    #[arg(value_name = "COMMANDS", help = "Path to the command CSV file")]
    pub commands_file: PathBuf,

    /// Accounts roster
    #[arg(
        long = "accounts",
        value_name = "FILE",
        help = "Path to the accounts CSV file (client,name,balance,status)"
    )]
    pub accounts_file: PathBuf,

    /// Credit scores consulted by withdrawals
    #[arg(
        long = "credit-scores",
        value_name = "FILE",
        help = "Path to the credit score CSV file (client,score)"
    )]
    pub credit_scores_file: Option<PathBuf>,

    /// Account store to process with
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Processing strategy: 'sync' for the single-threaded ledger or 'shared' for the per-account locking ledger"
    )]
    pub strategy: StrategyType,

    /// Lowest credit score allowed to withdraw
    #[arg(
        long = "min-score",
        value_name = "SCORE",
        default_value_t = MIN_CREDIT_SCORE,
        allow_negative_numbers = true,
        help = "Minimum credit score for withdrawals (inclusive)"
    )]
    pub min_score: i32,

    /// Score for clients missing from the credit score file
    #[arg(
        long = "default-score",
        value_name = "SCORE",
        default_value_t = UNKNOWN_CLIENT_SCORE,
        allow_negative_numbers = true,
        help = "Credit score reported for unknown clients"
    )]
    pub default_score: i32,

    /// Where to write per-account statements
    #[arg(
        long = "statements",
        value_name = "FILE",
        help = "Write a statement for every account to this file"
    )]
    pub statements_file: Option<PathBuf>,
}

/// Available account stores
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Shared,
}

impl CliArgs {
    /// Build the ledger rules from CLI arguments
    pub fn to_ledger_config(&self) -> LedgerConfig {
        LedgerConfig {
            min_credit_score: self.min_score,
            default_credit_score: self.default_score,
        }
    }

    /// Collect the input paths of the run
    pub fn input_files(&self) -> InputFiles {
        InputFiles {
            accounts: self.accounts_file.clone(),
            commands: self.commands_file.clone(),
            credit_scores: self.credit_scores_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // Strategy parsing tests
    #[rstest]
    #[case::default_strategy(&["program", "--accounts", "a.csv", "c.csv"], StrategyType::Sync)]
    #[case::explicit_sync(&["program", "--strategy", "sync", "--accounts", "a.csv", "c.csv"], StrategyType::Sync)]
    #[case::explicit_shared(&["program", "--strategy", "shared", "--accounts", "a.csv", "c.csv"], StrategyType::Shared)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.strategy, expected);
    }

    #[test]
    fn test_paths() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--accounts",
            "accounts.csv",
            "--credit-scores",
            "scores.csv",
            "--statements",
            "statements.txt",
            "commands.csv",
        ])
        .unwrap();

        assert_eq!(
            parsed.input_files(),
            InputFiles {
                accounts: PathBuf::from("accounts.csv"),
                commands: PathBuf::from("commands.csv"),
                credit_scores: Some(PathBuf::from("scores.csv")),
            }
        );
        assert_eq!(parsed.statements_file, Some(PathBuf::from("statements.txt")));
    }

    // LedgerConfig conversion tests
    #[rstest]
    #[case::all_defaults(&["program", "--accounts", "a.csv", "c.csv"], 600, 0)]
    #[case::custom_min_score(&["program", "--min-score", "700", "--accounts", "a.csv", "c.csv"], 700, 0)]
    #[case::custom_default_score(&["program", "--default-score", "650", "--accounts", "a.csv", "c.csv"], 600, 650)]
    #[case::negative_default_score(&["program", "--default-score", "-1", "--accounts", "a.csv", "c.csv"], 600, -1)]
    fn test_ledger_config_conversion(
        #[case] args: &[&str],
        #[case] expected_min_score: i32,
        #[case] expected_default_score: i32,
    ) {
        let config = CliArgs::try_parse_from(args).unwrap().to_ledger_config();

        assert_eq!(config.min_credit_score, expected_min_score);
        assert_eq!(config.default_credit_score, expected_default_score);
    }

    // Error handling tests
    #[rstest]
    #[case::missing_commands(&["program", "--accounts", "a.csv"])]
    #[case::missing_accounts(&["program", "c.csv"])]
    #[case::invalid_strategy(&["program", "--strategy", "async", "--accounts", "a.csv", "c.csv"])]
    #[case::non_numeric_score(&["program", "--min-score", "high", "--accounts", "a.csv", "c.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
