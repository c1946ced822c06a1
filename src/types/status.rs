//! Account status policy
//!
//! The closed set of lifecycle states an account can be in, and which
//! balance-affecting operations each state permits. The account itself never
//! enforces a transition graph: any status can be assigned from any other.

use super::error::LedgerError;
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an account
///
/// | Status       | Deposit | Withdraw | Transfer out |
/// |--------------|---------|----------|--------------|
/// | `Unverified` | yes     | no       | no           |
/// | `Verified`   | yes     | yes      | yes          |
/// | `Suspended`  | yes     | no       | no           |
/// | `Closed`     | no      | no       | no           |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountStatus {
    /// Newly opened, not yet approved
    Unverified,

    /// Fully approved for every operation
    Verified,

    /// Frozen by an external authority; incoming funds only
    Suspended,

    /// No balance-affecting operation is permitted
    Closed,
}

impl AccountStatus {
    /// Every status, in declaration order
    pub const ALL: [AccountStatus; 4] = [
        AccountStatus::Unverified,
        AccountStatus::Verified,
        AccountStatus::Suspended,
        AccountStatus::Closed,
    ];

    /// Whether an account in this status may receive deposits
    pub fn allows_deposit(self) -> bool {
        self != AccountStatus::Closed
    }

    /// Whether an account in this status may have funds withdrawn
    pub fn allows_withdrawal(self) -> bool {
        self == AccountStatus::Verified
    }

    /// Whether an account in this status may send funds to another account
    pub fn allows_transfer(self) -> bool {
        self == AccountStatus::Verified
    }

    /// Upper-case name used for display and CSV output
    pub fn as_str(self) -> &'static str {
        match self {
            AccountStatus::Unverified => "UNVERIFIED",
            AccountStatus::Verified => "VERIFIED",
            AccountStatus::Suspended => "SUSPENDED",
            AccountStatus::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = LedgerError;

    /// Parse a status name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UNVERIFIED" => Ok(AccountStatus::Unverified),
            "VERIFIED" => Ok(AccountStatus::Verified),
            "SUSPENDED" => Ok(AccountStatus::Suspended),
            "CLOSED" => Ok(AccountStatus::Closed),
            _ => Err(LedgerError::invalid_status(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unverified(AccountStatus::Unverified, true, false, false)]
    #[case::verified(AccountStatus::Verified, true, true, true)]
    #[case::suspended(AccountStatus::Suspended, true, false, false)]
    #[case::closed(AccountStatus::Closed, false, false, false)]
    fn test_operation_eligibility(
        #[case] status: AccountStatus,
        #[case] deposit: bool,
        #[case] withdrawal: bool,
        #[case] transfer: bool,
    ) {
        assert_eq!(status.allows_deposit(), deposit);
        assert_eq!(status.allows_withdrawal(), withdrawal);
        assert_eq!(status.allows_transfer(), transfer);
    }

    #[rstest]
    #[case("VERIFIED", AccountStatus::Verified)]
    #[case("verified", AccountStatus::Verified)]
    #[case("  Suspended ", AccountStatus::Suspended)]
    #[case("unverified", AccountStatus::Unverified)]
    #[case("CLOSED", AccountStatus::Closed)]
    fn test_parse_status(#[case] input: &str, #[case] expected: AccountStatus) {
        assert_eq!(input.parse::<AccountStatus>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("ACTIVE")]
    #[case("verify")]
    fn test_parse_status_rejects_unknown(#[case] input: &str) {
        let result = input.parse::<AccountStatus>();
        assert!(matches!(result, Err(LedgerError::InvalidStatus { .. })));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for status in AccountStatus::ALL {
            assert_eq!(status.to_string().parse::<AccountStatus>().unwrap(), status);
        }
    }
}
