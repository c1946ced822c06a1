//! Parsing of user-entered amounts
//!
//! Accepted syntax, after trimming surrounding whitespace:
//!
//! ```text
//! [+-] digits [. digits] [(e|E) [+-] digits]
//! [+-] . digits [(e|E) [+-] digits]
//! ```
//!
//! Digit separators, currency symbols, hexadecimal and non-finite spellings
//! are not numbers. A well-formed number is never reported as non-numeric
//! just because a balance cannot hold it: values beyond the `Decimal` range
//! come back as [`ParsedAmount::TooLarge`] or [`ParsedAmount::TooSmall`] so
//! callers can decide where in their checks to refuse them.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest decimal exponent of a leading digit that `Decimal` can hold
const MAX_MAGNITUDE: i64 = 28;

/// Smallest decimal exponent of a leading digit that `Decimal` can hold
const MIN_MAGNITUDE: i64 = -28;

/// A syntactically valid amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedAmount {
    /// Representable value; digits past the 28th decimal place are rounded
    Value(Decimal),
    /// Magnitude above `Decimal::MAX`
    TooLarge { negative: bool },
    /// Nonzero but below the smallest representable unit
    TooSmall { negative: bool },
}

impl ParsedAmount {
    /// Strictly greater than zero
    pub fn is_positive(&self) -> bool {
        match self {
            ParsedAmount::Value(value) => *value > Decimal::ZERO,
            ParsedAmount::TooLarge { negative } | ParsedAmount::TooSmall { negative } => {
                !negative
            }
        }
    }

    /// The exact value, if representable
    pub fn value(&self) -> Option<Decimal> {
        match self {
            ParsedAmount::Value(value) => Some(*value),
            _ => None,
        }
    }
}

/// Parse an amount, keeping out-of-range numbers distinct from non-numbers
///
/// Returns `None` only when the input is not a number at all.
pub fn parse_amount_input(input: &str) -> Option<ParsedAmount> {
    let text = input.trim();
    let (negative, rest) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(at) => (&rest[..at], parse_exponent(&rest[at + 1..])?),
        None => (rest, 0),
    };

    let (integer, fraction) = match mantissa.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (mantissa, ""),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if integer.len() + fraction.len() == 0 || !all_digits(integer) || !all_digits(fraction) {
        return None;
    }

    let digits: String = integer.chars().chain(fraction.chars()).collect();
    let Some(leading) = digits.find(|c: char| c != '0') else {
        return Some(ParsedAmount::Value(Decimal::ZERO));
    };
    let significant = &digits[leading..];

    // Decimal exponent of the first significant digit: "1" is 0, "0.01" is -2
    let magnitude = (integer.len() as i64 - leading as i64 - 1).saturating_add(exponent);
    if magnitude > MAX_MAGNITUDE {
        return Some(ParsedAmount::TooLarge { negative });
    }
    if magnitude < MIN_MAGNITUDE {
        return Some(ParsedAmount::TooSmall { negative });
    }

    // More significant digits than a Decimal holds: keep the leading 28
    let value = Decimal::from_str(&plain_decimal(significant, magnitude)).or_else(|e| {
        if magnitude < MAX_MAGNITUDE && significant.len() > 28 {
            Decimal::from_str(&plain_decimal(&significant[..28], magnitude))
        } else {
            Err(e)
        }
    });
    let Ok(value) = value else {
        return Some(ParsedAmount::TooLarge { negative });
    };
    if value.is_zero() {
        return Some(ParsedAmount::TooSmall { negative });
    }

    Some(ParsedAmount::Value(if negative { -value } else { value }))
}

/// Parse a representable amount
///
/// Surrounding whitespace is ignored. Plain (`12.50`) and scientific
/// (`1.25e1`) notation are accepted. Anything else, including a blank string
/// or a number outside the `Decimal` range, yields `None`.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    parse_amount_input(input)?.value()
}

/// Lay out significant digits around the decimal point, without an exponent
fn plain_decimal(significant: &str, magnitude: i64) -> String {
    if magnitude >= 0 {
        let split = magnitude as usize + 1;
        if significant.len() > split {
            format!("{}.{}", &significant[..split], &significant[split..])
        } else {
            format!("{:0<width$}", significant, width = split)
        }
    } else {
        format!("0.{}{}", "0".repeat((-magnitude - 1) as usize), significant)
    }
}

/// Saturating parse of an exponent; out-of-range exponents only need their sign
fn parse_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::integer("100", dec!(100))]
    #[case::padded("  100.50  ", dec!(100.50))]
    #[case::explicit_plus("+7", dec!(7))]
    #[case::negative("-3", dec!(-3))]
    #[case::leading_point(".5", dec!(0.5))]
    #[case::trailing_point("5.", dec!(5))]
    #[case::exponent("1e2", dec!(100))]
    #[case::upper_exponent("2.5E1", dec!(25))]
    #[case::negative_exponent("125e-2", dec!(1.25))]
    #[case::leading_zeros("000.0100", dec!(0.01))]
    #[case::finest_unit("1e-28", dec!(0.0000000000000000000000000001))]
    #[case::largest_magnitude("1e28", dec!(10000000000000000000000000000))]
    #[case::zero("0.000", Decimal::ZERO)]
    #[case::negative_zero("-0", Decimal::ZERO)]
    #[case::zero_huge_exponent("0e999999", Decimal::ZERO)]
    fn test_representable(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount_input(input), Some(ParsedAmount::Value(expected)));
        assert_eq!(parse_amount(input), Some(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    #[case::letters("ten")]
    #[case::trailing_letters("12abc")]
    #[case::underscore_separator("1_000")]
    #[case::short_underscore("1_0")]
    #[case::comma_separator("1,000")]
    #[case::two_points("1.2.3")]
    #[case::lone_point(".")]
    #[case::lone_sign("-")]
    #[case::double_sign("--1")]
    #[case::missing_exponent("1e")]
    #[case::exponent_without_mantissa("e5")]
    #[case::fractional_exponent("1e2.5")]
    #[case::inner_space("1 000")]
    #[case::currency("$5")]
    #[case::hex("0x10")]
    #[case::infinity("Infinity")]
    #[case::nan("NaN")]
    fn test_not_numeric(#[case] input: &str) {
        assert_eq!(parse_amount_input(input), None);
        assert_eq!(parse_amount(input), None);
    }

    #[rstest]
    #[case::huge_exponent("1e30", ParsedAmount::TooLarge { negative: false })]
    #[case::thirty_digits("123456789012345678901234567890", ParsedAmount::TooLarge { negative: false })]
    #[case::just_above_max("79228162514264337593543950336", ParsedAmount::TooLarge { negative: false })]
    #[case::saturated_exponent("1e99999999999999999999999", ParsedAmount::TooLarge { negative: false })]
    #[case::huge_negative("-1e30", ParsedAmount::TooLarge { negative: true })]
    #[case::thirty_two_places("0.00000000000000000000000000000001", ParsedAmount::TooSmall { negative: false })]
    #[case::rounds_to_zero("0.00000000000000000000000000004", ParsedAmount::TooSmall { negative: false })]
    #[case::tiny_exponent("1e-40", ParsedAmount::TooSmall { negative: false })]
    #[case::tiny_negative("-1e-40", ParsedAmount::TooSmall { negative: true })]
    fn test_out_of_range(#[case] input: &str, #[case] expected: ParsedAmount) {
        assert_eq!(parse_amount_input(input), Some(expected));
        assert_eq!(parse_amount(input), None);
    }

    #[rstest]
    #[case(ParsedAmount::Value(dec!(0.01)), true)]
    #[case(ParsedAmount::Value(Decimal::ZERO), false)]
    #[case(ParsedAmount::Value(dec!(-1)), false)]
    #[case(ParsedAmount::TooLarge { negative: false }, true)]
    #[case(ParsedAmount::TooLarge { negative: true }, false)]
    #[case(ParsedAmount::TooSmall { negative: false }, true)]
    #[case(ParsedAmount::TooSmall { negative: true }, false)]
    fn test_is_positive(#[case] amount: ParsedAmount, #[case] expected: bool) {
        assert_eq!(amount.is_positive(), expected);
    }

    proptest! {
        #[test]
        fn prop_displayed_decimals_parse_back(mantissa in any::<i64>(), scale in 0u32..=18) {
            let value = Decimal::new(mantissa, scale);
            prop_assert_eq!(parse_amount(&value.to_string()), Some(value));
        }

        #[test]
        fn prop_scientific_matches_plain(mantissa in 1i64..1_000_000, exponent in -10i32..10) {
            let scientific = format!("{}e{}", mantissa, exponent);
            let expected = if exponent >= 0 {
                Decimal::from(mantissa) * Decimal::from(10i64.pow(exponent as u32))
            } else {
                Decimal::new(mantissa, exponent.unsigned_abs())
            };
            prop_assert_eq!(parse_amount(&scientific), Some(expected));
        }
    }
}
