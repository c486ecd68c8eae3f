//! Fixed-point conversion between smallest-unit amounts and decimal strings.
//!
//! Amounts are `U256` wei-equivalents end to end; no floating point is
//! involved at any step. Parsing and digit bookkeeping are delegated to
//! `alloy_primitives::utils`, with the formatted output canonicalized so
//! trailing fractional zeros are trimmed down to at least one digit
//! (`0` formats as `"0.0"`, not `"0.000000000000000000"`).

use alloy_primitives::utils::{format_units, parse_units, ParseUnits};
use alloy_primitives::U256;

use crate::error::{Error, Result};

/// Decimals of the native currency: one ether is 10^18 wei.
pub const ETHER_DECIMALS: u8 = 18;

/// Format a smallest-unit amount as a decimal string.
///
/// # Errors
///
/// Returns [`Error::ParseAmount`] if `decimals` is out of range for the
/// underlying unit representation.
pub fn format_amount(amount: U256, decimals: u8) -> Result<String> {
    let raw = format_units(amount, decimals).map_err(|e| Error::ParseAmount {
        input: amount.to_string(),
        reason: e.to_string(),
    })?;
    Ok(canonicalize(&raw))
}

/// Parse a decimal string into a smallest-unit amount.
///
/// # Errors
///
/// Returns [`Error::ParseAmount`] for non-numeric input, more fractional
/// digits than `decimals`, or negative values.
pub fn parse_amount(input: &str, decimals: u8) -> Result<U256> {
    let parsed = parse_units(input, decimals).map_err(|e| Error::ParseAmount {
        input: input.to_string(),
        reason: e.to_string(),
    })?;

    match parsed {
        ParseUnits::U256(value) => Ok(value),
        ParseUnits::I256(_) => Err(Error::ParseAmount {
            input: input.to_string(),
            reason: "amount must not be negative".to_string(),
        }),
    }
}

/// Trim trailing fractional zeros, keeping at least one fractional digit.
fn canonicalize(raw: &str) -> String {
    match raw.split_once('.') {
        Some((whole, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                format!("{whole}.0")
            } else {
                format!("{whole}.{frac}")
            }
        }
        None => format!("{raw}.0"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_wei_as_ether() {
        let wei = U256::from(1_500_000_000_000_000_000u64);
        assert_eq!(format_amount(wei, ETHER_DECIMALS).unwrap(), "1.5");
    }

    #[test]
    fn formats_zero_canonically() {
        assert_eq!(format_amount(U256::ZERO, ETHER_DECIMALS).unwrap(), "0.0");
    }

    #[test]
    fn formats_whole_amounts_with_one_fractional_digit() {
        let wei = U256::from(2_000_000_000_000_000_000u64);
        assert_eq!(format_amount(wei, ETHER_DECIMALS).unwrap(), "2.0");
    }

    #[test]
    fn formats_one_wei_with_full_padding() {
        let formatted = format_amount(U256::from(1u8), ETHER_DECIMALS).unwrap();
        assert_eq!(formatted, "0.000000000000000001");
    }

    #[test]
    fn parses_ether_into_wei() {
        let wei = parse_amount("1.5", ETHER_DECIMALS).unwrap();
        assert_eq!(wei, U256::from(1_500_000_000_000_000_000u64));
    }

    #[test]
    fn parses_with_alternate_decimals() {
        assert_eq!(parse_amount("1.5", 6).unwrap(), U256::from(1_500_000u64));
        let formatted = format_amount(U256::from(1_500_000u64), 6).unwrap();
        assert_eq!(formatted, "1.5");
    }

    #[test]
    fn round_trips_canonical_strings() {
        for input in ["1.5", "0.0", "123.456", "0.000000000000000001", "42.0"] {
            let wei = parse_amount(input, ETHER_DECIMALS).unwrap();
            assert_eq!(format_amount(wei, ETHER_DECIMALS).unwrap(), input);
        }
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(matches!(
            parse_amount("abc", ETHER_DECIMALS),
            Err(Error::ParseAmount { .. })
        ));
        assert!(matches!(
            parse_amount("", ETHER_DECIMALS),
            Err(Error::ParseAmount { .. })
        ));
        assert!(matches!(
            parse_amount("1.2.3", ETHER_DECIMALS),
            Err(Error::ParseAmount { .. })
        ));
    }

    #[test]
    fn rejects_negative_amounts() {
        assert!(matches!(
            parse_amount("-1.5", ETHER_DECIMALS),
            Err(Error::ParseAmount { .. })
        ));
    }

    #[test]
    fn rejects_excess_fractional_digits() {
        // 19 fractional digits cannot be represented at 18 decimals.
        assert!(matches!(
            parse_amount("1.0000000000000000001", ETHER_DECIMALS),
            Err(Error::ParseAmount { .. })
        ));
    }
}
