//! Amount-in-words conversion
//!
//! Renders a Rupee amount in English words on the South Asian scale
//! (Hundred, Thousand, Lakh, Crore) with a Paisa subunit, as printed on
//! fee receipts.
//!
//! ## Usage
//! ```rust
//! use passport_fee::words::amount_in_words;
//! use rust_decimal::Decimal;
//!
//! let words = amount_in_words(Decimal::new(102550, 2)).unwrap();
//! assert_eq!(words, "One Thousand Twenty Five Rupees and Fifty Paisa Only");
//! ```

use rust_decimal::prelude::*;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error, PartialEq)]
pub enum WordsError {
    #[error("Invalid amount {amount}: {reason}")]
    InvalidAmount { amount: String, reason: &'static str },
}

impl WordsError {
    fn invalid(amount: impl ToString, reason: &'static str) -> Self {
        WordsError::InvalidAmount {
            amount: amount.to_string(),
            reason,
        }
    }
}

// ============================================================================
// Tables
// ============================================================================

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Scale breakpoints, most significant first
const SCALES: [(u64, &str); 3] = [(10_000_000, "Crore"), (100_000, "Lakh"), (1_000, "Thousand")];

/// First whole-rupee value with no scale name (100 Crore, "Arab")
pub const WORDS_LIMIT: u64 = 1_000_000_000;

const ZERO_WORDS: &str = "Zero Rupees Only";

// ============================================================================
// Conversion
// ============================================================================

/// Words for `0 <= n < 1000`. Zero yields an empty string.
///
/// Callers split amounts into groups first; every group is below 1000.
fn words_under_thousand(n: u64) -> String {
    let n = n % 1000;
    match n {
        0 => String::new(),
        1..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => {
            let one = n % 10;
            if one > 0 {
                format!("{} {}", TENS[(n / 10) as usize], ONES[one as usize])
            } else {
                TENS[(n / 10) as usize].to_string()
            }
        }
        _ => {
            let rest = n % 100;
            let hundreds = format!("{} Hundred", ONES[(n / 100) as usize]);
            if rest > 0 {
                format!("{} {}", hundreds, words_under_thousand(rest))
            } else {
                hundreds
            }
        }
    }
}

/// Words for a whole-rupee count below [`WORDS_LIMIT`], without the currency name.
fn whole_words(whole: u64) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut rest = whole;

    for (unit, name) in SCALES {
        let group = rest / unit;
        if group > 0 {
            parts.push(format!("{} {}", words_under_thousand(group), name));
        }
        rest %= unit;
    }

    if rest > 0 {
        parts.push(words_under_thousand(rest));
    }

    parts.join(" ")
}

/// Convert a Rupee amount to words, e.g. `25` → `"Twenty Five Rupees Only"`.
///
/// The amount is rounded to whole paisa (half away from zero) before it is
/// split, so the paisa part is always 0–99.
///
/// # Errors
/// * `InvalidAmount` - negative amount, or 100 Crore and above
pub fn amount_in_words(amount: Decimal) -> Result<String, WordsError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(WordsError::invalid(amount, "must not be negative"));
    }

    if amount.is_zero() {
        return Ok(ZERO_WORDS.to_string());
    }

    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let whole = rounded
        .trunc()
        .to_u64()
        .filter(|w| *w < WORDS_LIMIT)
        .ok_or_else(|| WordsError::invalid(amount, "must be below 100 Crore"))?;
    let paisa = (rounded.fract() * Decimal::ONE_HUNDRED)
        .to_u64()
        .unwrap_or(0);

    if whole == 0 && paisa == 0 {
        return Ok(ZERO_WORDS.to_string());
    }

    let mut result = String::new();

    if whole > 0 {
        result.push_str(&whole_words(whole));
        result.push_str(" Rupees");
    }

    if paisa > 0 {
        if whole > 0 {
            result.push_str(" and ");
        }
        result.push_str(&words_under_thousand(paisa));
        result.push_str(" Paisa");
    }

    result.push_str(" Only");
    Ok(result.trim().to_string())
}

/// Float entry point for callers that already hold an `f64` total.
///
/// # Errors
/// * `InvalidAmount` - NaN, infinite, negative or out of range
pub fn amount_in_words_f64(amount: f64) -> Result<String, WordsError> {
    if !amount.is_finite() {
        return Err(WordsError::invalid(amount, "must be finite"));
    }
    if amount < 0.0 {
        return Err(WordsError::invalid(amount, "must not be negative"));
    }
    let decimal = Decimal::from_f64(amount)
        .ok_or_else(|| WordsError::invalid(amount, "must be below 100 Crore"))?;
    amount_in_words(decimal)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn words(s: &str) -> String {
        amount_in_words(Decimal::from_str(s).unwrap()).unwrap()
    }

    #[test]
    fn test_under_thousand_tables() {
        assert_eq!(words_under_thousand(0), "");
        assert_eq!(words_under_thousand(7), "Seven");
        assert_eq!(words_under_thousand(10), "Ten");
        assert_eq!(words_under_thousand(19), "Nineteen");
        assert_eq!(words_under_thousand(20), "Twenty");
        assert_eq!(words_under_thousand(42), "Forty Two");
        assert_eq!(words_under_thousand(100), "One Hundred");
        assert_eq!(words_under_thousand(115), "One Hundred Fifteen");
        assert_eq!(words_under_thousand(999), "Nine Hundred Ninety Nine");
    }

    #[test]
    fn test_under_thousand_is_never_padded() {
        for n in 1..1000 {
            let w = words_under_thousand(n);
            assert!(!w.is_empty());
            assert_eq!(w, w.trim());
            assert!(!w.contains("  "), "{} -> '{}'", n, w);
        }
    }

    #[test]
    fn test_under_thousand_keeps_low_three_digits() {
        // groups are pre-split; a stray larger value must not index past the tables
        assert_eq!(words_under_thousand(1000), "");
        assert_eq!(words_under_thousand(1005), "Five");
        assert_eq!(words_under_thousand(1999), "Nine Hundred Ninety Nine");
    }

    #[test]
    fn test_zero() {
        assert_eq!(words("0"), "Zero Rupees Only");
        assert_eq!(words("0.00"), "Zero Rupees Only");
        // rounds to zero paisa
        assert_eq!(words("0.004"), "Zero Rupees Only");
        assert_eq!(words("-0"), "Zero Rupees Only");
    }

    #[test]
    fn test_whole_rupees() {
        assert_eq!(words("25"), "Twenty Five Rupees Only");
        assert_eq!(words("100"), "One Hundred Rupees Only");
        assert_eq!(words("1000"), "One Thousand Rupees Only");
        assert_eq!(words("100000"), "One Lakh Rupees Only");
        assert_eq!(words("10000000"), "One Crore Rupees Only");
    }

    #[test]
    fn test_rupees_and_paisa() {
        assert_eq!(
            words("1025.50"),
            "One Thousand Twenty Five Rupees and Fifty Paisa Only"
        );
        assert_eq!(words("1.01"), "One Rupees and One Paisa Only");
        assert_eq!(words("0.75"), "Seventy Five Paisa Only");
    }

    #[test]
    fn test_zero_groups_are_skipped() {
        assert_eq!(words("10000001"), "One Crore One Rupees Only");
        assert_eq!(words("10001000"), "One Crore One Thousand Rupees Only");
        assert_eq!(words("100100"), "One Lakh One Hundred Rupees Only");
        assert_eq!(
            words("12345678"),
            "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight Rupees Only"
        );
    }

    #[test]
    fn test_upper_boundary() {
        assert_eq!(
            words("999999999.99"),
            "Ninety Nine Crore Ninety Nine Lakh Ninety Nine Thousand Nine Hundred \
             Ninety Nine Rupees and Ninety Nine Paisa Only"
        );
        assert!(matches!(
            amount_in_words(Decimal::from(WORDS_LIMIT)),
            Err(WordsError::InvalidAmount { .. })
        ));
        // rounds up into 100 Crore
        assert!(amount_in_words(Decimal::from_str("999999999.995").unwrap()).is_err());
    }

    #[test]
    fn test_paisa_rounding_carries() {
        assert_eq!(words("0.995"), "One Rupees Only");
        assert_eq!(words("24.999"), "Twenty Five Rupees Only");
        assert_eq!(words("10.125"), "Ten Rupees and Thirteen Paisa Only");
    }

    #[test]
    fn test_negative_rejected() {
        let err = amount_in_words(Decimal::from_str("-1").unwrap()).unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn test_f64_entry_point() {
        assert_eq!(
            amount_in_words_f64(1025.5).unwrap(),
            "One Thousand Twenty Five Rupees and Fifty Paisa Only"
        );
        assert_eq!(
            amount_in_words_f64(0.1 + 0.2).unwrap(),
            "Thirty Paisa Only"
        );
        assert!(amount_in_words_f64(f64::NAN).is_err());
        assert!(amount_in_words_f64(f64::INFINITY).is_err());
        assert!(amount_in_words_f64(-0.5).is_err());
        assert!(amount_in_words_f64(1e12).is_err());
    }
}
