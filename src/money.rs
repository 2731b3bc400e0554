//! Money Handling Module
//!
//! Conversion between the raw strings typed into fee fields and `Decimal`
//! amounts, plus the fixed display format used on the form and receipt.
//!
//! ## Default-to-zero policy
//! A fee field that is blank or does not parse as a number counts as `0`.
//! This is the only place that coercion happens; the words converter never
//! sees unparsed input.
//!
//! ## Usage
//! ```rust
//! use passport_fee::money::{parse_fee_or_zero, format_rupees};
//!
//! let fee = parse_fee_or_zero("1500.5").unwrap();
//! assert_eq!(format_rupees(fee), "Rs. 1500.50");
//! assert!(parse_fee_or_zero("").unwrap().is_zero());
//! ```

use rust_decimal::prelude::*;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Money conversion errors
#[derive(Debug, Error, PartialEq)]
pub enum MoneyError {
    #[error("Amount must not be negative: {0}")]
    InvalidAmount(String),
}

// ============================================================================
// Constants
// ============================================================================

/// Decimal places kept for every Rupee amount
pub const RUPEE_DECIMALS: u32 = 2;

/// Fixed bank charge recorded on every application (Rs. 25.00)
pub const BANK_CHARGES: Decimal = Decimal::from_parts(2500, 0, 0, false, RUPEE_DECIMALS);

// ============================================================================
// Parse: Form field → Decimal
// ============================================================================

/// Parse a fee field, treating blank or unparseable text as zero.
///
/// Values are rounded to whole paisa.
///
/// # Errors
/// * `InvalidAmount` - the field holds a negative number
pub fn parse_fee_or_zero(raw: &str) -> Result<Decimal, MoneyError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let value = match Decimal::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!("Fee field '{}' is not a number ({}), counted as 0", raw, e);
            return Ok(Decimal::ZERO);
        }
    };

    if value.is_sign_negative() && !value.is_zero() {
        return Err(MoneyError::InvalidAmount(raw.to_string()));
    }

    Ok(value.round_dp_with_strategy(RUPEE_DECIMALS, RoundingStrategy::MidpointAwayFromZero))
}

// ============================================================================
// Format: Decimal → Display
// ============================================================================

/// Format an amount with exactly two decimals, e.g. `1025.5` → `"1025.50"`
pub fn format_amount(value: Decimal) -> String {
    format!("{:.prec$}", value, prec = RUPEE_DECIMALS as usize)
}

/// Format an amount for the form and receipt, e.g. `"Rs. 25.00"`
pub fn format_rupees(value: Decimal) -> String {
    format!("Rs. {}", format_amount(value))
}

// ============================================================================
// Unit Tests
// ============================================================================
