//! Minimal validation of the fee form
//!
//! Required text fields must be non-blank, dates must be `YYYY-MM-DD`, and
//! the fee total must be positive and within what the words converter can
//! print. Fee fields themselves follow the default-to-zero policy in
//! [`crate::money::parse_fee_or_zero`].

use chrono::NaiveDate;

use super::models::{FeeBreakdown, FeeForm, FeeSummary, NewApplication, ServiceType};
use crate::money::{self, BANK_CHARGES, MoneyError};
use crate::words::{self, WordsError};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Validation Errors
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid date for {field}: '{value}' (expected: YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("Unknown service type: '{got}'")]
    UnknownServiceType { got: String },

    #[error("Invalid {field}: {source}")]
    InvalidFee {
        field: &'static str,
        #[source]
        source: MoneyError,
    },

    #[error("Total amount must be greater than zero")]
    ZeroTotal,

    #[error("Total amount is too large")]
    TotalOverflow,

    #[error(transparent)]
    TotalOutOfRange(#[from] WordsError),
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(value.to_string())
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

fn fee(field: &'static str, raw: &str) -> Result<rust_decimal::Decimal, ValidationError> {
    money::parse_fee_or_zero(raw).map_err(|source| ValidationError::InvalidFee { field, source })
}

impl FeeForm {
    /// Parse the six fee fields (blank or unparseable → 0)
    pub fn fees(&self) -> Result<FeeBreakdown, ValidationError> {
        Ok(FeeBreakdown {
            fresh_passport_fee: fee("fresh_passport_fee", &self.fresh_passport_fee)?,
            renewal_fee: fee("renewal_fee", &self.renewal_fee)?,
            endorsement_fee: fee("endorsement_fee", &self.endorsement_fee)?,
            visa_fee: fee("visa_fee", &self.visa_fee)?,
            citizenship_fee: fee("citizenship_fee", &self.citizenship_fee)?,
            other_fee: fee("other_fee", &self.other_fee)?,
        })
    }

    /// Running totals for display. A zero total is allowed here.
    pub fn summary(&self) -> Result<FeeSummary, ValidationError> {
        let fees = self.fees()?;
        let total_amount = fees.total().ok_or(ValidationError::TotalOverflow)?;
        let amount_in_words = words::amount_in_words(total_amount)?;
        Ok(FeeSummary {
            fees,
            bank_charges: BANK_CHARGES,
            total_amount,
            amount_in_words,
        })
    }

    /// Validate the whole form into an insertable record
    pub fn validate(self) -> Result<NewApplication, ValidationError> {
        let case_no = required("case_no", &self.case_no)?;
        let application_date = parse_date(
            "application_date",
            &required("application_date", &self.application_date)?,
        )?;
        let call_date = match self.call_date.trim() {
            "" => None,
            value => Some(parse_date("call_date", value)?),
        };
        let name = required("name", &self.name)?;
        let nic_no = required("nic_no", &self.nic_no)?;
        let address = required("address", &self.address)?;
        let service_type: ServiceType = required("service_type", &self.service_type)?.parse()?;

        let summary = self.summary()?;
        if summary.total_amount.is_zero() {
            return Err(ValidationError::ZeroTotal);
        }

        Ok(NewApplication {
            case_no,
            application_date,
            call_date,
            name,
            nic_no,
            address,
            service_type,
            fees: summary.fees,
            total_amount: summary.total_amount,
            amount_in_words: summary.amount_in_words,
            bank_charges: summary.bank_charges,
        })
    }
}
