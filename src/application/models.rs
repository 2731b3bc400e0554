//! Data models for passport and visa fee applications

use chrono::{DateTime, Local, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::validation::ValidationError;

// ============================================================================
// Service Type
// ============================================================================

/// Service the applicant is paying for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    #[default]
    Fresh,
    Renewal,
    Endorsement,
    Visa,
    Citizenship,
    Other,
}

impl ServiceType {
    pub const ALL: [ServiceType; 6] = [
        ServiceType::Fresh,
        ServiceType::Renewal,
        ServiceType::Endorsement,
        ServiceType::Visa,
        ServiceType::Citizenship,
        ServiceType::Other,
    ];

    /// Wire and database name
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Fresh => "fresh",
            ServiceType::Renewal => "renewal",
            ServiceType::Endorsement => "endorsement",
            ServiceType::Visa => "visa",
            ServiceType::Citizenship => "citizenship",
            ServiceType::Other => "other",
        }
    }

    /// Label printed on the form and receipt
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Fresh => "Fresh Passport",
            ServiceType::Renewal => "Renewal",
            ServiceType::Endorsement => "Endorsement",
            ServiceType::Visa => "Visa",
            ServiceType::Citizenship => "Nationalization/Citizenship",
            ServiceType::Other => "Other",
        }
    }
}

impl FromStr for ServiceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ServiceType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownServiceType { got: s.to_string() })
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Raw Form Input
// ============================================================================

/// Fee form exactly as typed by the operator. Every field is text; missing
/// fields deserialize as blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeForm {
    pub case_no: String,
    pub application_date: String,
    pub call_date: String,
    pub name: String,
    pub nic_no: String,
    pub address: String,
    pub service_type: String,
    pub fresh_passport_fee: String,
    pub renewal_fee: String,
    pub endorsement_fee: String,
    pub visa_fee: String,
    pub citizenship_fee: String,
    pub other_fee: String,
}

impl Default for FeeForm {
    /// Blank form: today's date, fresh passport
    fn default() -> Self {
        Self {
            case_no: String::new(),
            application_date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            call_date: String::new(),
            name: String::new(),
            nic_no: String::new(),
            address: String::new(),
            service_type: ServiceType::default().as_str().to_string(),
            fresh_passport_fee: String::new(),
            renewal_fee: String::new(),
            endorsement_fee: String::new(),
            visa_fee: String::new(),
            citizenship_fee: String::new(),
            other_fee: String::new(),
        }
    }
}

// ============================================================================
// Fees
// ============================================================================

/// The six itemized fees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub fresh_passport_fee: Decimal,
    pub renewal_fee: Decimal,
    pub endorsement_fee: Decimal,
    pub visa_fee: Decimal,
    pub citizenship_fee: Decimal,
    pub other_fee: Decimal,
}

impl FeeBreakdown {
    /// Fees with their receipt labels, in form order
    pub fn items(&self) -> [(&'static str, Decimal); 6] {
        [
            ("Fresh Passport Fee", self.fresh_passport_fee),
            ("Renewal Fee", self.renewal_fee),
            ("Endorsement Fee", self.endorsement_fee),
            ("Visa Fee", self.visa_fee),
            ("Citizenship Certificate Fee", self.citizenship_fee),
            ("Other Fee", self.other_fee),
        ]
    }

    /// Sum of the itemized fees, `None` on overflow. Bank charges are not included.
    pub fn total(&self) -> Option<Decimal> {
        self.items()
            .iter()
            .try_fold(Decimal::ZERO, |sum, (_, fee)| sum.checked_add(*fee))
    }
}

/// Totals shown under the fee fields while the form is being filled in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeSummary {
    #[serde(flatten)]
    pub fees: FeeBreakdown,
    pub bank_charges: Decimal,
    pub total_amount: Decimal,
    pub amount_in_words: String,
}

// ============================================================================
// Records
// ============================================================================

/// Validated application, ready to insert
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewApplication {
    pub case_no: String,
    pub application_date: NaiveDate,
    pub call_date: Option<NaiveDate>,
    pub name: String,
    pub nic_no: String,
    pub address: String,
    pub service_type: ServiceType,
    #[serde(flatten)]
    pub fees: FeeBreakdown,
    pub total_amount: Decimal,
    pub amount_in_words: String,
    pub bank_charges: Decimal,
}

/// Stored application row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassportApplication {
    pub id: i64,
    #[serde(flatten)]
    pub application: NewApplication,
    pub created_at: DateTime<Utc>,
}
