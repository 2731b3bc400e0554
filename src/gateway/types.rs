//! API response wrapper, error codes and DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::PassportApplication;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or absent (error)
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// Request / Response DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AmountQuery {
    pub amount: String,
}

#[derive(Debug, Serialize)]
pub struct AmountWordsData {
    pub amount: Decimal,
    pub words: String,
}

#[derive(Debug, Deserialize)]
pub struct CaseNoQuery {
    #[serde(default)]
    pub case_no: String,
}

/// Stored application plus its printable receipt
#[derive(Debug, Serialize)]
pub struct ApplicationData {
    #[serde(flatten)]
    pub application: PassportApplication,
    pub receipt: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub timestamp_ms: u64,
}

// ============================================================================
// Error Codes
// ============================================================================

pub mod error_codes {
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;

    // Resource errors (4xxx)
    pub const NOT_FOUND: i32 = 4001;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
}
