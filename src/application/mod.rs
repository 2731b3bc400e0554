//! Passport and visa fee applications
//!
//! Form model, minimal validation, and PostgreSQL storage.

pub mod models;
pub mod repository;
pub mod validation;

// Re-export commonly used types
pub use models::{
    FeeBreakdown, FeeForm, FeeSummary, NewApplication, PassportApplication, ServiceType,
};
pub use repository::ApplicationRepository;
pub use validation::ValidationError;
