//! Passport & Visa Fee Collection
//!
//! Counter-side fee form for passport and visa payments: sums the itemized
//! fees, prints the total in words, and stores one row per application.
//!
//! # Modules
//!
//! - [`words`] - Rupee amount to English words (Hundred/Thousand/Lakh/Crore + Paisa)
//! - [`money`] - Fee-field parsing (blank → 0) and amount formatting
//! - [`application`] - Form model, validation, PostgreSQL repository
//! - [`receipt`] - Printable plain-text receipt
//! - [`db`] - Connection pool lifecycle
//! - [`config`] - YAML configuration
//! - [`logging`] - Tracing subscriber setup
//! - [`gateway`] - HTTP API

pub mod words;

pub mod application;
pub mod money;
pub mod receipt;

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use application::{FeeForm, NewApplication, PassportApplication, ServiceType};
pub use words::{WordsError, amount_in_words, amount_in_words_f64};
