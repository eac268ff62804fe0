//! Premium Estimator - illustrative monthly premiums for the brokerage product lineup
//!
//! This library provides:
//! - A pure premium calculation (base price times age, gender, coverage, term and smoker factors)
//! - Rate tables with CSV overrides
//! - A quote form adapter that validates raw control values
//! - Result card rendering and a parallel batch runner

pub mod error;
pub mod quote;
pub mod rates;
pub mod estimator;
pub mod form;
pub mod display;
pub mod batch;

// Re-export commonly used types
pub use quote::{EstimateRequest, EstimateResult, Gender, InsuranceCategory, Term};
pub use rates::RateTable;
pub use estimator::{estimate, PremiumEstimator, PremiumBreakdown};
pub use form::QuoteForm;
pub use display::{ResultCard, ResultPanel};
pub use batch::QuoteRunner;
