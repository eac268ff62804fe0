//! Quote request/result structures and batch loading

mod data;
pub mod loader;

pub use data::{
    AgeBracket, EstimateRequest, EstimateResult, Gender, InsuranceCategory, Term, COVERAGE_UNIT_SIZE,
};
pub use loader::{load_requests, load_requests_from_reader, load_sample_requests};
