//! Premium estimator: base price times the multiplier chain

mod breakdown;
mod engine;

pub use breakdown::PremiumBreakdown;
pub use engine::{round_to_step, PremiumEstimator, ROUNDING_STEP};

use crate::quote::{EstimateRequest, EstimateResult};
use crate::rates::RateTable;

/// Estimate a monthly premium using the published rates
pub fn estimate(request: &EstimateRequest) -> EstimateResult {
    PremiumEstimator::new(RateTable::default_pricing()).estimate(request)
}
