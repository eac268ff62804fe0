//! Core premium calculation

use super::breakdown::PremiumBreakdown;
use crate::quote::{EstimateRequest, EstimateResult};
use crate::rates::RateTable;

/// Premiums are quoted in steps of this many currency units
pub const ROUNDING_STEP: f64 = 100.0;

/// Round a non-negative amount to the nearest step, halves going up
///
/// Applied exactly once, to the full product of the multiplier chain.
pub fn round_to_step(amount: f64) -> u64 {
    let steps = (amount / ROUNDING_STEP + 0.5).floor();
    // `as` saturates, so negative or NaN inputs land on zero
    (steps * ROUNDING_STEP) as u64
}

/// Prices requests against a fixed rate table
#[derive(Debug, Clone, Default)]
pub struct PremiumEstimator {
    rates: RateTable,
}

impl PremiumEstimator {
    /// Create an estimator over the given rate table
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Estimate the monthly premium for a validated request
    pub fn estimate(&self, request: &EstimateRequest) -> EstimateResult {
        let breakdown = self.breakdown(request);

        EstimateResult {
            monthly_premium: breakdown.monthly_premium,
            request: request.clone(),
        }
    }

    /// Run the multiplier chain and keep every intermediate value
    pub fn breakdown(&self, request: &EstimateRequest) -> PremiumBreakdown {
        let base_price = self.rates.base_prices.get(&request.category);
        let age_bracket = request.age_bracket();
        let age_factor = self.rates.age_factors.for_bracket(age_bracket);
        let gender_factor = self.rates.gender_factor(request.gender);
        let adjusted_base = base_price * age_factor * gender_factor;

        let coverage_factor = self.rates.coverage_factor(request.coverage_unit);
        let term_factor = self.rates.term_factors.get(&request.term);
        let smoker_factor = self.rates.smoker_factor(request.is_smoker);

        let unrounded_premium = adjusted_base * coverage_factor * term_factor * smoker_factor;
        let monthly_premium = round_to_step(unrounded_premium);

        log::trace!(
            "{} age={} coverage={} term={} smoker={} -> {:.4} -> {}",
            request.category.code(),
            request.age,
            request.coverage_unit,
            request.term.code(),
            request.is_smoker,
            unrounded_premium,
            monthly_premium,
        );

        PremiumBreakdown {
            base_price,
            age_bracket: age_bracket.as_str(),
            age_factor,
            gender_factor,
            adjusted_base,
            coverage_factor,
            term_factor,
            smoker_factor,
            unrounded_premium,
            monthly_premium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::{Gender, InsuranceCategory, Term};
    use approx::assert_relative_eq;

    fn request(
        category: InsuranceCategory,
        gender: Gender,
        age: u8,
        coverage_unit: u32,
        term: Term,
        is_smoker: bool,
    ) -> EstimateRequest {
        EstimateRequest::new(category, gender, age, coverage_unit, term, is_smoker)
    }

    fn premium(req: &EstimateRequest) -> u64 {
        PremiumEstimator::default().estimate(req).monthly_premium
    }

    #[test]
    fn test_reference_scenarios() {
        let cases = [
            (request(InsuranceCategory::MedicalExpense, Gender::Male, 35, 5000, Term::Years20, false), 25_000),
            (request(InsuranceCategory::Cancer, Gender::Female, 45, 5000, Term::Years20, false), 43_200),
            (request(InsuranceCategory::Driver, Gender::Male, 25, 10_000, Term::Years10, true), 30_000),
            (
                request(InsuranceCategory::Other("UnknownType".into()), Gender::Male, 65, 5000, Term::ToAge100, false),
                60_000,
            ),
            (request(InsuranceCategory::Pension, Gender::Female, 20, 5000, Term::Years30, false), 91_200),
        ];

        for (req, expected) in cases.iter() {
            assert_eq!(premium(req), *expected, "request {:?}", req);
        }
    }

    #[test]
    fn test_breakdown_intermediates() {
        let estimator = PremiumEstimator::default();
        let bd = estimator.breakdown(&request(
            InsuranceCategory::Driver,
            Gender::Male,
            25,
            10_000,
            Term::Years10,
            true,
        ));

        assert_eq!(bd.base_price, 18_000.0);
        assert_eq!(bd.age_bracket, "[0, 30)");
        assert_eq!(bd.age_factor, 0.8);
        assert_relative_eq!(bd.adjusted_base, 14_400.0, epsilon = 1e-9);
        assert_relative_eq!(bd.coverage_factor, 2.0);
        assert_relative_eq!(bd.unrounded_premium, 29_952.0, epsilon = 1e-6);
        assert_eq!(bd.monthly_premium, 30_000);
    }

    #[test]
    fn test_cancer_female_rounds_down() {
        let bd = PremiumEstimator::default().breakdown(&request(
            InsuranceCategory::Cancer,
            Gender::Female,
            45,
            5000,
            Term::Years20,
            false,
        ));
        assert_eq!(bd.age_bracket, "[40, 50)");
        assert_relative_eq!(bd.adjusted_base, 43_225.0, epsilon = 1e-6);
        assert_eq!(bd.monthly_premium, 43_200);
    }

    #[test]
    fn test_round_to_step() {
        assert_eq!(round_to_step(0.0), 0);
        assert_eq!(round_to_step(49.99), 0);
        assert_eq!(round_to_step(50.0), 100);
        assert_eq!(round_to_step(149.0), 100);
        assert_eq!(round_to_step(150.0), 200);
        assert_eq!(round_to_step(29_952.0), 30_000);
        assert_eq!(round_to_step(-10.0), 0);
    }

    #[test]
    fn test_age_bracket_edges_in_premium() {
        let at = |age: u8| premium(&request(InsuranceCategory::Dental, Gender::Male, age, 5000, Term::Years20, false));

        assert_eq!(at(29), 17_600); // 22000 x 0.8
        assert_eq!(at(30), 22_000);
        assert_eq!(at(39), 22_000);
        assert_eq!(at(40), 28_600); // x 1.3
        assert_eq!(at(49), 28_600);
        assert_eq!(at(50), 35_200); // x 1.6
        assert_eq!(at(59), 35_200);
        assert_eq!(at(60), 44_000); // x 2.0
        assert_eq!(at(100), 44_000);
    }

    #[test]
    fn test_unknown_category_uses_fallback_price() {
        let mut rates = RateTable::default_pricing();
        rates.base_prices.dental = 20_000.0;
        let estimator = PremiumEstimator::new(rates);

        for age in [0u8, 30, 45, 55, 99] {
            for term in [Term::Years10, Term::ToAge100, Term::Other("7".into())] {
                let known = request(InsuranceCategory::Dental, Gender::Female, age, 3000, term.clone(), true);
                let unknown = EstimateRequest {
                    category: InsuranceCategory::Other("Travel".into()),
                    ..known.clone()
                };
                assert_eq!(
                    estimator.estimate(&known).monthly_premium,
                    estimator.estimate(&unknown).monthly_premium
                );
            }
        }
    }

    #[test]
    fn test_unlisted_term_is_neutral() {
        let twenty = premium(&request(InsuranceCategory::Cancer, Gender::Male, 33, 5000, Term::Years20, false));
        let odd = premium(&request(InsuranceCategory::Cancer, Gender::Male, 33, 5000, Term::Other("15".into()), false));
        assert_eq!(twenty, odd);
    }

    #[test]
    fn test_premium_properties_over_domain() {
        let estimator = PremiumEstimator::default();
        let categories: Vec<InsuranceCategory> = InsuranceCategory::KNOWN
            .iter()
            .cloned()
            .chain(std::iter::once(InsuranceCategory::Other("Pet".into())))
            .collect();
        let terms = [Term::Years10, Term::Years20, Term::Years30, Term::ToAge100];
        let coverages = [0u32, 1000, 3000, 5000, 10_000, 20_000];

        for category in &categories {
            for gender in [Gender::Male, Gender::Female] {
                for age in (0..=100u8).step_by(7) {
                    for term in &terms {
                        let mut previous = 0;
                        for &coverage in &coverages {
                            let base = request(category.clone(), gender, age, coverage, term.clone(), false);
                            let smoker = EstimateRequest { is_smoker: true, ..base.clone() };

                            let result = estimator.estimate(&base);
                            assert_eq!(result.monthly_premium % 100, 0);
                            assert_eq!(result.request, base);
                            assert_eq!(estimator.estimate(&base), result);

                            // monotone in coverage
                            assert!(result.monthly_premium >= previous);
                            previous = result.monthly_premium;

                            assert!(estimator.estimate(&smoker).monthly_premium >= result.monthly_premium);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_coverage_scales_without_cap() {
        let small = premium(&request(InsuranceCategory::WholeLife, Gender::Male, 35, 500, Term::Years20, false));
        let huge = premium(&request(InsuranceCategory::WholeLife, Gender::Male, 35, 500_000, Term::Years20, false));
        assert_eq!(small, 4_500);
        assert_eq!(huge, 4_500_000);
    }
}
