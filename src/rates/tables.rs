//! Base prices and multiplier tables

use crate::quote::{AgeBracket, Gender, InsuranceCategory, Term};
use std::collections::HashMap;

/// Monthly base price by product line
#[derive(Debug, Clone, PartialEq)]
pub struct BasePrices {
    pub medical_expense: f64,
    pub cancer: f64,
    pub driver: f64,
    pub dental: f64,
    pub whole_life: f64,
    pub pension: f64,
    /// Applied to any category outside the lineup
    pub fallback: f64,
}

impl Default for BasePrices {
    fn default() -> Self {
        Self {
            medical_expense: 25_000.0,
            cancer: 35_000.0,
            driver: 18_000.0,
            dental: 22_000.0,
            whole_life: 45_000.0,
            pension: 100_000.0,
            fallback: 20_000.0,
        }
    }
}

impl BasePrices {
    /// Base price for a category; `Other` takes the fallback
    pub fn get(&self, category: &InsuranceCategory) -> f64 {
        match category {
            InsuranceCategory::MedicalExpense => self.medical_expense,
            InsuranceCategory::Cancer => self.cancer,
            InsuranceCategory::Driver => self.driver,
            InsuranceCategory::Dental => self.dental,
            InsuranceCategory::WholeLife => self.whole_life,
            InsuranceCategory::Pension => self.pension,
            InsuranceCategory::Other(_) => self.fallback,
        }
    }

    /// Overwrite the price of one product line
    ///
    /// Returns false for `Other`, which has no slot of its own; the fallback
    /// is only changed through the `fallback` field.
    pub fn set(&mut self, category: &InsuranceCategory, price: f64) -> bool {
        let slot = match category {
            InsuranceCategory::MedicalExpense => &mut self.medical_expense,
            InsuranceCategory::Cancer => &mut self.cancer,
            InsuranceCategory::Driver => &mut self.driver,
            InsuranceCategory::Dental => &mut self.dental,
            InsuranceCategory::WholeLife => &mut self.whole_life,
            InsuranceCategory::Pension => &mut self.pension,
            InsuranceCategory::Other(_) => return false,
        };
        *slot = price;
        true
    }
}

/// Age factor per bracket
#[derive(Debug, Clone, PartialEq)]
pub struct AgeFactors {
    factors: [f64; 5],
}

impl Default for AgeFactors {
    fn default() -> Self {
        Self {
            factors: [
                0.8, // [0, 30)
                1.0, // [30, 40)
                1.3, // [40, 50)
                1.6, // [50, 60)
                2.0, // [60, Inf)
            ],
        }
    }
}

impl AgeFactors {
    pub fn get(&self, age: u8) -> f64 {
        self.for_bracket(AgeBracket::from_age(age))
    }

    pub fn for_bracket(&self, bracket: AgeBracket) -> f64 {
        self.factors[bracket.index()]
    }

    pub fn set(&mut self, bracket: AgeBracket, factor: f64) {
        self.factors[bracket.index()] = factor;
    }
}

/// Coverage period factors
#[derive(Debug, Clone, PartialEq)]
pub struct TermFactors {
    by_term: HashMap<Term, f64>,
    /// Applied to period codes missing from the table
    pub fallback: f64,
}

impl Default for TermFactors {
    fn default() -> Self {
        let mut by_term = HashMap::new();
        by_term.insert(Term::Years10, 0.8);
        by_term.insert(Term::Years20, 1.0);
        by_term.insert(Term::Years30, 1.2);
        by_term.insert(Term::ToAge100, 1.5);

        Self {
            by_term,
            fallback: 1.0,
        }
    }
}

impl TermFactors {
    pub fn get(&self, term: &Term) -> f64 {
        self.by_term.get(term).copied().unwrap_or(self.fallback)
    }

    pub fn set(&mut self, term: Term, factor: f64) {
        self.by_term.insert(term, factor);
    }
}

/// Complete set of pricing constants used by the estimator
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    pub base_prices: BasePrices,
    pub age_factors: AgeFactors,

    /// Discount applied to female applicants
    pub female_factor: f64,

    /// Coverage unit priced at exactly the base premium
    pub reference_coverage_unit: f64,

    pub term_factors: TermFactors,

    /// Loading applied to smokers
    pub smoker_factor: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self::default_pricing()
    }
}

impl RateTable {
    /// Brokerage's published illustrative rates
    pub fn default_pricing() -> Self {
        Self {
            base_prices: BasePrices::default(),
            age_factors: AgeFactors::default(),
            female_factor: 0.95,
            reference_coverage_unit: 5000.0,
            term_factors: TermFactors::default(),
            smoker_factor: 1.3,
        }
    }

    pub fn gender_factor(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Female => self.female_factor,
            Gender::Male => 1.0,
        }
    }

    /// Linear in the coverage unit, with no floor or cap
    pub fn coverage_factor(&self, coverage_unit: u32) -> f64 {
        coverage_unit as f64 / self.reference_coverage_unit
    }

    pub fn smoker_factor(&self, is_smoker: bool) -> f64 {
        if is_smoker {
            self.smoker_factor
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_base_prices() {
        let prices = BasePrices::default();

        assert_eq!(prices.get(&InsuranceCategory::MedicalExpense), 25_000.0);
        assert_eq!(prices.get(&InsuranceCategory::Cancer), 35_000.0);
        assert_eq!(prices.get(&InsuranceCategory::Driver), 18_000.0);
        assert_eq!(prices.get(&InsuranceCategory::Dental), 22_000.0);
        assert_eq!(prices.get(&InsuranceCategory::WholeLife), 45_000.0);
        assert_eq!(prices.get(&InsuranceCategory::Pension), 100_000.0);
        assert_eq!(prices.get(&InsuranceCategory::Other("Travel".into())), 20_000.0);
        assert_eq!(prices.get(&InsuranceCategory::Other(String::new())), 20_000.0);
    }

    #[test]
    fn test_set_ignores_unlisted_category() {
        let mut prices = BasePrices::default();

        assert!(prices.set(&InsuranceCategory::Dental, 30_000.0));
        assert_eq!(prices.dental, 30_000.0);

        assert!(!prices.set(&InsuranceCategory::Other("Travle".into()), 90_000.0));
        assert_eq!(prices.fallback, 20_000.0);
        assert_eq!(prices.get(&InsuranceCategory::Other("UnknownType".into())), 20_000.0);
    }

    #[test]
    fn test_age_factors() {
        let af = AgeFactors::default();

        assert_eq!(af.get(29), 0.8);
        assert_eq!(af.get(30), 1.0);
        assert_eq!(af.get(39), 1.0);
        assert_eq!(af.get(40), 1.3);
        assert_eq!(af.get(50), 1.6);
        assert_eq!(af.get(59), 1.6);
        assert_eq!(af.get(60), 2.0);
        assert_eq!(af.get(100), 2.0);
    }

    #[test]
    fn test_term_factors() {
        let tf = TermFactors::default();

        assert_eq!(tf.get(&Term::Years10), 0.8);
        assert_eq!(tf.get(&Term::Years20), 1.0);
        assert_eq!(tf.get(&Term::Years30), 1.2);
        assert_eq!(tf.get(&Term::ToAge100), 1.5);
        assert_eq!(tf.get(&Term::Other("15".into())), 1.0);
    }

    #[test]
    fn test_scalar_factors() {
        let rates = RateTable::default_pricing();

        assert_eq!(rates.gender_factor(Gender::Male), 1.0);
        assert_eq!(rates.gender_factor(Gender::Female), 0.95);
        assert_eq!(rates.smoker_factor(false), 1.0);
        assert_eq!(rates.smoker_factor(true), 1.3);
        assert_relative_eq!(rates.coverage_factor(5000), 1.0);
        assert_relative_eq!(rates.coverage_factor(10_000), 2.0);
        assert_relative_eq!(rates.coverage_factor(1000), 0.2);
        assert_relative_eq!(rates.coverage_factor(0), 0.0);
    }
}
