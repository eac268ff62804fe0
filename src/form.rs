//! Quote form adapter
//!
//! Holds the raw values of the calculator's input controls and turns them into
//! an [`EstimateRequest`], rejecting incomplete or out-of-range input before
//! the estimator ever sees it.

use crate::error::FormError;
use crate::quote::{EstimateRequest, Gender, InsuranceCategory, Term};
use serde::{Deserialize, Serialize};

/// Oldest age the form accepts
pub const MAX_AGE: i64 = 100;

/// Raw control values, exactly as entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteForm {
    pub category: String,
    pub gender: String,
    pub age: String,
    /// Selected coverage, in units of 10,000 currency
    pub coverage: String,
    pub term: String,
    pub smoker: bool,
}

impl QuoteForm {
    /// Form opened from a product card, with the category preselected
    pub fn prefilled(category: &InsuranceCategory) -> Self {
        Self {
            category: category.label().to_string(),
            ..Self::default()
        }
    }

    /// Validate controls in display order and build a request
    pub fn validate(&self) -> Result<EstimateRequest, FormError> {
        let category = self.category.trim();
        if category.is_empty() {
            return Err(FormError::MissingCategory);
        }

        let gender = self.gender.trim();
        if gender.is_empty() {
            return Err(FormError::MissingGender);
        }
        let gender = Gender::from_code(gender).ok_or_else(|| FormError::UnknownGender(gender.to_string()))?;

        let age = self
            .age
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|age| (0..=MAX_AGE).contains(age))
            .ok_or(FormError::InvalidAge)?;

        let coverage_unit = self
            .coverage
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|unit| *unit > 0)
            .ok_or(FormError::MissingCoverage)?;

        let term = self.term.trim();
        if term.is_empty() {
            return Err(FormError::MissingTerm);
        }

        Ok(EstimateRequest {
            category: InsuranceCategory::from_label(category),
            gender,
            // range checked above
            age: age as u8,
            coverage_unit,
            term: Term::from_code(term),
            is_smoker: self.smoker,
        })
    }

    /// Clear every control
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Clamp a typed age into the accepted range
pub fn clamp_age_input(age: i64) -> i64 {
    age.clamp(0, MAX_AGE)
}
