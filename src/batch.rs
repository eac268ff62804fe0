//! Quote runner for pricing many requests against one rate table
//!
//! Loads rate tables once, then prices any number of requests without
//! re-reading CSV files.

use crate::error::LoadError;
use crate::estimator::PremiumEstimator;
use crate::quote::{EstimateRequest, EstimateResult};
use crate::rates::RateTable;
use rayon::prelude::*;
use serde::Serialize;
use std::io;
use std::path::Path;

/// One line of the batch output file
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    #[serde(rename = "Row")]
    row: usize,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Gender")]
    gender: &'a str,
    #[serde(rename = "Age")]
    age: u8,
    #[serde(rename = "CoverageUnit")]
    coverage_unit: u32,
    #[serde(rename = "Term")]
    term: &'a str,
    #[serde(rename = "Smoker")]
    smoker: bool,
    #[serde(rename = "MonthlyPremium")]
    monthly_premium: u64,
}

/// Write priced results as CSV, one row per request in input order
pub fn write_results<W: io::Write>(writer: W, results: &[EstimateResult]) -> Result<(), LoadError> {
    let mut out = csv::Writer::from_writer(writer);

    for (idx, result) in results.iter().enumerate() {
        let r = &result.request;
        out.serialize(OutputRow {
            row: idx + 1,
            category: r.category.code(),
            gender: r.gender.label(),
            age: r.age,
            coverage_unit: r.coverage_unit,
            term: r.term.code(),
            smoker: r.is_smoker,
            monthly_premium: result.monthly_premium,
        })?;
    }

    out.flush()?;
    Ok(())
}

/// Pre-loaded quote runner
///
/// # Example
/// ```ignore
/// let runner = QuoteRunner::from_csv_path(Path::new("data/rates"))?;
/// let results = runner.run_batch(&requests);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuoteRunner {
    estimator: PremiumEstimator,
}

impl QuoteRunner {
    /// Create runner with the published in-memory rates
    pub fn new() -> Self {
        Self::with_rates(RateTable::default_pricing())
    }

    /// Create runner by loading rates from a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        Ok(Self::with_rates(RateTable::from_csv_path(path)?))
    }

    /// Create runner with a pre-built rate table
    pub fn with_rates(rates: RateTable) -> Self {
        Self {
            estimator: PremiumEstimator::new(rates),
        }
    }

    /// Price a single request
    pub fn run(&self, request: &EstimateRequest) -> EstimateResult {
        self.estimator.estimate(request)
    }

    /// Price many requests in parallel; results keep input order
    pub fn run_batch(&self, requests: &[EstimateRequest]) -> Vec<EstimateResult> {
        log::debug!("Pricing {} requests", requests.len());
        requests.par_iter().map(|r| self.estimator.estimate(r)).collect()
    }

    pub fn rates(&self) -> &RateTable {
        self.estimator.rates()
    }
}
