//! CSV-based rate table loader
//!
//! Loads rate tables from CSV files in data/rates/

use super::RateTable;
use crate::error::LoadError;
use crate::quote::{AgeBracket, InsuranceCategory, Term};
use std::fs::File;
use std::path::Path;

/// Default path to the rates directory
pub const DEFAULT_RATES_PATH: &str = "data/rates";

/// Key used for the fallback row in keyed rate files
const FALLBACK_KEY: &str = "Default";

/// Load base prices from CSV
/// Returns (category, price) pairs; a `Default` row yields `None` for the fallback
///
/// Keys outside the product lineup are rejected so that a misspelt row cannot
/// reprice every unlisted category.
pub fn load_base_prices(path: &Path) -> Result<Vec<(Option<InsuranceCategory>, f64)>, LoadError> {
    let file = File::open(path.join("base_prices.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut prices = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = idx + 1;
        let key = column(&record, 0, row, "Category")?.trim();
        let price = parse_factor(column(&record, 1, row, "BasePrice")?, row, "BasePrice")?;

        let category = if key == FALLBACK_KEY {
            None
        } else {
            let category = InsuranceCategory::from_label(key);
            if !category.is_known() {
                return Err(LoadError::InvalidField {
                    row,
                    field: "Category",
                    value: key.to_string(),
                });
            }
            Some(category)
        };
        prices.push((category, price));
    }

    Ok(prices)
}

/// Load age factors from CSV
/// Rows are keyed by the lower bound of each bracket (0, 30, 40, 50, 60)
pub fn load_age_factors(path: &Path) -> Result<Vec<(AgeBracket, f64)>, LoadError> {
    let file = File::open(path.join("age_factors.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut factors = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = idx + 1;
        let min_age = column(&record, 0, row, "MinAge")?.trim();
        let bracket = min_age
            .parse::<u8>()
            .ok()
            .and_then(|age| AgeBracket::ALL.iter().copied().find(|b| b.min_age() == age))
            .ok_or_else(|| LoadError::InvalidField {
                row,
                field: "MinAge",
                value: min_age.to_string(),
            })?;
        let factor = parse_factor(column(&record, 1, row, "Factor")?, row, "Factor")?;

        log::trace!("Age bracket {} -> {}", bracket.as_str(), factor);
        factors.push((bracket, factor));
    }

    Ok(factors)
}

/// Load term factors from CSV
/// A `Default` row yields `None` for the fallback
pub fn load_term_factors(path: &Path) -> Result<Vec<(Option<Term>, f64)>, LoadError> {
    let file = File::open(path.join("term_factors.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut factors = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = idx + 1;
        let key = column(&record, 0, row, "Term")?.trim();
        let factor = parse_factor(column(&record, 1, row, "Factor")?, row, "Factor")?;

        let term = if key == FALLBACK_KEY {
            None
        } else {
            Some(Term::from_code(key))
        };
        factors.push((term, factor));
    }

    Ok(factors)
}

/// Load scalar factors (female, smoker, reference coverage) from CSV
pub fn load_scalar_factors(path: &Path) -> Result<Vec<(String, f64)>, LoadError> {
    let file = File::open(path.join("scalar_factors.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut factors = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = idx + 1;
        let name = column(&record, 0, row, "Name")?.trim();
        let value = parse_factor(column(&record, 1, row, "Value")?, row, "Value")?;
        factors.push((name.to_string(), value));
    }

    Ok(factors)
}

/// Field `idx` of a record, or an error naming the missing column
fn column<'r>(
    record: &'r csv::StringRecord,
    idx: usize,
    row: usize,
    field: &'static str,
) -> Result<&'r str, LoadError> {
    record.get(idx).ok_or_else(|| LoadError::InvalidField {
        row,
        field,
        value: String::new(),
    })
}

fn parse_factor(raw: &str, row: usize, field: &'static str) -> Result<f64, LoadError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| LoadError::InvalidField {
            row,
            field,
            value: raw.to_string(),
        })
}

impl RateTable {
    /// Load rate tables from CSV files in the default location (data/rates/)
    pub fn from_csv() -> Result<Self, LoadError> {
        Self::from_csv_path(Path::new(DEFAULT_RATES_PATH))
    }

    /// Load rate tables from CSV files in a specific directory
    ///
    /// Starts from the published defaults; each file present overrides the
    /// entries it lists. Missing files leave the defaults in place.
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        let mut rates = Self::default_pricing();

        if path.join("base_prices.csv").exists() {
            for (category, price) in load_base_prices(path)? {
                match category {
                    Some(category) => {
                        rates.base_prices.set(&category, price);
                    }
                    None => rates.base_prices.fallback = price,
                }
            }
        }

        if path.join("age_factors.csv").exists() {
            for (bracket, factor) in load_age_factors(path)? {
                rates.age_factors.set(bracket, factor);
            }
        }

        if path.join("term_factors.csv").exists() {
            for (term, factor) in load_term_factors(path)? {
                match term {
                    Some(term) => rates.term_factors.set(term, factor),
                    None => rates.term_factors.fallback = factor,
                }
            }
        }

        if path.join("scalar_factors.csv").exists() {
            for (name, value) in load_scalar_factors(path)? {
                match name.as_str() {
                    "Female" => rates.female_factor = value,
                    "Smoker" => rates.smoker_factor = value,
                    "ReferenceCoverageUnit" if value > 0.0 => rates.reference_coverage_unit = value,
                    other => log::warn!("Ignoring unknown scalar factor '{}'", other),
                }
            }
        }

        log::debug!("Loaded rate tables from {}", path.display());
        Ok(rates)
    }
}
