//! Load batches of quote requests from CSV

use super::{EstimateRequest, Gender, InsuranceCategory, Term};
use crate::error::LoadError;
use csv::Reader;
use std::path::Path;

/// Default location of the sample quote batch
pub const DEFAULT_QUOTES_PATH: &str = "data/sample_quotes.csv";

/// Raw CSV row matching the quote batch columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Age")]
    age: String,
    #[serde(rename = "CoverageUnit")]
    coverage_unit: String,
    #[serde(rename = "Term")]
    term: String,
    #[serde(rename = "Smoker")]
    smoker: String,
}

impl CsvRow {
    /// Convert to a request; `row` is 1-based and excludes the header
    fn to_request(self, row: usize) -> Result<EstimateRequest, LoadError> {
        let invalid = |field: &'static str, value: &str| LoadError::InvalidField {
            row,
            field,
            value: value.to_string(),
        };

        let gender = Gender::from_code(&self.gender).ok_or_else(|| invalid("Gender", &self.gender))?;

        let age: u8 = self
            .age
            .trim()
            .parse()
            .ok()
            .filter(|age| *age <= 100)
            .ok_or_else(|| invalid("Age", &self.age))?;

        let coverage_unit: u32 = self
            .coverage_unit
            .trim()
            .parse()
            .map_err(|_| invalid("CoverageUnit", &self.coverage_unit))?;

        let is_smoker = match self.smoker.trim().to_ascii_lowercase().as_str() {
            "true" | "y" | "yes" | "1" => true,
            "false" | "n" | "no" | "0" | "" => false,
            _ => return Err(invalid("Smoker", &self.smoker)),
        };

        Ok(EstimateRequest {
            category: InsuranceCategory::from_label(&self.category),
            gender,
            age,
            coverage_unit,
            term: Term::from_code(&self.term),
            is_smoker,
        })
    }
}

/// Load all quote requests from a CSV file
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<EstimateRequest>, LoadError> {
    let reader = Reader::from_path(path)?;
    collect_requests(reader)
}

/// Load quote requests from any reader (e.g., string buffer, stdin)
pub fn load_requests_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<EstimateRequest>, LoadError> {
    collect_requests(Reader::from_reader(reader))
}

/// Load the sample quote batch from its default location
pub fn load_sample_requests() -> Result<Vec<EstimateRequest>, LoadError> {
    load_requests(DEFAULT_QUOTES_PATH)
}

fn collect_requests<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<EstimateRequest>, LoadError> {
    let mut requests = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        requests.push(row.to_request(idx + 1)?);
    }

    log::debug!("Loaded {} quote requests", requests.len());
    Ok(requests)
}
