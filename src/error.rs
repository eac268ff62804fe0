//! Error types for the adapter layer
//!
//! The pricing core never fails. Everything here belongs to the code around it:
//! reading form controls and loading CSV files.

use thiserror::Error;

/// Rejection raised by the quote form before the estimator is called
///
/// Messages are shown to the end user as plain notifications.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please select an insurance type.")]
    MissingCategory,

    #[error("Please select a gender.")]
    MissingGender,

    #[error("Unknown gender: {0}")]
    UnknownGender(String),

    #[error("Please enter a valid age. (0-100)")]
    InvalidAge,

    #[error("Please select a coverage amount.")]
    MissingCoverage,

    #[error("Please select a coverage period.")]
    MissingTerm,
}

/// Failure while reading rate tables or reading/writing batch quote files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: invalid {field} value '{value}'")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },
}
