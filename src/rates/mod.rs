//! Pricing constants: base prices and the multiplier chain

mod tables;
pub mod loader;

pub use loader::DEFAULT_RATES_PATH;
pub use tables::{AgeFactors, BasePrices, RateTable, TermFactors};
