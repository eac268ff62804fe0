//! Factor-by-factor explanation of a single estimate

use serde::Serialize;
use std::fmt;

/// Every intermediate value of the multiplier chain for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PremiumBreakdown {
    pub base_price: f64,

    /// Half-open age bracket the factor came from, e.g. "[40, 50)"
    pub age_bracket: &'static str,
    pub age_factor: f64,
    pub gender_factor: f64,

    /// base_price × age_factor × gender_factor
    pub adjusted_base: f64,

    pub coverage_factor: f64,
    pub term_factor: f64,
    pub smoker_factor: f64,

    /// Full product before rounding
    pub unrounded_premium: f64,

    /// Rounded to the nearest 100
    pub monthly_premium: u64,
}

impl fmt::Display for PremiumBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<18} {:>14.2}", "Base price", self.base_price)?;
        writeln!(f, "{:<18} {:>14.4}", format!("x Age {}", self.age_bracket), self.age_factor)?;
        writeln!(f, "{:<18} {:>14.4}", "x Gender", self.gender_factor)?;
        writeln!(f, "{:<18} {:>14.2}", "= Adjusted base", self.adjusted_base)?;
        writeln!(f, "{:<18} {:>14.4}", "x Coverage", self.coverage_factor)?;
        writeln!(f, "{:<18} {:>14.4}", "x Term", self.term_factor)?;
        writeln!(f, "{:<18} {:>14.4}", "x Smoker", self.smoker_factor)?;
        writeln!(f, "{:<18} {:>14.2}", "= Unrounded", self.unrounded_premium)?;
        write!(f, "{:<18} {:>14}", "Monthly premium", self.monthly_premium)
    }
}
