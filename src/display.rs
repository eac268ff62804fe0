//! Result card rendering for the calculator panel

use crate::quote::{EstimateResult, Term};
use serde::Serialize;
use std::fmt;

/// Currency label appended to every amount
pub const CURRENCY_LABEL: &str = "KRW";

/// Format an integer with comma thousands separators (1234567 -> "1,234,567")
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Text shown for a coverage period
pub fn term_text(term: &Term) -> String {
    match term {
        Term::ToAge100 => "to age 100".to_string(),
        other => format!("{} years", other.code()),
    }
}

/// Display-ready rendering of one estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultCard {
    pub category: String,
    pub monthly_premium: String,
    pub gender_age: String,
    pub coverage: String,
    pub term: String,
    pub smoker: String,
}

impl ResultCard {
    pub fn from_result(result: &EstimateResult) -> Self {
        let request = &result.request;

        Self {
            category: request.category.label().to_string(),
            monthly_premium: format!("{} {}", format_thousands(result.monthly_premium), CURRENCY_LABEL),
            gender_age: format!("{} / age {}", request.gender.label(), request.age),
            coverage: format!("{} {}", format_thousands(request.coverage_amount()), CURRENCY_LABEL),
            term: term_text(&request.term),
            smoker: if request.is_smoker { "Smoker" } else { "Non-smoker" }.to_string(),
        }
    }
}

impl fmt::Display for ResultCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Estimate complete: {}", self.category)?;
        writeln!(f)?;
        writeln!(f, "  Monthly premium   {}", self.monthly_premium)?;
        writeln!(f)?;
        writeln!(f, "  Insurance type    {}", self.category)?;
        writeln!(f, "  Gender / age      {}", self.gender_age)?;
        writeln!(f, "  Coverage amount   {}", self.coverage)?;
        writeln!(f, "  Coverage period   {}", self.term)?;
        write!(f, "  Smoking status    {}", self.smoker)
    }
}

/// Placeholder shown before any estimate and after a reset
pub const EMPTY_PANEL_TEXT: &str = "Enter your details and press Calculate";

/// Notice shown by the apply action
pub const APPLY_NOTICE: &str = "Redirecting to the application page.\n(The live service links to the sign-up page.)";

/// State of the results panel next to the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultPanel {
    #[default]
    Empty,
    Quoted(ResultCard),
}

impl ResultPanel {
    /// Show a fresh estimate
    pub fn show(&mut self, result: &EstimateResult) {
        *self = ResultPanel::Quoted(ResultCard::from_result(result));
    }

    /// Placeholder action for starting an application; changes nothing
    pub fn apply(&self) -> &'static str {
        APPLY_NOTICE
    }

    /// Return to the empty placeholder
    pub fn reset(&mut self) {
        *self = ResultPanel::Empty;
    }
}

impl fmt::Display for ResultPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultPanel::Empty => f.write_str(EMPTY_PANEL_TEXT),
            ResultPanel::Quoted(card) => write!(f, "{}", card),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::estimate;
    use crate::quote::{EstimateRequest, Gender, InsuranceCategory};

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(43_200), "43,200");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(50_000_000), "50,000,000");
    }

    #[test]
    fn test_result_card() {
        let result = estimate(&EstimateRequest::new(
            InsuranceCategory::WholeLife,
            Gender::Female,
            52,
            10_000,
            Term::ToAge100,
            true,
        ));
        let card = ResultCard::from_result(&result);

        assert_eq!(card.category, "종신보험");
        assert_eq!(card.gender_age, "Female / age 52");
        assert_eq!(card.coverage, "100,000,000 KRW");
        assert_eq!(card.term, "to age 100");
        assert_eq!(card.smoker, "Smoker");
        assert!(card.monthly_premium.ends_with(" KRW"));
        assert!(card.to_string().contains("Monthly premium"));
    }

    #[test]
    fn test_term_text() {
        assert_eq!(term_text(&Term::Years10), "10 years");
        assert_eq!(term_text(&Term::Years30), "30 years");
        assert_eq!(term_text(&Term::ToAge100), "to age 100");
    }

    #[test]
    fn test_panel_lifecycle() {
        let mut panel = ResultPanel::default();
        assert_eq!(panel.to_string(), EMPTY_PANEL_TEXT);

        let result = estimate(&EstimateRequest::new(
            InsuranceCategory::MedicalExpense,
            Gender::Male,
            35,
            5000,
            Term::Years20,
            false,
        ));
        panel.show(&result);
        match &panel {
            ResultPanel::Quoted(card) => assert_eq!(card.monthly_premium, "25,000 KRW"),
            ResultPanel::Empty => panic!("panel should hold a quote"),
        }

        let before = panel.clone();
        assert_eq!(panel.apply(), APPLY_NOTICE);
        assert_eq!(panel, before);

        panel.reset();
        assert_eq!(panel, ResultPanel::Empty);
    }
}
