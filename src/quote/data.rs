//! Quote request and result structures

use serde::{Deserialize, Serialize};

/// Currency units represented by one coverage unit
pub const COVERAGE_UNIT_SIZE: u64 = 10_000;

/// Insurance product line offered by the brokerage
///
/// Labels that match none of the six product lines are kept as `Other` and
/// priced at the fallback base price rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InsuranceCategory {
    /// Indemnity for actual medical expenses
    MedicalExpense,
    Cancer,
    /// Driver liability and legal cost cover
    Driver,
    Dental,
    WholeLife,
    Pension,
    /// Any label outside the product lineup
    Other(String),
}

impl InsuranceCategory {
    /// The six product lines, in catalogue order
    pub const KNOWN: [InsuranceCategory; 6] = [
        InsuranceCategory::MedicalExpense,
        InsuranceCategory::Cancer,
        InsuranceCategory::Driver,
        InsuranceCategory::Dental,
        InsuranceCategory::WholeLife,
        InsuranceCategory::Pension,
    ];

    /// Parse a category from an English name or a catalogue label
    ///
    /// Never fails: unrecognised labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        let normalized: String = trimmed
            .chars()
            .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        match (trimmed, normalized.as_str()) {
            ("실손의료보험", _) | (_, "medicalexpense") => InsuranceCategory::MedicalExpense,
            ("암보험", _) | (_, "cancer") => InsuranceCategory::Cancer,
            ("운전자보험", _) | (_, "driver") => InsuranceCategory::Driver,
            ("치아보험", _) | (_, "dental") => InsuranceCategory::Dental,
            ("종신보험", _) | (_, "wholelife") => InsuranceCategory::WholeLife,
            ("연금보험", _) | (_, "pension") => InsuranceCategory::Pension,
            _ => InsuranceCategory::Other(trimmed.to_string()),
        }
    }

    /// Catalogue label shown on the result card
    pub fn label(&self) -> &str {
        match self {
            InsuranceCategory::MedicalExpense => "실손의료보험",
            InsuranceCategory::Cancer => "암보험",
            InsuranceCategory::Driver => "운전자보험",
            InsuranceCategory::Dental => "치아보험",
            InsuranceCategory::WholeLife => "종신보험",
            InsuranceCategory::Pension => "연금보험",
            InsuranceCategory::Other(label) => label,
        }
    }

    /// English variant name, used in CSV files and logs
    pub fn code(&self) -> &str {
        match self {
            InsuranceCategory::MedicalExpense => "MedicalExpense",
            InsuranceCategory::Cancer => "Cancer",
            InsuranceCategory::Driver => "Driver",
            InsuranceCategory::Dental => "Dental",
            InsuranceCategory::WholeLife => "WholeLife",
            InsuranceCategory::Pension => "Pension",
            InsuranceCategory::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, InsuranceCategory::Other(_))
    }
}

impl From<String> for InsuranceCategory {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<InsuranceCategory> for String {
    fn from(category: InsuranceCategory) -> Self {
        category.code().to_string()
    }
}

/// Gender of the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse `male`/`female` (any case, `m`/`f` also accepted)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Coverage period bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Term {
    Years10,
    Years20,
    Years30,
    /// Coverage until the insured reaches age 100
    ToAge100,
    /// Any period code outside the four buckets
    Other(String),
}

impl Term {
    /// Parse a period code ("10", "20", "30", "100")
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "10" => Term::Years10,
            "20" => Term::Years20,
            "30" => Term::Years30,
            "100" => Term::ToAge100,
            other => Term::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Term::Years10 => "10",
            Term::Years20 => "20",
            Term::Years30 => "30",
            Term::ToAge100 => "100",
            Term::Other(code) => code,
        }
    }
}

impl From<String> for Term {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<Term> for String {
    fn from(term: Term) -> Self {
        term.code().to_string()
    }
}

/// Age bracket for the age factor, half-open on the upper bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    /// [0, 30)
    Under30,
    /// [30, 40)
    From30To40,
    /// [40, 50)
    From40To50,
    /// [50, 60)
    From50To60,
    /// [60, Inf)
    Over60,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 5] = [
        AgeBracket::Under30,
        AgeBracket::From30To40,
        AgeBracket::From40To50,
        AgeBracket::From50To60,
        AgeBracket::Over60,
    ];

    /// Determine bracket from age in whole years
    pub fn from_age(age: u8) -> Self {
        if age < 30 {
            AgeBracket::Under30
        } else if age < 40 {
            AgeBracket::From30To40
        } else if age < 50 {
            AgeBracket::From40To50
        } else if age < 60 {
            AgeBracket::From50To60
        } else {
            AgeBracket::Over60
        }
    }

    /// Lower bound of the bracket, used as its key in rate files
    pub fn min_age(&self) -> u8 {
        match self {
            AgeBracket::Under30 => 0,
            AgeBracket::From30To40 => 30,
            AgeBracket::From40To50 => 40,
            AgeBracket::From50To60 => 50,
            AgeBracket::Over60 => 60,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBracket::Under30 => "[0, 30)",
            AgeBracket::From30To40 => "[30, 40)",
            AgeBracket::From40To50 => "[40, 50)",
            AgeBracket::From50To60 => "[50, 60)",
            AgeBracket::Over60 => "[60, Inf)",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            AgeBracket::Under30 => 0,
            AgeBracket::From30To40 => 1,
            AgeBracket::From40To50 => 2,
            AgeBracket::From50To60 => 3,
            AgeBracket::Over60 => 4,
        }
    }
}

/// A validated request for a premium estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Product line being quoted
    pub category: InsuranceCategory,

    pub gender: Gender,

    /// Age in whole years, 0 through 100
    pub age: u8,

    /// Coverage in units of 10,000 currency (5000 = 50,000,000)
    pub coverage_unit: u32,

    /// Coverage period bucket
    pub term: Term,

    pub is_smoker: bool,
}

impl EstimateRequest {
    pub fn new(
        category: InsuranceCategory,
        gender: Gender,
        age: u8,
        coverage_unit: u32,
        term: Term,
        is_smoker: bool,
    ) -> Self {
        Self {
            category,
            gender,
            age,
            coverage_unit,
            term,
            is_smoker,
        }
    }

    /// Coverage expressed in currency units
    pub fn coverage_amount(&self) -> u64 {
        self.coverage_unit as u64 * COVERAGE_UNIT_SIZE
    }

    pub fn age_bracket(&self) -> AgeBracket {
        AgeBracket::from_age(self.age)
    }
}

/// Output of a single estimate: the premium plus the inputs used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Monthly premium in currency units, a multiple of 100
    pub monthly_premium: u64,

    /// Echo of the request for display
    #[serde(flatten)]
    pub request: EstimateRequest,
}
