//! Core domain types: bureaus, scores, loan types, rating bands.

pub mod errors;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use errors::{Error, Result};

/// Lower bound of the documented Indian bureau scoring range.
pub const SCORE_MIN: f64 = 300.0;

/// Upper bound of the documented Indian bureau scoring range.
pub const SCORE_MAX: f64 = 900.0;

/// A credit bureau reporting scores for Indian borrowers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bureau {
    Cibil,
    Crif,
    Equifax,
    Experian,
}

impl Bureau {
    /// All bureaus in canonical order (CIBIL, CRIF, Equifax, Experian).
    pub const ALL: [Bureau; 4] = [
        Bureau::Cibil,
        Bureau::Crif,
        Bureau::Equifax,
        Bureau::Experian,
    ];

    /// Branded display name.
    pub fn name(&self) -> &'static str {
        match self {
            Bureau::Cibil => "CIBIL",
            Bureau::Crif => "CRIF Highmark",
            Bureau::Equifax => "Equifax",
            Bureau::Experian => "Experian",
        }
    }
}

impl fmt::Display for Bureau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One score per bureau, as fetched by the caller.
///
/// Scores are expected to lie in [`SCORE_MIN`, `SCORE_MAX`] but this is a
/// caller invariant: out-of-range values compute through unchanged. Clamping
/// here would silently mask bad upstream data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BureauScores {
    pub cibil: f64,
    pub crif: f64,
    pub equifax: f64,
    pub experian: f64,
}

impl BureauScores {
    pub fn new(cibil: f64, crif: f64, equifax: f64, experian: f64) -> Self {
        Self {
            cibil,
            crif,
            equifax,
            experian,
        }
    }

    /// Score reported by a single bureau.
    pub fn get(&self, bureau: Bureau) -> f64 {
        match bureau {
            Bureau::Cibil => self.cibil,
            Bureau::Crif => self.crif,
            Bureau::Equifax => self.equifax,
            Bureau::Experian => self.experian,
        }
    }

    /// True when every score lies in the documented bureau range.
    pub fn in_documented_range(&self) -> bool {
        Bureau::ALL
            .iter()
            .all(|b| (SCORE_MIN..=SCORE_MAX).contains(&self.get(*b)))
    }
}

/// Loan product category. Selects which weight profile applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanType {
    Personal,
    Business,
    Home,
    Car,
    Education,
}

impl LoanType {
    /// All supported loan types.
    pub const ALL: [LoanType; 5] = [
        LoanType::Personal,
        LoanType::Business,
        LoanType::Home,
        LoanType::Car,
        LoanType::Education,
    ];

    /// Lowercase tag used in config files, CLI arguments and JSON output.
    pub fn tag(&self) -> &'static str {
        match self {
            LoanType::Personal => "personal",
            LoanType::Business => "business",
            LoanType::Home => "home",
            LoanType::Car => "car",
            LoanType::Education => "education",
        }
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for LoanType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "personal" => Ok(LoanType::Personal),
            "business" => Ok(LoanType::Business),
            "home" => Ok(LoanType::Home),
            "car" => Ok(LoanType::Car),
            "education" => Ok(LoanType::Education),
            other => Err(Error::invalid_loan_type(other)),
        }
    }
}

/// Rating band for a blended score, matching the dashboard bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreRating {
    /// Band for a blended score: Excellent >= 750, Good >= 700, Fair >= 650.
    pub fn from_score(score: f64) -> Self {
        if score >= 750.0 {
            ScoreRating::Excellent
        } else if score >= 700.0 {
            ScoreRating::Good
        } else if score >= 650.0 {
            ScoreRating::Fair
        } else {
            ScoreRating::Poor
        }
    }
}

impl fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreRating::Excellent => "Excellent",
            ScoreRating::Good => "Good",
            ScoreRating::Fair => "Fair",
            ScoreRating::Poor => "Poor",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loan_type_parses_all_supported_tags() {
        for loan_type in LoanType::ALL {
            assert_eq!(loan_type.tag().parse::<LoanType>().unwrap(), loan_type);
        }
    }

    #[test]
    fn loan_type_rejects_unknown_tag() {
        let err = "mortgage".parse::<LoanType>().unwrap_err();
        assert!(matches!(err, Error::InvalidLoanType { .. }));
    }

    #[test]
    fn loan_type_parse_is_case_sensitive() {
        assert!("Personal".parse::<LoanType>().is_err());
    }

    #[test]
    fn bureau_scores_lookup_matches_fields() {
        let scores = BureauScores::new(765.0, 760.0, 754.0, 742.0);
        assert_eq!(scores.get(Bureau::Cibil), 765.0);
        assert_eq!(scores.get(Bureau::Crif), 760.0);
        assert_eq!(scores.get(Bureau::Equifax), 754.0);
        assert_eq!(scores.get(Bureau::Experian), 742.0);
    }

    #[test]
    fn documented_range_check() {
        assert!(BureauScores::new(300.0, 900.0, 650.0, 700.0).in_documented_range());
        assert!(!BureauScores::new(299.9, 700.0, 700.0, 700.0).in_documented_range());
        assert!(!BureauScores::new(700.0, 901.0, 700.0, 700.0).in_documented_range());
    }

    #[test]
    fn rating_bands_match_dashboard_thresholds() {
        assert_eq!(ScoreRating::from_score(750.0), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(749.9), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(700.0), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(650.0), ScoreRating::Fair);
        assert_eq!(ScoreRating::from_score(649.9), ScoreRating::Poor);
    }

    #[test]
    fn loan_type_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&LoanType::Business).unwrap();
        assert_eq!(json, "\"business\"");
        let parsed: LoanType = serde_json::from_str("\"education\"").unwrap();
        assert_eq!(parsed, LoanType::Education);
    }
}
