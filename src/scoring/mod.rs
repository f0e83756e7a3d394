//! Weighted blending of bureau scores.
//!
//! The blended (normalized) score is a plain weighted sum of the four bureau
//! scores, with weights chosen per loan product. Business loans lean on CRIF
//! Highmark for its business-credit coverage; personal loans lean on CIBIL.

pub mod profiles;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Bureau, BureauScores, LoanType, Result, ScoreRating};

pub use profiles::builtin_profile;

/// Tolerance for checking that a profile's weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Four non-negative weights, one per bureau.
///
/// Built-in profiles sum to 1.0 by construction; `blend` itself takes the
/// weights as given and does not re-check the sum on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    pub cibil: f64,
    pub crif: f64,
    pub equifax: f64,
    pub experian: f64,
}

impl WeightProfile {
    pub const fn new(cibil: f64, crif: f64, equifax: f64, experian: f64) -> Self {
        Self {
            cibil,
            crif,
            equifax,
            experian,
        }
    }

    /// Weight applied to a single bureau.
    pub fn weight(&self, bureau: Bureau) -> f64 {
        match bureau {
            Bureau::Cibil => self.cibil,
            Bureau::Crif => self.crif,
            Bureau::Equifax => self.equifax,
            Bureau::Experian => self.experian,
        }
    }

    /// Sum of all four weights.
    pub fn sum(&self) -> f64 {
        self.cibil + self.crif + self.equifax + self.experian
    }

    /// Validate that each weight lies in [0, 1] and the sum is 1.0 within
    /// a small tolerance.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for bureau in Bureau::ALL {
            let w = self.weight(bureau);
            if !(0.0..=1.0).contains(&w) {
                return Err(format!(
                    "{} weight {} must be between 0.0 and 1.0",
                    bureau, w
                ));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-3 {
            return Err(format!("weights must sum to 1.0, but sum to {:.3}", sum));
        }
        Ok(())
    }

    /// Rescale weights so they sum to exactly 1.0.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 && (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            self.cibil /= sum;
            self.crif /= sum;
            self.equifax /= sum;
            self.experian /= sum;
        }
    }

    /// Weighted sum of the four bureau scores.
    ///
    /// Pure and deterministic. No rounding, no clamping: scores outside the
    /// documented [300, 900] range compute through unchanged, matching the
    /// dashboard behavior this replaces.
    pub fn blend(&self, scores: &BureauScores) -> f64 {
        scores.cibil * self.cibil
            + scores.crif * self.crif
            + scores.equifax * self.equifax
            + scores.experian * self.experian
    }
}

/// Blend four bureau scores using the built-in profile for a loan type.
pub fn normalized_score(scores: &BureauScores, loan_type: LoanType) -> f64 {
    builtin_profile(loan_type).blend(scores)
}

/// Blend four bureau scores for a loan type given as a raw tag.
///
/// Fails with [`crate::core::Error::InvalidLoanType`] when the tag is not one
/// of the five supported loan types.
pub fn normalized_score_for_tag(scores: &BureauScores, tag: &str) -> Result<f64> {
    let loan_type: LoanType = tag.parse()?;
    Ok(normalized_score(scores, loan_type))
}

/// Built-in profiles with optional per-loan-type overrides from config.
#[derive(Debug, Clone, Default)]
pub struct ProfileSet {
    overrides: Vec<(LoanType, WeightProfile)>,
}

impl ProfileSet {
    /// Profile set with no overrides: built-ins only.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Replace the profile for one loan type.
    pub fn with_override(mut self, loan_type: LoanType, profile: WeightProfile) -> Self {
        self.overrides.retain(|(lt, _)| *lt != loan_type);
        self.overrides.push((loan_type, profile));
        self
    }

    /// Effective profile for a loan type: the override if present, else the
    /// built-in table entry.
    pub fn resolve(&self, loan_type: LoanType) -> WeightProfile {
        self.overrides
            .iter()
            .find(|(lt, _)| *lt == loan_type)
            .map(|(_, p)| *p)
            .unwrap_or_else(|| *builtin_profile(loan_type))
    }

    /// True when the loan type uses a config override rather than the
    /// built-in profile.
    pub fn is_overridden(&self, loan_type: LoanType) -> bool {
        self.overrides.iter().any(|(lt, _)| *lt == loan_type)
    }

    /// Blend scores with the effective profile for a loan type.
    pub fn blend(&self, scores: &BureauScores, loan_type: LoanType) -> f64 {
        self.resolve(loan_type).blend(scores)
    }
}

/// One completed score evaluation, ready to render or persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub loan_type: LoanType,
    pub scores: BureauScores,
    pub weights: WeightProfile,
    pub blended_score: f64,
    pub rating: ScoreRating,
    pub timestamp: DateTime<Utc>,
}

impl Evaluation {
    /// Evaluate four bureau scores against the effective profile for a loan
    /// type.
    pub fn compute(profiles: &ProfileSet, scores: BureauScores, loan_type: LoanType) -> Self {
        let weights = profiles.resolve(loan_type);
        let blended_score = weights.blend(&scores);
        Self {
            loan_type,
            scores,
            weights,
            blended_score,
            rating: ScoreRating::from_score(blended_score),
            timestamp: Utc::now(),
        }
    }
}
