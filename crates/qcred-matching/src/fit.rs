// crates/qcred-matching/src/fit.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use qcred_core::{ensure_unit_interval, FitStandards, Result, ThresholdLadder};

/// How well a candidate fits a job, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FitLevel {
    Weak,
    Moderate,
    Good,
    Strong,
    Excellent,
}

impl fmt::Display for FitLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FitLevel::Weak => "WEAK",
            FitLevel::Moderate => "MODERATE",
            FitLevel::Good => "GOOD",
            FitLevel::Strong => "STRONG",
            FitLevel::Excellent => "EXCELLENT",
        };
        f.write_str(s)
    }
}

/// Fit level lookup compiled from a standards version.
#[derive(Debug, Clone)]
pub struct FitClassifier {
    ladder: ThresholdLadder<f64, FitLevel>,
}

impl FitClassifier {
    pub fn new(standards: &FitStandards) -> Result<Self> {
        let ladder = ThresholdLadder::from_ascending(vec![
            (0.0, FitLevel::Weak),
            (standards.moderate, FitLevel::Moderate),
            (standards.good, FitLevel::Good),
            (standards.strong, FitLevel::Strong),
            (standards.excellent, FitLevel::Excellent),
        ])?;
        Ok(Self { ladder })
    }

    /// Fit level for a match score in [0, 1]; boundaries belong to the
    /// higher level.
    pub fn fit_level_for(&self, match_score: f64) -> Result<FitLevel> {
        let score = ensure_unit_interval(match_score, "match score")?;
        Ok(*self.ladder.classify_or_floor(&score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcred_core::QcredError;

    fn classifier() -> FitClassifier {
        FitClassifier::new(&FitStandards::default()).unwrap()
    }

    #[test]
    fn bands_with_inclusive_lower_bounds() {
        let c = classifier();
        assert_eq!(c.fit_level_for(0.0).unwrap(), FitLevel::Weak);
        assert_eq!(c.fit_level_for(0.399).unwrap(), FitLevel::Weak);
        assert_eq!(c.fit_level_for(0.4).unwrap(), FitLevel::Moderate);
        assert_eq!(c.fit_level_for(0.6).unwrap(), FitLevel::Good);
        assert_eq!(c.fit_level_for(0.75).unwrap(), FitLevel::Strong);
        assert_eq!(c.fit_level_for(0.8999).unwrap(), FitLevel::Strong);
        assert_eq!(c.fit_level_for(0.9).unwrap(), FitLevel::Excellent);
        assert_eq!(c.fit_level_for(1.0).unwrap(), FitLevel::Excellent);
    }

    #[test]
    fn out_of_range_score_rejected() {
        let c = classifier();
        assert!(matches!(
            c.fit_level_for(1.01),
            Err(QcredError::ContractViolation(_))
        ));
        assert!(c.fit_level_for(-0.1).is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(FitLevel::Excellent.to_string(), "EXCELLENT");
        assert_eq!(FitLevel::Weak.to_string(), "WEAK");
    }
}
