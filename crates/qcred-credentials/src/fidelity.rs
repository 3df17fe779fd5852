// crates/qcred-credentials/src/fidelity.rs
//
// Fidelity grades for measured quantum-operation accuracy.
//
// Six grades partition [0, 100]: each owns the half-open interval from its
// own lower bound to the next grade's lower bound, and Platinum runs up to
// and including 100.

use std::fmt;

use serde::{Deserialize, Serialize};

use qcred_core::{ensure_percentage, FidelityStandards, Result, ThresholdLadder};

/// Fidelity grades in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FidelityGrade {
    Developing,
    Standard,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl FidelityGrade {
    /// All grades, lowest first.
    pub const ALL: [FidelityGrade; 6] = [
        FidelityGrade::Developing,
        FidelityGrade::Standard,
        FidelityGrade::Bronze,
        FidelityGrade::Silver,
        FidelityGrade::Gold,
        FidelityGrade::Platinum,
    ];

    /// Successor grade. Platinum has none.
    pub fn next(self) -> Option<FidelityGrade> {
        match self {
            FidelityGrade::Developing => Some(FidelityGrade::Standard),
            FidelityGrade::Standard => Some(FidelityGrade::Bronze),
            FidelityGrade::Bronze => Some(FidelityGrade::Silver),
            FidelityGrade::Silver => Some(FidelityGrade::Gold),
            FidelityGrade::Gold => Some(FidelityGrade::Platinum),
            FidelityGrade::Platinum => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FidelityGrade::Developing => "DEVELOPING",
            FidelityGrade::Standard => "STANDARD",
            FidelityGrade::Bronze => "BRONZE",
            FidelityGrade::Silver => "SILVER",
            FidelityGrade::Gold => "GOLD",
            FidelityGrade::Platinum => "PLATINUM",
        }
    }
}

impl fmt::Display for FidelityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fidelity grade lookup compiled from a standards version.
#[derive(Debug, Clone)]
pub struct FidelityClassifier {
    ladder: ThresholdLadder<f64, FidelityGrade>,
}

impl FidelityClassifier {
    /// Compile the grade ladder. Developing always starts at 0.
    pub fn new(standards: &FidelityStandards) -> Result<Self> {
        let ladder = ThresholdLadder::from_ascending(vec![
            (0.0, FidelityGrade::Developing),
            (standards.standard, FidelityGrade::Standard),
            (standards.bronze, FidelityGrade::Bronze),
            (standards.silver, FidelityGrade::Silver),
            (standards.gold, FidelityGrade::Gold),
            (standards.platinum, FidelityGrade::Platinum),
        ])?;
        Ok(Self { ladder })
    }

    /// Grade whose interval contains `percentage`.
    ///
    /// Boundary values belong to the higher grade. A percentage outside
    /// [0, 100] is a contract violation.
    pub fn grade_for(&self, percentage: f64) -> Result<FidelityGrade> {
        let percentage = ensure_percentage(percentage, "fidelity percentage")?;
        Ok(*self.ladder.classify_or_floor(&percentage))
    }

    /// Successor grade. Platinum has none.
    pub fn next_grade(&self, grade: FidelityGrade) -> Option<FidelityGrade> {
        self.ladder.next_above(&grade).map(|rung| rung.label)
    }

    /// Inclusive lower bound of `grade`'s interval.
    pub fn min_percentage(&self, grade: FidelityGrade) -> f64 {
        self.ladder.threshold_of(&grade).copied().unwrap_or(0.0)
    }

    /// Upper bound of `grade`'s interval (100 for the top grade).
    pub fn max_percentage(&self, grade: FidelityGrade) -> f64 {
        self.ladder
            .next_above(&grade)
            .map(|rung| rung.threshold)
            .unwrap_or(100.0)
    }

    /// Fraction of the way from `grade`'s lower bound to the next grade's.
    ///
    /// Clamped to [0, 1]; 1.0 once the top grade is held.
    pub fn progress_to_next_grade(&self, grade: FidelityGrade, measured: f64) -> Result<f64> {
        let measured = ensure_percentage(measured, "fidelity percentage")?;
        let next = match self.ladder.next_above(&grade) {
            Some(rung) => rung,
            None => return Ok(1.0),
        };
        let current_min = self.min_percentage(grade);
        let span = next.threshold - current_min;
        Ok(((measured - current_min) / span).clamp(0.0, 1.0))
    }
}
