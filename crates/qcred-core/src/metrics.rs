// crates/qcred-core/src/metrics.rs
//
// Citation and score metric calculators.
//
// Every function here is total: empty inputs and zero denominators resolve
// to 0 rather than failing. The only error path is `score_percentage`,
// which refuses scores that break the score/max-score contract.

use serde::{Deserialize, Serialize};

use crate::config::I10_THRESHOLD;
use crate::error::{QcredError, Result};

/// Publication and citation totals, the input to badge tier lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityCounts {
    pub publications: u32,
    pub citations: u64,
}

impl ActivityCounts {
    pub const fn new(publications: u32, citations: u64) -> Self {
        Self {
            publications,
            citations,
        }
    }
}

/// Citation count of a single published circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationCitations {
    pub publication_id: String,
    pub citations: u64,
}

/// A researcher's citation record as supplied by the data-access layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CitationProfile {
    /// Total citations reported for the researcher.
    pub total_citations: u64,
    /// Per-publication citation counts, in the order supplied.
    #[serde(default)]
    pub publications: Vec<PublicationCitations>,
}

/// Derived citation indices for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationMetrics {
    pub h_index: u32,
    pub i10_index: u32,
    pub average_citations: f64,
    pub total_citations: u64,
    pub publication_count: u32,
}

impl CitationProfile {
    /// Citation counts in publication order.
    pub fn citation_counts(&self) -> Vec<u64> {
        self.publications.iter().map(|p| p.citations).collect()
    }

    pub fn publication_count(&self) -> u32 {
        u32::try_from(self.publications.len()).unwrap_or(u32::MAX)
    }

    pub fn h_index(&self) -> u32 {
        h_index(&self.citation_counts())
    }

    /// Publications with at least `threshold` citations.
    pub fn i10_index(&self, threshold: u64) -> u32 {
        count_at_least(&self.citation_counts(), threshold)
    }

    pub fn average_citations(&self) -> f64 {
        average_citations_per_publication(self.total_citations, self.publication_count())
    }

    /// Totals used for badge tier lookup.
    pub fn activity(&self) -> ActivityCounts {
        ActivityCounts::new(self.publication_count(), self.total_citations)
    }

    /// All citation indices at once.
    pub fn metrics(&self, i10_threshold: u64) -> CitationMetrics {
        let counts = self.citation_counts();
        CitationMetrics {
            h_index: h_index(&counts),
            i10_index: count_at_least(&counts, i10_threshold),
            average_citations: self.average_citations(),
            total_citations: self.total_citations,
            publication_count: self.publication_count(),
        }
    }
}

/// Hirsch index: the largest `k` such that at least `k` publications have
/// `k` or more citations. 0 for an empty slice.
pub fn h_index(citations: &[u64]) -> u32 {
    let mut sorted = citations.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    // With counts descending, position i (1-based) qualifies iff the i-th
    // count is >= i, and qualifying positions form a prefix.
    let h = sorted
        .iter()
        .enumerate()
        .take_while(|(i, count)| **count >= *i as u64 + 1)
        .count();
    u32::try_from(h).unwrap_or(u32::MAX)
}

/// Publications with at least 10 citations.
pub fn i10_index(citations: &[u64]) -> u32 {
    count_at_least(citations, I10_THRESHOLD)
}

/// Publications with at least `threshold` citations.
pub fn count_at_least(citations: &[u64], threshold: u64) -> u32 {
    let n = citations.iter().filter(|&&c| c >= threshold).count();
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Mean citations per publication; 0 when there are no publications.
pub fn average_citations_per_publication(total_citations: u64, publications: u32) -> f64 {
    if publications == 0 {
        return 0.0;
    }
    total_citations as f64 / publications as f64
}

/// Score as a percentage of `max_score`, in [0, 100].
///
/// Returns 0 when `max_score <= 0`. A negative or non-finite score, or a
/// score above `max_score`, is a contract violation.
pub fn score_percentage(score: f64, max_score: f64) -> Result<f64> {
    if !score.is_finite() || !max_score.is_finite() {
        return Err(QcredError::contract_violation(format!(
            "score {} / max score {} must be finite",
            score, max_score
        )));
    }
    if max_score <= 0.0 {
        return Ok(0.0);
    }
    if score < 0.0 {
        return Err(QcredError::contract_violation(format!(
            "score {} is negative",
            score
        )));
    }
    if score > max_score {
        return Err(QcredError::contract_violation(format!(
            "score {} exceeds max score {}",
            score, max_score
        )));
    }
    Ok(score / max_score * 100.0)
}

/// Check that `value` is a percentage in [0, 100].
///
/// Classifiers call this instead of clamping so out-of-range measurements
/// surface as contract violations.
pub fn ensure_percentage(value: f64, what: &str) -> Result<f64> {
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(QcredError::contract_violation(format!(
            "{} {} is outside [0, 100]",
            what, value
        )))
    }
}

/// Check that `value` lies in [0, 1].
pub fn ensure_unit_interval(value: f64, what: &str) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(QcredError::contract_violation(format!(
            "{} {} is outside [0, 1]",
            what, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(counts: &[u64]) -> CitationProfile {
        CitationProfile {
            total_citations: counts.iter().sum(),
            publications: counts
                .iter()
                .enumerate()
                .map(|(i, &c)| PublicationCitations {
                    publication_id: format!("circuit-{}", i),
                    citations: c,
                })
                .collect(),
        }
    }

    #[test]
    fn h_index_reference_scenario() {
        let counts = [10, 8, 5, 4, 3, 2, 1];
        assert_eq!(h_index(&counts), 4);
        assert_eq!(i10_index(&counts), 1);
    }

    #[test]
    fn h_index_empty_is_zero() {
        assert_eq!(h_index(&[]), 0);
        assert_eq!(h_index(&[0, 0, 0]), 0);
    }

    #[test]
    fn h_index_counts_exact_ties() {
        // three papers with exactly 3 citations each -> h = 3
        assert_eq!(h_index(&[3, 3, 3]), 3);
        assert_eq!(h_index(&[3, 3, 3, 3]), 3);
        assert_eq!(h_index(&[1]), 1);
        assert_eq!(h_index(&[100]), 1);
    }

    #[test]
    fn h_index_ignores_input_order() {
        assert_eq!(h_index(&[1, 4, 2, 10, 3, 8, 5]), 4);
    }

    #[test]
    fn h_index_never_exceeds_publication_count() {
        let mut counts = Vec::new();
        for n in 0..40u64 {
            counts.push((n * 7) % 23);
            assert!(h_index(&counts) as usize <= counts.len());
        }
    }

    #[test]
    fn h_index_monotone_when_adding_strong_publication() {
        let mut counts = vec![5, 1, 0, 9, 2];
        for _ in 0..10 {
            let h = h_index(&counts);
            counts.push(h as u64);
            assert!(h_index(&counts) >= h);
            counts.push(h as u64 + 3);
            assert!(h_index(&counts) >= h);
        }
    }

    #[test]
    fn i10_counts_boundary_inclusive() {
        assert_eq!(i10_index(&[9, 10, 11]), 2);
        assert_eq!(i10_index(&[]), 0);
        assert_eq!(count_at_least(&[4, 5, 6], 5), 2);
    }

    #[test]
    fn average_handles_zero_publications() {
        assert!((average_citations_per_publication(40, 0) - 0.0).abs() < 1e-10);
        assert!((average_citations_per_publication(40, 8) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn score_percentage_basic() {
        assert!((score_percentage(45.0, 60.0).unwrap() - 75.0).abs() < 1e-10);
        assert!((score_percentage(0.0, 60.0).unwrap() - 0.0).abs() < 1e-10);
        assert!((score_percentage(60.0, 60.0).unwrap() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn score_percentage_zero_max_is_zero() {
        assert!((score_percentage(5.0, 0.0).unwrap() - 0.0).abs() < 1e-10);
        assert!((score_percentage(5.0, -3.0).unwrap() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn score_percentage_contract_violations() {
        assert!(matches!(
            score_percentage(11.0, 10.0),
            Err(QcredError::ContractViolation(_))
        ));
        assert!(matches!(
            score_percentage(-1.0, 10.0),
            Err(QcredError::ContractViolation(_))
        ));
        assert!(score_percentage(f64::NAN, 10.0).is_err());
        assert!(score_percentage(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn profile_metrics_summary() {
        let p = profile(&[10, 8, 5, 4, 3, 2, 1]);
        let m = p.metrics(10);
        assert_eq!(m.h_index, 4);
        assert_eq!(m.i10_index, 1);
        assert_eq!(m.total_citations, 33);
        assert_eq!(m.publication_count, 7);
        assert!((m.average_citations - 33.0 / 7.0).abs() < 1e-10);
        assert_eq!(p.activity(), ActivityCounts::new(7, 33));
    }

    #[test]
    fn range_checks_reject_nan_and_out_of_range() {
        assert!(ensure_percentage(100.0, "fidelity").is_ok());
        assert!(ensure_percentage(0.0, "fidelity").is_ok());
        assert!(ensure_percentage(-0.01, "fidelity").is_err());
        assert!(ensure_percentage(f64::NAN, "fidelity").is_err());
        assert!(ensure_unit_interval(1.0, "match score").is_ok());
        assert!(matches!(
            ensure_unit_interval(1.2, "match score"),
            Err(QcredError::ContractViolation(_))
        ));
    }

    #[test]
    fn profile_deserializes_without_publications() {
        let p: CitationProfile = serde_json::from_str(r#"{"total_citations": 12}"#).unwrap();
        assert_eq!(p.h_index(), 0);
        assert!((p.average_citations() - 0.0).abs() < 1e-10);
    }
}
