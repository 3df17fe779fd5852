// crates/qcred-core/src/ladder.rs
//
// Ordered threshold ladders.
//
// Badge tiers, fidelity grades, and fit levels are all the same shape: a
// sorted list of (threshold, label) rungs evaluated from the highest rung
// down, where a value equal to a rung's threshold belongs to that rung
// (closed lower bound). Every classifier in the workspace is built on this
// one type so the boundary policy cannot drift between them.

use serde::{Deserialize, Serialize};

use crate::error::{QcredError, Result};

/// A rung threshold that can be compared against a measured value.
pub trait Threshold {
    /// The measured quantity this threshold is checked against.
    type Value: ?Sized;

    /// True when `value` reaches this threshold (inclusive).
    fn is_met_by(&self, value: &Self::Value) -> bool;

    /// True when this threshold sits strictly below `other` on a ladder.
    fn ranks_below(&self, other: &Self) -> bool;
}

impl Threshold for f64 {
    type Value = f64;

    fn is_met_by(&self, value: &f64) -> bool {
        *value >= *self
    }

    fn ranks_below(&self, other: &f64) -> bool {
        // NaN compares false both ways, so a NaN rung never validates.
        self < other
    }
}

/// One (threshold, label) pair of a ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rung<T, L> {
    /// Lower bound (inclusive) of this rung.
    pub threshold: T,
    /// Label returned when this rung is the highest one met.
    pub label: L,
}

/// Sorted (threshold, label) rungs with highest-first lookup.
#[derive(Debug, Clone)]
pub struct ThresholdLadder<T, L> {
    /// Rungs stored highest first. Never empty.
    rungs: Vec<Rung<T, L>>,
}

impl<T, L> ThresholdLadder<T, L>
where
    T: Threshold,
    L: PartialEq + std::fmt::Debug,
{
    /// Build a ladder from rungs listed lowest first.
    ///
    /// Fails with `QcredError::Config` if the list is empty, a label repeats,
    /// or a rung does not rank strictly above its predecessor.
    pub fn from_ascending(rungs: Vec<(T, L)>) -> Result<Self> {
        if rungs.is_empty() {
            return Err(QcredError::Config(
                "threshold ladder needs at least one rung".to_string(),
            ));
        }

        for pair in rungs.windows(2) {
            let (lower, lower_label) = (&pair[0].0, &pair[0].1);
            let (upper, upper_label) = (&pair[1].0, &pair[1].1);
            if !lower.ranks_below(upper) {
                return Err(QcredError::Config(format!(
                    "rung {:?} must rank strictly above rung {:?}",
                    upper_label, lower_label
                )));
            }
        }

        for (i, (_, label)) in rungs.iter().enumerate() {
            if rungs[..i].iter().any(|(_, earlier)| earlier == label) {
                return Err(QcredError::Config(format!(
                    "label {:?} appears on more than one rung",
                    label
                )));
            }
        }

        let mut rungs: Vec<Rung<T, L>> = rungs
            .into_iter()
            .map(|(threshold, label)| Rung { threshold, label })
            .collect();
        rungs.reverse();
        Ok(Self { rungs })
    }

    /// Label of the highest rung met by `value`, or `None` if it sits below
    /// the lowest rung.
    pub fn classify(&self, value: &T::Value) -> Option<&L> {
        self.rungs
            .iter()
            .find(|rung| rung.threshold.is_met_by(value))
            .map(|rung| &rung.label)
    }

    /// Like [`classify`](Self::classify), falling back to the lowest rung's label.
    pub fn classify_or_floor(&self, value: &T::Value) -> &L {
        self.classify(value).unwrap_or(&self.floor().label)
    }

    /// The rung carrying `label`.
    pub fn rung(&self, label: &L) -> Option<&Rung<T, L>> {
        self.rungs.iter().find(|rung| rung.label == *label)
    }

    /// Threshold of the rung carrying `label`.
    pub fn threshold_of(&self, label: &L) -> Option<&T> {
        self.rung(label).map(|rung| &rung.threshold)
    }

    /// The rung directly above the one carrying `label`.
    ///
    /// `None` for the top rung or an unknown label.
    pub fn next_above(&self, label: &L) -> Option<&Rung<T, L>> {
        let idx = self.rungs.iter().position(|rung| rung.label == *label)?;
        if idx == 0 {
            None
        } else {
            self.rungs.get(idx - 1)
        }
    }

    /// The lowest rung.
    pub fn floor(&self) -> &Rung<T, L> {
        // from_ascending rejects empty ladders
        &self.rungs[self.rungs.len() - 1]
    }

    /// The highest rung.
    pub fn top(&self) -> &Rung<T, L> {
        &self.rungs[0]
    }

    /// Rungs from highest to lowest.
    pub fn iter_descending(&self) -> impl Iterator<Item = &Rung<T, L>> {
        self.rungs.iter()
    }

    /// Number of rungs.
    pub fn len(&self) -> usize {
        self.rungs.len()
    }

    /// Always false; ladders are never empty.
    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ThresholdLadder<f64, &'static str> {
        ThresholdLadder::from_ascending(vec![(0.0, "low"), (0.5, "mid"), (0.9, "high")]).unwrap()
    }

    #[test]
    fn boundary_belongs_to_higher_rung() {
        let ladder = sample();
        assert_eq!(ladder.classify(&0.5), Some(&"mid"));
        assert_eq!(ladder.classify(&0.9), Some(&"high"));
        assert_eq!(ladder.classify(&0.899_999), Some(&"mid"));
    }

    #[test]
    fn below_lowest_rung_is_none() {
        let ladder =
            ThresholdLadder::from_ascending(vec![(1.0, "one"), (2.0, "two")]).unwrap();
        assert_eq!(ladder.classify(&0.5), None);
        assert_eq!(*ladder.classify_or_floor(&0.5), "one");
    }

    #[test]
    fn next_above_walks_up() {
        let ladder = sample();
        assert_eq!(ladder.next_above(&"low").map(|r| r.label), Some("mid"));
        assert_eq!(ladder.next_above(&"mid").map(|r| r.label), Some("high"));
        assert!(ladder.next_above(&"high").is_none());
        assert!(ladder.next_above(&"missing").is_none());
    }

    #[test]
    fn threshold_lookup() {
        let ladder = sample();
        assert_eq!(ladder.threshold_of(&"mid"), Some(&0.5));
        assert_eq!(ladder.floor().label, "low");
        assert_eq!(ladder.top().label, "high");
        assert_eq!(ladder.len(), 3);
    }

    #[test]
    fn unordered_rungs_rejected() {
        let result = ThresholdLadder::from_ascending(vec![(0.5, "a"), (0.5, "b")]);
        assert!(matches!(result, Err(QcredError::Config(_))));

        let result = ThresholdLadder::from_ascending(vec![(0.9, "a"), (0.1, "b")]);
        assert!(matches!(result, Err(QcredError::Config(_))));
    }

    #[test]
    fn nan_rung_rejected() {
        let result = ThresholdLadder::from_ascending(vec![(0.0, "a"), (f64::NAN, "b")]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_and_duplicate_labels_rejected() {
        let empty: Vec<(f64, &str)> = Vec::new();
        assert!(ThresholdLadder::from_ascending(empty).is_err());

        let result = ThresholdLadder::from_ascending(vec![(0.0, "a"), (1.0, "a")]);
        assert!(matches!(result, Err(QcredError::Config(_))));
    }

    #[test]
    fn iter_descending_is_highest_first() {
        let ladder = sample();
        let labels: Vec<&str> = ladder.iter_descending().map(|r| r.label).collect();
        assert_eq!(labels, vec!["high", "mid", "low"]);
    }
}
