// crates/qcred-ranking/src/leaderboard.rs
//
// Leaderboard assembly from a raw score snapshot.
//
// Steps:
//   1. Reject non-finite scores and duplicate user ids.
//   2. Drop entries that fail the country/institution filter.
//   3. Sort by score descending, then tiebreak key ascending, then user id.
//   4. Assign ranks 1..N and derive rank change and percentile.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use qcred_core::{QcredError, Result};

use crate::change::{rank_change, RankChange};
use crate::position::percentile;

/// One user's score as supplied by the data-access layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawScore {
    pub user_id: String,
    pub score: f64,
    /// Secondary sort key for equal scores, ascending.
    pub tiebreak_key: String,
    /// Rank in the previous snapshot, if the user was on it.
    #[serde(default)]
    pub previous_rank: Option<u32>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
}

/// Restricts a leaderboard to one country and/or institution.
///
/// Tags compare case-insensitively. An empty filter admits everyone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeaderboardFilter {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
}

impl LeaderboardFilter {
    pub fn by_country(country: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
            institution: None,
        }
    }

    pub fn by_institution(institution: impl Into<String>) -> Self {
        Self {
            country: None,
            institution: Some(institution.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.institution.is_none()
    }

    pub fn admits(&self, entry: &RawScore) -> bool {
        tag_matches(self.country.as_deref(), entry.country.as_deref())
            && tag_matches(self.institution.as_deref(), entry.institution.as_deref())
    }
}

fn tag_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match (wanted, actual) {
        (None, _) => true,
        (Some(w), Some(a)) => w.eq_ignore_ascii_case(a),
        (Some(_), None) => false,
    }
}

/// A ranked leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedUser {
    /// 1-based, unique within the leaderboard.
    pub rank: u32,
    pub user_id: String,
    pub score: f64,
    pub previous_rank: Option<u32>,
    pub rank_change: RankChange,
    /// In (0, 100].
    pub percentile: f64,
    pub country: Option<String>,
    pub institution: Option<String>,
}

/// A ranked snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    /// Best first; `entries[i].rank == i + 1`.
    pub entries: Vec<RankedUser>,
    /// The requesting user's row, when they are on this leaderboard.
    pub current_user: Option<RankedUser>,
    /// Size of the filtered population.
    pub total_participants: u32,
    pub filter: LeaderboardFilter,
}

impl Leaderboard {
    /// The first `n` rows.
    pub fn top(&self, n: usize) -> &[RankedUser] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn entry_for(&self, user_id: &str) -> Option<&RankedUser> {
        self.entries.iter().find(|e| e.user_id == user_id)
    }
}

// Scores are finite here; -0.0 and 0.0 compare equal and fall to the tiebreak.
fn compare_scores(a: &RawScore, b: &RawScore) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.tiebreak_key.cmp(&b.tiebreak_key))
        .then_with(|| a.user_id.cmp(&b.user_id))
}

/// Build a leaderboard from `scores`.
///
/// The filter applies before ranking, so ranks and `total_participants`
/// describe the filtered population. `requesting_user` selects the
/// `current_user` row.
///
/// # Errors
/// `ContractViolation` for a non-finite score or a user id listed twice.
pub fn build(
    scores: &[RawScore],
    filter: Option<&LeaderboardFilter>,
    requesting_user: Option<&str>,
) -> Result<Leaderboard> {
    let mut seen = HashSet::with_capacity(scores.len());
    for entry in scores {
        if !entry.score.is_finite() {
            return Err(QcredError::contract_violation(format!(
                "score for {} is not finite",
                entry.user_id
            )));
        }
        if !seen.insert(entry.user_id.as_str()) {
            return Err(QcredError::contract_violation(format!(
                "user {} appears more than once in the snapshot",
                entry.user_id
            )));
        }
    }

    let filter = filter.cloned().unwrap_or_default();
    let mut admitted: Vec<&RawScore> = scores.iter().filter(|e| filter.admits(e)).collect();
    admitted.sort_by(|a, b| compare_scores(a, b));

    let total_participants = u32::try_from(admitted.len()).map_err(|_| {
        QcredError::contract_violation(format!(
            "{} participants exceed the supported leaderboard size",
            admitted.len()
        ))
    })?;

    let mut entries = Vec::with_capacity(admitted.len());
    for (idx, raw) in admitted.into_iter().enumerate() {
        // idx < total_participants, which fits in u32
        let rank = idx as u32 + 1;
        entries.push(RankedUser {
            rank,
            user_id: raw.user_id.clone(),
            score: raw.score,
            previous_rank: raw.previous_rank,
            rank_change: rank_change(raw.previous_rank, rank),
            percentile: percentile(rank, total_participants)?,
            country: raw.country.clone(),
            institution: raw.institution.clone(),
        });
    }

    let current_user = requesting_user
        .and_then(|id| entries.iter().find(|e| e.user_id == id))
        .cloned();

    tracing::debug!(
        total_participants,
        filtered = !filter.is_empty(),
        "built leaderboard"
    );

    Ok(Leaderboard {
        entries,
        current_user,
        total_participants,
        filter,
    })
}
