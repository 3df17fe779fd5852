// crates/qcred-ranking/src/change.rs

use serde::{Deserialize, Serialize};

/// Movement of a user between two leaderboard snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RankChange {
    /// Moved toward #1.
    Up,
    Down,
    Same,
    /// No previous rank on record.
    New,
}

/// Classify movement from `previous` to `current`.
pub fn rank_change(previous: Option<u32>, current: u32) -> RankChange {
    match previous {
        None => RankChange::New,
        Some(prev) if prev > current => RankChange::Up,
        Some(prev) if prev < current => RankChange::Down,
        Some(_) => RankChange::Same,
    }
}

/// Places gained (positive) or lost (negative); `None` for new entries.
pub fn rank_delta(previous: Option<u32>, current: u32) -> Option<i64> {
    previous.map(|prev| prev as i64 - current as i64)
}
