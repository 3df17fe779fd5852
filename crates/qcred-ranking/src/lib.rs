// crates/qcred-ranking/src/lib.rs
//
// qcred-ranking: Leaderboard assembly for researcher rankings.
//
// Leaderboards are rebuilt from a score snapshot on every query. Filters
// apply before ranking, ties are broken by an explicit key so repeated
// builds assign identical ranks, and ranks are always 1..N with no gaps.

pub mod change;
pub mod leaderboard;
pub mod position;

pub use change::{rank_change, rank_delta, RankChange};
pub use leaderboard::{build, Leaderboard, LeaderboardFilter, RankedUser, RawScore};
pub use position::{ordinal, percentile, rank_suffix};
