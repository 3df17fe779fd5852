// crates/qcred-ranking/src/position.rs
//
// Percentile and ordinal formatting for leaderboard positions.

use qcred_core::{QcredError, Result};

/// Percentile of `rank` among `total_participants`, in (0, 100].
///
/// percentile = (1 - (rank - 1) / total) * 100, so rank 1 is always 100.
///
/// # Errors
/// `ContractViolation` if `total_participants` is 0, or `rank` is 0 or
/// greater than `total_participants`.
pub fn percentile(rank: u32, total_participants: u32) -> Result<f64> {
    if total_participants == 0 {
        return Err(QcredError::contract_violation(
            "percentile needs at least one participant",
        ));
    }
    if rank == 0 || rank > total_participants {
        return Err(QcredError::contract_violation(format!(
            "rank {} is outside 1..={}",
            rank, total_participants
        )));
    }
    let behind = (rank - 1) as f64 / total_participants as f64;
    Ok((1.0 - behind) * 100.0)
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st, 111th.
pub fn rank_suffix(rank: u32) -> &'static str {
    if (11..=13).contains(&(rank % 100)) {
        return "th";
    }
    match rank % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// `rank` followed by its suffix, e.g. "23rd".
pub fn ordinal(rank: u32) -> String {
    format!("{}{}", rank, rank_suffix(rank))
}
