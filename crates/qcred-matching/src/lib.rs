// crates/qcred-matching/src/lib.rs
//
// qcred-matching: Job-match scoring for researcher candidates.
//
// A match is a list of weighted reasons, one per evaluated criterion
// (skills, experience, publications, circuit fidelity, badge tier,
// location). The match score aggregates positive against negative weight,
// and the fit level is a threshold ladder over that score.

pub mod fit;
pub mod scorer;
pub mod skills;

pub use fit::{FitClassifier, FitLevel};
pub use scorer::{
    aggregate_score, rank_matches, CandidateProfile, JobMatch, JobRequirements, MatchCategory,
    MatchReason, MatchScorer, Polarity,
};
pub use skills::{skill_gap, SkillGap, SkillImportance, SkillLevel, SkillRequirement};
