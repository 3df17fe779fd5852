// crates/qcred-matching/src/skills.rs
//
// Skill levels and skill-gap detection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Proficiency in a skill, in ascending order. `None` has rank 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillLevel {
    None,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn rank(self) -> u8 {
        match self {
            SkillLevel::None => 0,
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Expert => 4,
        }
    }

    /// Level for a skill that may be missing from a profile.
    pub fn or_none(level: Option<SkillLevel>) -> SkillLevel {
        level.unwrap_or(SkillLevel::None)
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkillLevel::None => "none",
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
        };
        f.write_str(s)
    }
}

/// How much a job cares about a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillImportance {
    Required,
    Preferred,
    NiceToHave,
}

/// A job's requirement on one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub skill: String,
    pub level: SkillLevel,
    pub importance: SkillImportance,
}

/// Shortfall between a required and a current skill level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub required_level: SkillLevel,
    pub current_level: SkillLevel,
    pub importance: SkillImportance,
}

impl SkillGap {
    /// Levels missing; 0 when the candidate meets or exceeds the requirement.
    pub fn gap_size(&self) -> u8 {
        self.required_level
            .rank()
            .saturating_sub(self.current_level.rank())
    }

    /// A required skill missing by more than one level.
    pub fn is_critical(&self) -> bool {
        self.importance == SkillImportance::Required && self.gap_size() > 1
    }
}

/// Gap for `skill`, treating a skill absent from the profile as `None`.
pub fn skill_gap(
    skill: &str,
    required: SkillLevel,
    current: Option<SkillLevel>,
    importance: SkillImportance,
) -> SkillGap {
    SkillGap {
        skill: skill.to_string(),
        required_level: required,
        current_level: SkillLevel::or_none(current),
        importance,
    }
}
