// crates/qcred-credentials/src/badge.rs
//
// Researcher badge tiers.
//
// A tier unlocks when both its publication and citation requirements are
// met. Tiers are evaluated from Platinum down; zero publications never earns
// a tier, whatever the citation count.

use std::fmt;

use serde::{Deserialize, Serialize};

use qcred_core::{
    ActivityCounts, BadgeRequirement, BadgeStandards, CitationProfile, Result, ThresholdLadder,
};

/// Badge tiers in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl BadgeTier {
    /// All tiers, lowest first.
    pub const ALL: [BadgeTier; 4] = [
        BadgeTier::Bronze,
        BadgeTier::Silver,
        BadgeTier::Gold,
        BadgeTier::Platinum,
    ];

    /// The tier above this one. Platinum has none.
    pub fn next(self) -> Option<BadgeTier> {
        match self {
            BadgeTier::Bronze => Some(BadgeTier::Silver),
            BadgeTier::Silver => Some(BadgeTier::Gold),
            BadgeTier::Gold => Some(BadgeTier::Platinum),
            BadgeTier::Platinum => None,
        }
    }

    /// Stable upper-case name, also used in verification digests.
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeTier::Bronze => "BRONZE",
            BadgeTier::Silver => "SILVER",
            BadgeTier::Gold => "GOLD",
            BadgeTier::Platinum => "PLATINUM",
        }
    }
}

impl fmt::Display for BadgeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a researcher stands relative to the next badge tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeProgress {
    /// Tier currently held, if any.
    pub current: Option<BadgeTier>,
    /// Next tier to unlock. `None` once Platinum is held.
    pub next: Option<BadgeTier>,
    /// Publications still missing for `next`.
    pub publications_needed: u32,
    /// Citations still missing for `next`.
    pub citations_needed: u64,
}

/// Badge tier lookup compiled from a standards version.
#[derive(Debug, Clone)]
pub struct BadgeClassifier {
    standards: BadgeStandards,
    ladder: ThresholdLadder<BadgeRequirement, BadgeTier>,
}

impl BadgeClassifier {
    /// Compile the tier ladder. Fails if requirements are not monotone.
    pub fn new(standards: &BadgeStandards) -> Result<Self> {
        let ladder = ThresholdLadder::from_ascending(vec![
            (standards.bronze, BadgeTier::Bronze),
            (standards.silver, BadgeTier::Silver),
            (standards.gold, BadgeTier::Gold),
            (standards.platinum, BadgeTier::Platinum),
        ])?;
        Ok(Self {
            standards: standards.clone(),
            ladder,
        })
    }

    /// Highest tier whose requirements are both met.
    ///
    /// Returns `None` for zero publications, or when even Bronze is not met.
    pub fn tier_for(&self, publications: u32, citations: u64) -> Option<BadgeTier> {
        if publications == 0 {
            return None;
        }
        self.ladder
            .classify(&ActivityCounts::new(publications, citations))
            .copied()
    }

    /// Tier for a citation profile's publication and citation totals.
    pub fn tier_for_profile(&self, profile: &CitationProfile) -> Option<BadgeTier> {
        let activity = profile.activity();
        self.tier_for(activity.publications, activity.citations)
    }

    /// Structured requirement for `tier`.
    pub fn requirement(&self, tier: BadgeTier) -> BadgeRequirement {
        match tier {
            BadgeTier::Bronze => self.standards.bronze,
            BadgeTier::Silver => self.standards.silver,
            BadgeTier::Gold => self.standards.gold,
            BadgeTier::Platinum => self.standards.platinum,
        }
    }

    /// Current tier, next tier, and what is missing to reach it.
    pub fn progress(&self, publications: u32, citations: u64) -> BadgeProgress {
        let current = self.tier_for(publications, citations);
        let next = match current {
            Some(tier) => tier.next(),
            None => Some(BadgeTier::Bronze),
        };

        let (publications_needed, citations_needed) = match next {
            Some(tier) => {
                let req = self.requirement(tier);
                (
                    req.min_publications.saturating_sub(publications),
                    req.min_citations.saturating_sub(citations),
                )
            }
            None => (0, 0),
        };

        BadgeProgress {
            current,
            next,
            publications_needed,
            citations_needed,
        }
    }
}
