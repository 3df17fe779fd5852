// crates/qcred-core/src/config.rs
//
// Standards configuration for the qcred credentialing engine.
//
// Every constant that is part of the engine's observable contract lives
// here: certificate validity, passing percentage, badge/fidelity/fit
// thresholds, the i10 threshold, renewal windows, and job-match weights.
// Loaded from a TOML file or populated with the published defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{QcredError, Result};
use crate::ladder::Threshold;
use crate::metrics::ActivityCounts;

/// Certificate validity period in years.
pub const CERTIFICATE_VALIDITY_YEARS: u32 = 2;

/// Minimum score percentage required to issue a certificate.
pub const MIN_PASSING_PERCENTAGE: f64 = 60.0;

/// Citation count a publication needs to count toward the i10-index.
pub const I10_THRESHOLD: u64 = 10;

/// Days before expiry at which renewal becomes urgent.
pub const URGENT_RENEWAL_DAYS: i64 = 7;

/// Days before expiry at which renewal is recommended.
pub const NEEDS_RENEWAL_DAYS: i64 = 30;

/// Minimum activity required to unlock a badge tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeRequirement {
    /// Published circuits required.
    pub min_publications: u32,
    /// Citations required across all publications.
    pub min_citations: u64,
}

impl BadgeRequirement {
    pub const fn new(min_publications: u32, min_citations: u64) -> Self {
        Self {
            min_publications,
            min_citations,
        }
    }
}

impl Threshold for BadgeRequirement {
    type Value = ActivityCounts;

    fn is_met_by(&self, value: &ActivityCounts) -> bool {
        value.publications >= self.min_publications && value.citations >= self.min_citations
    }

    /// Component-wise non-decreasing and not identical.
    fn ranks_below(&self, other: &Self) -> bool {
        self.min_publications <= other.min_publications
            && self.min_citations <= other.min_citations
            && self != other
    }
}

/// Badge tier requirements, lowest tier first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeStandards {
    #[serde(default = "default_bronze_badge")]
    pub bronze: BadgeRequirement,
    #[serde(default = "default_silver_badge")]
    pub silver: BadgeRequirement,
    #[serde(default = "default_gold_badge")]
    pub gold: BadgeRequirement,
    #[serde(default = "default_platinum_badge")]
    pub platinum: BadgeRequirement,
}

fn default_bronze_badge() -> BadgeRequirement {
    BadgeRequirement::new(1, 0)
}

fn default_silver_badge() -> BadgeRequirement {
    BadgeRequirement::new(5, 10)
}

fn default_gold_badge() -> BadgeRequirement {
    BadgeRequirement::new(20, 50)
}

fn default_platinum_badge() -> BadgeRequirement {
    BadgeRequirement::new(50, 200)
}

impl Default for BadgeStandards {
    fn default() -> Self {
        Self {
            bronze: default_bronze_badge(),
            silver: default_silver_badge(),
            gold: default_gold_badge(),
            platinum: default_platinum_badge(),
        }
    }
}

/// Lower bounds (inclusive, in percent) of each fidelity grade above Developing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FidelityStandards {
    #[serde(default = "default_standard_fidelity")]
    pub standard: f64,
    #[serde(default = "default_bronze_fidelity")]
    pub bronze: f64,
    #[serde(default = "default_silver_fidelity")]
    pub silver: f64,
    #[serde(default = "default_gold_fidelity")]
    pub gold: f64,
    #[serde(default = "default_platinum_fidelity")]
    pub platinum: f64,
}

fn default_standard_fidelity() -> f64 {
    95.0
}

fn default_bronze_fidelity() -> f64 {
    98.0
}

fn default_silver_fidelity() -> f64 {
    99.0
}

fn default_gold_fidelity() -> f64 {
    99.5
}

fn default_platinum_fidelity() -> f64 {
    99.9
}

impl Default for FidelityStandards {
    fn default() -> Self {
        Self {
            standard: default_standard_fidelity(),
            bronze: default_bronze_fidelity(),
            silver: default_silver_fidelity(),
            gold: default_gold_fidelity(),
            platinum: default_platinum_fidelity(),
        }
    }
}

/// Lower bounds (inclusive) of each fit level above Weak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitStandards {
    #[serde(default = "default_moderate_fit")]
    pub moderate: f64,
    #[serde(default = "default_good_fit")]
    pub good: f64,
    #[serde(default = "default_strong_fit")]
    pub strong: f64,
    #[serde(default = "default_excellent_fit")]
    pub excellent: f64,
}

fn default_moderate_fit() -> f64 {
    0.4
}

fn default_good_fit() -> f64 {
    0.6
}

fn default_strong_fit() -> f64 {
    0.75
}

fn default_excellent_fit() -> f64 {
    0.9
}

impl Default for FitStandards {
    fn default() -> Self {
        Self {
            moderate: default_moderate_fit(),
            good: default_good_fit(),
            strong: default_strong_fit(),
            excellent: default_excellent_fit(),
        }
    }
}

/// Renewal windows, in whole days before expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenewalStandards {
    #[serde(default = "default_urgent_days")]
    pub urgent_days: i64,
    #[serde(default = "default_needs_renewal_days")]
    pub needs_renewal_days: i64,
}

fn default_urgent_days() -> i64 {
    URGENT_RENEWAL_DAYS
}

fn default_needs_renewal_days() -> i64 {
    NEEDS_RENEWAL_DAYS
}

impl Default for RenewalStandards {
    fn default() -> Self {
        Self {
            urgent_days: default_urgent_days(),
            needs_renewal_days: default_needs_renewal_days(),
        }
    }
}

/// Reason weights used by the job-match scorer. All values lie in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    /// Weight of a skill the job marks as required.
    #[serde(default = "default_required_skill_weight")]
    pub required_skill: f64,
    /// Weight of a preferred skill.
    #[serde(default = "default_preferred_skill_weight")]
    pub preferred_skill: f64,
    /// Weight of a nice-to-have skill.
    #[serde(default = "default_nice_to_have_skill_weight")]
    pub nice_to_have_skill: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_publications_weight")]
    pub publications: f64,
    #[serde(default = "default_fidelity_weight")]
    pub fidelity: f64,
    #[serde(default = "default_badge_weight")]
    pub badge: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
}

fn default_required_skill_weight() -> f64 {
    1.0
}

fn default_preferred_skill_weight() -> f64 {
    0.6
}

fn default_nice_to_have_skill_weight() -> f64 {
    0.3
}

fn default_experience_weight() -> f64 {
    0.8
}

fn default_publications_weight() -> f64 {
    0.6
}

fn default_fidelity_weight() -> f64 {
    0.7
}

fn default_badge_weight() -> f64 {
    0.5
}

fn default_location_weight() -> f64 {
    0.4
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            required_skill: default_required_skill_weight(),
            preferred_skill: default_preferred_skill_weight(),
            nice_to_have_skill: default_nice_to_have_skill_weight(),
            experience: default_experience_weight(),
            publications: default_publications_weight(),
            fidelity: default_fidelity_weight(),
            badge: default_badge_weight(),
            location: default_location_weight(),
        }
    }
}

impl MatchWeights {
    /// Every weight with its configuration key.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("required_skill", self.required_skill),
            ("preferred_skill", self.preferred_skill),
            ("nice_to_have_skill", self.nice_to_have_skill),
            ("experience", self.experience),
            ("publications", self.publications),
            ("fidelity", self.fidelity),
            ("badge", self.badge),
            ("location", self.location),
        ]
    }
}

/// The full standards version the engine evaluates against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardsConfig {
    /// Years between certificate issuance and expiry.
    #[serde(default = "default_validity_years")]
    pub certificate_validity_years: u32,

    /// Minimum score percentage (0-100) for certificate issuance.
    #[serde(default = "default_min_passing_percentage")]
    pub min_passing_percentage: f64,

    /// Citations a publication needs to count toward the i10-index.
    #[serde(default = "default_i10_threshold")]
    pub i10_threshold: u64,

    #[serde(default)]
    pub badges: BadgeStandards,

    #[serde(default)]
    pub fidelity: FidelityStandards,

    #[serde(default)]
    pub fit: FitStandards,

    #[serde(default)]
    pub renewal: RenewalStandards,

    #[serde(default)]
    pub match_weights: MatchWeights,
}

fn default_validity_years() -> u32 {
    CERTIFICATE_VALIDITY_YEARS
}

fn default_min_passing_percentage() -> f64 {
    MIN_PASSING_PERCENTAGE
}

fn default_i10_threshold() -> u64 {
    I10_THRESHOLD
}

impl Default for StandardsConfig {
    fn default() -> Self {
        Self {
            certificate_validity_years: default_validity_years(),
            min_passing_percentage: default_min_passing_percentage(),
            i10_threshold: default_i10_threshold(),
            badges: BadgeStandards::default(),
            fidelity: FidelityStandards::default(),
            fit: FitStandards::default(),
            renewal: RenewalStandards::default(),
            match_weights: MatchWeights::default(),
        }
    }
}

impl StandardsConfig {
    /// Load a standards version from a TOML file at the given path.
    ///
    /// Missing keys take their published defaults. The result is validated
    /// before it is returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), "loaded standards configuration");
        Ok(config)
    }

    /// Load from `path`, falling back to the published defaults if the file
    /// cannot be read. A file that exists but does not parse or validate is
    /// still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config = Self::from_toml_str(&contents)?;
                tracing::info!(path = %path.display(), "loaded standards configuration");
                Ok(config)
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "standards file unavailable, using defaults"
                );
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: StandardsConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check scalar ranges. Ladder ordering is checked when the ladders are
    /// compiled by the classifier crates.
    pub fn validate(&self) -> Result<()> {
        if self.certificate_validity_years == 0 {
            return Err(QcredError::Config(
                "certificate_validity_years must be at least 1".to_string(),
            ));
        }

        if !(0.0..=100.0).contains(&self.min_passing_percentage) {
            return Err(QcredError::Config(format!(
                "min_passing_percentage {} is outside [0, 100]",
                self.min_passing_percentage
            )));
        }

        if self.i10_threshold == 0 {
            return Err(QcredError::Config(
                "i10_threshold must be at least 1".to_string(),
            ));
        }

        if self.renewal.urgent_days < 0
            || self.renewal.urgent_days > self.renewal.needs_renewal_days
        {
            return Err(QcredError::Config(format!(
                "renewal windows must satisfy 0 <= urgent_days ({}) <= needs_renewal_days ({})",
                self.renewal.urgent_days, self.renewal.needs_renewal_days
            )));
        }

        let f = &self.fidelity;
        for (name, value) in [
            ("standard", f.standard),
            ("bronze", f.bronze),
            ("silver", f.silver),
            ("gold", f.gold),
            ("platinum", f.platinum),
        ] {
            if !(value > 0.0 && value <= 100.0) {
                return Err(QcredError::Config(format!(
                    "fidelity threshold {} = {} is outside (0, 100]",
                    name, value
                )));
            }
        }

        let fit = &self.fit;
        for (name, value) in [
            ("moderate", fit.moderate),
            ("good", fit.good),
            ("strong", fit.strong),
            ("excellent", fit.excellent),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(QcredError::Config(format!(
                    "fit threshold {} = {} is outside (0, 1]",
                    name, value
                )));
            }
        }

        for (name, weight) in self.match_weights.entries() {
            if !(0.0..=1.0).contains(&weight) {
                return Err(QcredError::Config(format!(
                    "match weight {} = {} is outside [0, 1]",
                    name, weight
                )));
            }
        }

        Ok(())
    }
}
