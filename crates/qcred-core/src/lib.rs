// crates/qcred-core/src/lib.rs
//
// qcred-core: Core types, standards configuration, threshold ladders, and
// citation metrics for the qcred credentialing engine.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines the error type, the consolidated standards configuration, the
// generic threshold ladder every band classifier is built on, and the pure
// metric calculators (h-index, i10-index, score percentages).

pub mod config;
pub mod error;
pub mod ladder;
pub mod metrics;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use qcred_core::StandardsConfig;`

// Configuration
pub use config::{
    BadgeRequirement, BadgeStandards, FidelityStandards, FitStandards, MatchWeights,
    RenewalStandards, StandardsConfig,
};

// Error type
pub use error::{QcredError, Result};

// Ladder
pub use ladder::{Rung, Threshold, ThresholdLadder};

// Metrics
pub use metrics::{
    average_citations_per_publication, count_at_least, ensure_percentage, ensure_unit_interval,
    h_index, i10_index, score_percentage, ActivityCounts, CitationMetrics, CitationProfile,
    PublicationCitations,
};
