// crates/qcred-core/src/error.rs

use thiserror::Error;

/// Engine-wide error type for qcred.
///
/// Definitional edge cases (empty publication lists, zero max score) never
/// reach this type; they resolve to sentinel values. Lookup misses are
/// reported as values too. What remains are refusals to compute on data
/// that breaks a caller contract, and configuration/loading failures.
#[derive(Debug, Error)]
pub enum QcredError {
    /// Input breaks a caller contract (negative score, out-of-range
    /// percentage, non-positive participant count, ...).
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// A certificate was requested for a score below the passing percentage.
    #[error("Score {percentage:.2}% is below the passing percentage of {required:.2}%")]
    BelowPassingScore { percentage: f64, required: f64 },

    /// Standards configuration is malformed (unordered ladder, weight out of range).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error (TOML standards, JSON snapshots).
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Filesystem error while reading a standards file.
    #[error("I/O error: {0}")]
    Io(String),

    /// The injected certificate corpus failed to answer a lookup.
    #[error("Corpus error: {0}")]
    Corpus(String),
}

impl QcredError {
    /// Build a `ContractViolation`, logging it at debug level so upstream
    /// data bugs show up in traces even when the caller swallows the error.
    pub fn contract_violation(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(%message, "contract violation");
        QcredError::ContractViolation(message)
    }
}

impl From<serde_json::Error> for QcredError {
    fn from(e: serde_json::Error) -> Self {
        QcredError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for QcredError {
    fn from(e: toml::de::Error) -> Self {
        QcredError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for QcredError {
    fn from(e: std::io::Error) -> Self {
        QcredError::Io(e.to_string())
    }
}

/// Convenience alias used across the workspace.
pub type Result<T> = std::result::Result<T, QcredError>;
