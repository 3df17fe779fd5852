// crates/qcred-credentials/src/certificate.rs
//
// Certificate issuance, expiry, and renewal urgency.
//
//   issue --> Valid --> NeedsRenewal (<= 30 days) --> Urgent (<= 7 days) --> Expired
//     ^                                                                        |
//     +------------------------------- renew ----------------------------------+
//
// A certificate is valid for a fixed number of years from its issue date and
// can only be issued for a passing score. Its verification code is a digest
// of the identity fields, so re-issuing the same record yields the same code.

use std::fmt;

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use qcred_core::{score_percentage, QcredError, Result, StandardsConfig};

use crate::badge::BadgeTier;

/// Prefix of every verification code.
const CODE_PREFIX: &str = "QC";

/// Hex digits per code group; a code has three groups.
const CODE_GROUP_LEN: usize = 4;
const CODE_GROUPS: usize = 3;

/// Human-enterable certificate verification code, e.g. `QC-1A2B-3C4D-5E6F`.
///
/// Deserialization goes through [`VerificationCode::parse`], so stored codes
/// are normalized the same way as typed input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Derive the code for a certificate's identity fields.
    fn derive(digest: &[u8]) -> Self {
        let hex = hex::encode_upper(&digest[..CODE_GROUPS * CODE_GROUP_LEN / 2]);
        let groups: Vec<&str> = (0..CODE_GROUPS)
            .map(|i| &hex[i * CODE_GROUP_LEN..(i + 1) * CODE_GROUP_LEN])
            .collect();
        Self(format!("{}-{}", CODE_PREFIX, groups.join("-")))
    }

    /// Parse user input into a code. Surrounding whitespace and letter case
    /// are ignored; anything else that is not `QC-XXXX-XXXX-XXXX` (hex `X`)
    /// is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_uppercase();
        let mut parts = normalized.split('-');
        if parts.next() != Some(CODE_PREFIX) {
            return None;
        }

        let groups: Vec<&str> = parts.collect();
        let well_formed = groups.len() == CODE_GROUPS
            && groups.iter().all(|g| {
                g.len() == CODE_GROUP_LEN && g.chars().all(|c| c.is_ascii_hexdigit())
            });

        if well_formed {
            Some(Self(normalized))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VerificationCode {
    type Error = QcredError;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw).ok_or_else(|| {
            QcredError::Serialization(format!("malformed verification code {:?}", raw))
        })
    }
}

impl From<VerificationCode> for String {
    fn from(code: VerificationCode) -> Self {
        code.0
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renewal state of a certificate at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RenewalUrgency {
    /// Expiry date reached or passed.
    Expired,
    /// Expires within the urgent window (7 days by default).
    Urgent,
    /// Expires within the renewal window (30 days by default).
    NeedsRenewal,
    Valid,
}

/// An issued certification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    /// Identifier derived from the verification digest.
    pub id: Uuid,
    pub user_id: String,
    pub tier: BadgeTier,
    pub score: f64,
    pub max_score: f64,
    pub issued_at: DateTime<Utc>,
    /// Always later than `issued_at`.
    pub expires_at: DateTime<Utc>,
    pub verification_code: VerificationCode,
}

impl Certificate {
    /// True when `as_of` is strictly after the expiry instant.
    pub fn is_expired(&self, as_of: DateTime<Utc>) -> bool {
        as_of > self.expires_at
    }

    /// Whole calendar days from `as_of` to the expiry date. Zero or negative
    /// once the expiry date is reached.
    pub fn days_until_expiry(&self, as_of: DateTime<Utc>) -> i64 {
        (self.expires_at.date_naive() - as_of.date_naive()).num_days()
    }

    /// Score as a percentage of the maximum.
    pub fn score_percentage(&self) -> Result<f64> {
        score_percentage(self.score, self.max_score)
    }

    /// SHA-256(user_id || 0x00 || tier || score_le || max_score_le || issued_at_rfc3339).
    fn digest(
        user_id: &str,
        tier: BadgeTier,
        score: f64,
        max_score: f64,
        issued_at: DateTime<Utc>,
    ) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(user_id.as_bytes());
        hasher.update([0u8]);
        hasher.update(tier.as_str().as_bytes());
        hasher.update(score.to_le_bytes());
        hasher.update(max_score.to_le_bytes());
        hasher.update(issued_at.to_rfc3339().as_bytes());
        let result = hasher.finalize();
        let mut out = [0u8; 32];
        out.copy_from_slice(&result);
        out
    }
}

/// Issuance and renewal rules taken from a standards version.
#[derive(Debug, Clone, PartialEq)]
pub struct CertificatePolicy {
    pub validity_years: u32,
    pub min_passing_percentage: f64,
    pub urgent_days: i64,
    pub needs_renewal_days: i64,
}

impl Default for CertificatePolicy {
    fn default() -> Self {
        Self::from_standards(&StandardsConfig::default())
    }
}

impl CertificatePolicy {
    pub fn from_standards(standards: &StandardsConfig) -> Self {
        Self {
            validity_years: standards.certificate_validity_years,
            min_passing_percentage: standards.min_passing_percentage,
            urgent_days: standards.renewal.urgent_days,
            needs_renewal_days: standards.renewal.needs_renewal_days,
        }
    }

    /// Issue a certificate valid from `issued_at` for the policy's validity period.
    ///
    /// # Errors
    /// - `ContractViolation` if the score breaks the score/max-score contract
    ///   or `user_id` is empty.
    /// - `BelowPassingScore` if the score percentage is under the passing
    ///   percentage (including `max_score <= 0`, which scores 0%).
    pub fn issue(
        &self,
        user_id: &str,
        tier: BadgeTier,
        score: f64,
        max_score: f64,
        issued_at: DateTime<Utc>,
    ) -> Result<Certificate> {
        if user_id.trim().is_empty() {
            return Err(QcredError::contract_violation(
                "certificate user id must not be empty",
            ));
        }

        let percentage = score_percentage(score, max_score)?;
        if percentage < self.min_passing_percentage {
            tracing::debug!(
                user_id,
                percentage,
                required = self.min_passing_percentage,
                "certificate refused: below passing score"
            );
            return Err(QcredError::BelowPassingScore {
                percentage,
                required: self.min_passing_percentage,
            });
        }

        let expires_at = issued_at
            .checked_add_months(Months::new(self.validity_years.saturating_mul(12)))
            .ok_or_else(|| {
                QcredError::contract_violation(format!(
                    "issue date {} has no representable expiry",
                    issued_at
                ))
            })?;
        if expires_at <= issued_at {
            return Err(QcredError::Config(format!(
                "validity period of {} years does not move expiry past issue date",
                self.validity_years
            )));
        }

        let digest = Certificate::digest(user_id, tier, score, max_score, issued_at);
        let mut id_bytes = [0u8; 16];
        id_bytes.copy_from_slice(&digest[..16]);

        tracing::debug!(user_id, %tier, %issued_at, %expires_at, "certificate issued");

        Ok(Certificate {
            id: Uuid::from_bytes(id_bytes),
            user_id: user_id.to_string(),
            tier,
            score,
            max_score,
            issued_at,
            expires_at,
            verification_code: VerificationCode::derive(&digest),
        })
    }

    /// Issue a fresh certificate for the same user and tier, starting at
    /// `renewed_at`. The new score must pass on its own.
    pub fn renew(
        &self,
        previous: &Certificate,
        score: f64,
        max_score: f64,
        renewed_at: DateTime<Utc>,
    ) -> Result<Certificate> {
        if renewed_at < previous.issued_at {
            return Err(QcredError::contract_violation(format!(
                "renewal at {} precedes original issue at {}",
                renewed_at, previous.issued_at
            )));
        }
        self.issue(&previous.user_id, previous.tier, score, max_score, renewed_at)
    }

    /// Renewal state of `certificate` at `as_of`.
    pub fn renewal_urgency(&self, certificate: &Certificate, as_of: DateTime<Utc>) -> RenewalUrgency {
        let days = certificate.days_until_expiry(as_of);
        if days <= 0 {
            RenewalUrgency::Expired
        } else if days <= self.urgent_days {
            RenewalUrgency::Urgent
        } else if days <= self.needs_renewal_days {
            RenewalUrgency::NeedsRenewal
        } else {
            RenewalUrgency::Valid
        }
    }
}
