// crates/qcred-credentials/src/verification.rs
//
// Certificate verification against a caller-owned corpus.
//
// Every outcome of a lookup (found and valid, found but expired, unknown
// code, malformed code) is a normal result. Only a corpus that cannot answer
// is an error.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use qcred_core::{QcredError, Result};

use crate::certificate::{Certificate, VerificationCode};

/// Source of issued certificates, keyed by verification code.
///
/// Implemented by the data-access layer; [`InMemoryCorpus`] is provided for
/// snapshots already held in memory.
pub trait CertificateCorpus: Send + Sync {
    /// Find the certificate carrying `code`, if any.
    fn find_by_code(&self, code: &VerificationCode) -> Result<Option<Certificate>>;
}

/// Why a verification did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationFailure {
    /// The code is well formed but no certificate carries it.
    NotFound,
    /// The code is not of the form `QC-XXXX-XXXX-XXXX`.
    MalformedCode,
    /// The certificate exists but expired before the verification instant.
    Expired,
}

/// Outcome of verifying a code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateVerification {
    pub is_valid: bool,
    /// The certificate found, valid or not.
    pub certificate: Option<Certificate>,
    /// Set whenever `is_valid` is false.
    pub reason: Option<VerificationFailure>,
}

impl CertificateVerification {
    fn valid(certificate: Certificate) -> Self {
        Self {
            is_valid: true,
            certificate: Some(certificate),
            reason: None,
        }
    }

    fn invalid(certificate: Option<Certificate>, reason: VerificationFailure) -> Self {
        Self {
            is_valid: false,
            certificate,
            reason: Some(reason),
        }
    }
}

/// Look `code` up in `corpus` and check the certificate is live at `as_of`.
pub fn verify(
    code: &str,
    corpus: &dyn CertificateCorpus,
    as_of: DateTime<Utc>,
) -> Result<CertificateVerification> {
    let code = match VerificationCode::parse(code) {
        Some(code) => code,
        None => {
            tracing::debug!(code, "verification rejected: malformed code");
            return Ok(CertificateVerification::invalid(
                None,
                VerificationFailure::MalformedCode,
            ));
        }
    };

    let certificate = match corpus.find_by_code(&code)? {
        Some(certificate) => certificate,
        None => {
            tracing::debug!(%code, "verification failed: not found");
            return Ok(CertificateVerification::invalid(
                None,
                VerificationFailure::NotFound,
            ));
        }
    };

    if certificate.is_expired(as_of) {
        tracing::debug!(%code, expires_at = %certificate.expires_at, "verification failed: expired");
        return Ok(CertificateVerification::invalid(
            Some(certificate),
            VerificationFailure::Expired,
        ));
    }

    Ok(CertificateVerification::valid(certificate))
}

/// Certificates held in memory, keyed by verification code.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    by_code: HashMap<VerificationCode, Certificate>,
}

impl InMemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from `certificates`, failing on the first code clash.
    pub fn from_certificates(certificates: impl IntoIterator<Item = Certificate>) -> Result<Self> {
        let mut corpus = Self::new();
        for certificate in certificates {
            corpus.insert(certificate)?;
        }
        Ok(corpus)
    }

    /// Add a certificate. Re-inserting the same certificate is a no-op.
    ///
    /// # Errors
    /// `ContractViolation` if a different certificate already holds the code.
    pub fn insert(&mut self, certificate: Certificate) -> Result<()> {
        match self.by_code.entry(certificate.verification_code.clone()) {
            Entry::Occupied(existing) if existing.get().id != certificate.id => {
                Err(QcredError::contract_violation(format!(
                    "verification code {} already belongs to certificate {}",
                    certificate.verification_code,
                    existing.get().id
                )))
            }
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(slot) => {
                slot.insert(certificate);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

impl CertificateCorpus for InMemoryCorpus {
    fn find_by_code(&self, code: &VerificationCode) -> Result<Option<Certificate>> {
        Ok(self.by_code.get(code).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::BadgeTier;
    use crate::certificate::CertificatePolicy;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn corpus_with_one() -> (InMemoryCorpus, Certificate) {
        let cert = CertificatePolicy::default()
            .issue("alice", BadgeTier::Silver, 80.0, 100.0, at(2025, 3, 1))
            .unwrap();
        let corpus = InMemoryCorpus::from_certificates(vec![cert.clone()]).unwrap();
        (corpus, cert)
    }

    struct FailingCorpus;

    impl CertificateCorpus for FailingCorpus {
        fn find_by_code(&self, _code: &VerificationCode) -> Result<Option<Certificate>> {
            Err(QcredError::Corpus("backend unavailable".to_string()))
        }
    }

    #[test]
    fn valid_certificate_verifies() {
        let (corpus, cert) = corpus_with_one();
        let result = verify(cert.verification_code.as_str(), &corpus, at(2026, 1, 1)).unwrap();
        assert!(result.is_valid);
        assert_eq!(result.reason, None);
        assert_eq!(result.certificate, Some(cert));
    }

    #[test]
    fn lower_case_input_still_verifies() {
        let (corpus, cert) = corpus_with_one();
        let lower = cert.verification_code.as_str().to_lowercase();
        let result = verify(&lower, &corpus, at(2026, 1, 1)).unwrap();
        assert!(result.is_valid);
    }

    #[test]
    fn expired_certificate_is_found_but_invalid() {
        let (corpus, cert) = corpus_with_one();
        let result = verify(cert.verification_code.as_str(), &corpus, at(2027, 6, 1)).unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.reason, Some(VerificationFailure::Expired));
        assert_eq!(result.certificate.map(|c| c.user_id), Some("alice".to_string()));
    }

    #[test]
    fn unknown_code_is_not_found() {
        let (corpus, _) = corpus_with_one();
        let result = verify("QC-0000-0000-0000", &corpus, at(2026, 1, 1)).unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.reason, Some(VerificationFailure::NotFound));
        assert!(result.certificate.is_none());
    }

    #[test]
    fn malformed_code_is_distinct_from_not_found() {
        let (corpus, _) = corpus_with_one();
        let result = verify("certificate-please", &corpus, at(2026, 1, 1)).unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.reason, Some(VerificationFailure::MalformedCode));
    }

    #[test]
    fn corpus_failure_propagates() {
        let result = verify("QC-0000-0000-0000", &FailingCorpus, at(2026, 1, 1));
        assert!(matches!(result, Err(QcredError::Corpus(_))));
    }

    #[test]
    fn reinserting_same_certificate_is_a_no_op() {
        let (mut corpus, cert) = corpus_with_one();
        corpus.insert(cert).unwrap();
        assert_eq!(corpus.len(), 1);
        assert!(!corpus.is_empty());
    }

    #[test]
    fn code_clash_with_another_certificate_is_refused() {
        let (mut corpus, cert) = corpus_with_one();
        let mut other = CertificatePolicy::default()
            .issue("mallory", BadgeTier::Gold, 95.0, 100.0, at(2025, 4, 1))
            .unwrap();
        other.verification_code = cert.verification_code.clone();

        let result = corpus.insert(other.clone());
        assert!(matches!(result, Err(QcredError::ContractViolation(_))));
        assert_eq!(corpus.len(), 1);

        let found = verify(cert.verification_code.as_str(), &corpus, at(2026, 1, 1)).unwrap();
        assert_eq!(found.certificate.map(|c| c.user_id), Some("alice".to_string()));

        assert!(InMemoryCorpus::from_certificates(vec![cert, other]).is_err());
    }
}
