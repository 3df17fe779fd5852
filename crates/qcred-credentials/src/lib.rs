// crates/qcred-credentials/src/lib.rs
//
// qcred-credentials: Badge tiers, fidelity grades, certificate lifecycle,
// and certificate verification.
//
// Badge tiers and fidelity grades are threshold ladders compiled from the
// standards configuration. Certificates carry a fixed validity window and a
// deterministic verification code; verification looks codes up in a corpus
// owned by the caller.

pub mod badge;
pub mod certificate;
pub mod fidelity;
pub mod verification;

pub use badge::{BadgeClassifier, BadgeProgress, BadgeTier};
pub use certificate::{Certificate, CertificatePolicy, RenewalUrgency, VerificationCode};
pub use fidelity::{FidelityClassifier, FidelityGrade};
pub use verification::{
    verify, CertificateCorpus, CertificateVerification, InMemoryCorpus, VerificationFailure,
};
