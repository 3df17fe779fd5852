// crates/qcred-engine/src/lib.rs
//
// qcred-engine: Credentialing and ranking engine facade.
//
// `CredentialEngine` compiles one standards version into every classifier
// (badge tiers, fidelity grades, fit levels, certificate policy, match
// scorer) and exposes each derivation as a method. Storage, transport, and
// presentation belong to the caller; the engine only computes.

pub mod engine;

pub use engine::{CredentialEngine, ResearcherCredentials};

// Re-export the member crates so callers need a single dependency.
pub use qcred_core;
pub use qcred_credentials;
pub use qcred_matching;
pub use qcred_ranking;

pub use qcred_core::{QcredError, Result, StandardsConfig};
