// crates/qcred-engine/src/engine.rs
//
// CredentialEngine: one standards version compiled into every classifier.
//
// The engine is built once from a `StandardsConfig` and is immutable
// afterwards; every method is a pure function of its arguments and the
// compiled standards, so a single engine can be shared across threads.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use qcred_core::{CitationMetrics, CitationProfile, Result, StandardsConfig};
use qcred_credentials::{
    BadgeClassifier, BadgeProgress, BadgeTier, Certificate, CertificateCorpus,
    CertificatePolicy, CertificateVerification, FidelityClassifier, FidelityGrade,
    RenewalUrgency,
};
use qcred_matching::{
    CandidateProfile, FitLevel, JobMatch, JobRequirements, MatchScorer,
};
use qcred_ranking::{Leaderboard, LeaderboardFilter, RawScore};

/// Everything the engine derives for one researcher in a single pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearcherCredentials {
    pub citations: CitationMetrics,
    pub badge: Option<BadgeTier>,
    pub badge_progress: BadgeProgress,
    /// Present when a fidelity measurement was supplied.
    pub fidelity_grade: Option<FidelityGrade>,
    pub next_fidelity_grade: Option<FidelityGrade>,
    /// Progress toward `next_fidelity_grade`, in [0, 1].
    pub fidelity_progress: Option<f64>,
}

/// Credentialing and ranking engine for one standards version.
#[derive(Debug, Clone)]
pub struct CredentialEngine {
    standards: StandardsConfig,
    badges: BadgeClassifier,
    fidelity: FidelityClassifier,
    certificates: CertificatePolicy,
    matcher: MatchScorer,
}

impl CredentialEngine {
    /// Validate `standards` and compile every ladder.
    pub fn new(standards: StandardsConfig) -> Result<Self> {
        standards.validate()?;
        let engine = Self {
            badges: BadgeClassifier::new(&standards.badges)?,
            fidelity: FidelityClassifier::new(&standards.fidelity)?,
            certificates: CertificatePolicy::from_standards(&standards),
            matcher: MatchScorer::new(&standards)?,
            standards,
        };
        tracing::info!(
            validity_years = engine.standards.certificate_validity_years,
            min_passing_percentage = engine.standards.min_passing_percentage,
            "credential engine ready"
        );
        Ok(engine)
    }

    /// Engine for the standards file at `path`, or the published defaults
    /// when the file is absent.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(StandardsConfig::load_or_default(path)?)
    }

    /// Engine for the published default standards.
    pub fn with_default_standards() -> Result<Self> {
        Self::new(StandardsConfig::default())
    }

    pub fn standards(&self) -> &StandardsConfig {
        &self.standards
    }

    // ----- metric calculators -------------------------------------------

    pub fn h_index(&self, citations: &[u64]) -> u32 {
        qcred_core::h_index(citations)
    }

    /// i10-index using the configured citation threshold.
    pub fn i10_index(&self, citations: &[u64]) -> u32 {
        qcred_core::count_at_least(citations, self.standards.i10_threshold)
    }

    pub fn average_citations_per_publication(&self, total_citations: u64, publications: u32) -> f64 {
        qcred_core::average_citations_per_publication(total_citations, publications)
    }

    pub fn score_percentage(&self, score: f64, max_score: f64) -> Result<f64> {
        qcred_core::score_percentage(score, max_score)
    }

    pub fn citation_metrics(&self, profile: &CitationProfile) -> CitationMetrics {
        profile.metrics(self.standards.i10_threshold)
    }

    // ----- tier and grade classifiers -----------------------------------

    pub fn badge_tier_for(&self, publications: u32, citations: u64) -> Option<BadgeTier> {
        self.badges.tier_for(publications, citations)
    }

    pub fn badge_progress(&self, publications: u32, citations: u64) -> BadgeProgress {
        self.badges.progress(publications, citations)
    }

    pub fn fidelity_grade_for(&self, percentage: f64) -> Result<FidelityGrade> {
        self.fidelity.grade_for(percentage)
    }

    pub fn next_grade(&self, grade: FidelityGrade) -> Option<FidelityGrade> {
        self.fidelity.next_grade(grade)
    }

    pub fn progress_to_next_grade(&self, grade: FidelityGrade, measured: f64) -> Result<f64> {
        self.fidelity.progress_to_next_grade(grade, measured)
    }

    pub fn fit_level_for(&self, match_score: f64) -> Result<FitLevel> {
        self.matcher.fit_level_for(match_score)
    }

    /// Citation indices, badge, and fidelity standing for one researcher.
    pub fn credentials_for(
        &self,
        profile: &CitationProfile,
        best_fidelity: Option<f64>,
    ) -> Result<ResearcherCredentials> {
        let citations = self.citation_metrics(profile);
        let activity = profile.activity();

        let (fidelity_grade, next_fidelity_grade, fidelity_progress) = match best_fidelity {
            Some(pct) => {
                let grade = self.fidelity.grade_for(pct)?;
                let progress = self.fidelity.progress_to_next_grade(grade, pct)?;
                (Some(grade), self.fidelity.next_grade(grade), Some(progress))
            }
            None => (None, None, None),
        };

        Ok(ResearcherCredentials {
            citations,
            badge: self.badges.tier_for(activity.publications, activity.citations),
            badge_progress: self.badges.progress(activity.publications, activity.citations),
            fidelity_grade,
            next_fidelity_grade,
            fidelity_progress,
        })
    }

    // ----- certificate lifecycle -----------------------------------------

    pub fn issue_certificate(
        &self,
        user_id: &str,
        tier: BadgeTier,
        score: f64,
        max_score: f64,
        issued_at: DateTime<Utc>,
    ) -> Result<Certificate> {
        self.certificates.issue(user_id, tier, score, max_score, issued_at)
    }

    pub fn renew_certificate(
        &self,
        previous: &Certificate,
        score: f64,
        max_score: f64,
        renewed_at: DateTime<Utc>,
    ) -> Result<Certificate> {
        self.certificates.renew(previous, score, max_score, renewed_at)
    }

    pub fn is_expired(&self, certificate: &Certificate, as_of: DateTime<Utc>) -> bool {
        certificate.is_expired(as_of)
    }

    pub fn renewal_urgency(&self, certificate: &Certificate, as_of: DateTime<Utc>) -> RenewalUrgency {
        self.certificates.renewal_urgency(certificate, as_of)
    }

    /// Renewal urgency against the current wall-clock time.
    pub fn renewal_urgency_now(&self, certificate: &Certificate) -> RenewalUrgency {
        self.renewal_urgency(certificate, Utc::now())
    }

    pub fn verify_certificate(
        &self,
        code: &str,
        corpus: &dyn CertificateCorpus,
        as_of: DateTime<Utc>,
    ) -> Result<CertificateVerification> {
        qcred_credentials::verify(code, corpus, as_of)
    }

    // ----- job matching ----------------------------------------------------

    pub fn compute_match(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirements,
    ) -> Result<JobMatch> {
        self.matcher.compute_match(candidate, job)
    }

    /// Score `candidate` against every job, best match first.
    pub fn match_jobs(
        &self,
        candidate: &CandidateProfile,
        jobs: &[JobRequirements],
    ) -> Result<Vec<JobMatch>> {
        let mut matches = jobs
            .iter()
            .map(|job| self.matcher.compute_match(candidate, job))
            .collect::<Result<Vec<_>>>()?;
        qcred_matching::rank_matches(&mut matches);
        Ok(matches)
    }

    // ----- leaderboards ----------------------------------------------------

    pub fn build_leaderboard(
        &self,
        scores: &[RawScore],
        filter: Option<&LeaderboardFilter>,
        requesting_user: Option<&str>,
    ) -> Result<Leaderboard> {
        qcred_ranking::build(scores, filter, requesting_user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcred_core::{PublicationCitations, QcredError};

    fn engine() -> CredentialEngine {
        CredentialEngine::with_default_standards().unwrap()
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CredentialEngine>();
    }

    #[test]
    fn invalid_standards_rejected_at_construction() {
        let mut standards = StandardsConfig::default();
        standards.fit.good = 0.3; // below moderate
        assert!(matches!(
            CredentialEngine::new(standards),
            Err(QcredError::Config(_))
        ));

        let mut standards = StandardsConfig::default();
        standards.certificate_validity_years = 0;
        assert!(CredentialEngine::new(standards).is_err());
    }

    #[test]
    fn missing_standards_file_falls_back_to_defaults() {
        let e = CredentialEngine::from_path("/nonexistent/qcred/standards.toml").unwrap();
        assert_eq!(e.standards(), &StandardsConfig::default());
    }

    #[test]
    fn i10_follows_configured_threshold() {
        let mut standards = StandardsConfig::default();
        standards.i10_threshold = 5;
        let e = CredentialEngine::new(standards).unwrap();
        assert_eq!(e.i10_index(&[10, 8, 5, 4, 3, 2, 1]), 3);
        assert_eq!(engine().i10_index(&[10, 8, 5, 4, 3, 2, 1]), 1);
    }

    #[test]
    fn credentials_summary() {
        let profile = CitationProfile {
            total_citations: 33,
            publications: [10u64, 8, 5, 4, 3, 2, 1]
                .iter()
                .enumerate()
                .map(|(i, &c)| PublicationCitations {
                    publication_id: format!("circuit-{}", i),
                    citations: c,
                })
                .collect(),
        };
        let creds = engine().credentials_for(&profile, Some(99.2)).unwrap();
        assert_eq!(creds.citations.h_index, 4);
        assert_eq!(creds.citations.i10_index, 1);
        assert_eq!(creds.badge, Some(BadgeTier::Silver));
        assert_eq!(creds.badge_progress.next, Some(BadgeTier::Gold));
        assert_eq!(creds.fidelity_grade, Some(FidelityGrade::Silver));
        assert_eq!(creds.next_fidelity_grade, Some(FidelityGrade::Gold));
        let progress = creds.fidelity_progress.unwrap();
        assert!((progress - 0.4).abs() < 1e-9);
    }

    #[test]
    fn credentials_without_fidelity() {
        let creds = engine()
            .credentials_for(&CitationProfile::default(), None)
            .unwrap();
        assert_eq!(creds.badge, None);
        assert_eq!(creds.fidelity_grade, None);
        assert_eq!(creds.fidelity_progress, None);
    }
}
