// crates/qcred-matching/src/scorer.rs
//
// Weighted job-match scoring.
//
// Each criterion a job states produces one reason: positive when the
// candidate meets it, negative (weighted by the size of the shortfall) when
// not. The match score is P / (P + N) over the summed positive and negative
// weights, which keeps it in [0, 1], never lowers it when a positive reason
// is added, and never raises it when a negative reason is added.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use qcred_core::{ensure_unit_interval, MatchWeights, Result, StandardsConfig};
use qcred_credentials::{BadgeClassifier, BadgeTier, FidelityClassifier, FidelityGrade};

use crate::fit::{FitClassifier, FitLevel};
use crate::skills::{SkillGap, SkillImportance, SkillLevel, SkillRequirement};

/// Criterion a reason was derived from. Declaration order breaks weight ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchCategory {
    Skills,
    Experience,
    Publications,
    Fidelity,
    Badge,
    Location,
}

/// Whether a reason speaks for or against the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Polarity {
    Positive,
    Negative,
}

/// One weighted argument for or against a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReason {
    pub category: MatchCategory,
    pub description: String,
    /// In [0, 1].
    pub weight: f64,
    pub polarity: Polarity,
}

impl MatchReason {
    /// Build a reason, refusing weights outside [0, 1].
    pub fn new(
        category: MatchCategory,
        description: impl Into<String>,
        weight: f64,
        polarity: Polarity,
    ) -> Result<Self> {
        let weight = ensure_unit_interval(weight, "reason weight")?;
        Ok(Self {
            category,
            description: description.into(),
            weight,
            polarity,
        })
    }

    pub fn is_positive(&self) -> bool {
        self.polarity == Polarity::Positive
    }
}

/// Candidate snapshot supplied by the data-access layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub user_id: String,
    /// Skill name to proficiency. Skills not listed are level `None`.
    #[serde(default)]
    pub skills: BTreeMap<String, SkillLevel>,
    #[serde(default)]
    pub years_experience: u32,
    #[serde(default)]
    pub publications: u32,
    #[serde(default)]
    pub citations: u64,
    /// Best measured circuit fidelity, in percent.
    #[serde(default)]
    pub best_fidelity: Option<f64>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Job posting requirements supplied by the data-access layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobRequirements {
    pub job_id: String,
    #[serde(default)]
    pub skills: Vec<SkillRequirement>,
    #[serde(default)]
    pub min_years_experience: Option<u32>,
    #[serde(default)]
    pub min_publications: Option<u32>,
    #[serde(default)]
    pub min_fidelity_grade: Option<FidelityGrade>,
    #[serde(default)]
    pub min_badge_tier: Option<BadgeTier>,
    /// Country the role is based in. Ignored for remote roles.
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub remote: bool,
}

/// Scored match of one candidate against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub job_id: String,
    pub user_id: String,
    /// In [0, 1].
    pub match_score: f64,
    pub fit_level: FitLevel,
    pub reasons: Vec<MatchReason>,
    /// Only skills the candidate falls short on.
    pub skill_gaps: Vec<SkillGap>,
}

impl JobMatch {
    /// The `n` highest-weight positive reasons. Equal weights are ordered by
    /// category declaration order, then description.
    pub fn top_reasons(&self, n: usize) -> Vec<&MatchReason> {
        let mut positive: Vec<&MatchReason> =
            self.reasons.iter().filter(|r| r.is_positive()).collect();
        positive.sort_by(|a, b| compare_reasons(a, b));
        positive.truncate(n);
        positive
    }

    /// Negative reasons, heaviest first.
    pub fn concerns(&self) -> Vec<&MatchReason> {
        let mut negative: Vec<&MatchReason> =
            self.reasons.iter().filter(|r| !r.is_positive()).collect();
        negative.sort_by(|a, b| compare_reasons(a, b));
        negative
    }

    /// Gaps on required skills missing by more than one level.
    pub fn critical_gaps(&self) -> Vec<&SkillGap> {
        self.skill_gaps.iter().filter(|g| g.is_critical()).collect()
    }
}

fn compare_reasons(a: &MatchReason, b: &MatchReason) -> Ordering {
    b.weight
        .total_cmp(&a.weight)
        .then_with(|| a.category.cmp(&b.category))
        .then_with(|| a.description.cmp(&b.description))
}

/// P / (P + N) over positive and negative reason weights; 0 with no weight.
pub fn aggregate_score(reasons: &[MatchReason]) -> f64 {
    let (positive, negative) = reasons.iter().fold((0.0_f64, 0.0_f64), |(p, n), r| {
        match r.polarity {
            Polarity::Positive => (p + r.weight, n),
            Polarity::Negative => (p, n + r.weight),
        }
    });
    let total = positive + negative;
    if total <= 0.0 {
        return 0.0;
    }
    (positive / total).clamp(0.0, 1.0)
}

/// Order matches best first; equal scores fall back to job id, then user id.
pub fn rank_matches(matches: &mut [JobMatch]) {
    matches.sort_by(|a, b| {
        b.match_score
            .total_cmp(&a.match_score)
            .then_with(|| a.job_id.cmp(&b.job_id))
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
}

/// Fraction of `required` that `current` falls short by, in [0, 1].
fn shortfall(current: f64, required: f64) -> f64 {
    if required <= 0.0 || current >= required {
        return 0.0;
    }
    ((required - current) / required).clamp(0.0, 1.0)
}

/// Job-match scorer compiled from a standards version.
#[derive(Debug, Clone)]
pub struct MatchScorer {
    weights: MatchWeights,
    fit: FitClassifier,
    fidelity: FidelityClassifier,
    badges: BadgeClassifier,
}

impl MatchScorer {
    pub fn new(standards: &StandardsConfig) -> Result<Self> {
        for (name, weight) in standards.match_weights.entries() {
            ensure_unit_interval(weight, name)?;
        }

        Ok(Self {
            weights: standards.match_weights.clone(),
            fit: FitClassifier::new(&standards.fit)?,
            fidelity: FidelityClassifier::new(&standards.fidelity)?,
            badges: BadgeClassifier::new(&standards.badges)?,
        })
    }

    /// Fit level for a match score under this scorer's standards.
    pub fn fit_level_for(&self, match_score: f64) -> Result<FitLevel> {
        self.fit.fit_level_for(match_score)
    }

    /// Score `candidate` against `job`.
    ///
    /// # Errors
    /// `ContractViolation` if the candidate's fidelity lies outside [0, 100].
    pub fn compute_match(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirements,
    ) -> Result<JobMatch> {
        let mut reasons = Vec::new();
        let mut skill_gaps = Vec::new();

        self.skill_reasons(candidate, &job.skills, &mut reasons, &mut skill_gaps)?;
        self.experience_reason(candidate, job, &mut reasons)?;
        self.publication_reason(candidate, job, &mut reasons)?;
        self.fidelity_reason(candidate, job, &mut reasons)?;
        self.badge_reason(candidate, job, &mut reasons)?;
        self.location_reason(candidate, job, &mut reasons)?;

        let result = self.assemble(&job.job_id, &candidate.user_id, reasons, skill_gaps)?;
        tracing::debug!(
            job_id = %result.job_id,
            user_id = %result.user_id,
            match_score = result.match_score,
            fit = %result.fit_level,
            "computed job match"
        );
        Ok(result)
    }

    /// Build a match from already-derived reasons and gaps.
    pub fn assemble(
        &self,
        job_id: &str,
        user_id: &str,
        reasons: Vec<MatchReason>,
        skill_gaps: Vec<SkillGap>,
    ) -> Result<JobMatch> {
        for reason in &reasons {
            ensure_unit_interval(reason.weight, "reason weight")?;
        }
        let match_score = aggregate_score(&reasons);
        Ok(JobMatch {
            job_id: job_id.to_string(),
            user_id: user_id.to_string(),
            match_score,
            fit_level: self.fit.fit_level_for(match_score)?,
            reasons,
            skill_gaps,
        })
    }

    fn importance_weight(&self, importance: SkillImportance) -> f64 {
        match importance {
            SkillImportance::Required => self.weights.required_skill,
            SkillImportance::Preferred => self.weights.preferred_skill,
            SkillImportance::NiceToHave => self.weights.nice_to_have_skill,
        }
    }

    fn skill_reasons(
        &self,
        candidate: &CandidateProfile,
        requirements: &[SkillRequirement],
        reasons: &mut Vec<MatchReason>,
        gaps: &mut Vec<SkillGap>,
    ) -> Result<()> {
        for req in requirements {
            if req.level == SkillLevel::None {
                continue;
            }
            let current = SkillLevel::or_none(candidate.skills.get(&req.skill).copied());
            let gap = SkillGap {
                skill: req.skill.clone(),
                required_level: req.level,
                current_level: current,
                importance: req.importance,
            };
            let weight = self.importance_weight(req.importance);

            if gap.gap_size() == 0 {
                reasons.push(MatchReason::new(
                    MatchCategory::Skills,
                    format!("{} at {} meets the {} requirement", req.skill, current, req.level),
                    weight,
                    Polarity::Positive,
                )?);
            } else {
                let missing = gap.gap_size() as f64 / req.level.rank() as f64;
                reasons.push(MatchReason::new(
                    MatchCategory::Skills,
                    format!("{} at {} is below the {} requirement", req.skill, current, req.level),
                    weight * missing,
                    Polarity::Negative,
                )?);
                gaps.push(gap);
            }
        }
        Ok(())
    }

    fn experience_reason(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirements,
        reasons: &mut Vec<MatchReason>,
    ) -> Result<()> {
        let Some(min_years) = job.min_years_experience else {
            return Ok(());
        };
        let reason = if candidate.years_experience >= min_years {
            MatchReason::new(
                MatchCategory::Experience,
                format!("{} years of experience (minimum {})", candidate.years_experience, min_years),
                self.weights.experience,
                Polarity::Positive,
            )?
        } else {
            MatchReason::new(
                MatchCategory::Experience,
                format!("{} years of experience, {} required", candidate.years_experience, min_years),
                self.weights.experience
                    * shortfall(candidate.years_experience as f64, min_years as f64),
                Polarity::Negative,
            )?
        };
        reasons.push(reason);
        Ok(())
    }

    fn publication_reason(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirements,
        reasons: &mut Vec<MatchReason>,
    ) -> Result<()> {
        let Some(min_publications) = job.min_publications else {
            return Ok(());
        };
        let reason = if candidate.publications >= min_publications {
            MatchReason::new(
                MatchCategory::Publications,
                format!("{} published circuits (minimum {})", candidate.publications, min_publications),
                self.weights.publications,
                Polarity::Positive,
            )?
        } else {
            MatchReason::new(
                MatchCategory::Publications,
                format!("{} published circuits, {} required", candidate.publications, min_publications),
                self.weights.publications
                    * shortfall(candidate.publications as f64, min_publications as f64),
                Polarity::Negative,
            )?
        };
        reasons.push(reason);
        Ok(())
    }

    fn fidelity_reason(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirements,
        reasons: &mut Vec<MatchReason>,
    ) -> Result<()> {
        // Validate even when the job sets no minimum so bad measurements surface.
        let grade = match candidate.best_fidelity {
            Some(pct) => Some(self.fidelity.grade_for(pct)?),
            None => None,
        };
        let Some(min_grade) = job.min_fidelity_grade else {
            return Ok(());
        };

        let reason = match grade {
            Some(grade) if grade >= min_grade => MatchReason::new(
                MatchCategory::Fidelity,
                format!("circuit fidelity graded {} (minimum {})", grade, min_grade),
                self.weights.fidelity,
                Polarity::Positive,
            )?,
            Some(grade) => {
                let have = grade_position(grade) as f64;
                let need = grade_position(min_grade) as f64;
                MatchReason::new(
                    MatchCategory::Fidelity,
                    format!("circuit fidelity graded {}, {} required", grade, min_grade),
                    self.weights.fidelity * shortfall(have, need),
                    Polarity::Negative,
                )?
            }
            None => MatchReason::new(
                MatchCategory::Fidelity,
                format!("no fidelity measurement, {} required", min_grade),
                self.weights.fidelity,
                Polarity::Negative,
            )?,
        };
        reasons.push(reason);
        Ok(())
    }

    fn badge_reason(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirements,
        reasons: &mut Vec<MatchReason>,
    ) -> Result<()> {
        let Some(min_tier) = job.min_badge_tier else {
            return Ok(());
        };
        let tier = self
            .badges
            .tier_for(candidate.publications, candidate.citations);

        let reason = match tier {
            Some(tier) if tier >= min_tier => MatchReason::new(
                MatchCategory::Badge,
                format!("holds the {} badge (minimum {})", tier, min_tier),
                self.weights.badge,
                Polarity::Positive,
            )?,
            _ => {
                let have = badge_position(tier) as f64;
                let need = badge_position(Some(min_tier)) as f64;
                MatchReason::new(
                    MatchCategory::Badge,
                    format!("{} badge required", min_tier),
                    self.weights.badge * shortfall(have, need),
                    Polarity::Negative,
                )?
            }
        };
        reasons.push(reason);
        Ok(())
    }

    fn location_reason(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirements,
        reasons: &mut Vec<MatchReason>,
    ) -> Result<()> {
        if job.remote {
            return Ok(());
        }
        let Some(job_country) = job.country.as_deref() else {
            return Ok(());
        };

        let same_country = candidate
            .country
            .as_deref()
            .map(|c| c.eq_ignore_ascii_case(job_country))
            .unwrap_or(false);

        let reason = if same_country {
            MatchReason::new(
                MatchCategory::Location,
                format!("based in {}", job_country),
                self.weights.location,
                Polarity::Positive,
            )?
        } else {
            MatchReason::new(
                MatchCategory::Location,
                format!("on-site role in {}", job_country),
                self.weights.location,
                Polarity::Negative,
            )?
        };
        reasons.push(reason);
        Ok(())
    }
}

/// 1-based position of a fidelity grade (Developing = 1).
fn grade_position(grade: FidelityGrade) -> usize {
    FidelityGrade::ALL
        .iter()
        .position(|g| *g == grade)
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// Position of a badge tier with no tier as 0 (Bronze = 1).
fn badge_position(tier: Option<BadgeTier>) -> usize {
    tier.and_then(|t| BadgeTier::ALL.iter().position(|b| *b == t))
        .map(|i| i + 1)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcred_core::QcredError;

    fn scorer() -> MatchScorer {
        MatchScorer::new(&StandardsConfig::default()).unwrap()
    }

    fn reason(category: MatchCategory, weight: f64, polarity: Polarity) -> MatchReason {
        MatchReason::new(category, format!("{:?}", category), weight, polarity).unwrap()
    }

    fn candidate() -> CandidateProfile {
        let mut skills = BTreeMap::new();
        skills.insert("qiskit".to_string(), SkillLevel::Expert);
        skills.insert("error-correction".to_string(), SkillLevel::Intermediate);
        CandidateProfile {
            user_id: "researcher-7".to_string(),
            skills,
            years_experience: 6,
            publications: 22,
            citations: 75,
            best_fidelity: Some(99.6),
            country: Some("DE".to_string()),
        }
    }

    fn job() -> JobRequirements {
        JobRequirements {
            job_id: "job-1".to_string(),
            skills: vec![
                SkillRequirement {
                    skill: "qiskit".to_string(),
                    level: SkillLevel::Advanced,
                    importance: SkillImportance::Required,
                },
                SkillRequirement {
                    skill: "error-correction".to_string(),
                    level: SkillLevel::Advanced,
                    importance: SkillImportance::Preferred,
                },
                SkillRequirement {
                    skill: "pulse-control".to_string(),
                    level: SkillLevel::Advanced,
                    importance: SkillImportance::Required,
                },
            ],
            min_years_experience: Some(5),
            min_publications: Some(10),
            min_fidelity_grade: Some(FidelityGrade::Silver),
            min_badge_tier: Some(BadgeTier::Gold),
            country: Some("de".to_string()),
            remote: false,
        }
    }

    #[test]
    fn aggregate_is_positive_share() {
        let reasons = vec![
            reason(MatchCategory::Skills, 0.6, Polarity::Positive),
            reason(MatchCategory::Experience, 0.2, Polarity::Negative),
        ];
        assert!((aggregate_score(&reasons) - 0.75).abs() < 1e-10);
        assert!((aggregate_score(&[]) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn adding_positive_never_decreases_score() {
        let mut reasons = vec![reason(MatchCategory::Skills, 0.5, Polarity::Negative)];
        let mut last = aggregate_score(&reasons);
        for i in 0..10 {
            reasons.push(reason(MatchCategory::Badge, (i as f64) / 10.0, Polarity::Positive));
            let now = aggregate_score(&reasons);
            assert!(now >= last);
            assert!((0.0..=1.0).contains(&now));
            last = now;
        }
    }

    #[test]
    fn adding_negative_never_increases_score() {
        let mut reasons = vec![reason(MatchCategory::Skills, 0.9, Polarity::Positive)];
        let mut last = aggregate_score(&reasons);
        for i in 0..10 {
            reasons.push(reason(MatchCategory::Location, (i as f64) / 10.0, Polarity::Negative));
            let now = aggregate_score(&reasons);
            assert!(now <= last);
            last = now;
        }
    }

    #[test]
    fn reason_weight_out_of_range_rejected() {
        let result = MatchReason::new(MatchCategory::Skills, "x", 1.2, Polarity::Positive);
        assert!(matches!(result, Err(QcredError::ContractViolation(_))));
    }

    #[test]
    fn configured_weight_out_of_range_rejected() {
        let mut standards = StandardsConfig::default();
        standards.match_weights.location = 1.5;
        let err = MatchScorer::new(&standards).unwrap_err();
        assert!(matches!(err, QcredError::ContractViolation(ref msg) if msg.contains("location")));
    }

    #[test]
    fn fit_level_comes_from_the_scorer_standards() {
        let mut standards = StandardsConfig::default();
        standards.fit.strong = 0.8;
        standards.fit.excellent = 0.95;
        let s = MatchScorer::new(&standards).unwrap();
        assert_eq!(s.fit_level_for(0.78).unwrap(), FitLevel::Good);
        assert_eq!(scorer().fit_level_for(0.78).unwrap(), FitLevel::Strong);

        let m = s.compute_match(&candidate(), &job()).unwrap();
        assert_eq!(m.fit_level, s.fit_level_for(m.match_score).unwrap());
        assert!(s.fit_level_for(1.2).is_err());
    }

    #[test]
    fn full_match_produces_reasons_and_gaps() {
        let m = scorer().compute_match(&candidate(), &job()).unwrap();
        assert_eq!(m.job_id, "job-1");
        assert_eq!(m.user_id, "researcher-7");
        assert!((0.0..=1.0).contains(&m.match_score));

        // qiskit +, error-correction -, pulse-control -, experience +,
        // publications +, fidelity +, badge +, location +
        assert_eq!(m.reasons.len(), 8);
        assert_eq!(m.reasons.iter().filter(|r| r.is_positive()).count(), 6);

        assert_eq!(m.skill_gaps.len(), 2);
        let critical = m.critical_gaps();
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].skill, "pulse-control");
        assert_eq!(critical[0].current_level, SkillLevel::None);
    }

    #[test]
    fn match_score_matches_hand_computation() {
        let m = scorer().compute_match(&candidate(), &job()).unwrap();
        // positive: qiskit 1.0 + experience 0.8 + publications 0.6 + fidelity 0.7
        //           + badge 0.5 + location 0.4 = 4.0
        // negative: error-correction 0.6 * 1/3 = 0.2, pulse-control 1.0 * 3/3 = 1.0
        let expected = 4.0 / 5.2;
        assert!((m.match_score - expected).abs() < 1e-10);
        assert_eq!(m.fit_level, FitLevel::Strong);
    }

    #[test]
    fn top_reasons_break_ties_by_category() {
        let s = scorer();
        let m = s
            .assemble(
                "job",
                "user",
                vec![
                    reason(MatchCategory::Location, 0.5, Polarity::Positive),
                    reason(MatchCategory::Badge, 0.5, Polarity::Positive),
                    reason(MatchCategory::Skills, 0.9, Polarity::Positive),
                    reason(MatchCategory::Experience, 1.0, Polarity::Negative),
                    reason(MatchCategory::Publications, 0.5, Polarity::Positive),
                ],
                Vec::new(),
            )
            .unwrap();
        let top: Vec<MatchCategory> = m.top_reasons(3).iter().map(|r| r.category).collect();
        assert_eq!(
            top,
            vec![
                MatchCategory::Skills,
                MatchCategory::Publications,
                MatchCategory::Badge
            ]
        );
        assert_eq!(m.top_reasons(10).len(), 4);
        assert_eq!(m.concerns().len(), 1);
    }

    #[test]
    fn missing_fidelity_counts_against_when_required() {
        let mut c = candidate();
        c.best_fidelity = None;
        let m = scorer().compute_match(&c, &job()).unwrap();
        let fidelity = m
            .reasons
            .iter()
            .find(|r| r.category == MatchCategory::Fidelity)
            .unwrap();
        assert_eq!(fidelity.polarity, Polarity::Negative);
        assert!((fidelity.weight - 0.7).abs() < 1e-10);
    }

    #[test]
    fn out_of_range_fidelity_is_contract_violation() {
        let mut c = candidate();
        c.best_fidelity = Some(101.0);
        let mut j = job();
        j.min_fidelity_grade = None;
        let result = scorer().compute_match(&c, &j);
        assert!(matches!(result, Err(QcredError::ContractViolation(_))));
    }

    #[test]
    fn remote_roles_skip_location() {
        let mut j = job();
        j.remote = true;
        let mut c = candidate();
        c.country = Some("JP".to_string());
        let m = scorer().compute_match(&c, &j).unwrap();
        assert!(m.reasons.iter().all(|r| r.category != MatchCategory::Location));
    }

    #[test]
    fn job_without_requirements_scores_zero() {
        let j = JobRequirements {
            job_id: "empty".to_string(),
            ..Default::default()
        };
        let m = scorer().compute_match(&candidate(), &j).unwrap();
        assert!(m.reasons.is_empty());
        assert!((m.match_score - 0.0).abs() < 1e-10);
        assert_eq!(m.fit_level, FitLevel::Weak);
    }

    #[test]
    fn rank_matches_orders_by_score_then_job() {
        let s = scorer();
        let make = |job: &str, w: f64| {
            s.assemble(
                job,
                "u",
                vec![
                    reason(MatchCategory::Skills, w, Polarity::Positive),
                    reason(MatchCategory::Location, 0.5, Polarity::Negative),
                ],
                Vec::new(),
            )
            .unwrap()
        };
        let mut matches = vec![make("b", 0.5), make("c", 1.0), make("a", 0.5)];
        rank_matches(&mut matches);
        let order: Vec<&str> = matches.iter().map(|m| m.job_id.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn candidate_deserializes_with_defaults() {
        let c: CandidateProfile = serde_json::from_str(
            r#"{"user_id": "u1", "skills": {"qiskit": "ADVANCED"}}"#,
        )
        .unwrap();
        assert_eq!(c.skills.get("qiskit"), Some(&SkillLevel::Advanced));
        assert_eq!(c.best_fidelity, None);
        assert_eq!(c.years_experience, 0);
    }
}
