use std::collections::BTreeSet;

use super::domain::{evaluate_domain, DomainDecision};
use super::weights::FIT_WEIGHTS;
use crate::JobRecord;

/// Sentinel used when a rejected outcome must be expressed as a number at
/// the boundary contract. Numerically below any legitimate score.
pub const REJECTED_FIT_SCORE: f64 = -1.0;

/// A scored candidate/job pair. `overlap` and `gap` are disjoint,
/// lexicographically sorted, and together cover the job's required skills.
#[derive(Debug, Clone, PartialEq)]
pub struct FitScore {
    /// Weighted combination of domain and skill scores, in [0, 1].
    pub score: f64,
    pub domain_score: f64,
    pub skill_score: f64,
    /// candidate ∩ job required skills.
    pub overlap: Vec<String>,
    /// job required skills − candidate.
    pub gap: Vec<String>,
}

/// Outcome of scoring one job. A domain hard-reject is a first-class
/// variant, not a magic negative score: callers filter on the tag.
#[derive(Debug, Clone, PartialEq)]
pub enum FitOutcome {
    Scored(FitScore),
    Rejected { reason: String },
}

impl FitOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, FitOutcome::Rejected { .. })
    }

    /// Numeric fit score for the boundary contract: rejected jobs map to
    /// [`REJECTED_FIT_SCORE`].
    pub fn score(&self) -> f64 {
        match self {
            FitOutcome::Scored(fit) => fit.score,
            FitOutcome::Rejected { .. } => REJECTED_FIT_SCORE,
        }
    }
}

/// Score one job for a candidate. `candidate_skills` is the extracted skill
/// set of the resume; `resume_text` is only consulted by the no-hint title
/// fallback.
pub fn score_fit(
    resume_text: &str,
    candidate_skills: &[String],
    job: &JobRecord,
    domain_hint: Option<&str>,
) -> FitOutcome {
    score_fit_lowered(&resume_text.to_lowercase(), candidate_skills, job, domain_hint)
}

/// Same as [`score_fit`] but takes an already-lowercased resume text so the
/// engine can lowercase once per request instead of once per job.
pub(crate) fn score_fit_lowered(
    resume_lower: &str,
    candidate_skills: &[String],
    job: &JobRecord,
    domain_hint: Option<&str>,
) -> FitOutcome {
    let title = job.title.to_lowercase();

    let domain_score = match evaluate_domain(domain_hint, &title, resume_lower) {
        DomainDecision::Reject { reason } => return FitOutcome::Rejected { reason },
        DomainDecision::Score(score) => score,
    };

    let required: BTreeSet<&str> = job.required_skills.iter().map(String::as_str).collect();
    let candidate: BTreeSet<&str> = candidate_skills.iter().map(String::as_str).collect();

    // BTreeSet iteration keeps both sets lexicographically sorted.
    let overlap: Vec<String> = required
        .intersection(&candidate)
        .map(|s| s.to_string())
        .collect();
    let gap: Vec<String> = required
        .difference(&candidate)
        .map(|s| s.to_string())
        .collect();

    let skill_score = if required.is_empty() {
        0.0
    } else {
        overlap.len() as f64 / required.len() as f64
    };

    let score = domain_score * FIT_WEIGHTS.domain + skill_score * FIT_WEIGHTS.skills;

    FitOutcome::Scored(FitScore {
        score,
        domain_score,
        skill_score,
        overlap,
        gap,
    })
}
