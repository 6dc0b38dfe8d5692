use std::{cmp::Ordering, sync::Arc};

use tracing::debug;

use super::{
    ats::ats_score,
    extraction::extract_skills,
    fit::{score_fit_lowered, FitOutcome, FitScore},
};
use crate::{catalog::JobCatalog, error::MatchError, vocabulary::SkillVocabulary, JobRecord};

/// Fit scores at or below this floor are never surfaced, not even within a
/// partial list. Filters both hard rejects and negligible matches.
pub const MIN_FIT_SCORE_DEFAULT: f64 = 0.01;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub min_fit_score: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_fit_score: env_min_fit_score(),
        }
    }
}

fn env_min_fit_score() -> f64 {
    std::env::var("PF_MIN_FIT_SCORE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(MIN_FIT_SCORE_DEFAULT)
}

/// One surfaced catalog entry with its fit breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedJob {
    pub job: JobRecord,
    pub fit: FitScore,
}

/// Result of one match request. Built per request, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    /// Heuristic resume readability score in [0, 1].
    pub ats_score: f64,
    /// Vocabulary skills found in the resume, sorted.
    pub candidate_skills: Vec<String>,
    /// At most the requested top-k jobs, fit score descending.
    pub top_jobs: Vec<RankedJob>,
}

/// Stateless matching engine over immutable vocabulary and catalog
/// snapshots. Concurrent calls need no locking; refreshing either snapshot
/// means constructing a new engine around new `Arc`s.
pub struct MatchEngine {
    vocabulary: Arc<SkillVocabulary>,
    catalog: Arc<JobCatalog>,
    config: EngineConfig,
}

impl MatchEngine {
    pub fn new(vocabulary: Arc<SkillVocabulary>, catalog: Arc<JobCatalog>) -> Self {
        Self::with_config(vocabulary, catalog, EngineConfig::default())
    }

    pub fn with_config(
        vocabulary: Arc<SkillVocabulary>,
        catalog: Arc<JobCatalog>,
        config: EngineConfig,
    ) -> Self {
        Self {
            vocabulary,
            catalog,
            config,
        }
    }

    /// Match a resume against the catalog: ATS score and skill extraction
    /// once, a fit score per job, then filter, rank and truncate to
    /// `top_k`. Ties keep catalog order.
    pub fn match_resume(
        &self,
        resume_text: &str,
        top_k: usize,
        domain_hint: Option<&str>,
    ) -> Result<MatchReport, MatchError> {
        if resume_text.trim().is_empty() {
            return Err(MatchError::EmptyResumeText);
        }
        if top_k == 0 {
            return Err(MatchError::InvalidTopK);
        }

        let ats_score = ats_score(resume_text, &self.vocabulary);
        let candidate_skills = extract_skills(resume_text, &self.vocabulary);
        let resume_lower = resume_text.to_lowercase();

        let mut ranked: Vec<RankedJob> = Vec::new();
        for job in self.catalog.jobs() {
            match score_fit_lowered(&resume_lower, &candidate_skills, job, domain_hint) {
                FitOutcome::Rejected { reason } => {
                    debug!(job_id = job.id, reason = %reason, "job excluded by domain rules");
                }
                FitOutcome::Scored(fit) => {
                    if fit.score > self.config.min_fit_score {
                        ranked.push(RankedJob {
                            job: job.clone(),
                            fit,
                        });
                    }
                }
            }
        }

        // sort_by is stable, so equal scores keep catalog order.
        ranked.sort_by(|a, b| {
            b.fit
                .score
                .partial_cmp(&a.fit.score)
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(top_k);

        debug!(
            candidate_skill_count = candidate_skills.len(),
            surfaced = ranked.len(),
            "match request scored"
        );

        Ok(MatchReport {
            ats_score,
            candidate_skills,
            top_jobs: ranked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Arc<SkillVocabulary> {
        Arc::new(SkillVocabulary::from_lines(["haccp", "gmp", "python"]))
    }

    fn job(id: i64, title: &str, skills: &[&str]) -> JobRecord {
        JobRecord {
            id,
            title: title.into(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            ..JobRecord::default()
        }
    }

    fn engine(jobs: Vec<JobRecord>) -> MatchEngine {
        MatchEngine::with_config(
            vocabulary(),
            Arc::new(JobCatalog::new(jobs)),
            EngineConfig {
                min_fit_score: MIN_FIT_SCORE_DEFAULT,
            },
        )
    }

    const RESUME: &str = "Food safety specialist. HACCP and GMP audits across plants.";

    #[test]
    fn rejects_empty_resume_text() {
        let engine = engine(vec![]);
        assert_eq!(
            engine.match_resume("   \n", 5, None),
            Err(MatchError::EmptyResumeText)
        );
    }

    #[test]
    fn rejects_zero_top_k() {
        let engine = engine(vec![]);
        assert_eq!(
            engine.match_resume(RESUME, 0, None),
            Err(MatchError::InvalidTopK)
        );
    }

    #[test]
    fn ranks_filters_and_truncates() {
        // With hint "food": perfect (1.0), partial skills (0.85), no skills
        // (0.7), a hard reject, and a zero-score job below the floor.
        let engine = engine(vec![
            job(1, "Food Production Supervisor", &["iso 22000"]),
            job(2, "Software Engineer", &["python"]),
            job(3, "Food Quality Analyst", &["haccp", "gmp"]),
            job(4, "Plumber", &[]),
            job(5, "Food Packaging Lead", &["haccp", "iso 22000"]),
        ]);

        let report = engine.match_resume(RESUME, 3, Some("food")).unwrap();

        let ids: Vec<i64> = report.top_jobs.iter().map(|r| r.job.id).collect();
        assert_eq!(ids, vec![3, 5, 1]);
        assert!(report
            .top_jobs
            .windows(2)
            .all(|w| w[0].fit.score >= w[1].fit.score));
        assert!((report.top_jobs[0].fit.score - 1.0).abs() < 1e-9);
        assert!((report.top_jobs[1].fit.score - 0.85).abs() < 1e-9);
        assert!((report.top_jobs[2].fit.score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn surfaces_at_most_available_jobs() {
        let engine = engine(vec![
            job(1, "Food Quality Analyst", &["haccp"]),
            job(2, "Software Engineer", &["python"]),
        ]);

        let report = engine.match_resume(RESUME, 10, Some("food")).unwrap();
        assert_eq!(report.top_jobs.len(), 1);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let engine = engine(vec![
            job(7, "Food Safety Officer", &["haccp"]),
            job(8, "Food Hygiene Officer", &["gmp"]),
        ]);

        let report = engine.match_resume(RESUME, 5, Some("food")).unwrap();
        let ids: Vec<i64> = report.top_jobs.iter().map(|r| r.job.id).collect();
        assert_eq!(ids, vec![7, 8]);
    }

    #[test]
    fn custom_floor_filters_weak_matches() {
        let engine = MatchEngine::with_config(
            vocabulary(),
            Arc::new(JobCatalog::new(vec![
                job(1, "Food Quality Analyst", &["haccp", "gmp"]),
                job(2, "Food Clerk", &["iso 22000"]),
            ])),
            EngineConfig { min_fit_score: 0.9 },
        );

        let report = engine.match_resume(RESUME, 5, Some("food")).unwrap();
        assert_eq!(report.top_jobs.len(), 1);
        assert_eq!(report.top_jobs[0].job.id, 1);
    }

    #[test]
    fn computes_ats_and_skills_once_per_request() {
        let engine = engine(vec![job(1, "Food Quality Analyst", &["haccp"])]);

        let report = engine.match_resume(RESUME, 5, Some("food")).unwrap();
        assert!((0.0..=1.0).contains(&report.ats_score));
        assert_eq!(report.candidate_skills, vec!["gmp", "haccp"]);
    }

    #[test]
    fn empty_catalog_yields_empty_report() {
        let engine = engine(vec![]);
        let report = engine.match_resume(RESUME, 5, None).unwrap();
        assert!(report.top_jobs.is_empty());
        assert_eq!(report.candidate_skills, vec!["gmp", "haccp"]);
    }
}
