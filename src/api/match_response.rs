use serde::Serialize;

use crate::matching::pipeline::{MatchReport, RankedJob};

/// Wire-level match result: the single boundary contract the core honors.
/// HTTP routing and UI rendering wrap this arbitrarily.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub ats_score: f64,
    pub candidate_skills: Vec<String>,
    pub top_jobs: Vec<TopJob>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopJob {
    pub job_id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    pub fit_score: f64,
    pub overlap_skills: Vec<String>,
    pub gap_skills: Vec<String>,
}

impl From<MatchReport> for MatchResponse {
    fn from(report: MatchReport) -> Self {
        Self {
            ats_score: report.ats_score,
            candidate_skills: report.candidate_skills,
            top_jobs: report.top_jobs.into_iter().map(TopJob::from).collect(),
        }
    }
}

impl From<RankedJob> for TopJob {
    fn from(ranked: RankedJob) -> Self {
        Self {
            job_id: ranked.job.id,
            title: ranked.job.title,
            company: ranked.job.company,
            location: ranked.job.location,
            url: ranked.job.url,
            fit_score: ranked.fit.score,
            overlap_skills: ranked.fit.overlap,
            gap_skills: ranked.fit.gap,
        }
    }
}
