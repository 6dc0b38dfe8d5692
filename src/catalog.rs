use serde::Deserialize;
use tracing::warn;

use crate::JobRecord;

pub const DEFAULT_TITLE: &str = "Unknown Role";
pub const DEFAULT_COMPANY: &str = "Unknown Company";
pub const DEFAULT_LOCATION: &str = "India";
pub const DEFAULT_URL: &str = "#";

/// A job posting as delivered by the catalog provider, before defaults are
/// applied. Every field is optional; resolution happens once at ingestion,
/// never at scoring time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawJobRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Semicolon-delimited skill list, e.g. "Python; SQL; Excel".
    #[serde(default)]
    pub skills_required: Option<String>,
}

impl RawJobRecord {
    /// Resolve missing fields to their documented defaults. A malformed
    /// record still participates in scoring with whatever is parseable.
    pub fn resolve(self) -> JobRecord {
        let mut defaulted: Vec<&str> = Vec::new();

        let id = self.id.unwrap_or_else(|| {
            defaulted.push("id");
            0
        });
        let title = self.title.unwrap_or_else(|| {
            defaulted.push("title");
            DEFAULT_TITLE.to_string()
        });
        let company = self.company.unwrap_or_else(|| {
            defaulted.push("company");
            DEFAULT_COMPANY.to_string()
        });
        let location = self.location.unwrap_or_else(|| {
            defaulted.push("location");
            DEFAULT_LOCATION.to_string()
        });
        let url = self.url.unwrap_or_else(|| {
            defaulted.push("url");
            DEFAULT_URL.to_string()
        });
        let required_skills = self
            .skills_required
            .as_deref()
            .map(parse_required_skills)
            .unwrap_or_default();

        if !defaulted.is_empty() {
            warn!(job_id = id, fields = ?defaulted, "job record missing fields; defaults applied");
        }

        JobRecord {
            id,
            title,
            company,
            location,
            url,
            required_skills,
        }
    }
}

/// Split a semicolon-delimited skills string into lowercase trimmed tokens.
/// Empty tokens are discarded and duplicates collapsed keeping first
/// occurrence.
pub fn parse_required_skills(raw: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for token in raw.split(';') {
        let skill = token.trim().to_lowercase();
        if !skill.is_empty() && !skills.contains(&skill) {
            skills.push(skill);
        }
    }
    skills
}

/// Immutable snapshot of the job catalog for the engine's lifetime.
/// Refreshing the catalog means building a new snapshot and swapping the
/// whole `Arc`, never mutating in place.
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    jobs: Vec<JobRecord>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<JobRecord>) -> Self {
        Self { jobs }
    }

    /// Ingest provider rows, isolating per-record problems: one malformed
    /// record never aborts the rest of the catalog.
    pub fn from_raw(rows: impl IntoIterator<Item = RawJobRecord>) -> Self {
        let jobs = rows.into_iter().map(RawJobRecord::resolve).collect();
        Self { jobs }
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
