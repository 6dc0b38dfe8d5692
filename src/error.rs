use thiserror::Error;

/// Request-level rejections. These are the only failures the engine surfaces:
/// a missing vocabulary degrades to an empty one and malformed job records are
/// resolved with defaults at ingestion, both with a logged warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("resume text is empty")]
    EmptyResumeText,
    #[error("top_k must be at least 1")]
    InvalidTopK,
}
