pub mod api;
pub mod catalog;
pub mod error;
pub mod logging;
pub mod matching;
pub mod vocabulary;

// Commonly used data models for matching functions.

/// One job posting as the engine sees it: every field resolved at ingestion,
/// no optional fields left to interpret at scoring time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobRecord {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    /// Lowercase, trimmed, deduplicated. Parsed once from the provider's
    /// semicolon-delimited string; empty when unparseable.
    pub required_skills: Vec<String>,
}
