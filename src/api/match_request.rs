use serde::Deserialize;

use crate::error::MatchError;

pub const DEFAULT_TOP_K: usize = 5;

/// A match request as received from the hosting process.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    /// Plain resume text from the upstream extraction step.
    pub cv_text: String,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Optional target-domain hint, e.g. "food technologist".
    #[serde(default)]
    pub domain: Option<String>,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl MatchRequest {
    /// Rejects before any scoring work begins; the engine never attempts
    /// partial results for an empty input.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.cv_text.trim().is_empty() {
            return Err(MatchError::EmptyResumeText);
        }
        if self.top_k == 0 {
            return Err(MatchError::InvalidTopK);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_default_top_k() {
        let request: MatchRequest = serde_json::from_str(r#"{"cv_text": "some resume"}"#).unwrap();
        assert_eq!(request.top_k, DEFAULT_TOP_K);
        assert_eq!(request.domain, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn rejects_blank_resume_text() {
        let request: MatchRequest = serde_json::from_str(r#"{"cv_text": "  "}"#).unwrap();
        assert_eq!(request.validate(), Err(MatchError::EmptyResumeText));
    }

    #[test]
    fn rejects_zero_top_k() {
        let request: MatchRequest =
            serde_json::from_str(r#"{"cv_text": "resume", "top_k": 0}"#).unwrap();
        assert_eq!(request.validate(), Err(MatchError::InvalidTopK));
    }

    #[test]
    fn accepts_domain_hint() {
        let request: MatchRequest =
            serde_json::from_str(r#"{"cv_text": "resume", "domain": "Food Technologist"}"#)
                .unwrap();
        assert_eq!(request.domain.as_deref(), Some("Food Technologist"));
    }
}
