use once_cell::sync::Lazy;
use regex::Regex;

// Hard-reject tables. Keyword-only title matching produces false positives
// across unrelated domains (a "food safety" search surfacing software
// roles); these rules are a precision guard, not a general classifier.

/// Hint markers signalling a food/bio-adjacent target domain.
const FOOD_BIO_HINT_MARKERS: &[&str] = &["food", "bio"];

/// Title keywords that identify a tech role.
const TECH_TITLE_KEYWORDS: &[&str] = &[
    "data scientist",
    "software",
    "full stack",
    "react",
    "python",
    "java developer",
    "ai engineer",
];

/// Hint markers signalling a core-engineering target domain.
const CORE_ENGINEERING_HINT_MARKERS: &[&str] = &["civil", "mechanical", "electrical"];

/// Title keywords that identify an IT role.
const IT_TITLE_KEYWORDS: &[&str] = &["software", "web", "frontend", "backend", "data", "cloud"];

/// Generic seniority words, excluded from no-hint title matching.
const GENERIC_TITLE_WORDS: &[&str] = &["senior", "junior", "lead", "manager", "associate", "intern"];

/// Title tokens must be longer than this to count as keywords.
const MIN_TITLE_KEYWORD_CHARS: usize = 2;

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

/// Outcome of the domain relevance rules for one job title.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainDecision {
    /// Domain mismatch: this job is excluded from ranking regardless of
    /// skill overlap.
    Reject { reason: String },
    /// Domain relevance in [0, 1].
    Score(f64),
}

/// Evaluate domain relevance of a job title against an optional target
/// domain hint. `title` and `resume_text` must already be lowercased;
/// the hint is normalized here.
pub fn evaluate_domain(hint: Option<&str>, title: &str, resume_text: &str) -> DomainDecision {
    match hint {
        Some(hint) => evaluate_with_hint(&hint.to_lowercase(), title),
        None => DomainDecision::Score(title_keyword_score(title, resume_text)),
    }
}

fn evaluate_with_hint(hint: &str, title: &str) -> DomainDecision {
    if FOOD_BIO_HINT_MARKERS.iter().any(|m| hint.contains(m)) {
        if let Some(keyword) = TECH_TITLE_KEYWORDS.iter().find(|k| title.contains(*k)) {
            return DomainDecision::Reject {
                reason: format!("domain_mismatch: hint '{hint}' vs tech title keyword '{keyword}'"),
            };
        }
    }

    if CORE_ENGINEERING_HINT_MARKERS.iter().any(|m| hint.contains(m)) {
        if let Some(keyword) = IT_TITLE_KEYWORDS.iter().find(|k| title.contains(*k)) {
            return DomainDecision::Reject {
                reason: format!("domain_mismatch: hint '{hint}' vs IT title keyword '{keyword}'"),
            };
        }
    }

    if hint.split_whitespace().any(|k| title.contains(k)) {
        return DomainDecision::Score(1.0);
    }

    // "Technologist" titles are food-domain roles in this catalog even when
    // no hint keyword appears in the title.
    if title.contains("technologist") && hint.contains("food") {
        return DomainDecision::Score(1.0);
    }

    DomainDecision::Score(0.0)
}

/// No-hint fallback: how much of the job title the resume covers. Title
/// keywords are the non-generic tokens longer than two characters; the
/// score is the fraction present anywhere in the resume text.
fn title_keyword_score(title: &str, resume_text: &str) -> f64 {
    let keywords: Vec<&str> = NON_WORD_RE
        .split(title)
        .filter(|w| {
            !w.is_empty()
                && !GENERIC_TITLE_WORDS.contains(w)
                && w.chars().count() > MIN_TITLE_KEYWORD_CHARS
        })
        .collect();

    if keywords.is_empty() {
        return 0.0;
    }

    let hits = keywords.iter().filter(|w| resume_text.contains(*w)).count();
    hits as f64 / keywords.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_hint_rejects_tech_titles() {
        let decision = evaluate_domain(Some("food technologist"), "senior data scientist", "");
        assert!(matches!(decision, DomainDecision::Reject { .. }));
    }

    #[test]
    fn core_engineering_hint_rejects_it_titles() {
        let decision = evaluate_domain(Some("Mechanical Engineering"), "backend developer", "");
        let DomainDecision::Reject { reason } = decision else {
            panic!("expected reject");
        };
        assert!(reason.contains("backend"));
    }

    #[test]
    fn hint_keyword_in_title_boosts_to_one() {
        let decision = evaluate_domain(Some("Food Technologist"), "food safety officer", "");
        assert_eq!(decision, DomainDecision::Score(1.0));
    }

    #[test]
    fn technologist_title_matches_food_hints() {
        let decision = evaluate_domain(Some("food quality"), "dairy technologist", "");
        assert_eq!(decision, DomainDecision::Score(1.0));
    }

    #[test]
    fn unrelated_hint_scores_zero() {
        let decision = evaluate_domain(Some("food safety"), "civil site supervisor", "");
        assert_eq!(decision, DomainDecision::Score(0.0));
    }

    #[test]
    fn no_hint_scores_title_coverage() {
        let decision = evaluate_domain(
            None,
            "backend developer",
            "experienced backend developer with rust",
        );
        assert_eq!(decision, DomainDecision::Score(1.0));

        let partial = evaluate_domain(None, "backend developer", "backend engineer");
        assert_eq!(partial, DomainDecision::Score(0.5));
    }

    #[test]
    fn no_hint_ignores_generic_and_short_tokens() {
        // "senior" and "qa" are dropped; only "tester" counts.
        let decision = evaluate_domain(None, "senior qa tester", "manual tester");
        assert_eq!(decision, DomainDecision::Score(1.0));
    }

    #[test]
    fn title_with_only_generic_tokens_scores_zero() {
        let decision = evaluate_domain(None, "senior lead manager", "anything at all");
        assert_eq!(decision, DomainDecision::Score(0.0));
    }
}
