use std::collections::BTreeSet;

use crate::vocabulary::SkillVocabulary;

/// Distinct vocabulary skills present in `text`, lexicographically sorted.
///
/// Presence only, not count, and exact lexical matching only: each phrase
/// must appear delimited by word boundaries on both sides, so "java" never
/// matches inside "javascript". The vocabulary is scanned longest phrase
/// first so multi-word phrases are tested as whole units. O(V * L) with V
/// the vocabulary size and L the text length; both are small here.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> Vec<String> {
    let text = text.to_lowercase();

    let mut found: BTreeSet<&str> = BTreeSet::new();
    for (phrase, matcher) in vocabulary.matchers() {
        if matcher.is_match(&text) {
            found.insert(phrase);
        }
    }

    found.into_iter().map(str::to_string).collect()
}
