use std::collections::HashSet;
use std::path::Path;

use regex::Regex;
use tracing::warn;

/// The fixed set of recognized skill phrases, loaded once at startup and
/// immutable afterwards. Each phrase carries a precompiled word-boundary
/// matcher so extraction does no per-request regex work.
///
/// Phrases are kept longest-first so multi-word phrases are always tested
/// as whole units before their substrings ("machine learning" before
/// "machine"). Ties keep load order.
#[derive(Debug, Clone, Default)]
pub struct SkillVocabulary {
    entries: Vec<VocabEntry>,
}

#[derive(Debug, Clone)]
struct VocabEntry {
    phrase: String,
    matcher: Regex,
}

impl SkillVocabulary {
    /// Build a vocabulary from raw lines: trimmed, lowercased, blanks
    /// dropped, duplicates collapsed keeping the first occurrence.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut phrases: Vec<String> = Vec::new();
        for line in lines {
            let phrase = line.as_ref().trim().to_lowercase();
            if phrase.is_empty() || !seen.insert(phrase.clone()) {
                continue;
            }
            phrases.push(phrase);
        }

        // Stable sort: equal-length phrases stay in load order.
        phrases.sort_by(|a, b| b.len().cmp(&a.len()));

        let entries = phrases
            .into_iter()
            .filter_map(|phrase| {
                let pattern = format!(r"\b{}\b", regex::escape(&phrase));
                match Regex::new(&pattern) {
                    Ok(matcher) => Some(VocabEntry { phrase, matcher }),
                    Err(err) => {
                        warn!(%phrase, error = %err, "skipping unmatchable vocabulary phrase");
                        None
                    }
                }
            })
            .collect();

        Self { entries }
    }

    /// Load a newline-delimited vocabulary file. A missing or unreadable
    /// file is not fatal: extraction degrades to "no skills found", so we
    /// log a warning and return an empty vocabulary.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_lines(text.lines()),
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read skill vocabulary; continuing with an empty set"
                );
                Self::default()
            }
        }
    }

    /// Phrases in matching order (longest first).
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.phrase.as_str())
    }

    pub(crate) fn matchers(&self) -> impl Iterator<Item = (&str, &Regex)> {
        self.entries.iter().map(|e| (e.phrase.as_str(), &e.matcher))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
