use crate::vocabulary::SkillVocabulary;

// Tuned heuristics, not computed statistics. Each rule is independent and
// order-insensitive; the sum is clamped to [0, 1].

/// Character-count bands, first matching threshold wins.
const LENGTH_BANDS: &[(usize, f64)] = &[(2800, 0.20), (1800, 0.20), (900, 0.15), (500, 0.10)];
const LENGTH_FLOOR_BONUS: f64 = 0.05;

const SECTION_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "certifications",
    "summary",
    "objective",
];
const SECTION_BONUS_PER_HIT: f64 = 0.05;
const SECTION_BONUS_CAP: f64 = 0.20;

const ACTION_VERBS: &[&str] = &[
    "led",
    "managed",
    "developed",
    "designed",
    "implemented",
    "created",
    "analyzed",
    "optimized",
    "achieved",
    "improved",
    "collaborated",
    "coordinated",
    "established",
    "negotiated",
    "supervised",
    "trained",
];
const VERB_BUCKETS: &[(usize, f64)] = &[(10, 0.15), (5, 0.10), (2, 0.05)];

const SKILL_DENSITY_BUCKETS: &[(usize, f64)] = &[(15, 0.25), (10, 0.20), (5, 0.15), (2, 0.05)];

const BULLET_GLYPHS: &[&str] = &["\u{2022}", "- ", "* ", "\u{27A2}"];
const BULLET_BUCKETS: &[(usize, f64)] = &[(15, 0.10), (5, 0.05)];

const CONTACT_BONUS: f64 = 0.05;
const MAIL_DOMAIN_SUFFIXES: &[&str] = &[".com", ".in", ".org"];

const NOISE_RUNS: &[&str] = &["====", "****", "____"];
const NOISE_LIMIT: usize = 5;
const NOISE_PENALTY: f64 = 0.10;

/// Highest threshold wins, not cumulative.
fn bucket_bonus(count: usize, buckets: &[(usize, f64)]) -> f64 {
    buckets
        .iter()
        .find(|(threshold, _)| count > *threshold)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0.0)
}

/// Heuristic ATS readability/structure score in [0, 1], independent of any
/// job. Signals: text length, canonical section headers, action-verb usage,
/// vocabulary skill density, bullet formatting, contact info, and a penalty
/// for separator noise.
pub fn ats_score(text: &str, vocabulary: &SkillVocabulary) -> f64 {
    let t = text.to_lowercase();
    let mut score = 0.0;

    let length = t.chars().count();
    score += LENGTH_BANDS
        .iter()
        .find(|(min, _)| length > *min)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(LENGTH_FLOOR_BONUS);

    let section_hits = SECTION_KEYWORDS.iter().filter(|s| t.contains(*s)).count();
    score += SECTION_BONUS_CAP.min(section_hits as f64 * SECTION_BONUS_PER_HIT);

    let verb_hits = ACTION_VERBS.iter().filter(|v| t.contains(*v)).count();
    score += bucket_bonus(verb_hits, VERB_BUCKETS);

    // Plain substring presence here, intentionally looser than extraction's
    // boundary matching: this only feeds a coarse density bucket.
    let skill_hits = vocabulary.phrases().filter(|s| t.contains(s)).count();
    score += bucket_bonus(skill_hits, SKILL_DENSITY_BUCKETS);

    let bullets: usize = BULLET_GLYPHS.iter().map(|g| t.matches(g).count()).sum();
    score += bucket_bonus(bullets, BULLET_BUCKETS);

    if t.contains('@') && MAIL_DOMAIN_SUFFIXES.iter().any(|s| t.contains(s)) {
        score += CONTACT_BONUS;
    }
    // Crude phone-number signal.
    if t.chars().any(|c| c.is_ascii_digit()) {
        score += CONTACT_BONUS;
    }

    let noise: usize = NOISE_RUNS.iter().map(|r| t.matches(r).count()).sum();
    if noise > NOISE_LIMIT {
        score -= NOISE_PENALTY;
    }

    score.clamp(0.0, 1.0)
}
