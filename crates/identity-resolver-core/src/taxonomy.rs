//! Keyword taxonomy: fixed category-to-keyword mappings.
//!
//! Three semantic categories are defined, each with a static, ordered list
//! of lowercase keyword tokens. Matching is case-insensitive substring
//! containment against free-text identity fields; the lists are ordered so
//! that matched-keyword reason strings come out deterministic.

/// Semantic keyword category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordCategory {
    /// Job titles and credentials ("engineer", "consultant", "phd", ...).
    Professional,
    /// Creative occupations and portfolio vocabulary.
    Creative,
    /// Casual/social-interest vocabulary.
    Social,
}

/// Keywords signalling professional credentials in a bio, title or name.
pub const PROFESSIONAL_KEYWORDS: &[&str] = &[
    "manager",
    "director",
    "engineer",
    "developer",
    "consultant",
    "analyst",
    "professor",
    "doctor",
    "phd",
    "mba",
    "ceo",
    "senior",
];

/// Keywords signalling a creative background.
pub const CREATIVE_KEYWORDS: &[&str] = &[
    "artist",
    "designer",
    "creative",
    "portfolio",
    "art",
    "design",
    "photography",
    "writer",
    "musician",
];

/// Keywords signalling social interests. "photography" and "music"
/// intentionally overlap with the creative list.
pub const SOCIAL_KEYWORDS: &[&str] = &[
    "casual",
    "friendly",
    "enthusiast",
    "lover",
    "fan",
    "coffee",
    "travel",
    "photography",
    "music",
];

/// Get the keyword list for a category.
///
/// Returned slices are static and ordered; membership is the only contract
/// callers should rely on beyond reason-string determinism.
pub fn keywords_for(category: KeywordCategory) -> &'static [&'static str] {
    match category {
        KeywordCategory::Professional => PROFESSIONAL_KEYWORDS,
        KeywordCategory::Creative => CREATIVE_KEYWORDS,
        KeywordCategory::Social => SOCIAL_KEYWORDS,
    }
}

/// Collect the distinct keywords from `keywords` that appear (substring,
/// inputs already lowercased) in at least one of `fields`.
///
/// Results preserve taxonomy order and contain each keyword at most once,
/// no matter how many fields it appears in.
pub fn matches_in<'a>(keywords: &[&'a str], fields: &[&str]) -> Vec<&'a str> {
    keywords
        .iter()
        .filter(|kw| fields.iter().any(|f| f.contains(*kw)))
        .copied()
        .collect()
}
