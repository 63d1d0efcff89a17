//! Content/bio fit: keyword matches between the identity's free text and
//! the context category's taxonomy.

use crate::category::{ContextCategory, ContextProfile};
use crate::taxonomy::{self, KeywordCategory};
use crate::types::Identity;

use super::FactorScore;

/// Base score applied when the category carries no content signal.
const BASE_SCORE: u8 = 50;

/// Score the identity's free-text fields against the category taxonomy.
///
/// Each category searches different fields with its own formula:
/// professional scans bio+title+name at `min(95, 50 + 15*matches)`, social
/// scans bio only at `min(90, 40 + 12*matches)`, creative scans bio+title
/// at `min(95, 45 + 15*matches)`. Personal and generic contexts keep the
/// base score with no reason.
pub fn score(identity: &Identity, profile: &ContextProfile) -> FactorScore {
    let bio = identity.bio.as_deref().unwrap_or("").to_lowercase();
    let title = identity.title.as_deref().unwrap_or("").to_lowercase();
    let display_name = identity.display_name.to_lowercase();

    match profile.category {
        ContextCategory::Professional => scored_matches(
            KeywordCategory::Professional,
            &[bio.as_str(), title.as_str(), display_name.as_str()],
            50,
            15,
            95,
            "Professional credentials found",
        ),
        ContextCategory::Social => scored_matches(
            KeywordCategory::Social,
            &[bio.as_str()],
            40,
            12,
            90,
            "Social interests mentioned",
        ),
        ContextCategory::Creative => scored_matches(
            KeywordCategory::Creative,
            &[bio.as_str(), title.as_str()],
            45,
            15,
            95,
            "Creative background",
        ),
        ContextCategory::Personal | ContextCategory::Generic => FactorScore::new(BASE_SCORE),
    }
}

fn scored_matches(
    category: KeywordCategory,
    fields: &[&str],
    base: u32,
    per_match: u32,
    cap: u32,
    reason_prefix: &str,
) -> FactorScore {
    let matches = taxonomy::matches_in(taxonomy::keywords_for(category), fields);
    let value = (base + per_match * matches.len() as u32).min(cap) as u8;

    if matches.is_empty() {
        FactorScore::new(value)
    } else {
        FactorScore::with_reason(value, format!("{}: {}", reason_prefix, matches.join(", ")))
    }
}
