//! Social-link fit: which platforms the identity links to and whether they
//! suit the context category.

use crate::category::{ContextCategory, ContextProfile};
use crate::types::Identity;

use super::FactorScore;

/// Platforms that signal social presence for social contexts.
const SOCIAL_PLATFORMS: &[&str] = &["instagram", "twitter", "facebook"];
/// Platforms that signal a creative portfolio.
const CREATIVE_PLATFORMS: &[&str] = &["behance", "dribbble", "portfolio"];

/// Score the identity's social links for the inferred category.
///
/// Base 50, plus a category bonus for the platforms that matter there,
/// plus 5 per distinct link of any kind, capped at 95. The any-of bonuses
/// emit a single reason no matter how many of the platforms match.
pub fn score(identity: &Identity, profile: &ContextProfile) -> FactorScore {
    let mut value: u32 = 50;
    let mut reasons = Vec::new();

    match profile.category {
        ContextCategory::Professional => {
            if identity.has_link("linkedin") {
                value += 30;
                reasons.push("LinkedIn profile available for professional networking".to_string());
            }
            if identity.has_link("github") {
                value += 20;
                reasons.push("GitHub profile shows technical expertise".to_string());
            }
        }
        ContextCategory::Social => {
            if SOCIAL_PLATFORMS.iter().any(|p| identity.has_link(p)) {
                value += 25;
                reasons.push("Social media profiles available".to_string());
            }
        }
        ContextCategory::Creative => {
            if CREATIVE_PLATFORMS.iter().any(|p| identity.has_link(p)) {
                value += 35;
                reasons.push("Creative portfolio links available".to_string());
            }
        }
        ContextCategory::Personal | ContextCategory::Generic => {}
    }

    value += 5 * identity.social_links.len() as u32;

    FactorScore {
        value: value.min(95) as u8,
        reasons,
    }
}
