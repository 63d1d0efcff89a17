//! Privacy-level fit: how well the identity's exposure setting suits the
//! context category.

use crate::category::{ContextCategory, ContextProfile};
use crate::types::{Identity, PrivacyLevel};

use super::FactorScore;

/// Score the identity's privacy level against the inferred category.
///
/// A reason is emitted only when the identity sits at the ideal level for
/// the category; near-misses score lower silently.
pub fn score(identity: &Identity, profile: &ContextProfile) -> FactorScore {
    match profile.category {
        ContextCategory::Professional => match identity.privacy_level {
            PrivacyLevel::Standard => FactorScore::with_reason(
                90,
                "Standard privacy level is ideal for professional contexts",
            ),
            PrivacyLevel::High => FactorScore::new(75),
            PrivacyLevel::Minimal => FactorScore::new(50),
        },
        ContextCategory::Personal => match identity.privacy_level {
            PrivacyLevel::High => {
                FactorScore::with_reason(95, "High privacy level protects family information")
            }
            PrivacyLevel::Standard => FactorScore::new(70),
            PrivacyLevel::Minimal => FactorScore::new(40),
        },
        ContextCategory::Social | ContextCategory::Creative => match identity.privacy_level {
            PrivacyLevel::Minimal => {
                FactorScore::with_reason(85, "Open privacy level encourages social engagement")
            }
            PrivacyLevel::Standard => FactorScore::new(75),
            PrivacyLevel::High => FactorScore::new(60),
        },
        ContextCategory::Generic => match identity.privacy_level {
            PrivacyLevel::Standard => FactorScore::new(80),
            _ => FactorScore::new(60),
        },
    }
}
