//! Visibility fit: whether a public or private identity suits the context.

use crate::category::ContextProfile;
use crate::types::Identity;

use super::FactorScore;

/// Score the identity's public/private flag against the context.
///
/// Private-leaning contexts ("private"/"family" in the name) reward hidden
/// identities; everything else rewards discoverable ones.
pub fn score(identity: &Identity, profile: &ContextProfile) -> FactorScore {
    if profile.private_leaning {
        if identity.is_public {
            FactorScore::new(40)
        } else {
            FactorScore::with_reason(90, "Private visibility protects personal information")
        }
    } else if identity.is_public {
        FactorScore::with_reason(85, "Public visibility enables discovery and networking")
    } else {
        FactorScore::new(60)
    }
}
