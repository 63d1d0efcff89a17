//! Usage-pattern fit: default-identity flag and historical usage count.
//!
//! This factor is context-independent. The base sits at 60 because no
//! historical-usage signal is assumed reliable yet; the default flag and
//! the usage count each add at most 20, bounding the factor at 100.

use crate::types::Identity;

use super::FactorScore;

/// Score the identity's usage signals.
pub fn score(identity: &Identity) -> FactorScore {
    let mut value: u32 = 60;
    let mut reasons = Vec::new();

    if identity.is_default {
        value += 20;
        reasons.push("This is your default identity".to_string());
    }

    if identity.usage_count > 0 {
        // Clamp before multiplying so huge counts cannot overflow.
        value += 2 * identity.usage_count.min(10);
        reasons.push(format!("Previously used {} times", identity.usage_count));
    }

    FactorScore {
        value: value as u8,
        reasons,
    }
}
