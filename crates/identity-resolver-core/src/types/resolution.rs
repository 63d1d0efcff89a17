//! Output records produced by the resolution engine.

use serde::{Deserialize, Serialize};

use super::{Context, Identity};

/// Per-factor sub-scores for one scored identity, each in [0, 100].
///
/// Visibility participates in the weighted aggregate like the other four
/// factors and is reported here for symmetry with the weights table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Privacy-level fit for the inferred context category.
    pub privacy_match: u8,
    /// Keyword fit of bio/title/name against the category taxonomy.
    pub content_match: u8,
    /// Fit of the identity's social links for the context.
    pub social_links_match: u8,
    /// Default-identity and historical-usage signal.
    pub usage_pattern: u8,
    /// Public/private visibility fit.
    pub visibility_match: u8,
}

/// One evaluated candidate: the identity, its aggregate score, a calibrated
/// confidence, the per-factor breakdown and the accumulated justifications.
///
/// `reasoning` is an ordered log built in factor-evaluation order (privacy,
/// content, social links, usage, visibility) and is never empty: when no
/// factor has anything specific to say, a generic fallback line is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredIdentity {
    /// The candidate that was evaluated, unchanged.
    pub identity: Identity,
    /// Weighted aggregate score in [0, 100].
    pub score: u8,
    /// Calibrated certainty in [45, 95]; always `<= score`.
    pub confidence: u8,
    /// Human-readable justifications, at least one.
    pub reasoning: Vec<String>,
    /// Per-factor sub-scores.
    pub breakdown: ScoreBreakdown,
}

/// The full outcome of one resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// The context the candidates were evaluated against.
    pub context: Context,
    /// All candidates, descending by score. Ties keep input order.
    pub ranked: Vec<ScoredIdentity>,
}

impl ResolutionResult {
    /// The recommended identity: the highest-scoring entry.
    ///
    /// Engine-produced results always contain at least one entry (an empty
    /// candidate set fails resolution instead), so this only returns `None`
    /// for hand-built values.
    pub fn best_match(&self) -> Option<&ScoredIdentity> {
        self.ranked.first()
    }
}
