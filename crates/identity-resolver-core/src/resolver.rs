//! The resolution engine: scores every candidate identity against a context
//! and produces a ranked [`ResolutionResult`].

use tracing::{debug, trace};

use crate::category::ContextProfile;
use crate::error::{EngineError, EngineResult};
use crate::scoring::{content, privacy, social_links, usage, visibility};
use crate::types::{Context, Identity, ResolutionResult, ScoreBreakdown, ScoredIdentity};
use crate::weights::{FactorWeights, DEFAULT_WEIGHTS};

/// Appended when no factor produced a specific justification.
pub const FALLBACK_REASON: &str = "General match based on privacy and visibility settings";

/// Context-aware identity resolution engine.
///
/// Stateless and synchronous: a `resolve` call reads nothing but its two
/// arguments and the configured weights, performs no I/O, and leaves no
/// state behind. Identical inputs produce identical output, including
/// ranking order and reasoning text.
///
/// # Example
///
/// ```
/// use identity_resolver_core::resolver::IdentityResolver;
/// use identity_resolver_core::types::{Context, Identity};
///
/// let resolver = IdentityResolver::new();
/// let result = resolver
///     .resolve(&Context::new(1, "Work"), &[Identity::new(1, "Alex")])
///     .unwrap();
/// assert_eq!(result.ranked.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    weights: FactorWeights,
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityResolver {
    /// Create a resolver with the shipped weight profile.
    ///
    /// The default weights are a compile-time constant; debug builds and
    /// tests re-check that they still form a convex combination.
    pub fn new() -> Self {
        debug_assert!(
            DEFAULT_WEIGHTS.validate().is_ok(),
            "shipped factor weights must sum to 1.0"
        );
        Self {
            weights: DEFAULT_WEIGHTS,
        }
    }

    /// Create a resolver with a custom weight profile.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidWeightConfiguration`] when the profile
    /// is not a convex combination; nothing is scored with bad weights.
    pub fn with_weights(weights: FactorWeights) -> EngineResult<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// The weight profile this resolver scores with.
    pub fn weights(&self) -> &FactorWeights {
        &self.weights
    }

    /// Score every identity against `context` and rank the results.
    ///
    /// Ranking is descending by score; equal scores keep their relative
    /// input order (stable sort), so output order is deterministic.
    ///
    /// # Errors
    /// Returns [`EngineError::EmptyIdentitySet`] when `identities` is
    /// empty. The engine never returns an empty ranked list; the no-data
    /// case is the caller's to handle explicitly.
    pub fn resolve(
        &self,
        context: &Context,
        identities: &[Identity],
    ) -> EngineResult<ResolutionResult> {
        if identities.is_empty() {
            return Err(EngineError::EmptyIdentitySet {
                context_id: context.id,
            });
        }

        let profile = ContextProfile::infer(context);
        debug!(
            context_id = context.id,
            candidates = identities.len(),
            category = ?profile.category,
            private_leaning = profile.private_leaning,
            "resolving identities for context"
        );

        let mut ranked: Vec<ScoredIdentity> = identities
            .iter()
            .map(|identity| self.score_identity(identity, &profile))
            .collect();

        // Stable sort: ties keep input order, which the UI relies on.
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(
            context_id = context.id,
            top_identity = ranked[0].identity.id,
            top_score = ranked[0].score,
            confidence = ranked[0].confidence,
            "resolution complete"
        );

        Ok(ResolutionResult {
            context: context.clone(),
            ranked,
        })
    }

    /// Run the five factor scorers in fixed order and aggregate.
    fn score_identity(&self, identity: &Identity, profile: &ContextProfile) -> ScoredIdentity {
        let privacy = privacy::score(identity, profile);
        let content = content::score(identity, profile);
        let social_links = social_links::score(identity, profile);
        let usage = usage::score(identity);
        let visibility = visibility::score(identity, profile);

        let breakdown = ScoreBreakdown {
            privacy_match: privacy.value,
            content_match: content.value,
            social_links_match: social_links.value,
            usage_pattern: usage.value,
            visibility_match: visibility.value,
        };

        let (score, confidence) = self.weights.aggregate(&breakdown);

        // Reasoning accumulates in factor-evaluation order.
        let mut reasoning = privacy.reasons;
        reasoning.extend(content.reasons);
        reasoning.extend(social_links.reasons);
        reasoning.extend(usage.reasons);
        reasoning.extend(visibility.reasons);
        if reasoning.is_empty() {
            reasoning.push(FALLBACK_REASON.to_string());
        }

        trace!(
            identity_id = identity.id,
            score,
            confidence,
            reasons = reasoning.len(),
            "scored identity"
        );

        ScoredIdentity {
            identity: identity.clone(),
            score,
            confidence,
            reasoning,
            breakdown,
        }
    }
}
