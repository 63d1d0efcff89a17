//! Error types for identity-resolver-core.
//!
//! This module defines the central error type [`EngineError`] used throughout
//! the crate, along with the [`EngineResult<T>`] type alias. Record-level
//! validation failures live in [`crate::types::ValidationError`] instead;
//! the engine assumes records were validated at construction time.

use thiserror::Error;

use crate::weights::WeightError;

/// Top-level error type for resolution engine operations.
///
/// The engine has exactly two failure modes of its own: an empty candidate
/// set, and a weight profile that does not describe a convex combination.
/// Everything else (empty bio, no social links, an unrecognized context
/// name) is handled by in-engine default branches, never by erroring — the
/// scoring functions are total over validated records.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Resolution was requested with no candidate identities.
    ///
    /// Callers must treat this as "prompt the user to create an identity
    /// first", never as "no match found". The engine refuses to return an
    /// empty ranked list so the no-data case stays an explicit, testable
    /// condition.
    #[error("no identities to score for context {context_id}; create an identity first")]
    EmptyIdentitySet {
        /// Id of the context that was being resolved.
        context_id: u64,
    },

    /// The factor weights are not a valid convex combination.
    ///
    /// This is a programmer/configuration error, not a user error: the five
    /// weights are validated fail-fast when a resolver or configuration is
    /// constructed, before any identity is scored.
    #[error("invalid factor weight configuration: {0}")]
    InvalidWeightConfiguration(#[from] WeightError),

    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for EngineError {
    fn from(err: config::ConfigError) -> Self {
        EngineError::Config(err.to_string())
    }
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_identity_set_display() {
        let err = EngineError::EmptyIdentitySet { context_id: 7 };
        let msg = err.to_string();
        assert!(msg.contains("context 7"));
        assert!(msg.contains("create an identity first"));
    }

    #[test]
    fn test_weight_error_wraps_into_engine_error() {
        let err: EngineError = WeightError::InvalidSum { actual: 1.2 }.into();
        assert!(matches!(err, EngineError::InvalidWeightConfiguration(_)));
        assert!(err.to_string().contains("1.2"));
    }
}
