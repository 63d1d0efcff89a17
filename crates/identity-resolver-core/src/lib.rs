//! Identity Resolver Core Library
//!
//! Scores and ranks a user's candidate identities (personas/profiles)
//! against a named usage context ("Professional LinkedIn", "Family Group",
//! ...) and recommends the best match with a confidence value and a
//! human-readable justification for each candidate.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`Identity`, `Context`, `ScoredIdentity`, `ResolutionResult`)
//! - Five independent factor scorers (privacy, content, social links, usage,
//!   visibility) combined by a fixed weighted aggregation
//! - Error types and result aliases
//! - Configuration structures for the factor weights
//!
//! The engine is synchronous and side-effect free: it performs no I/O,
//! mutates none of its inputs, and carries no state between calls. Fetching
//! identities/contexts and rendering the ranked output are the caller's job.
//!
//! # Example
//!
//! ```
//! use identity_resolver_core::resolver::IdentityResolver;
//! use identity_resolver_core::types::{Context, Identity};
//!
//! let context = Context::new(1, "Professional LinkedIn");
//! let mut identity = Identity::new(1, "Sarah Johnson");
//! identity.title = Some("Senior Software Engineer".to_string());
//!
//! let resolver = IdentityResolver::new();
//! let result = resolver.resolve(&context, &[identity]).unwrap();
//!
//! let best = result.best_match().unwrap();
//! assert!(best.score <= 100);
//! assert!(!best.reasoning.is_empty());
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod resolver;
pub mod scoring;
pub mod taxonomy;
pub mod types;
pub mod weights;

// Re-exports for convenience
pub use config::ResolverConfig;
pub use error::{EngineError, EngineResult};
pub use resolver::IdentityResolver;
pub use types::{
    Context, Identity, PrivacyLevel, ResolutionResult, ScoreBreakdown, ScoredIdentity,
};
pub use weights::FactorWeights;
