//! Domain types consumed and produced by the resolution engine.

mod context;
mod identity;
mod resolution;
mod validation;

pub use context::Context;
pub use identity::{Identity, PrivacyLevel};
pub use resolution::{ResolutionResult, ScoreBreakdown, ScoredIdentity};
pub use validation::ValidationError;
