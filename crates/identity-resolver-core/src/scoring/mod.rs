//! Factor scorers: five independent pure functions, one per scoring factor.
//!
//! Each scorer consumes one identity plus the pre-inferred context profile
//! and returns a [`FactorScore`]: a sub-score in [0, 100] and zero or more
//! justification strings. Scorers never fail; unrecognized situations fall
//! through to documented default branches.

pub mod content;
pub mod privacy;
pub mod social_links;
pub mod usage;
pub mod visibility;

/// One factor's verdict: a sub-score and its justifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorScore {
    /// Sub-score in [0, 100].
    pub value: u8,
    /// Zero or more human-readable justifications, in emission order.
    pub reasons: Vec<String>,
}

impl FactorScore {
    /// A score with no justification attached.
    pub fn new(value: u8) -> Self {
        Self {
            value,
            reasons: Vec::new(),
        }
    }

    /// A score carrying a single justification.
    pub fn with_reason(value: u8, reason: impl Into<String>) -> Self {
        Self {
            value,
            reasons: vec![reason.into()],
        }
    }
}
