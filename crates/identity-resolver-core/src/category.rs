//! Context category inference.
//!
//! Inference runs once per resolution call and produces a
//! [`ContextProfile`] that the five factor scorers pattern-match on, so no
//! scorer has to re-test name substrings itself.

use serde::{Deserialize, Serialize};

use crate::types::Context;

/// Inferred semantic category of a context, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextCategory {
    /// Work-related contexts ("Professional LinkedIn", "Work Email").
    Professional,
    /// Family and personal contexts ("Family Group", "Personal Blog").
    Personal,
    /// Casual social contexts ("Social Hangout").
    Social,
    /// Creative/portfolio contexts ("Creative Studio").
    Creative,
    /// No recognized pattern; default scoring branches apply.
    Generic,
}

/// The per-call view of a context that factor scorers consume.
///
/// `private_leaning` is deliberately separate from the category: visibility
/// scoring keys off "private"/"family" in the name, which is a different
/// substring set than the category branches. A "Personal Blog" context is
/// `Personal` but not private-leaning; a "Private Notes" context is
/// `Generic` yet private-leaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextProfile {
    /// Inferred semantic category.
    pub category: ContextCategory,
    /// Whether the context name signals restricted visibility.
    pub private_leaning: bool,
}

impl ContextProfile {
    /// Infer a profile from the context's name.
    ///
    /// Matching is case-insensitive substring containment, first match
    /// wins: professional/work, then family/personal, then social, then
    /// creative. Anything else is [`ContextCategory::Generic`].
    pub fn infer(context: &Context) -> Self {
        let name = context.name.to_lowercase();

        let category = if name.contains("professional") || name.contains("work") {
            ContextCategory::Professional
        } else if name.contains("family") || name.contains("personal") {
            ContextCategory::Personal
        } else if name.contains("social") {
            ContextCategory::Social
        } else if name.contains("creative") {
            ContextCategory::Creative
        } else {
            ContextCategory::Generic
        };

        let private_leaning = name.contains("private") || name.contains("family");

        Self {
            category,
            private_leaning,
        }
    }
}
