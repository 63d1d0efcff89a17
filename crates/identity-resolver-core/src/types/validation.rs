//! Validation error types for identity and context records.

use thiserror::Error;

/// Errors that occur during record validation.
///
/// The engine itself assumes validated records; these errors belong to the
/// construction-time surface of whatever layer builds [`crate::types::Identity`]
/// and [`crate::types::Context`] values from external stores.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    #[error("field '{field}' must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },
}
