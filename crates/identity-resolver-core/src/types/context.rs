//! Context record: a named usage situation identities are matched against.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A usage situation ("Professional LinkedIn", "Family Group") owned by the
/// external context store. The name drives category inference; description,
/// color and icon are presentation-only and pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Unique identifier assigned by the context store.
    pub id: u64,

    /// Human-readable name; must be non-empty. Category inference runs on
    /// this field.
    pub name: String,

    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional display color (e.g. "#3b82f6").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Optional display icon/emoji.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Context {
    /// Create a context with just an id and name.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            color: None,
            icon: None,
        }
    }

    /// Validate construction-time invariants.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyField`] when `name` is empty or
    /// whitespace-only.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "name" });
        }
        Ok(())
    }
}
