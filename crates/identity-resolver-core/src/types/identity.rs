//! Identity record: a candidate persona/profile belonging to a user.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// How much information an identity exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyLevel {
    /// Expose as little as possible.
    High,
    /// Balanced exposure; the store's default for new identities.
    #[default]
    Standard,
    /// Open profile, most information visible.
    Minimal,
}

/// A candidate persona owned by the external identity store.
///
/// The engine treats identities as immutable snapshots: it never mutates
/// them and holds no reference to them beyond a single `resolve` call.
/// `phone` and `avatar_url` carry no scoring signal but round-trip through
/// serialization so callers can hand the record straight to a UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique identifier assigned by the identity store.
    pub id: u64,

    /// Human-readable name shown in UIs; must be non-empty.
    pub display_name: String,

    /// Optional job title ("Senior Software Engineer").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Optional free-text bio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Optional contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Optional contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Optional avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Exposure setting for this identity.
    #[serde(default)]
    pub privacy_level: PrivacyLevel,

    /// Whether the identity is discoverable by other users.
    pub is_public: bool,

    /// Whether the user marked this identity as their default.
    pub is_default: bool,

    /// How many times this identity has been used across contexts.
    #[serde(default)]
    pub usage_count: u32,

    /// Platform name (lowercase, e.g. "linkedin") to profile URL.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub social_links: HashMap<String, String>,
}

impl Identity {
    /// Create an identity with store defaults: standard privacy, public,
    /// not the default identity, never used, no links.
    pub fn new(id: u64, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            title: None,
            bio: None,
            email: None,
            phone: None,
            avatar_url: None,
            privacy_level: PrivacyLevel::default(),
            is_public: true,
            is_default: false,
            usage_count: 0,
            social_links: HashMap::new(),
        }
    }

    /// Validate construction-time invariants.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyField`] when `display_name` is empty
    /// or whitespace-only.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.display_name.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "display_name",
            });
        }
        Ok(())
    }

    /// Whether a social link for `platform` is present.
    pub fn has_link(&self, platform: &str) -> bool {
        self.social_links.contains_key(platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_store_defaults() {
        let identity = Identity::new(3, "Alex");
        assert_eq!(identity.privacy_level, PrivacyLevel::Standard);
        assert!(identity.is_public);
        assert!(!identity.is_default);
        assert_eq!(identity.usage_count, 0);
        assert!(identity.social_links.is_empty());
        assert!(identity.validate().is_ok());
    }

    #[test]
    fn test_blank_display_name_rejected() {
        let identity = Identity::new(1, "   ");
        assert_eq!(
            identity.validate(),
            Err(ValidationError::EmptyField {
                field: "display_name"
            })
        );
    }

    #[test]
    fn test_privacy_level_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PrivacyLevel::High).unwrap(),
            "\"high\""
        );
        let parsed: PrivacyLevel = serde_json::from_str("\"minimal\"").unwrap();
        assert_eq!(parsed, PrivacyLevel::Minimal);
    }

    #[test]
    fn test_identity_round_trips_through_json() {
        let mut identity = Identity::new(9, "Sam");
        identity.bio = Some("coffee enthusiast".to_string());
        identity
            .social_links
            .insert("github".to_string(), "https://github.com/sam".to_string());

        let json = serde_json::to_string(&identity).unwrap();
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(identity, back);
    }
}
