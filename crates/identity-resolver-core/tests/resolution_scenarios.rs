//! End-to-end resolution scenarios.

use identity_resolver_core::resolver::IdentityResolver;
use identity_resolver_core::types::{Context, Identity, PrivacyLevel};
use identity_resolver_core::EngineError;

fn sarah() -> Identity {
    let mut identity = Identity::new(1, "Dr. Sarah Johnson");
    identity.title = Some("Senior Software Engineer".to_string());
    identity.bio = Some("engineer and consultant".to_string());
    identity.privacy_level = PrivacyLevel::Standard;
    identity.is_public = true;
    identity.is_default = true;
    identity.usage_count = 5;
    identity.social_links.insert(
        "linkedin".to_string(),
        "https://linkedin.com/in/sarahjohnson".to_string(),
    );
    identity
}

#[test]
fn professional_context_strong_match() {
    let context = Context::new(1, "Professional LinkedIn");
    let resolver = IdentityResolver::new();

    let result = resolver.resolve(&context, &[sarah()]).unwrap();
    let best = result.best_match().unwrap();

    assert!(best.breakdown.content_match >= 80, "three keyword matches");
    assert!(best.breakdown.social_links_match >= 80, "linkedin bonus");
    assert_eq!(best.breakdown.privacy_match, 90);
    assert!(best.score >= 80, "overall score was {}", best.score);

    assert!(
        best.reasoning
            .iter()
            .any(|r| r.starts_with("Professional credentials found:")
                && r.contains("engineer")
                && r.contains("consultant")
                && r.contains("senior")),
        "reasoning must name the matched professional keywords: {:?}",
        best.reasoning
    );
    assert!(
        best.reasoning
            .iter()
            .any(|r| r.contains("LinkedIn profile available")),
        "reasoning must name the linkedin link: {:?}",
        best.reasoning
    );
}

#[test]
fn family_context_prefers_private_identity() {
    let context = Context::new(2, "Family Group");

    let mut public_identity = Identity::new(1, "Morgan");
    public_identity.is_public = true;
    let mut private_identity = public_identity.clone();
    private_identity.id = 2;
    private_identity.is_public = false;

    let resolver = IdentityResolver::new();
    let result = resolver
        .resolve(&context, &[public_identity, private_identity])
        .unwrap();

    let private_scored = result
        .ranked
        .iter()
        .find(|s| s.identity.id == 2)
        .expect("private identity present");
    assert_eq!(private_scored.breakdown.visibility_match, 90);

    let public_scored = result
        .ranked
        .iter()
        .find(|s| s.identity.id == 1)
        .expect("public identity present");
    assert!(private_scored.score >= public_scored.score);
    assert_eq!(
        result.best_match().unwrap().identity.id,
        2,
        "private identity should rank first in a family context"
    );
}

#[test]
fn tie_break_preserves_input_order() {
    let context = Context::new(3, "Gaming");

    // Identical apart from id and name: manufactured equal scores.
    let a = Identity::new(10, "A");
    let b = Identity::new(20, "B");

    let resolver = IdentityResolver::new();
    let result = resolver.resolve(&context, &[a, b]).unwrap();

    assert_eq!(result.ranked[0].score, result.ranked[1].score);
    assert_eq!(result.ranked[0].identity.id, 10);
    assert_eq!(result.ranked[1].identity.id, 20);
}

#[test]
fn empty_identity_set_is_an_error() {
    let resolver = IdentityResolver::new();
    let err = resolver.resolve(&Context::new(4, "Work"), &[]).unwrap_err();
    assert!(matches!(err, EngineError::EmptyIdentitySet { context_id: 4 }));
}

#[test]
fn resolution_is_idempotent() {
    let context = Context::new(5, "Creative Studio");

    let mut artist = Identity::new(1, "Robin");
    artist.bio = Some("artist with a portfolio of digital art".to_string());
    artist
        .social_links
        .insert("behance".to_string(), "https://behance.net/robin".to_string());
    let plain = Identity::new(2, "Robin Alt");

    let identities = vec![artist, plain];
    let resolver = IdentityResolver::new();

    let first = resolver.resolve(&context, &identities).unwrap();
    let second = resolver.resolve(&context, &identities).unwrap();
    assert_eq!(first, second, "same inputs must yield identical output");
}

#[test]
fn ranked_output_is_a_permutation_of_the_input() {
    let context = Context::new(6, "Social Hangout");

    let identities: Vec<Identity> = (1..=6)
        .map(|i| {
            let mut identity = Identity::new(i, format!("Identity {i}"));
            identity.usage_count = (i % 3) as u32;
            identity.is_public = i % 2 == 0;
            identity
        })
        .collect();

    let resolver = IdentityResolver::new();
    let result = resolver.resolve(&context, &identities).unwrap();

    assert_eq!(result.ranked.len(), identities.len());

    let mut seen: Vec<u64> = result.ranked.iter().map(|s| s.identity.id).collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6], "no duplicates, no drops");

    for pair in result.ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score, "descending by score");
    }
}

#[test]
fn all_scores_stay_in_bounds_across_contexts() {
    let contexts = [
        Context::new(1, "Professional LinkedIn"),
        Context::new(2, "Work Email"),
        Context::new(3, "Family Group"),
        Context::new(4, "Personal Blog"),
        Context::new(5, "Social Hangout"),
        Context::new(6, "Creative Studio"),
        Context::new(7, "Private Notes"),
        Context::new(8, "Gaming"),
    ];

    let mut identities = vec![sarah()];
    let mut minimal = Identity::new(2, "Casual Casey");
    minimal.privacy_level = PrivacyLevel::Minimal;
    minimal.bio = Some("coffee lover, travel fan, photography enthusiast".to_string());
    minimal
        .social_links
        .insert("instagram".to_string(), "https://instagram.com/casey".to_string());
    identities.push(minimal);
    let mut hidden = Identity::new(3, "Quiet Quinn");
    hidden.privacy_level = PrivacyLevel::High;
    hidden.is_public = false;
    identities.push(hidden);

    let resolver = IdentityResolver::new();
    for context in &contexts {
        let result = resolver.resolve(context, &identities).unwrap();
        for scored in &result.ranked {
            assert!(scored.score <= 100);
            assert!((45..=95).contains(&scored.confidence));
            assert!(
                scored.confidence <= scored.score,
                "confidence {} must not exceed score {} (context {})",
                scored.confidence,
                scored.score,
                context.name
            );
            assert!(!scored.reasoning.is_empty());
            let b = scored.breakdown;
            for sub in [
                b.privacy_match,
                b.content_match,
                b.social_links_match,
                b.usage_pattern,
                b.visibility_match,
            ] {
                assert!(sub <= 100);
            }
        }
    }
}

#[test]
fn serialized_result_preserves_order_and_reasoning() {
    let context = Context::new(9, "Professional Network");
    let identities = vec![sarah(), Identity::new(2, "Plain Pat")];

    let resolver = IdentityResolver::new();
    let result = resolver.resolve(&context, &identities).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let back: identity_resolver_core::ResolutionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
    assert_eq!(
        back.ranked[0].identity.id,
        result.ranked[0].identity.id,
        "ranking order survives serialization"
    );
}
