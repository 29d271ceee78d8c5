// Integration tests for the Sangam engine

use std::sync::Arc;

use sangam_engine::store::memory::{InMemoryDirectory, InMemoryStore};
use sangam_engine::{
    Actor, Direction, EngineError, MatchmakingEngine, Nakshatra, PreferenceSet, Profile,
    RelationshipStatus,
};

fn profile(id: &str, age: u8, religion: &str, location: &str) -> Profile {
    Profile {
        user_id: id.to_string(),
        name: format!("User {}", id),
        age,
        height_cm: 165,
        gender: "female".to_string(),
        marital_status: "never_married".to_string(),
        religion: Some(religion.to_string()),
        caste: Some("Nair".to_string()),
        education: Some("Masters".to_string()),
        occupation: None,
        monthly_income: Some(60_000),
        diet: Some("vegetarian".to_string()),
        smoking: Some("never".to_string()),
        drinking: Some("never".to_string()),
        location: Some(location.to_string()),
        star: Some(Nakshatra::Rohini),
        raasi: None,
        is_active: true,
        created_at: None,
    }
}

fn prefs(user_id: &str) -> PreferenceSet {
    PreferenceSet {
        user_id: user_id.to_string(),
        min_age: 25,
        max_age: 30,
        min_height_cm: 155,
        max_height_cm: 175,
        religions: vec!["Hindu".to_string()],
        castes: vec!["Nair".to_string()],
        education: vec![],
        locations: vec!["Chennai".to_string()],
        diets: vec![],
        smoking: vec![],
        drinking: vec![],
        stars: vec![],
        min_monthly_income: None,
    }
}

async fn engine(
    candidates: Vec<Profile>,
) -> MatchmakingEngine<InMemoryStore, InMemoryDirectory> {
    // RUST_LOG=debug cargo test -- --nocapture shows the engine's tracing
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let directory = Arc::new(InMemoryDirectory::new());
    for candidate in candidates {
        directory.upsert(candidate).await;
    }
    MatchmakingEngine::with_defaults(Arc::new(InMemoryStore::new()), directory)
}

#[tokio::test]
async fn test_strict_matches_are_not_flagged() {
    let engine = engine(vec![
        profile("bob", 27, "Hindu", "Chennai"),
        profile("carol", 29, "Hindu", "Chennai"),
    ])
    .await;
    let viewer = profile("alice", 28, "Hindu", "Chennai");

    let outcome = engine
        .find_matches(&viewer, &prefs("alice"), 10)
        .await
        .unwrap();

    assert_eq!(outcome.matches.len(), 2);
    assert!(!outcome.is_fallback);
    assert!(outcome.matches.iter().all(|m| m.accepted));
}

#[tokio::test]
async fn test_fallback_is_flagged_and_nonempty() {
    // Nobody close to the stated preferences
    let engine = engine(vec![profile("bob", 45, "Christian", "Mumbai")]).await;
    let viewer = profile("alice", 28, "Hindu", "Chennai");

    let outcome = engine
        .find_matches(&viewer, &prefs("alice"), 10)
        .await
        .unwrap();

    assert!(outcome.is_fallback);
    assert!(outcome.relaxation_stage.is_some());
    assert!(!outcome.matches.is_empty());
}

#[tokio::test]
async fn test_empty_pool_yields_no_matches_without_fallback() {
    let engine = engine(vec![]).await;
    let viewer = profile("alice", 28, "Hindu", "Chennai");

    let outcome = engine
        .find_matches(&viewer, &prefs("alice"), 10)
        .await
        .unwrap();

    assert!(outcome.matches.is_empty());
    assert!(!outcome.is_fallback);
}

#[tokio::test]
async fn test_moderated_workflow_with_duplicate_interest() {
    let engine = engine(vec![]).await;
    let relationships = engine.relationships();

    let alice = Actor::user("alice");
    let bob = Actor::user("bob");
    let admin = Actor::moderator("admin");

    // A sends interest to B, moderator approves, B accepts
    relationships.send_interest(&alice, "bob").await.unwrap();
    relationships
        .approve_admin(&admin, "alice", "bob")
        .await
        .unwrap();
    let rel = relationships
        .accept_user(&bob, "alice", "bob")
        .await
        .unwrap();
    assert_eq!(rel.status, RelationshipStatus::AcceptedByUser);

    // A attempts to send interest again: rejected as a duplicate
    let err = relationships.send_interest(&alice, "bob").await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidTransition(_)));

    // The record is unchanged
    let rel = relationships
        .relationships_for("alice", Direction::From)
        .await
        .unwrap()
        .pop()
        .unwrap();
    assert_eq!(rel.status, RelationshipStatus::AcceptedByUser);
}

#[tokio::test]
async fn test_block_hides_candidate_from_both_sides() {
    let engine = engine(vec![
        profile("alice", 28, "Hindu", "Chennai"),
        profile("bob", 27, "Hindu", "Chennai"),
    ])
    .await;

    // Bob blocks Alice; Alice's results must not contain Bob even though
    // the block record lives under (bob, alice)
    engine
        .relationships()
        .block(&Actor::user("bob"), "alice")
        .await
        .unwrap();

    let alice_view = engine
        .find_matches(
            &profile("alice", 28, "Hindu", "Chennai"),
            &prefs("alice"),
            10,
        )
        .await
        .unwrap();
    assert!(alice_view.matches.iter().all(|m| m.user_id != "bob"));

    let bob_view = engine
        .find_matches(&profile("bob", 27, "Hindu", "Chennai"), &prefs("bob"), 10)
        .await
        .unwrap();
    assert!(bob_view.matches.iter().all(|m| m.user_id != "alice"));
}

#[tokio::test]
async fn test_opposite_directions_are_independent() {
    let engine = engine(vec![]).await;
    let relationships = engine.relationships();

    // A blocks B while B has a pending interest toward A; both records
    // coexist and are not merged
    relationships
        .send_interest(&Actor::user("bob"), "alice")
        .await
        .unwrap();
    relationships
        .block(&Actor::user("alice"), "bob")
        .await
        .unwrap();

    let from_bob = relationships
        .relationships_for("bob", Direction::From)
        .await
        .unwrap();
    assert_eq!(from_bob[0].status, RelationshipStatus::PendingAdmin);

    let from_alice = relationships
        .relationships_for("alice", Direction::From)
        .await
        .unwrap();
    assert_eq!(from_alice[0].status, RelationshipStatus::Blocked);

    assert!(relationships.is_blocked("bob", "alice").await.unwrap());
}

#[tokio::test]
async fn test_unblock_then_fresh_interest() {
    let engine = engine(vec![]).await;
    let relationships = engine.relationships();
    let alice = Actor::user("alice");

    relationships.block(&alice, "bob").await.unwrap();
    relationships.unblock(&alice, "bob").await.unwrap();
    assert!(!relationships.is_blocked("alice", "bob").await.unwrap());

    let rel = relationships.send_interest(&alice, "bob").await.unwrap();
    assert_eq!(rel.status, RelationshipStatus::PendingAdmin);
}

#[tokio::test]
async fn test_change_notifications_replace_polling() {
    let engine = engine(vec![]).await;
    let relationships = engine.relationships();
    let mut events = relationships.subscribe();

    relationships
        .send_request(&Actor::user("alice"), "bob")
        .await
        .unwrap();
    relationships
        .accept(&Actor::user("bob"), "alice", "bob")
        .await
        .unwrap();

    let first = events.recv().await.unwrap();
    assert_eq!(first.status, RelationshipStatus::Pending);
    let second = events.recv().await.unwrap();
    assert_eq!(second.status, RelationshipStatus::Connected);
}
