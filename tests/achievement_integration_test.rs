//! Integration test: achievement evaluation and unlocking
//!
//! Tests live progress computation through real completions, eligibility
//! gating, and one-time reward granting.

use taskquest::achievements::AchievementId;
use taskquest::error::EngineError;
use taskquest::todo::{Difficulty, NewTodo};
use taskquest::{Engine, MemoryStore, UserId};
use uuid::Uuid;

// 2023-11-14 22:13:20 UTC
const NOW: i64 = 1_700_000_000;
const DAY: i64 = 86_400;

fn new_todo(difficulty: Difficulty) -> NewTodo {
    NewTodo {
        title: "Task".to_string(),
        start_time: NOW,
        end_time: NOW + 3600,
        difficulty,
    }
}

fn setup() -> (Engine<MemoryStore>, UserId) {
    let mut engine = Engine::new(MemoryStore::new());
    let user = Uuid::new_v4();
    engine.register_user(user);
    (engine, user)
}

fn complete_one(engine: &mut Engine<MemoryStore>, user: UserId, at: i64) {
    let todo = engine.add_todo(user, new_todo(Difficulty::Easy)).unwrap();
    engine.complete_todo(user, todo, at).unwrap();
}

#[test]
fn test_progress_tracks_live_completions() {
    let (mut engine, user) = setup();

    for _ in 0..10 {
        complete_one(&mut engine, user, NOW);
    }

    let views = engine.list_achievements(user).unwrap();
    let taskmaster = views
        .iter()
        .find(|v| v.achievement_id == AchievementId::TaskmasterI)
        .unwrap();
    assert_eq!(taskmaster.current_progress, 10);
    assert_eq!(taskmaster.condition_value, 25);
    assert!((taskmaster.progress_percentage - 40.0).abs() < 1e-9);
    assert!(!taskmaster.is_unlocked);
}

#[test]
fn test_unlock_first_steps_after_one_completion() {
    let (mut engine, user) = setup();
    complete_one(&mut engine, user, NOW);

    let outcome = engine
        .unlock_achievement(user, AchievementId::FirstSteps, NOW)
        .unwrap();
    assert_eq!(outcome.title, "First Steps");
    assert_eq!(outcome.reward_gems, 5);
    assert_eq!(engine.player_stats(user).unwrap().gems, 5);

    let views = engine.list_achievements(user).unwrap();
    let first_steps = views
        .iter()
        .find(|v| v.achievement_id == AchievementId::FirstSteps)
        .unwrap();
    assert!(first_steps.is_unlocked);
    assert_eq!(first_steps.unlocked_at, Some(NOW));
}

#[test]
fn test_double_unlock_grants_gems_once() {
    let (mut engine, user) = setup();
    complete_one(&mut engine, user, NOW);

    engine
        .unlock_achievement(user, AchievementId::FirstSteps, NOW)
        .unwrap();
    let err = engine
        .unlock_achievement(user, AchievementId::FirstSteps, NOW + 60)
        .unwrap_err();
    assert!(matches!(err, EngineError::AlreadyUnlocked(_)));
    assert_eq!(engine.player_stats(user).unwrap().gems, 5);
}

#[test]
fn test_unlock_before_eligibility_fails() {
    let (mut engine, user) = setup();
    complete_one(&mut engine, user, NOW);

    let err = engine
        .unlock_achievement(user, AchievementId::TaskmasterI, NOW)
        .unwrap_err();
    match err {
        EngineError::NotEligible {
            current, required, ..
        } => {
            assert_eq!(current, 1);
            assert_eq!(required, 25);
        }
        other => panic!("expected NotEligible, got {other:?}"),
    }
    assert_eq!(engine.player_stats(user).unwrap().gems, 0);
}

#[test]
fn test_streak_achievement_requires_live_streak() {
    let (mut engine, user) = setup();

    // Six consecutive days: not yet eligible
    for day in 0..6 {
        complete_one(&mut engine, user, NOW + day * DAY);
    }
    assert!(engine
        .unlock_achievement(user, AchievementId::WeekOfFire, NOW)
        .is_err());

    // The seventh day crosses the threshold
    complete_one(&mut engine, user, NOW + 6 * DAY);
    engine
        .unlock_achievement(user, AchievementId::WeekOfFire, NOW + 6 * DAY)
        .unwrap();
}

#[test]
fn test_challenge_claims_feed_achievement_progress() {
    let (mut engine, user) = setup();
    complete_one(&mut engine, user, NOW);

    let listing = engine.list_active_challenges(user, NOW).unwrap();
    let finisher = listing.daily.iter().find(|v| v.title == "Finisher").unwrap();
    engine.claim_challenge(user, finisher.id, NOW).unwrap();

    let views = engine.list_achievements(user).unwrap();
    let challenger = views
        .iter()
        .find(|v| v.achievement_id == AchievementId::ChallengerI)
        .unwrap();
    assert_eq!(challenger.current_progress, 1);
}

#[test]
fn test_inactive_achievement_is_not_listed_and_not_unlockable() {
    let (mut engine, user) = setup();
    complete_one(&mut engine, user, NOW);

    let views = engine.list_achievements(user).unwrap();
    assert!(views
        .iter()
        .all(|v| v.achievement_id != AchievementId::FoundersBadge));

    let err = engine
        .unlock_achievement(user, AchievementId::FoundersBadge, NOW)
        .unwrap_err();
    assert!(matches!(err, EngineError::AchievementNotFound(_)));
}

#[test]
fn test_undo_rolls_back_completion_progress() {
    let (mut engine, user) = setup();
    let todo = engine.add_todo(user, new_todo(Difficulty::Easy)).unwrap();
    engine.complete_todo(user, todo, NOW).unwrap();
    engine.uncomplete_todo(user, todo).unwrap();

    let err = engine
        .unlock_achievement(user, AchievementId::FirstSteps, NOW)
        .unwrap_err();
    assert!(matches!(err, EngineError::NotEligible { current: 0, .. }));
}
