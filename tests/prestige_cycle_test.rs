//! Integration test: complete prestige cycle
//!
//! Tests the full flow: fresh user → grind completions to the level gate →
//! prestige → verify reset → second cycle.

use taskquest::achievements::AchievementId;
use taskquest::error::EngineError;
use taskquest::level_curve::total_xp_for_level;
use taskquest::todo::{Difficulty, NewTodo};
use taskquest::{Engine, MemoryStore, Store, UserId};
use uuid::Uuid;

// 2023-11-14 22:13:20 UTC
const NOW: i64 = 1_700_000_000;

fn setup() -> (Engine<MemoryStore>, UserId) {
    let mut engine = Engine::new(MemoryStore::new());
    let user = Uuid::new_v4();
    engine.register_user(user);
    (engine, user)
}

/// Same-day hard completions until the target level is reached.
fn grind_to_level(engine: &mut Engine<MemoryStore>, user: UserId, level: u32, at: i64) {
    while engine.player_stats(user).unwrap().level < level {
        let todo = engine
            .add_todo(
                user,
                NewTodo {
                    title: "Grind".to_string(),
                    start_time: at,
                    end_time: at + 3600,
                    difficulty: Difficulty::Hard,
                },
            )
            .unwrap();
        engine.complete_todo(user, todo, at).unwrap();
    }
}

#[test]
fn test_prestige_below_threshold_always_fails() {
    let (mut engine, user) = setup();

    let err = engine.prestige(user).unwrap_err();
    match err {
        EngineError::PrestigeBelowThreshold { level, required } => {
            assert_eq!(level, 1);
            assert_eq!(required, 10);
        }
        other => panic!("expected PrestigeBelowThreshold, got {other:?}"),
    }

    // Still failing one level below the gate
    grind_to_level(&mut engine, user, 9, NOW);
    assert!(engine.prestige(user).is_err());
    assert_eq!(engine.player_stats(user).unwrap().prestige, 0);
}

#[test]
fn test_complete_prestige_cycle() {
    let (mut engine, user) = setup();

    grind_to_level(&mut engine, user, 10, NOW);
    let pre = engine.player_stats(user).unwrap();
    assert!(pre.level >= 10);
    assert!(pre.xp >= total_xp_for_level(10));

    // Unlock some achievements so the reset has something to clear
    engine
        .unlock_achievement(user, AchievementId::FirstSteps, NOW)
        .unwrap();
    engine
        .unlock_achievement(user, AchievementId::Veteran, NOW)
        .unwrap();
    let gems_before = engine.player_stats(user).unwrap().gems;
    let streak_before = engine.player_stats(user).unwrap().current_streak;

    let outcome = engine.prestige(user).unwrap();
    assert_eq!(outcome.new_prestige, 1);
    assert_eq!(outcome.gems_earned, 50);
    assert_eq!(outcome.achievements_reset, 2);

    let stats = engine.player_stats(user).unwrap();
    assert_eq!(stats.level, 1);
    assert_eq!(stats.xp, 0);
    assert_eq!(stats.prestige, 1);
    // Gems earned from unlocks stay, plus the prestige bonus
    assert_eq!(stats.gems, gems_before + 50);
    // Streak untouched
    assert_eq!(stats.current_streak, streak_before);

    // Unlock records are gone: achievements show locked again
    let views = engine.list_achievements(user).unwrap();
    let first_steps = views
        .iter()
        .find(|v| v.achievement_id == AchievementId::FirstSteps)
        .unwrap();
    assert!(!first_steps.is_unlocked);

    // The prestige itself makes BornAgain eligible
    engine
        .unlock_achievement(user, AchievementId::BornAgain, NOW)
        .unwrap();
}

#[test]
fn test_second_prestige_cycle() {
    let (mut engine, user) = setup();

    grind_to_level(&mut engine, user, 10, NOW);
    engine.prestige(user).unwrap();

    grind_to_level(&mut engine, user, 10, NOW);
    let outcome = engine.prestige(user).unwrap();
    assert_eq!(outcome.new_prestige, 2);

    let stats = engine.player_stats(user).unwrap();
    assert_eq!(stats.prestige, 2);
    assert_eq!(stats.level, 1);
    assert_eq!(stats.xp, 0);
}

#[test]
fn test_prestige_leaves_todos_intact() {
    let (mut engine, user) = setup();
    grind_to_level(&mut engine, user, 10, NOW);

    let todos_before = engine.store().profile(user).unwrap().todos.len();
    engine.prestige(user).unwrap();
    assert_eq!(engine.store().profile(user).unwrap().todos.len(), todos_before);
}
