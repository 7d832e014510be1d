//! The todo completion state machine.
//!
//! Completing a todo atomically bumps the streak, grants multiplier-scaled
//! XP, and advances challenge progress. Un-completing reverses the XP grant
//! exactly (the granted amount is persisted on the todo) but leaves the
//! streak and challenge progress alone: later completions may have advanced
//! both, and a deterministic reversal does not exist.

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::challenges::{self, ChallengeDef, CompletionEvent};
use crate::error::{EngineError, EngineResult};
use crate::player_stats::LevelChange;
use crate::store::PlayerProfile;
use crate::streak::StreakTiers;

/// Result of a completion toggle.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CompletionOutcome {
    /// False when the call was an idempotent no-op.
    pub changed: bool,
    /// XP granted (on completion) or revoked (on un-completion).
    pub xp_delta: u64,
    /// Present when the user's level changed in either direction.
    pub level_change: Option<LevelChange>,
    pub challenges_updated: bool,
}

impl CompletionOutcome {
    fn noop() -> Self {
        Self {
            changed: false,
            xp_delta: 0,
            level_change: None,
            challenges_updated: false,
        }
    }
}

/// Transition `Incomplete -> Completed`.
///
/// The streak bumps first so the multiplier of the post-bump tier applies to
/// this completion's XP. Completing an already-completed todo is a no-op.
pub fn complete_todo(
    profile: &mut PlayerProfile,
    templates: &[ChallengeDef],
    tiers: &StreakTiers,
    todo_id: Uuid,
    now: i64,
) -> EngineResult<CompletionOutcome> {
    let index = profile
        .todos
        .iter()
        .position(|t| t.id == todo_id)
        .ok_or(EngineError::TodoNotFound(todo_id))?;
    if profile.todos[index].is_archived() {
        return Err(EngineError::TodoArchived(todo_id));
    }
    if profile.todos[index].is_completed {
        return Ok(CompletionOutcome::noop());
    }

    let streak = profile.stats.bump_streak(now);
    if streak > profile.counters.longest_streak {
        profile.counters.longest_streak = streak;
    }
    let multiplier = tiers.multiplier_for(streak);
    let difficulty = profile.todos[index].difficulty;
    let effective_xp = (difficulty.xp_value() as f64 * multiplier) as u64;
    let change = profile.stats.grant_xp(effective_xp);

    let todo = &mut profile.todos[index];
    todo.is_completed = true;
    todo.completed_at = Some(now);
    todo.awarded_xp = Some(effective_xp);
    profile.counters.record_completion(difficulty);

    let challenges_updated = challenges::engine::apply_completion(
        &mut profile.challenges,
        templates,
        &CompletionEvent {
            difficulty,
            completed_at: now,
        },
    );

    debug!(
        todo = %todo_id,
        xp = effective_xp,
        multiplier,
        streak,
        "todo completed"
    );

    Ok(CompletionOutcome {
        changed: true,
        xp_delta: effective_xp,
        level_change: (change.old_level != change.new_level).then_some(change),
        challenges_updated,
    })
}

/// Transition `Completed -> Incomplete` (undo).
///
/// Revokes exactly the XP that was granted. Un-completing an incomplete todo
/// is a no-op.
pub fn uncomplete_todo(
    profile: &mut PlayerProfile,
    todo_id: Uuid,
) -> EngineResult<CompletionOutcome> {
    let index = profile
        .todos
        .iter()
        .position(|t| t.id == todo_id)
        .ok_or(EngineError::TodoNotFound(todo_id))?;
    if profile.todos[index].is_archived() {
        return Err(EngineError::TodoArchived(todo_id));
    }
    if !profile.todos[index].is_completed {
        return Ok(CompletionOutcome::noop());
    }

    let difficulty = profile.todos[index].difficulty;
    let awarded = profile.todos[index]
        .awarded_xp
        .unwrap_or_else(|| difficulty.xp_value());
    let change = profile.stats.revoke_xp(awarded);

    let todo = &mut profile.todos[index];
    todo.is_completed = false;
    todo.completed_at = None;
    todo.awarded_xp = None;
    profile.counters.record_uncompletion(difficulty);

    debug!(todo = %todo_id, xp = awarded, "todo un-completed");

    Ok(CompletionOutcome {
        changed: true,
        xp_delta: awarded,
        level_change: (change.old_level != change.new_level).then_some(change),
        challenges_updated: false,
    })
}
