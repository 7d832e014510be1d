//! Achievement evaluation and user-initiated unlocking.
//!
//! The engine computes eligibility from live state but never auto-claims;
//! unlocking is an explicit user action. At most one unlock record exists
//! per (user, achievement), and its presence is the double-unlock guard.

use std::collections::HashMap;

use tracing::debug;

use super::types::{
    AchievementCondition, AchievementDef, AchievementId, AchievementView, UnlockOutcome,
    UnlockedAchievement,
};
use crate::error::{EngineError, EngineResult};
use crate::player_stats::{PlayerStats, ProgressCounters};

/// Current progress toward an achievement's condition, read from live state.
pub fn current_progress(
    def: &AchievementDef,
    stats: &PlayerStats,
    counters: &ProgressCounters,
) -> u64 {
    match def.condition {
        AchievementCondition::TotalCompletions(_) => counters.total_completions,
        AchievementCondition::StreakDays(_) => stats.current_streak as u64,
        AchievementCondition::LevelReached(_) => stats.level as u64,
        AchievementCondition::GemsSpent(_) => counters.gems_spent,
        AchievementCondition::ChallengesClaimed(_) => counters.challenges_claimed,
        AchievementCondition::PrestigeCount(_) => stats.prestige as u64,
    }
}

/// Builds the achievement listing for every active template.
pub fn evaluate(
    templates: &[AchievementDef],
    stats: &PlayerStats,
    counters: &ProgressCounters,
    unlocked: &HashMap<AchievementId, UnlockedAchievement>,
) -> Vec<AchievementView> {
    templates
        .iter()
        .filter(|def| def.is_active)
        .map(|def| {
            let progress = current_progress(def, stats, counters);
            let required = def.condition.value();
            let percentage = (progress as f64 / required as f64 * 100.0).min(100.0);
            let record = unlocked.get(&def.id);
            AchievementView {
                achievement_id: def.id,
                name: def.name,
                description: def.description,
                current_progress: progress,
                condition_value: required,
                progress_percentage: percentage,
                is_unlocked: record.is_some(),
                unlocked_at: record.map(|r| r.unlocked_at),
                reward_gems: def.reward_gems,
                icon: def.icon,
            }
        })
        .collect()
}

/// Unlocks an achievement, granting its gems exactly once.
pub fn unlock(
    templates: &[AchievementDef],
    stats: &mut PlayerStats,
    counters: &ProgressCounters,
    unlocked: &mut HashMap<AchievementId, UnlockedAchievement>,
    id: AchievementId,
    now: i64,
) -> EngineResult<UnlockOutcome> {
    let def = templates
        .iter()
        .find(|def| def.id == id && def.is_active)
        .ok_or(EngineError::AchievementNotFound(id))?;
    if unlocked.contains_key(&id) {
        return Err(EngineError::AlreadyUnlocked(id));
    }
    let progress = current_progress(def, stats, counters);
    let required = def.condition.value();
    if progress < required {
        return Err(EngineError::NotEligible {
            id,
            current: progress,
            required,
        });
    }
    unlocked.insert(id, UnlockedAchievement { unlocked_at: now });
    stats.grant_gems(def.reward_gems);
    debug!(achievement = ?id, gems = def.reward_gems, "achievement unlocked");
    Ok(UnlockOutcome {
        achievement_id: id,
        title: def.name,
        description: def.description,
        reward_gems: def.reward_gems,
    })
}
