//! Prestige: a voluntary reset of level, XP, and achievements in exchange
//! for a permanent gem bonus and a prestige counter increment.

use serde::Serialize;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::player_stats::PlayerStats;
use crate::store::PlayerProfile;

/// Result of a successful prestige.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PrestigeOutcome {
    pub new_prestige: u32,
    pub gems_earned: u64,
    pub achievements_reset: usize,
}

/// Checks whether the player meets the level gate.
pub fn can_prestige(stats: &PlayerStats, max_level_threshold: u32) -> bool {
    stats.level >= max_level_threshold
}

/// Performs a prestige reset.
///
/// Level and XP return to their starting values, unlock records are deleted
/// (gems already granted by them stay), and the bonus is credited. Gems,
/// the streak, and todos are untouched.
pub fn perform_prestige(
    profile: &mut PlayerProfile,
    max_level_threshold: u32,
    bonus_gems: u64,
) -> EngineResult<PrestigeOutcome> {
    if !can_prestige(&profile.stats, max_level_threshold) {
        return Err(EngineError::PrestigeBelowThreshold {
            level: profile.stats.level,
            required: max_level_threshold,
        });
    }

    profile.stats.level = 1;
    profile.stats.xp = 0;
    profile.stats.prestige += 1;
    let achievements_reset = profile.unlocked.len();
    profile.unlocked.clear();
    profile.stats.grant_gems(bonus_gems);

    info!(
        prestige = profile.stats.prestige,
        achievements_reset, "prestige performed"
    );

    Ok(PrestigeOutcome {
        new_prestige: profile.stats.prestige,
        gems_earned: bonus_gems,
        achievements_reset,
    })
}
