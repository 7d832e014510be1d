//! Achievement system types and data structures.

use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    // Completion milestones
    FirstSteps,     // 1 completion
    TaskmasterI,    // 25 completions
    TaskmasterII,   // 100 completions
    TaskmasterIII,  // 500 completions
    // Streak milestones
    WeekOfFire,     // 7-day streak
    Fortnight,      // 14-day streak
    MonthOfMomentum, // 30-day streak
    // Level milestones
    Apprentice,     // level 5
    Veteran,        // level 10
    // Economy
    Spender,        // 100 gems spent
    BigSpender,     // 500 gems spent
    // Challenges
    ChallengerI,    // 10 challenges claimed
    ChallengerII,   // 50 challenges claimed
    // Prestige
    BornAgain,      // first prestige
    Transcendent,   // 5 prestiges
    // Retired
    FoundersBadge,  // no longer obtainable
}

/// Opaque icon tag passed through to the presentation layer unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementIcon {
    Trophy,
    Flame,
    Gem,
    Star,
    Crown,
    Medal,
    Sunrise,
    Rocket,
}

/// What a user's progress is measured against for an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementCondition {
    TotalCompletions(u64),
    StreakDays(u32),
    LevelReached(u32),
    GemsSpent(u64),
    ChallengesClaimed(u64),
    PrestigeCount(u32),
}

impl AchievementCondition {
    /// The progress value required for eligibility.
    pub fn value(&self) -> u64 {
        match *self {
            AchievementCondition::TotalCompletions(n) => n,
            AchievementCondition::StreakDays(n) => n as u64,
            AchievementCondition::LevelReached(n) => n as u64,
            AchievementCondition::GemsSpent(n) => n,
            AchievementCondition::ChallengesClaimed(n) => n,
            AchievementCondition::PrestigeCount(n) => n as u64,
        }
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub condition: AchievementCondition,
    pub reward_gems: u64,
    pub is_active: bool,
    pub icon: AchievementIcon,
}

/// Record of an unlocked achievement. Presence of a record = unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    pub unlocked_at: i64,
}

/// One entry of the achievement listing surface.
#[derive(Debug, Clone, Serialize)]
pub struct AchievementView {
    pub achievement_id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub current_progress: u64,
    pub condition_value: u64,
    pub progress_percentage: f64,
    pub is_unlocked: bool,
    pub unlocked_at: Option<i64>,
    pub reward_gems: u64,
    pub icon: AchievementIcon,
}

/// The achievement granted by a successful unlock.
#[derive(Debug, Clone, Serialize)]
pub struct UnlockOutcome {
    pub achievement_id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub reward_gems: u64,
}
