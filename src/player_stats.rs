//! Per-user progression state and the operations that mutate it.
//!
//! `PlayerStats` is mutated exclusively through these operations; after every
//! mutation `level` is the largest level whose cumulative threshold the XP
//! satisfies. The store is multiplier-agnostic: callers scale XP amounts
//! before granting.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::level_curve::level_for_xp;
use crate::streak::advance_streak;

/// Result of an XP grant or revocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelChange {
    pub old_level: u32,
    pub new_level: u32,
}

impl LevelChange {
    pub fn did_level_up(&self) -> bool {
        self.new_level > self.old_level
    }
}

/// Core progression state for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub xp: u64,
    pub level: u32,
    pub gems: u64,
    pub current_streak: u32,
    pub prestige: u32,
    pub last_active_day: Option<NaiveDate>,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            gems: 0,
            current_streak: 0,
            prestige: 0,
            last_active_day: None,
        }
    }
}

impl PlayerStats {
    /// Adds XP and recomputes the level.
    pub fn grant_xp(&mut self, amount: u64) -> LevelChange {
        let old_level = self.level;
        self.xp = self.xp.saturating_add(amount);
        self.level = level_for_xp(self.xp);
        LevelChange {
            old_level,
            new_level: self.level,
        }
    }

    /// Subtracts XP, clamped at zero, and recomputes the level downward.
    pub fn revoke_xp(&mut self, amount: u64) -> LevelChange {
        let old_level = self.level;
        self.xp = self.xp.saturating_sub(amount);
        self.level = level_for_xp(self.xp);
        LevelChange {
            old_level,
            new_level: self.level,
        }
    }

    pub fn grant_gems(&mut self, amount: u64) {
        self.gems = self.gems.saturating_add(amount);
    }

    /// Deducts gems, floored at zero. Returns the amount actually deducted.
    pub fn revoke_gems(&mut self, amount: u64) -> u64 {
        let deducted = amount.min(self.gems);
        self.gems -= deducted;
        deducted
    }

    /// Advances the streak for a completion at `completed_at` (epoch seconds).
    /// Returns the streak after the bump.
    pub fn bump_streak(&mut self, completed_at: i64) -> u32 {
        let today = utc_day(completed_at);
        self.current_streak = advance_streak(self.last_active_day, today, self.current_streak);
        self.last_active_day = Some(today);
        self.current_streak
    }
}

/// Lifetime counters used for achievement evaluation and the stats surface.
/// Completion counters move with complete/uncomplete so they reflect the
/// user's live state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressCounters {
    pub total_completions: u64,
    pub easy_completions: u64,
    pub medium_completions: u64,
    pub hard_completions: u64,
    pub challenges_claimed: u64,
    pub gems_spent: u64,
    pub longest_streak: u32,
}

impl ProgressCounters {
    /// Records a completion of the given difficulty.
    pub fn record_completion(&mut self, difficulty: crate::todo::Difficulty) {
        use crate::todo::Difficulty;
        self.total_completions += 1;
        match difficulty {
            Difficulty::Easy => self.easy_completions += 1,
            Difficulty::Medium => self.medium_completions += 1,
            Difficulty::Hard => self.hard_completions += 1,
        }
    }

    /// Reverses a completion record (floored at zero).
    pub fn record_uncompletion(&mut self, difficulty: crate::todo::Difficulty) {
        use crate::todo::Difficulty;
        self.total_completions = self.total_completions.saturating_sub(1);
        match difficulty {
            Difficulty::Easy => self.easy_completions = self.easy_completions.saturating_sub(1),
            Difficulty::Medium => {
                self.medium_completions = self.medium_completions.saturating_sub(1)
            }
            Difficulty::Hard => self.hard_completions = self.hard_completions.saturating_sub(1),
        }
    }
}

/// Calendar day (UTC) of an epoch-second timestamp.
pub fn utc_day(timestamp: i64) -> NaiveDate {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}
