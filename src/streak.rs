//! Streak multiplier tiers and calendar-day streak arithmetic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A streak-length threshold granting a multiplicative XP bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreakTier {
    pub min_streak_days: u32,
    pub multiplier: f64,
}

/// Sorted tier table. Always retains a tier with `min_streak_days = 0`
/// as the default floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakTiers {
    tiers: Vec<StreakTier>,
}

impl Default for StreakTiers {
    fn default() -> Self {
        Self {
            tiers: vec![
                StreakTier {
                    min_streak_days: 0,
                    multiplier: 1.0,
                },
                StreakTier {
                    min_streak_days: 3,
                    multiplier: 1.1,
                },
                StreakTier {
                    min_streak_days: 7,
                    multiplier: 1.2,
                },
                StreakTier {
                    min_streak_days: 14,
                    multiplier: 1.5,
                },
                StreakTier {
                    min_streak_days: 30,
                    multiplier: 2.0,
                },
            ],
        }
    }
}

impl StreakTiers {
    /// Builds a tier table after validating it.
    pub fn new(tiers: Vec<StreakTier>) -> EngineResult<Self> {
        validate_tiers(&tiers)?;
        Ok(Self { tiers })
    }

    /// Replaces the tier table. The zero tier must still be present and
    /// both fields must be strictly increasing.
    pub fn set_tiers(&mut self, tiers: Vec<StreakTier>) -> EngineResult<()> {
        validate_tiers(&tiers)?;
        self.tiers = tiers;
        Ok(())
    }

    /// Multiplier of the highest tier whose threshold is met by `streak_days`.
    pub fn multiplier_for(&self, streak_days: u32) -> f64 {
        self.tiers
            .iter()
            .rev()
            .find(|t| t.min_streak_days <= streak_days)
            .map(|t| t.multiplier)
            .unwrap_or(1.0)
    }

    pub fn tiers(&self) -> &[StreakTier] {
        &self.tiers
    }
}

fn validate_tiers(tiers: &[StreakTier]) -> EngineResult<()> {
    let Some(first) = tiers.first() else {
        return Err(EngineError::Validation(
            "streak tier table must not be empty".to_string(),
        ));
    };
    if first.min_streak_days != 0 {
        return Err(EngineError::Validation(
            "streak tier table must start with a zero tier".to_string(),
        ));
    }
    for pair in tiers.windows(2) {
        if pair[1].min_streak_days <= pair[0].min_streak_days {
            return Err(EngineError::Validation(format!(
                "tier thresholds must be strictly increasing (got {} after {})",
                pair[1].min_streak_days, pair[0].min_streak_days
            )));
        }
        if pair[1].multiplier <= pair[0].multiplier {
            return Err(EngineError::Validation(format!(
                "tier multipliers must be strictly increasing (got {} after {})",
                pair[1].multiplier, pair[0].multiplier
            )));
        }
    }
    Ok(())
}

/// Computes the streak value after a completion on `today`.
///
/// Same calendar day leaves the streak unchanged, the following day extends
/// it, and any longer gap (or first-ever activity) restarts it at 1.
pub fn advance_streak(
    last_active_day: Option<NaiveDate>,
    today: NaiveDate,
    current_streak: u32,
) -> u32 {
    match last_active_day {
        None => 1,
        Some(last) => match (today - last).num_days() {
            0 => current_streak.max(1),
            1 => current_streak + 1,
            _ => 1,
        },
    }
}
