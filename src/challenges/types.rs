//! Challenge system types and data structures.

use chrono::{DateTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DAILY_PERIOD_SECONDS, WEEKLY_PERIOD_SECONDS};
use crate::todo::Difficulty;

/// Cadence of a challenge template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeKind {
    Daily,
    Weekly,
}

impl ChallengeKind {
    pub fn period_seconds(&self) -> i64 {
        match self {
            ChallengeKind::Daily => DAILY_PERIOD_SECONDS,
            ChallengeKind::Weekly => WEEKLY_PERIOD_SECONDS,
        }
    }
}

/// Unique identifier for each challenge template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeId {
    // Daily
    Finisher,
    HatTrick,
    EarlyBird,
    HeavyLifter,
    // Weekly
    Grinder,
    HardGraft,
    Daybreaker,
}

/// Predicate deciding which completion events advance a template's progress.
///
/// Templates with overlapping predicates all receive progress independently;
/// the counters are orthogonal and need no priority ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeCondition {
    /// Every completed todo counts.
    AnyCompletion,
    /// Only completions of the given difficulty count.
    DifficultyCompletion(Difficulty),
    /// Only completions strictly before the given UTC hour count.
    CompletionBefore { hour: u32 },
}

/// A "todo completed" event as seen by the challenge engine.
#[derive(Debug, Clone, Copy)]
pub struct CompletionEvent {
    pub difficulty: Difficulty,
    pub completed_at: i64,
}

impl ChallengeCondition {
    pub fn matches(&self, event: &CompletionEvent) -> bool {
        match self {
            ChallengeCondition::AnyCompletion => true,
            ChallengeCondition::DifficultyCompletion(difficulty) => {
                event.difficulty == *difficulty
            }
            ChallengeCondition::CompletionBefore { hour } => {
                utc_hour(event.completed_at) < *hour
            }
        }
    }
}

/// Hour of day (UTC) of an epoch-second timestamp.
fn utc_hour(timestamp: i64) -> u32 {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.hour())
        .unwrap_or(0)
}

/// Static definition of a challenge template.
#[derive(Debug, Clone, Copy)]
pub struct ChallengeDef {
    pub id: ChallengeId,
    pub kind: ChallengeKind,
    pub title: &'static str,
    pub description: &'static str,
    pub condition: ChallengeCondition,
    pub target: u64,
    pub xp_reward: u64,
    pub gem_reward: u64,
}

/// A time-boxed, per-user instance of a challenge template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserChallenge {
    pub id: Uuid,
    pub template: ChallengeId,
    pub period_start: i64,
    pub period_end: i64,
    pub progress: u64,
    pub completed: bool,
    pub claimed: bool,
}

impl UserChallenge {
    pub fn new(template: &ChallengeDef, now: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            template: template.id,
            period_start: now,
            period_end: now + template.kind.period_seconds(),
            progress: 0,
            completed: false,
            claimed: false,
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.period_end < now
    }

    /// Seconds remaining in the period, clamped at zero.
    pub fn time_left(&self, now: i64) -> i64 {
        (self.period_end - now).max(0)
    }
}

/// One entry of the active-challenge listing surface.
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeView {
    pub id: Uuid,
    pub title: &'static str,
    pub description: &'static str,
    pub progress: u64,
    pub target: u64,
    pub xp_reward: u64,
    pub gem_reward: u64,
    pub completed: bool,
    pub claimed: bool,
    pub time_left: i64,
}

/// Active challenges grouped by cadence.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActiveChallenges {
    pub daily: Vec<ChallengeView>,
    pub weekly: Vec<ChallengeView>,
}
