//! Todo model and difficulty tiers.
//!
//! Todos are created externally (sync or manual add); completion toggling is
//! the event that drives the engine. Archival is a terminal, one-way state
//! separate from completion.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{EASY_XP, HARD_XP, MEDIUM_XP};
use crate::error::{EngineError, EngineResult};

/// Difficulty tier of a todo, fixing its base XP value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Base XP granted for completing a todo of this difficulty.
    pub fn xp_value(&self) -> u64 {
        match self {
            Difficulty::Easy => EASY_XP,
            Difficulty::Medium => MEDIUM_XP,
            Difficulty::Hard => HARD_XP,
        }
    }

    /// Parses a wire-level XP value into a difficulty tier.
    pub fn from_xp_value(value: u64) -> EngineResult<Self> {
        match value {
            EASY_XP => Ok(Difficulty::Easy),
            MEDIUM_XP => Ok(Difficulty::Medium),
            HARD_XP => Ok(Difficulty::Hard),
            other => Err(EngineError::Validation(format!(
                "xp_value must be one of {EASY_XP}, {MEDIUM_XP}, {HARD_XP} (got {other})"
            ))),
        }
    }
}

/// Input for creating a todo at the external boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTodo {
    pub title: String,
    pub start_time: i64,
    pub end_time: i64,
    pub difficulty: Difficulty,
}

impl NewTodo {
    pub fn validate(&self) -> EngineResult<()> {
        if self.title.trim().is_empty() {
            return Err(EngineError::Validation(
                "todo title must not be empty".to_string(),
            ));
        }
        if self.end_time < self.start_time {
            return Err(EngineError::Validation(
                "todo end_time must not precede start_time".to_string(),
            ));
        }
        Ok(())
    }
}

/// A single todo owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub owner: Uuid,
    pub title: String,
    pub start_time: i64,
    pub end_time: i64,
    pub difficulty: Difficulty,
    pub is_completed: bool,
    pub completed_at: Option<i64>,
    pub archived_at: Option<i64>,
    /// Exact XP granted when this todo was completed, kept so un-completing
    /// reverses the grant precisely even if streak tiers changed since.
    pub awarded_xp: Option<u64>,
}

impl Todo {
    pub fn new(owner: Uuid, new: NewTodo) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            title: new.title,
            start_time: new.start_time,
            end_time: new.end_time,
            difficulty: new.difficulty,
            is_completed: false,
            completed_at: None,
            archived_at: None,
            awarded_xp: None,
        }
    }

    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }
}
