//! Engine error taxonomy.
//!
//! Business-rule violations are returned as structured values and recovered
//! by the caller; only storage failures are treated as unexpected.

use std::io;

use thiserror::Error;
use uuid::Uuid;

use crate::achievements::AchievementId;

/// Error type for all engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no player profile registered for user {0}")]
    Unauthenticated(Uuid),

    #[error("todo {0} not found")]
    TodoNotFound(Uuid),

    #[error("challenge instance {0} not found")]
    ChallengeNotFound(Uuid),

    #[error("no active achievement {0:?}")]
    AchievementNotFound(AchievementId),

    #[error("todo {0} is archived")]
    TodoArchived(Uuid),

    #[error("challenge instance {0} is not completed")]
    ChallengeNotCompleted(Uuid),

    #[error("challenge instance {0} was already claimed")]
    AlreadyClaimed(Uuid),

    #[error("achievement {0:?} is already unlocked")]
    AlreadyUnlocked(AchievementId),

    #[error("achievement {id:?} requires {required} progress, have {current}")]
    NotEligible {
        id: AchievementId,
        current: u64,
        required: u64,
    },

    #[error("prestige requires level {required}, currently level {level}")]
    PrestigeBelowThreshold { level: u32, required: u32 },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("storage failure: {0}")]
    Storage(#[from] io::Error),
}

/// Coarse classification for transport-layer mapping (e.g. HTTP status).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthenticated,
    NotFound,
    InvalidState,
    Validation,
    Storage,
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::Unauthenticated(_) => ErrorKind::Unauthenticated,
            EngineError::TodoNotFound(_)
            | EngineError::ChallengeNotFound(_)
            | EngineError::AchievementNotFound(_) => ErrorKind::NotFound,
            EngineError::TodoArchived(_)
            | EngineError::ChallengeNotCompleted(_)
            | EngineError::AlreadyClaimed(_)
            | EngineError::AlreadyUnlocked(_)
            | EngineError::NotEligible { .. }
            | EngineError::PrestigeBelowThreshold { .. } => ErrorKind::InvalidState,
            EngineError::Validation(_) => ErrorKind::Validation,
            EngineError::Storage(_) => ErrorKind::Storage,
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
