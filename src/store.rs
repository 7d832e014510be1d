//! Store abstraction: the repository seam between engine logic and storage.
//!
//! Every mutable entity is owned by exactly one profile and mutated only
//! through engine operations. `MemoryStore` is the in-process implementation;
//! a relational backend would implement `Store` over its own transactions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::achievements::{AchievementId, UnlockedAchievement};
use crate::challenges::UserChallenge;
use crate::error::{EngineError, EngineResult};
use crate::player_stats::{PlayerStats, ProgressCounters};
use crate::todo::Todo;

/// Identifies a user. Authentication itself is out of scope; an operation on
/// an unregistered id fails with `Unauthenticated`.
pub type UserId = Uuid;

/// Everything the engine owns for one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub stats: PlayerStats,
    pub counters: ProgressCounters,
    pub todos: Vec<Todo>,
    pub challenges: Vec<UserChallenge>,
    pub unlocked: HashMap<AchievementId, UnlockedAchievement>,
}

/// Repository interface the engine operates against.
pub trait Store {
    /// Read access to a user's profile.
    fn profile(&self, user: UserId) -> EngineResult<&PlayerProfile>;

    /// Write access to a user's profile.
    fn profile_mut(&mut self, user: UserId) -> EngineResult<&mut PlayerProfile>;

    /// Creates a profile for `user` if none exists yet.
    fn register(&mut self, user: UserId) -> &mut PlayerProfile;

    /// All registered users.
    fn users(&self) -> Vec<UserId>;
}

/// In-memory store keyed by user id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    profiles: HashMap<UserId, PlayerProfile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Store for MemoryStore {
    fn profile(&self, user: UserId) -> EngineResult<&PlayerProfile> {
        self.profiles
            .get(&user)
            .ok_or(EngineError::Unauthenticated(user))
    }

    fn profile_mut(&mut self, user: UserId) -> EngineResult<&mut PlayerProfile> {
        self.profiles
            .get_mut(&user)
            .ok_or(EngineError::Unauthenticated(user))
    }

    fn register(&mut self, user: UserId) -> &mut PlayerProfile {
        self.profiles.entry(user).or_default()
    }

    fn users(&self) -> Vec<UserId> {
        self.profiles.keys().copied().collect()
    }
}
