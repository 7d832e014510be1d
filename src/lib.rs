//! taskquest - Progression & Reward Engine
//!
//! The rules engine behind a gamified todo application: completing tasks
//! earns streak-scaled XP, XP drives levels on an exponential curve, daily
//! and weekly challenges pay claimed rewards, achievements unlock one-time
//! gem bonuses, and prestige resets progress for a permanent reward.
//!
//! The engine is an application-layer service over a store abstraction;
//! UI, task synchronization, and authentication live outside it.

pub mod achievements;
pub mod challenges;
pub mod completion;
pub mod constants;
pub mod engine;
pub mod error;
pub mod level_curve;
pub mod persistence;
pub mod player_stats;
pub mod prestige;
pub mod store;
pub mod streak;
pub mod todo;

pub use engine::{Catalog, Engine, EngineConfig, PlayerStatsView};
pub use error::{EngineError, EngineResult, ErrorKind};
pub use store::{MemoryStore, PlayerProfile, Store, UserId};
