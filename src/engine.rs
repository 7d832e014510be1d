//! Engine facade: the operation surface consumed by external collaborators.
//!
//! Every operation takes an explicit `user` and (where time matters) an
//! explicit `now` in epoch seconds — there is no ambient user context and
//! the engine never reads the wall clock. Operations validate fully before
//! mutating, so an error return implies an untouched store.

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::achievements::{self, AchievementDef, AchievementId, AchievementView, UnlockOutcome};
use crate::challenges::{self, ActiveChallenges, ChallengeDef, ClaimOutcome, ExpiryPolicy};
use crate::completion::{self, CompletionOutcome};
use crate::constants::{MAX_LEVEL_THRESHOLD, PRESTIGE_BONUS_GEMS};
use crate::error::EngineResult;
use crate::level_curve::total_xp_for_level;
use crate::prestige::{self, PrestigeOutcome};
use crate::store::{PlayerProfile, Store, UserId};
use crate::streak::{StreakTier, StreakTiers};
use crate::todo::{NewTodo, Todo};

/// Tunable engine parameters.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Level gate for prestige eligibility.
    pub max_level_threshold: u32,
    /// Gems credited on each prestige.
    pub prestige_bonus_gems: u64,
    /// What happens to unclaimed challenge rewards at expiry.
    pub expiry_policy: ExpiryPolicy,
    /// Streak multiplier tier table.
    pub streak_tiers: StreakTiers,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_level_threshold: MAX_LEVEL_THRESHOLD,
            prestige_bonus_gems: PRESTIGE_BONUS_GEMS,
            expiry_policy: ExpiryPolicy::default(),
            streak_tiers: StreakTiers::default(),
        }
    }
}

/// Template catalog the engine evaluates against.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub challenges: Vec<ChallengeDef>,
    pub achievements: Vec<AchievementDef>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            challenges: challenges::ALL_CHALLENGES.to_vec(),
            achievements: achievements::ALL_ACHIEVEMENTS.to_vec(),
        }
    }
}

/// The player-stats surface.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlayerStatsView {
    pub xp: u64,
    pub level: u32,
    pub xp_for_current_level: u64,
    pub xp_for_next_level: Option<u64>,
    pub current_streak: u32,
    pub streak_multiplier: f64,
    pub gems: u64,
    pub prestige: u32,
}

/// Progression & reward engine over a store.
#[derive(Debug, Default)]
pub struct Engine<S: Store> {
    store: S,
    config: EngineConfig,
    catalog: Catalog,
}

impl<S: Store> Engine<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            catalog: Catalog::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replaces the streak tier table, rejecting invalid tables.
    pub fn set_streak_tiers(&mut self, tiers: Vec<StreakTier>) -> EngineResult<()> {
        self.config.streak_tiers.set_tiers(tiers)
    }

    /// Creates a profile for `user` if none exists yet.
    pub fn register_user(&mut self, user: UserId) {
        self.store.register(user);
        debug!(%user, "user registered");
    }

    // === Todo surface ===

    /// Records an externally created todo. Returns its id.
    pub fn add_todo(&mut self, user: UserId, new: NewTodo) -> EngineResult<Uuid> {
        new.validate()?;
        let profile = self.store.profile_mut(user)?;
        let todo = Todo::new(user, new);
        let id = todo.id;
        profile.todos.push(todo);
        Ok(id)
    }

    /// Archives a todo. Archival is terminal and idempotent.
    pub fn archive_todo(&mut self, user: UserId, todo_id: Uuid, now: i64) -> EngineResult<()> {
        let profile = self.store.profile_mut(user)?;
        let todo = profile
            .todos
            .iter_mut()
            .find(|t| t.id == todo_id)
            .ok_or(crate::error::EngineError::TodoNotFound(todo_id))?;
        if todo.archived_at.is_none() {
            todo.archived_at = Some(now);
        }
        Ok(())
    }

    /// Completes a todo: streak bump, multiplier-scaled XP grant, challenge
    /// progress — one logical transaction.
    pub fn complete_todo(
        &mut self,
        user: UserId,
        todo_id: Uuid,
        now: i64,
    ) -> EngineResult<CompletionOutcome> {
        let config = &self.config;
        let catalog = &self.catalog;
        let profile = self.store.profile_mut(user)?;
        rollover(profile, catalog, config, now);
        let outcome = completion::complete_todo(
            profile,
            &catalog.challenges,
            &config.streak_tiers,
            todo_id,
            now,
        )?;
        if let Some(change) = outcome.level_change {
            if change.did_level_up() {
                info!(%user, old = change.old_level, new = change.new_level, "level up");
            }
        }
        Ok(outcome)
    }

    /// Un-completes a todo, revoking exactly the XP it granted.
    pub fn uncomplete_todo(
        &mut self,
        user: UserId,
        todo_id: Uuid,
    ) -> EngineResult<CompletionOutcome> {
        let profile = self.store.profile_mut(user)?;
        completion::uncomplete_todo(profile, todo_id)
    }

    /// Boundary adapter for the external todo source, which signals toggles
    /// as `{todo_id, completed}`.
    pub fn set_todo_completion(
        &mut self,
        user: UserId,
        todo_id: Uuid,
        completed: bool,
        now: i64,
    ) -> EngineResult<CompletionOutcome> {
        if completed {
            self.complete_todo(user, todo_id, now)
        } else {
            self.uncomplete_todo(user, todo_id)
        }
    }

    // === Challenge surface ===

    /// Lists the user's live challenge instances, generating the current
    /// period's instances on demand.
    pub fn list_active_challenges(
        &mut self,
        user: UserId,
        now: i64,
    ) -> EngineResult<ActiveChallenges> {
        let config = &self.config;
        let catalog = &self.catalog;
        let profile = self.store.profile_mut(user)?;
        rollover(profile, catalog, config, now);
        Ok(challenges::engine::list_active(
            &profile.challenges,
            &catalog.challenges,
            now,
        ))
    }

    /// Claims a completed challenge instance's rewards.
    pub fn claim_challenge(
        &mut self,
        user: UserId,
        user_challenge_id: Uuid,
        now: i64,
    ) -> EngineResult<ClaimOutcome> {
        let config = &self.config;
        let catalog = &self.catalog;
        let profile = self.store.profile_mut(user)?;
        rollover(profile, catalog, config, now);
        let outcome = challenges::engine::claim(
            &mut profile.challenges,
            &catalog.challenges,
            &mut profile.stats,
            &mut profile.counters,
            user_challenge_id,
            now,
        )?;
        info!(
            %user,
            challenge = %user_challenge_id,
            xp = outcome.xp_earned,
            gems = outcome.gems_earned,
            "challenge claimed"
        );
        Ok(outcome)
    }

    // === Achievement surface ===

    /// Lists all active achievements with live progress.
    pub fn list_achievements(&self, user: UserId) -> EngineResult<Vec<AchievementView>> {
        let profile = self.store.profile(user)?;
        Ok(achievements::engine::evaluate(
            &self.catalog.achievements,
            &profile.stats,
            &profile.counters,
            &profile.unlocked,
        ))
    }

    /// Unlocks an achievement the user is eligible for.
    pub fn unlock_achievement(
        &mut self,
        user: UserId,
        achievement_id: AchievementId,
        now: i64,
    ) -> EngineResult<UnlockOutcome> {
        let catalog = &self.catalog;
        let profile = self.store.profile_mut(user)?;
        let outcome = achievements::engine::unlock(
            &catalog.achievements,
            &mut profile.stats,
            &profile.counters,
            &mut profile.unlocked,
            achievement_id,
            now,
        )?;
        info!(%user, achievement = ?achievement_id, gems = outcome.reward_gems, "achievement unlocked");
        Ok(outcome)
    }

    // === Player stats surface ===

    pub fn player_stats(&self, user: UserId) -> EngineResult<PlayerStatsView> {
        let profile = self.store.profile(user)?;
        let stats = &profile.stats;
        Ok(PlayerStatsView {
            xp: stats.xp,
            level: stats.level,
            xp_for_current_level: total_xp_for_level(stats.level),
            xp_for_next_level: Some(total_xp_for_level(stats.level + 1)),
            current_streak: stats.current_streak,
            streak_multiplier: self.config.streak_tiers.multiplier_for(stats.current_streak),
            gems: stats.gems,
            prestige: stats.prestige,
        })
    }

    // === Prestige surface ===

    pub fn prestige(&mut self, user: UserId) -> EngineResult<PrestigeOutcome> {
        let config = &self.config;
        let profile = self.store.profile_mut(user)?;
        prestige::perform_prestige(
            profile,
            config.max_level_threshold,
            config.prestige_bonus_gems,
        )
    }
}

/// Lazy rollover: discard expired instances, then generate the current
/// period's missing ones. Runs at the top of every challenge-touching
/// operation so no background scheduler is needed.
fn rollover(profile: &mut PlayerProfile, catalog: &Catalog, config: &EngineConfig, now: i64) {
    challenges::engine::reset_expired(
        &mut profile.challenges,
        &catalog.challenges,
        config.expiry_policy,
        &mut profile.stats,
        now,
    );
    challenges::engine::initialize(&mut profile.challenges, &catalog.challenges, now);
}
