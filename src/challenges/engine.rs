//! Challenge instance lifecycle: generation, progress, claiming, expiry.
//!
//! Instances move Inactive → Active → Completed → Claimed and are discarded
//! once their period ends. All functions operate on one user's instance list;
//! the engine facade resolves the user and runs the lazy rollover
//! (`reset_expired` then `initialize`) before touching instances.

use tracing::debug;
use uuid::Uuid;

use super::types::{
    ActiveChallenges, ChallengeDef, ChallengeId, ChallengeKind, ChallengeView, CompletionEvent,
    UserChallenge,
};
use crate::error::{EngineError, EngineResult};
use crate::player_stats::{LevelChange, PlayerStats, ProgressCounters};

/// What happens to unclaimed rewards when an instance expires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ExpiryPolicy {
    /// Unclaimed rewards are forfeited, even on completed instances.
    #[default]
    Forfeit,
    /// Completed-but-unclaimed instances pay out at discard time.
    CarryOver,
}

/// Rewards granted by a successful claim.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct ClaimOutcome {
    pub xp_earned: u64,
    pub gems_earned: u64,
    pub level_up: Option<LevelChange>,
}

fn find_def(templates: &[ChallengeDef], id: ChallengeId) -> Option<&ChallengeDef> {
    templates.iter().find(|def| def.id == id)
}

/// Creates a fresh instance for every template lacking a live one.
/// Returns the number of instances created.
pub fn initialize(
    challenges: &mut Vec<UserChallenge>,
    templates: &[ChallengeDef],
    now: i64,
) -> u32 {
    let mut created = 0;
    for def in templates {
        let live = challenges
            .iter()
            .any(|c| c.template == def.id && !c.is_expired(now));
        if !live {
            challenges.push(UserChallenge::new(def, now));
            created += 1;
        }
    }
    created
}

/// Discards every instance whose period has ended, regardless of state.
/// Under `ExpiryPolicy::CarryOver`, completed-but-unclaimed instances pay
/// their rewards out before being discarded. Returns the number discarded.
pub fn reset_expired(
    challenges: &mut Vec<UserChallenge>,
    templates: &[ChallengeDef],
    policy: ExpiryPolicy,
    stats: &mut PlayerStats,
    now: i64,
) -> u32 {
    let mut discarded = 0;
    challenges.retain(|instance| {
        if !instance.is_expired(now) {
            return true;
        }
        if policy == ExpiryPolicy::CarryOver && instance.completed && !instance.claimed {
            if let Some(def) = find_def(templates, instance.template) {
                stats.grant_xp(def.xp_reward);
                stats.grant_gems(def.gem_reward);
                debug!(
                    template = ?instance.template,
                    xp = def.xp_reward,
                    gems = def.gem_reward,
                    "carried over unclaimed challenge reward at expiry"
                );
            }
        }
        discarded += 1;
        false
    });
    discarded
}

/// Advances every matching live instance by one completion.
///
/// Progress is not capped at the target; completion triggers exactly once,
/// on the first crossing. Returns true if any instance changed.
pub fn apply_completion(
    challenges: &mut [UserChallenge],
    templates: &[ChallengeDef],
    event: &CompletionEvent,
) -> bool {
    let mut updated = false;
    for instance in challenges.iter_mut() {
        if instance.is_expired(event.completed_at) {
            continue;
        }
        let Some(def) = find_def(templates, instance.template) else {
            continue;
        };
        if !def.condition.matches(event) {
            continue;
        }
        instance.progress += 1;
        updated = true;
        if !instance.completed && instance.progress >= def.target {
            instance.completed = true;
            debug!(template = ?instance.template, progress = instance.progress, "challenge completed");
        }
    }
    updated
}

/// Claims a completed instance's rewards. The `claimed` check-and-set is the
/// single-claim guard: a second claim observes the flag and fails without
/// granting anything.
pub fn claim(
    challenges: &mut [UserChallenge],
    templates: &[ChallengeDef],
    stats: &mut PlayerStats,
    counters: &mut ProgressCounters,
    id: Uuid,
    now: i64,
) -> EngineResult<ClaimOutcome> {
    let instance = challenges
        .iter_mut()
        .find(|c| c.id == id && !c.is_expired(now))
        .ok_or(EngineError::ChallengeNotFound(id))?;
    let def = find_def(templates, instance.template)
        .ok_or(EngineError::ChallengeNotFound(id))?;
    if !instance.completed {
        return Err(EngineError::ChallengeNotCompleted(id));
    }
    if instance.claimed {
        return Err(EngineError::AlreadyClaimed(id));
    }
    instance.claimed = true;
    let change = stats.grant_xp(def.xp_reward);
    stats.grant_gems(def.gem_reward);
    counters.challenges_claimed += 1;
    Ok(ClaimOutcome {
        xp_earned: def.xp_reward,
        gems_earned: def.gem_reward,
        level_up: change.did_level_up().then_some(change),
    })
}

/// Builds the active-challenge listing, grouped by cadence.
pub fn list_active(
    challenges: &[UserChallenge],
    templates: &[ChallengeDef],
    now: i64,
) -> ActiveChallenges {
    let mut listing = ActiveChallenges::default();
    for instance in challenges {
        if instance.is_expired(now) {
            continue;
        }
        let Some(def) = find_def(templates, instance.template) else {
            continue;
        };
        let view = ChallengeView {
            id: instance.id,
            title: def.title,
            description: def.description,
            progress: instance.progress,
            target: def.target,
            xp_reward: def.xp_reward,
            gem_reward: def.gem_reward,
            completed: instance.completed,
            claimed: instance.claimed,
            time_left: instance.time_left(now),
        };
        match def.kind {
            ChallengeKind::Daily => listing.daily.push(view),
            ChallengeKind::Weekly => listing.weekly.push(view),
        }
    }
    listing
}
