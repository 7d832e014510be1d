//! Static challenge template definitions.

use super::types::{ChallengeCondition, ChallengeDef, ChallengeId, ChallengeKind};
use crate::constants::EARLY_BIRD_HOUR;
use crate::todo::Difficulty;

/// All challenge templates in display order.
pub const ALL_CHALLENGES: &[ChallengeDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // DAILY CHALLENGES
    // ═══════════════════════════════════════════════════════════════
    ChallengeDef {
        id: ChallengeId::Finisher,
        kind: ChallengeKind::Daily,
        title: "Finisher",
        description: "Complete a task today",
        condition: ChallengeCondition::AnyCompletion,
        target: 1,
        xp_reward: 15,
        gem_reward: 2,
    },
    ChallengeDef {
        id: ChallengeId::HatTrick,
        kind: ChallengeKind::Daily,
        title: "Hat Trick",
        description: "Complete 3 tasks today",
        condition: ChallengeCondition::AnyCompletion,
        target: 3,
        xp_reward: 40,
        gem_reward: 5,
    },
    ChallengeDef {
        id: ChallengeId::EarlyBird,
        kind: ChallengeKind::Daily,
        title: "Early Bird",
        description: "Complete a task before 9 AM",
        condition: ChallengeCondition::CompletionBefore {
            hour: EARLY_BIRD_HOUR,
        },
        target: 1,
        xp_reward: 25,
        gem_reward: 3,
    },
    ChallengeDef {
        id: ChallengeId::HeavyLifter,
        kind: ChallengeKind::Daily,
        title: "Heavy Lifter",
        description: "Complete 2 hard tasks today",
        condition: ChallengeCondition::DifficultyCompletion(Difficulty::Hard),
        target: 2,
        xp_reward: 50,
        gem_reward: 6,
    },
    // ═══════════════════════════════════════════════════════════════
    // WEEKLY CHALLENGES
    // ═══════════════════════════════════════════════════════════════
    ChallengeDef {
        id: ChallengeId::Grinder,
        kind: ChallengeKind::Weekly,
        title: "Grinder",
        description: "Complete 20 tasks this week",
        condition: ChallengeCondition::AnyCompletion,
        target: 20,
        xp_reward: 200,
        gem_reward: 25,
    },
    ChallengeDef {
        id: ChallengeId::HardGraft,
        kind: ChallengeKind::Weekly,
        title: "Hard Graft",
        description: "Complete 8 hard tasks this week",
        condition: ChallengeCondition::DifficultyCompletion(Difficulty::Hard),
        target: 8,
        xp_reward: 250,
        gem_reward: 30,
    },
    ChallengeDef {
        id: ChallengeId::Daybreaker,
        kind: ChallengeKind::Weekly,
        title: "Daybreaker",
        description: "Complete 5 tasks before 9 AM this week",
        condition: ChallengeCondition::CompletionBefore {
            hour: EARLY_BIRD_HOUR,
        },
        target: 5,
        xp_reward: 150,
        gem_reward: 20,
    },
];

/// Look up a template definition by id.
pub fn get_challenge_def(id: ChallengeId) -> Option<&'static ChallengeDef> {
    ALL_CHALLENGES.iter().find(|def| def.id == id)
}
