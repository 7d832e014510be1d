//! Static achievement definitions.

use super::types::{AchievementCondition, AchievementDef, AchievementIcon, AchievementId};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // COMPLETION ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstSteps,
        name: "First Steps",
        description: "Complete your first task",
        condition: AchievementCondition::TotalCompletions(1),
        reward_gems: 5,
        is_active: true,
        icon: AchievementIcon::Star,
    },
    AchievementDef {
        id: AchievementId::TaskmasterI,
        name: "Taskmaster I",
        description: "Complete 25 tasks",
        condition: AchievementCondition::TotalCompletions(25),
        reward_gems: 15,
        is_active: true,
        icon: AchievementIcon::Medal,
    },
    AchievementDef {
        id: AchievementId::TaskmasterII,
        name: "Taskmaster II",
        description: "Complete 100 tasks",
        condition: AchievementCondition::TotalCompletions(100),
        reward_gems: 40,
        is_active: true,
        icon: AchievementIcon::Medal,
    },
    AchievementDef {
        id: AchievementId::TaskmasterIII,
        name: "Taskmaster III",
        description: "Complete 500 tasks",
        condition: AchievementCondition::TotalCompletions(500),
        reward_gems: 120,
        is_active: true,
        icon: AchievementIcon::Trophy,
    },
    // ═══════════════════════════════════════════════════════════════
    // STREAK ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::WeekOfFire,
        name: "Week of Fire",
        description: "Reach a 7-day completion streak",
        condition: AchievementCondition::StreakDays(7),
        reward_gems: 20,
        is_active: true,
        icon: AchievementIcon::Flame,
    },
    AchievementDef {
        id: AchievementId::Fortnight,
        name: "Fortnight",
        description: "Reach a 14-day completion streak",
        condition: AchievementCondition::StreakDays(14),
        reward_gems: 50,
        is_active: true,
        icon: AchievementIcon::Flame,
    },
    AchievementDef {
        id: AchievementId::MonthOfMomentum,
        name: "Month of Momentum",
        description: "Reach a 30-day completion streak",
        condition: AchievementCondition::StreakDays(30),
        reward_gems: 150,
        is_active: true,
        icon: AchievementIcon::Sunrise,
    },
    // ═══════════════════════════════════════════════════════════════
    // LEVEL ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Apprentice,
        name: "Apprentice",
        description: "Reach level 5",
        condition: AchievementCondition::LevelReached(5),
        reward_gems: 25,
        is_active: true,
        icon: AchievementIcon::Rocket,
    },
    AchievementDef {
        id: AchievementId::Veteran,
        name: "Veteran",
        description: "Reach level 10",
        condition: AchievementCondition::LevelReached(10),
        reward_gems: 75,
        is_active: true,
        icon: AchievementIcon::Rocket,
    },
    // ═══════════════════════════════════════════════════════════════
    // ECONOMY ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Spender,
        name: "Spender",
        description: "Spend 100 gems in the shop",
        condition: AchievementCondition::GemsSpent(100),
        reward_gems: 10,
        is_active: true,
        icon: AchievementIcon::Gem,
    },
    AchievementDef {
        id: AchievementId::BigSpender,
        name: "Big Spender",
        description: "Spend 500 gems in the shop",
        condition: AchievementCondition::GemsSpent(500),
        reward_gems: 60,
        is_active: true,
        icon: AchievementIcon::Gem,
    },
    // ═══════════════════════════════════════════════════════════════
    // CHALLENGE ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::ChallengerI,
        name: "Challenger I",
        description: "Claim 10 challenge rewards",
        condition: AchievementCondition::ChallengesClaimed(10),
        reward_gems: 20,
        is_active: true,
        icon: AchievementIcon::Medal,
    },
    AchievementDef {
        id: AchievementId::ChallengerII,
        name: "Challenger II",
        description: "Claim 50 challenge rewards",
        condition: AchievementCondition::ChallengesClaimed(50),
        reward_gems: 80,
        is_active: true,
        icon: AchievementIcon::Trophy,
    },
    // ═══════════════════════════════════════════════════════════════
    // PRESTIGE ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::BornAgain,
        name: "Born Again",
        description: "Prestige for the first time",
        condition: AchievementCondition::PrestigeCount(1),
        reward_gems: 50,
        is_active: true,
        icon: AchievementIcon::Crown,
    },
    AchievementDef {
        id: AchievementId::Transcendent,
        name: "Transcendent",
        description: "Prestige 5 times",
        condition: AchievementCondition::PrestigeCount(5),
        reward_gems: 250,
        is_active: true,
        icon: AchievementIcon::Crown,
    },
    // ═══════════════════════════════════════════════════════════════
    // RETIRED
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FoundersBadge,
        name: "Founder's Badge",
        description: "Joined during the founding season",
        condition: AchievementCondition::TotalCompletions(1),
        reward_gems: 0,
        is_active: false,
        icon: AchievementIcon::Star,
    },
];

/// Look up an achievement definition by id.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.id == id)
}
