// Experience curve constants
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_GROWTH: f64 = 1.5;

// Todo difficulty XP values
pub const EASY_XP: u64 = 10;
pub const MEDIUM_XP: u64 = 20;
pub const HARD_XP: u64 = 30;

// Prestige constants
pub const MAX_LEVEL_THRESHOLD: u32 = 10;
pub const PRESTIGE_BONUS_GEMS: u64 = 50;

// Challenge period lengths
pub const DAILY_PERIOD_SECONDS: i64 = 24 * 60 * 60;
pub const WEEKLY_PERIOD_SECONDS: i64 = 7 * 24 * 60 * 60;

// Hour-of-day cutoff (UTC) for early-completion challenge predicates
pub const EARLY_BIRD_HOUR: u32 = 9;

// Snapshot file constants
pub const SNAPSHOT_VERSION_MAGIC: u64 = 0x5441534B51535400; // "TASKQST\0" in hex
