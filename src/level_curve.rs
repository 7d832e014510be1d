//! Experience curve: per-level thresholds and level lookup.

use crate::constants::{XP_CURVE_BASE, XP_CURVE_GROWTH};

/// XP required to advance from `level` to `level + 1`.
///
/// Defined for `level >= 1`: `floor(100 * 1.5^(level - 1))`.
pub fn xp_threshold(level: u32) -> u64 {
    (XP_CURVE_BASE * XP_CURVE_GROWTH.powi(level as i32 - 1)) as u64
}

/// Total XP required to reach `level` starting from zero.
///
/// The running sum of thresholds for levels `1..level`. Level 1 costs nothing.
pub fn total_xp_for_level(level: u32) -> u64 {
    (1..level).map(xp_threshold).sum()
}

/// The largest level whose cumulative threshold is satisfied by `xp`.
///
/// Total and monotonic non-decreasing for all XP values; never below 1.
pub fn level_for_xp(xp: u64) -> u32 {
    let mut level = 1;
    while xp >= total_xp_for_level(level + 1) {
        level += 1;
    }
    level
}
