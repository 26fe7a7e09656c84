//! Scoring module - reward table, leveling, and the gravity curve.
//!
//! Pure functions over the constants in `types`. One lock clearing n rows is
//! worth `LINE_SCORES[n] * level`; drop bonuses are flat and
//! level-independent.

use crate::types::{
    BASE_FALL_MS, FALL_STEP_MS, HARD_DROP_SCORE, LINE_SCORES, MIN_FALL_MS, SOFT_DROP_SCORE,
};

/// Points awarded for clearing `lines` rows in a single lock at `level`.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines] * level
}

/// Points awarded for descending `rows` cells via soft or hard drop.
pub fn drop_score(rows: u32, hard: bool) -> u32 {
    if hard {
        rows * HARD_DROP_SCORE
    } else {
        rows * SOFT_DROP_SCORE
    }
}

/// Level derived from total lines cleared. Starts at 1, +1 every 10 lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    1 + total_lines / 10
}

/// Gravity interval for a level: strictly decreasing, floor-clamped.
pub fn fall_interval_ms(level: u32) -> u64 {
    BASE_FALL_MS
        .saturating_sub((level.saturating_sub(1) as u64) * FALL_STEP_MS)
        .max(MIN_FALL_MS)
}
