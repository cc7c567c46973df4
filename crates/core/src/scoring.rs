//! Scoring module - line clear points, leveling and gravity pacing
//!
//! All three rules are pure functions of the config and the counters, so
//! they can be recomputed at any time without drifting.

use crate::config::GameConfig;
use crate::types::START_LEVEL;

/// Points for one lock event.
///
/// `level` is the level in effect before the clear. Anything above four
/// rows scores as four.
pub fn calculate_line_score(config: &GameConfig, rows_cleared: usize, level: u32) -> u32 {
    let idx = rows_cleared.min(config.line_scores.len() - 1);
    config.line_scores[idx].saturating_mul(level)
}

/// Level derived from total lines: `1 + lines / lines_per_level`.
/// A `lines_per_level` of zero is treated as one.
pub fn calculate_level(config: &GameConfig, total_lines: u32) -> u32 {
    START_LEVEL.saturating_add(total_lines / config.lines_per_level.max(1))
}

/// Gravity interval for a level: `max(min, base - (level - 1) * step)`
pub fn get_drop_interval_ms(config: &GameConfig, level: u32) -> u32 {
    let reduction = level
        .saturating_sub(START_LEVEL)
        .saturating_mul(config.drop_step_ms);
    config
        .base_drop_ms
        .saturating_sub(reduction)
        .max(config.min_drop_ms)
}
