//! Scoring module - line clear points, level curve and gravity speed

use crate::types::{DROP_INTERVALS_MS, DROP_INTERVAL_FLOOR_MS, LINES_PER_LEVEL, LINE_SCORES};

/// Base points for clearing `lines` rows at once (0 outside 1..=4)
pub fn score_for_lines(lines: usize) -> u64 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Points awarded for a clear at `level`: `(level + 1) * base`
pub fn line_clear_score(lines: usize, level: u32) -> u64 {
    (u64::from(level) + 1) * score_for_lines(lines)
}

/// Level after reaching `total_lines`; never below `current`
pub fn level_for_lines(total_lines: u32, current: u32) -> u32 {
    current.max(total_lines / LINES_PER_LEVEL)
}

/// Delay between automatic downward ticks at `level`
pub fn drop_interval_ms(level: u32) -> u32 {
    DROP_INTERVALS_MS
        .get(level as usize)
        .copied()
        .unwrap_or(DROP_INTERVAL_FLOOR_MS)
}
