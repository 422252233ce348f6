//! Scoring module - line clear and T-spin points, level and gravity
//!
//! - Plain clears use `LINE_SCORES[lines] * level`.
//! - A spin lock uses `SPIN_SCORES[lines] * level` instead (never both).
//! - A spin lock with no lines still scores `SPIN_SCORES[0] * level`.
//! - Level starts at 1 and advances every 10 lines.

use serde::Serialize;

use crate::types::{
    ClearKind, BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
    SPIN_SCORES,
};

/// Points awarded by one lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreAward {
    pub kind: ClearKind,
    pub lines: u32,
    pub points: u32,
    /// Where the presentation layer may show the label (board cell)
    pub x: i8,
    pub y: i8,
}

/// Calculate line clear score
/// lines: number of lines cleared (0-4)
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0) * level
}

/// Calculate T-spin score. A T piece cannot clear more than 3 rows.
pub fn calculate_spin_score(lines: usize, level: u32) -> u32 {
    SPIN_SCORES[lines.min(SPIN_SCORES.len() - 1)] * level
}

/// Score and label for a lock, `None` when the lock earns nothing.
pub fn calculate_score(lines: usize, level: u32, spin: bool) -> Option<(ClearKind, u32)> {
    let kind = ClearKind::from_lines(lines, spin)?;
    let points = if spin {
        calculate_spin_score(lines, level)
    } else {
        calculate_line_score(lines, level)
    };
    Some((kind, points))
}

/// Level management
/// Level increases every 10 lines cleared, starting at 1
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level (in milliseconds)
/// Linear: 1000ms at level 1, 100ms faster per level, never below 100ms
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}
