//! Engine tuning knobs.
//!
//! Defaults reproduce the standard rules; tests and the runner binary can
//! override them per instance.

use crate::types::{LOCK_DELAY_MS, LOCK_RESET_LIMIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Randomizer seed. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Grace period (ms) before a resting piece locks
    pub lock_delay_ms: u32,
    /// Lock timer resets allowed per piece life
    pub lock_reset_limit: u8,
}

impl EngineConfig {
    /// Default rules with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            lock_delay_ms: LOCK_DELAY_MS,
            lock_reset_limit: LOCK_RESET_LIMIT,
        }
    }
}
