//! Frame driver - turns a monotonic clock into engine ticks.
//!
//! The host calls [`FrameDriver::frame`] once per display refresh with the
//! current time. The driver feeds the elapsed time to the game, then calls the
//! draw callback. A panic or error from either step is logged and the frame
//! baseline moves to "now", so the next frame starts clean instead of
//! replaying a huge delta.

use std::any::Any;
use std::fmt::Display;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::game_state::GameState;

/// How a frame ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Ran,
    /// Tick or draw failed; the error was logged and timing re-based
    Recovered,
}

#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    baseline_ms: Option<u64>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame; the next frame ticks with zero elapsed time
    pub fn reset(&mut self) {
        self.baseline_ms = None;
    }

    /// Time of the last frame that ran, if any
    pub fn baseline_ms(&self) -> Option<u64> {
        self.baseline_ms
    }

    /// Run one frame at `now_ms`.
    pub fn frame<F, E>(&mut self, now_ms: u64, state: &mut GameState, mut draw: F) -> FrameOutcome
    where
        F: FnMut(&GameState) -> Result<(), E>,
        E: Display,
    {
        let elapsed = match self.baseline_ms {
            Some(prev) => now_ms.saturating_sub(prev),
            None => 0,
        };
        self.baseline_ms = Some(now_ms);
        let elapsed = u32::try_from(elapsed).unwrap_or(u32::MAX);

        let result = catch_unwind(AssertUnwindSafe(|| {
            state.tick(elapsed);
            draw(state)
        }));

        match result {
            Ok(Ok(())) => FrameOutcome::Ran,
            Ok(Err(err)) => {
                log::error!("frame at {}ms failed: {}", now_ms, err);
                FrameOutcome::Recovered
            }
            Err(panic) => {
                log::error!("frame at {}ms panicked: {}", now_ms, panic_message(&*panic));
                FrameOutcome::Recovered
            }
        }
    }
}

/// Text of a panic payload, for `panic!` with a literal or a formatted message
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
