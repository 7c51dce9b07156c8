//=========================================================================
// Frame Timer
//=========================================================================
//
// Converts wall-clock time into per-frame deltas for hosts that do not
// already get one from their render loop.
//
// Each tick() returns the time since the previous tick, clamped to a
// maximum step so a stalled frame does not release every deferred task
// and speed sample at once.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

use log::debug;

//=== FrameTimer ==========================================================

/// Measures frame deltas in seconds.
pub struct FrameTimer {
    last: Instant,
    max_step: Duration,
}

impl FrameTimer {
    /// Default upper bound for a single frame delta.
    pub const DEFAULT_MAX_STEP: Duration = Duration::from_millis(250);

    /// Starts a timer at the current instant.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Starts a timer at `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last: start,
            max_step: Self::DEFAULT_MAX_STEP,
        }
    }

    /// Sets the upper bound for a single frame delta.
    ///
    /// # Panics
    ///
    /// Panics if `max_step` is zero.
    pub fn with_max_step(mut self, max_step: Duration) -> Self {
        assert!(!max_step.is_zero(), "Max frame step must be positive");
        self.max_step = max_step;
        self
    }

    /// Returns the seconds elapsed since the previous tick.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Returns the seconds elapsed between the previous tick and `now`.
    ///
    /// An instant earlier than the previous tick yields zero.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;

        if elapsed > self.max_step {
            debug!(
                "Frame took {:?}; clamping to {:?}",
                elapsed, self.max_step
            );
            return self.max_step.as_secs_f32();
        }

        elapsed.as_secs_f32()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
