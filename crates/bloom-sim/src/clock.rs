//! Wall-clock frame timing for hosts that drive the garden themselves

use std::time::Instant;

/// Upper bound on a single frame delta — a stall must not make one step
/// swallow the whole pause
const MAX_FRAME_SECONDS: f64 = 0.25;

/// Tracks elapsed wall-clock time between frames. The core simulation only
/// ever sees the returned deltas; it assumes nothing about the scheduler
/// beyond monotonic, non-overlapping steps.
pub struct FrameClock {
    /// Total elapsed time fed to the simulation, seconds
    pub total_time: f64,
    last_instant: Instant,
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock and return the frame delta in seconds.
    /// The first tick returns 0 so a late start doesn't register as a
    /// giant frame.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            return 0.0;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;

        let delta = elapsed.min(MAX_FRAME_SECONDS);
        self.total_time += delta;
        delta
    }
}
