//! Fixed-timestep frame loop.
//!
//! Decouples simulation (fixed 60 Hz) from wall-clock frame delivery using an
//! accumulator, so the per-frame animation constants (opacity decay, spawn
//! gating) behave identically regardless of how fast the host machine runs.

use std::time::Instant;

use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Maximum frame time clamp. A frame slower than this is absorbed as
/// slowdown instead of a burst of catch-up simulation steps.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Fixed-timestep frame loop state.
///
/// Call [`tick`](Self::tick) once per frame to run simulation steps at the
/// fixed rate, then render once.
pub struct FrameLoop {
    previous_time: Instant,
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
    update_count: u64,
}

impl FrameLoop {
    /// Creates a new `FrameLoop` starting from the current instant.
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            total_sim_time: 0.0,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Runs one frame: measures elapsed wall-clock time and runs zero or more
    /// fixed-rate simulation steps. The caller renders once afterwards.
    ///
    /// `update_fn(fixed_dt)` receives the step length in seconds. Returns the
    /// number of simulation steps that ran.
    pub fn tick(&mut self, mut update_fn: impl FnMut(f64)) -> u32 {
        let current_time = Instant::now();
        let frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;
        let steps = self.step(frame_time, &mut update_fn);
        self.frame_count += 1;
        steps
    }

    /// Advance the accumulator by an explicit frame time. Separated from
    /// [`tick`](Self::tick) so tests can drive the loop without a clock.
    /// Does not count a rendered frame. Returns the number of steps run.
    pub fn step(&mut self, frame_time: f64, update_fn: &mut impl FnMut(f64)) -> u32 {
        let frame_time = if frame_time > MAX_FRAME_TIME {
            warn!(
                "frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            MAX_FRAME_TIME
        } else {
            frame_time
        };

        self.accumulator += frame_time;

        let mut steps = 0u32;
        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
            steps += 1;
        }
        steps
    }

    /// Total frames rendered.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Total simulation update steps executed.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Total simulation time in seconds.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
