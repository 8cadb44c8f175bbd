//! Animation-frame driver
//!
//! Converts display-refresh timestamps into fixed simulation steps, and
//! pumps the real-time countdown. Game time only accrues for frames that
//! start in `Playing`, so seconds spent staring at an overlay never turn
//! into score or speed.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameState, tick};

/// Fixed-timestep accumulator
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    accumulator: f32,
    last_time_ms: Option<f64>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one animation frame stamped `time_ms` (e.g. from
    /// `requestAnimationFrame`). Returns the number of ticks run.
    pub fn frame(&mut self, state: &mut GameState, time_ms: f64) -> u32 {
        let dt = match self.last_time_ms {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => SIM_DT,
        };
        self.last_time_ms = Some(time_ms);
        self.step(state, dt.max(0.0))
    }

    /// Advance by `real_dt` seconds of wall time
    pub fn step(&mut self, state: &mut GameState, real_dt: f32) -> u32 {
        let was_playing = state.is_running();

        // Countdown runs on real time, unclamped
        state.advance_timers(real_dt);

        if !was_playing {
            self.accumulator = 0.0;
            return 0;
        }

        self.accumulator += real_dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            if !state.is_running() {
                self.accumulator = 0.0;
                break;
            }
        }
        // Don't bank a backlog we couldn't work off
        self.accumulator = self.accumulator.min(SIM_DT);

        substeps
    }

    /// Forget accumulated time (after a restart or a long pause)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time_ms = None;
    }
}
