//! Cancelable real-time interval timer
//!
//! Drives the correct-answer countdown independently of the simulation
//! clock. Each `start` hands out a fresh [`TimerId`]; once a timer is
//! cancelled or restarted its old id is dead, so a late callback carrying
//! that id can be recognized and dropped.

use serde::{Deserialize, Serialize};

/// Identity of one armed timer run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(u64);

impl TimerId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Periodic timer pumped with real elapsed time
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: f32,
    elapsed: f32,
    active: Option<TimerId>,
    next_id: u64,
}

impl IntervalTimer {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
            active: None,
            next_id: 1,
        }
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Arm the timer, replacing any run already in flight
    pub fn start(&mut self) -> TimerId {
        self.cancel();
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.active = Some(id);
        id
    }

    /// Disarm the timer, returning the id that was live (if any)
    pub fn cancel(&mut self) -> Option<TimerId> {
        self.elapsed = 0.0;
        self.active.take()
    }

    pub fn active(&self) -> Option<TimerId> {
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// True if `id` is the run currently armed
    pub fn is_current(&self, id: TimerId) -> bool {
        self.active == Some(id)
    }

    /// Feed real elapsed time; returns how many periods completed.
    ///
    /// An idle timer never fires and doesn't bank time.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if self.active.is_none() || !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        // Degenerate period: one fire per pump keeps the countdown moving
        if !(self.period.is_finite() && self.period > 0.0) {
            self.elapsed = 0.0;
            return 1;
        }

        self.elapsed += dt;
        if self.elapsed < self.period {
            return 0;
        }
        let fired = (self.elapsed / self.period).floor();
        self.elapsed = (self.elapsed % self.period).max(0.0);
        fired as u32
    }
}
