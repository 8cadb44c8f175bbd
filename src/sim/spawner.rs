//! Obstacle generator
//!
//! Picks what comes next and when. Timing is jittered so spawns never fall
//! into a perfectly periodic rhythm.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Obstacle, ObstacleKind};
use crate::tuning::Tuning;

/// Accumulates play time until the next spawn is due
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimer {
    pub elapsed: f32,
    pub interval: f32,
}

impl SpawnTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            elapsed: 0.0,
            interval,
        }
    }

    /// Advance by `dt`. Returns true when a spawn is due, in which case the
    /// timer restarts from zero with a freshly drawn interval.
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R, tuning: &Tuning) -> bool {
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return false;
        }
        self.elapsed = 0.0;
        self.interval = next_interval(rng, tuning);
        true
    }
}

/// Draw the next gap uniformly from `[spawn_interval_min, spawn_interval_max)`
pub fn next_interval<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> f32 {
    let span = tuning.spawn_interval_max - tuning.spawn_interval_min;
    tuning.spawn_interval_min + rng.random::<f32>() * span
}

/// Create a new obstacle just past the right edge of the field
pub fn spawn_obstacle<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning, id: u32) -> Obstacle {
    let kind = if rng.random_bool(0.5) {
        ObstacleKind::Ground
    } else {
        ObstacleKind::Aerial
    };

    let x = tuning.field_width + tuning.spawn_margin;
    let ground_y = tuning.ground_y();

    let (size, y) = match kind {
        ObstacleKind::Ground => {
            let size = tuning.ground_obstacle_size();
            (size, ground_y - size.y)
        }
        ObstacleKind::Aerial => {
            let size = tuning.aerial_obstacle_size();
            (size, ground_y - size.y - tuning.aerial_offset)
        }
    };

    Obstacle {
        id,
        kind,
        pos: Vec2::new(x, y),
        size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_obstacle_placement() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut saw = (false, false);

        for id in 0..64 {
            let obs = spawn_obstacle(&mut rng, &tuning, id);
            assert_eq!(obs.pos.x, tuning.field_width + tuning.spawn_margin);
            match obs.kind {
                ObstacleKind::Ground => {
                    saw.0 = true;
                    assert_eq!(obs.size, tuning.ground_obstacle_size());
                    assert_eq!(obs.rect().bottom(), tuning.ground_y());
                }
                ObstacleKind::Aerial => {
                    saw.1 = true;
                    assert_eq!(obs.size, tuning.aerial_obstacle_size());
                    assert_eq!(obs.rect().bottom(), tuning.ground_y() - tuning.aerial_offset);
                }
            }
        }
        // 64 fair coin flips all landing the same way won't happen with this seed
        assert!(saw.0 && saw.1);
    }

    #[test]
    fn test_spawn_timer_fires_and_rearms() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut timer = SpawnTimer::new(1.5);

        assert!(!timer.advance(1.0, &mut rng, &tuning));
        assert!(timer.advance(0.5, &mut rng, &tuning));
        assert_eq!(timer.elapsed, 0.0);
        assert!(timer.interval >= tuning.spawn_interval_min);
        assert!(timer.interval <= tuning.spawn_interval_max);
    }

    proptest! {
        #[test]
        fn prop_interval_in_range(seed in any::<u64>()) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..16 {
                let interval = next_interval(&mut rng, &tuning);
                prop_assert!(interval >= tuning.spawn_interval_min);
                prop_assert!(interval <= tuning.spawn_interval_max);
            }
        }
    }
}
