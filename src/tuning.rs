//! Data-driven game balance
//!
//! Every number the simulation reads comes from a [`Tuning`]. The defaults
//! mirror [`crate::consts`]; a JSON override only needs the fields it changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable constants for one game variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field_width: f32,
    pub field_height: f32,
    pub ground_margin: f32,

    pub player_x: f32,
    pub player_width: f32,
    pub normal_height: f32,
    pub duck_height: f32,
    pub jump_velocity: f32,
    pub gravity: f32,

    pub start_speed: f32,
    pub speed_accel: f32,

    pub ground_obstacle_width: f32,
    pub ground_obstacle_height: f32,
    pub aerial_obstacle_width: f32,
    pub aerial_obstacle_height: f32,
    pub aerial_offset: f32,
    pub spawn_margin: f32,

    pub initial_spawn_interval: f32,
    pub spawn_interval_min: f32,
    pub spawn_interval_max: f32,

    pub score_rate: f32,

    pub quiz_interval: f32,
    pub countdown_from: u8,
    pub countdown_period: f32,
    /// Reshuffle question order on every reset
    pub shuffle_questions: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_margin: GROUND_MARGIN,

            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            normal_height: NORMAL_HEIGHT,
            duck_height: DUCK_HEIGHT,
            jump_velocity: JUMP_VELOCITY,
            gravity: GRAVITY,

            start_speed: START_SPEED,
            speed_accel: SPEED_ACCEL,

            ground_obstacle_width: GROUND_OBSTACLE_WIDTH,
            ground_obstacle_height: GROUND_OBSTACLE_HEIGHT,
            aerial_obstacle_width: AERIAL_OBSTACLE_WIDTH,
            aerial_obstacle_height: AERIAL_OBSTACLE_HEIGHT,
            aerial_offset: AERIAL_OFFSET,
            spawn_margin: SPAWN_MARGIN,

            initial_spawn_interval: INITIAL_SPAWN_INTERVAL,
            spawn_interval_min: SPAWN_INTERVAL_MIN,
            spawn_interval_max: SPAWN_INTERVAL_MAX,

            score_rate: SCORE_RATE,

            quiz_interval: QUIZ_INTERVAL,
            countdown_from: COUNTDOWN_FROM,
            countdown_period: COUNTDOWN_PERIOD,
            shuffle_questions: true,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Y coordinate of the ground line (screen space, y grows downward)
    pub fn ground_y(&self) -> f32 {
        self.field_height - self.ground_margin
    }

    /// Peak height of a jump above the ground, from v² / 2g
    pub fn jump_apex(&self) -> f32 {
        self.jump_velocity * self.jump_velocity / (2.0 * self.gravity)
    }

    /// Height of an aerial obstacle's top edge above the ground
    pub fn aerial_top(&self) -> f32 {
        self.aerial_offset + self.aerial_obstacle_height
    }

    pub fn ground_obstacle_size(&self) -> Vec2 {
        Vec2::new(self.ground_obstacle_width, self.ground_obstacle_height)
    }

    pub fn aerial_obstacle_size(&self) -> Vec2 {
        Vec2::new(self.aerial_obstacle_width, self.aerial_obstacle_height)
    }

    /// Check that the numbers describe a playable game.
    ///
    /// Beyond sanity checks this enforces the avoidance contract: ground
    /// obstacles can be jumped, aerial ones can only be ducked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("player_width", self.player_width),
            ("normal_height", self.normal_height),
            ("duck_height", self.duck_height),
            ("jump_velocity", self.jump_velocity),
            ("gravity", self.gravity),
            ("start_speed", self.start_speed),
            ("ground_obstacle_width", self.ground_obstacle_width),
            ("ground_obstacle_height", self.ground_obstacle_height),
            ("aerial_obstacle_width", self.aerial_obstacle_width),
            ("aerial_obstacle_height", self.aerial_obstacle_height),
            ("initial_spawn_interval", self.initial_spawn_interval),
            ("spawn_interval_min", self.spawn_interval_min),
            ("score_rate", self.score_rate),
            ("quiz_interval", self.quiz_interval),
            ("countdown_period", self.countdown_period),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("ground_margin", self.ground_margin),
            ("player_x", self.player_x),
            ("speed_accel", self.speed_accel),
            ("aerial_offset", self.aerial_offset),
            ("spawn_margin", self.spawn_margin),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if !self.spawn_interval_max.is_finite() || self.spawn_interval_min > self.spawn_interval_max
        {
            return Err(ConfigError::InvertedSpawnRange {
                min: self.spawn_interval_min,
                max: self.spawn_interval_max,
            });
        }

        if self.countdown_period < MIN_COUNTDOWN_PERIOD {
            return Err(ConfigError::TooShort {
                field: "countdown_period",
                value: self.countdown_period,
                min: MIN_COUNTDOWN_PERIOD,
            });
        }

        if self.countdown_from == 0 {
            return Err(ConfigError::ZeroCountdown);
        }

        if self.duck_height >= self.normal_height {
            return Err(ConfigError::DuckNotShorter {
                duck: self.duck_height,
                normal: self.normal_height,
            });
        }

        // Touching edges don't collide, so "fits" is non-strict
        if self.duck_height > self.aerial_offset {
            return Err(ConfigError::DuckTooTall {
                duck: self.duck_height,
                offset: self.aerial_offset,
            });
        }
        if self.normal_height <= self.aerial_offset {
            return Err(ConfigError::StandingFitsUnderAerial {
                normal: self.normal_height,
                offset: self.aerial_offset,
            });
        }

        let apex = self.jump_apex();
        if apex >= self.aerial_top() {
            return Err(ConfigError::AerialJumpable {
                apex,
                top: self.aerial_top(),
            });
        }
        if apex < self.ground_obstacle_height {
            return Err(ConfigError::GroundUnclearable {
                apex,
                height: self.ground_obstacle_height,
            });
        }

        Ok(())
    }
}
