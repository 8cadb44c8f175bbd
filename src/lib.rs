//! Quiz Runner - an endless runner interrupted by quizzes
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, quiz phases)
//! - `driver`: Animation-frame to fixed-timestep bridge
//! - `autopilot`: Demo AI that plays through the command API
//! - `tuning`: Data-driven game balance
//! - `content`: Swappable quiz decks and death messages
//! - `audio`: Procedural sound cues

pub mod audio;
pub mod autopilot;
pub mod content;
pub mod driver;
pub mod error;
pub mod sim;
pub mod tuning;

pub use content::ContentPack;
pub use driver::FrameDriver;
pub use error::ConfigError;
pub use tuning::Tuning;

/// Game configuration constants
///
/// These are the defaults behind [`Tuning`]; gameplay code reads the tuning,
/// not these directly.
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame we simulate; anything slower is treated as a hitch
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 300.0;
    /// Ground line sits just above the bottom edge
    pub const GROUND_MARGIN: f32 = 10.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 80.0;
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const NORMAL_HEIGHT: f32 = 80.0;
    pub const DUCK_HEIGHT: f32 = 40.0;
    /// Jump impulse (upward, pixels/s) - clears houses but not parrots
    pub const JUMP_VELOCITY: f32 = 800.0;
    /// Gravity (pixels/s²), strong for snappy jumps
    pub const GRAVITY: f32 = 3200.0;

    /// Scroll speed
    pub const START_SPEED: f32 = 600.0;
    /// Speed ramp (pixels/s per second)
    pub const SPEED_ACCEL: f32 = 18.0;

    /// Obstacle sizes
    pub const GROUND_OBSTACLE_WIDTH: f32 = 50.0;
    pub const GROUND_OBSTACLE_HEIGHT: f32 = 60.0;
    pub const AERIAL_OBSTACLE_WIDTH: f32 = 80.0;
    pub const AERIAL_OBSTACLE_HEIGHT: f32 = 60.0;
    /// Gap between ground line and the bottom of an aerial obstacle ("duck only" zone)
    pub const AERIAL_OFFSET: f32 = 70.0;
    /// Obstacles appear this far past the right edge
    pub const SPAWN_MARGIN: f32 = 20.0;

    /// Spawn cadence (seconds)
    pub const INITIAL_SPAWN_INTERVAL: f32 = 1.5;
    pub const SPAWN_INTERVAL_MIN: f32 = 1.2;
    pub const SPAWN_INTERVAL_MAX: f32 = 2.2;

    /// Score accrued per second of play
    pub const SCORE_RATE: f32 = 10.0;

    /// Seconds of play between quizzes
    pub const QUIZ_INTERVAL: f32 = 10.0;
    /// Correct-answer countdown
    pub const COUNTDOWN_FROM: u8 = 3;
    pub const COUNTDOWN_PERIOD: f32 = 1.0;
    /// Shortest countdown step a tuning may ask for
    pub const MIN_COUNTDOWN_PERIOD: f32 = 0.05;
}
