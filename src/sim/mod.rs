//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - No rendering, DOM, or wall-clock dependencies

pub mod collision;
pub mod input;
pub mod physics;
pub mod quiz;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{Rect, overlaps};
pub use quiz::{AnswerOutcome, Question, Quiz};
pub use snapshot::{ObstacleView, PlayerView, Snapshot};
pub use spawner::{SpawnTimer, spawn_obstacle};
pub use state::{GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Player, Stance};
pub use tick::tick;
pub use timer::{IntervalTimer, TimerId};
