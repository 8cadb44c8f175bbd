//! Configuration errors
//!
//! The simulation itself never fails; only loading tuning or content can.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::Tuning`] or
/// [`crate::ContentPack`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("quiz deck is empty")]
    EmptyDeck,

    #[error("question {question} has {count} option(s), need at least 2")]
    TooFewOptions { question: usize, count: usize },

    #[error("question {question}: correct index {index} out of range for {options} options")]
    CorrectIndexOutOfRange {
        question: usize,
        index: usize,
        options: usize,
    },

    #[error("{field} must be positive and finite (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be non-negative and finite (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be at least {min} (got {value})")]
    TooShort {
        field: &'static str,
        value: f32,
        min: f32,
    },

    #[error("spawn interval range is inverted ({min} > {max})")]
    InvertedSpawnRange { min: f32, max: f32 },

    #[error("duck height {duck} must be below normal height {normal}")]
    DuckNotShorter { duck: f32, normal: f32 },

    #[error("jump apex {apex:.1} clears aerial obstacles (top at {top:.1})")]
    AerialJumpable { apex: f32, top: f32 },

    #[error("duck height {duck} doesn't fit under aerial offset {offset}")]
    DuckTooTall { duck: f32, offset: f32 },

    #[error("standing height {normal} fits under aerial offset {offset}")]
    StandingFitsUnderAerial { normal: f32, offset: f32 },

    #[error("jump apex {apex:.1} can't clear ground obstacles ({height})")]
    GroundUnclearable { apex: f32, height: f32 },

    #[error("countdown must start above zero")]
    ZeroCountdown,
}
