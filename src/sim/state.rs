//! Game state and core simulation types
//!
//! One `GameState` is one play session. There are no globals: everything
//! the loop mutates lives here, so sessions are independent and tests can
//! drive them deterministically from a seed.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::quiz::{Question, Quiz};
use super::spawner::SpawnTimer;
use super::timer::{IntervalTimer, TimerId};
use crate::tuning::Tuning;

/// Mode of the session. Exactly one holds at a time; only `Playing`
/// advances the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Quiz overlay is up, waiting for an answer (deck index)
    QuizPrompt { question: usize },
    /// Wrong answer overlay; any acknowledgement restarts
    WrongAnswer { question: usize, chosen: usize },
    /// Correct answer, counting down before play resumes
    CorrectCountdown { remaining: u8 },
    /// Run ended by a collision
    DeathScreen { hit: ObstacleKind },
}

impl GamePhase {
    pub fn is_playing(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }

    /// Overlays that end with a full restart
    pub fn awaits_acknowledge(&self) -> bool {
        matches!(
            self,
            GamePhase::WrongAnswer { .. } | GamePhase::DeathScreen { .. }
        )
    }
}

/// Player posture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Stance {
    #[default]
    Normal,
    Ducking,
}

/// The runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = falling)
    pub vel_y: f32,
    pub on_ground: bool,
    pub stance: Stance,
}

impl Player {
    /// Standing on the ground at the start column
    pub fn standing(tuning: &Tuning) -> Self {
        let size = Vec2::new(tuning.player_width, tuning.normal_height);
        Self {
            pos: Vec2::new(tuning.player_x, tuning.ground_y() - size.y),
            size,
            vel_y: 0.0,
            on_ground: true,
            stance: Stance::Normal,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn is_ducking(&self) -> bool {
        self.stance == Stance::Ducking
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Sits on the ground; jump over it
    Ground,
    /// Floats in the duck-only zone; duck under it
    Aerial,
}

/// A scrolling obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Right edge has left the field
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x <= 0.0
    }
}

/// Things that happened, for audio cues and logging. Drained by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Ducked,
    StoodUp,
    ObstacleSpawned { id: u32, kind: ObstacleKind },
    QuizStarted { question: usize },
    AnswerCorrect { question: usize },
    AnswerWrong { question: usize, chosen: usize },
    CountdownStarted { timer: TimerId, from: u8 },
    CountdownTick { remaining: u8 },
    Resumed,
    Died { hit: ObstacleKind },
    Reset,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    pub quiz: Quiz,
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles (order carries no meaning)
    pub obstacles: Vec<Obstacle>,
    /// Score (fractional; display floors it)
    pub score: f32,
    /// Scroll speed in pixels/s
    pub speed: f32,
    pub spawn_timer: SpawnTimer,
    /// Seconds of play since the last quiz
    pub quiz_timer: f32,
    /// Simulation ticks while playing
    pub time_ticks: u64,
    /// Correct-answer countdown
    pub(crate) countdown: IntervalTimer,
    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed, tuning and question deck
    pub fn new(seed: u64, tuning: Tuning, questions: Vec<Question>) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            quiz: Quiz::new(questions),
            phase: GamePhase::Playing,
            player: Player::standing(&tuning),
            obstacles: Vec::new(),
            score: 0.0,
            speed: tuning.start_speed,
            spawn_timer: SpawnTimer::new(tuning.initial_spawn_interval),
            quiz_timer: 0.0,
            time_ticks: 0,
            countdown: IntervalTimer::new(tuning.countdown_period),
            events: Vec::new(),
            next_id: 1,
            tuning,
        };

        if state.tuning.shuffle_questions {
            state.quiz.reshuffle(&mut state.rng);
        }

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Full restart from any phase.
    ///
    /// Cancels a pending countdown first so its callback can't resume the
    /// fresh run. Calling it twice in a row leaves the same state as once.
    pub fn reset(&mut self) {
        if let Some(id) = self.countdown.cancel() {
            log::debug!("Cancelled countdown timer {}", id.raw());
        }

        self.obstacles.clear();
        self.score = 0.0;
        self.speed = self.tuning.start_speed;
        self.spawn_timer = SpawnTimer::new(self.tuning.initial_spawn_interval);
        self.quiz_timer = 0.0;
        self.player = Player::standing(&self.tuning);
        self.phase = GamePhase::Playing;

        if self.tuning.shuffle_questions {
            self.quiz.reshuffle(&mut self.rng);
        }

        self.events.push(GameEvent::Reset);
        log::info!("Session reset");
    }

    /// The session clock only runs while playing
    pub fn is_running(&self) -> bool {
        self.phase.is_playing()
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }

    /// Id of the armed countdown, for front-ends that schedule it themselves
    pub fn countdown_timer(&self) -> Option<TimerId> {
        self.countdown.active()
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
