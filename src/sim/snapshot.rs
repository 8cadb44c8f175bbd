//! Read-only frame export for presentation

use serde::Serialize;

use super::collision::Rect;
use super::quiz::Question;
use super::state::{GamePhase, GameState, ObstacleKind, Stance};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub stance: Stance,
    pub on_ground: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleView {
    pub rect: Rect,
    pub kind: ObstacleKind,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub player: PlayerView,
    pub obstacles: Vec<ObstacleView>,
    pub score: f32,
    /// Score as shown to the player
    pub display_score: u64,
    pub speed: f32,
    pub phase: GamePhase,
    /// Set only while the quiz prompt is showing
    pub question: Option<&'a Question>,
    /// Set only on the death screen
    pub hit: Option<ObstacleKind>,
    /// Set only during the correct-answer countdown
    pub countdown: Option<u8>,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot<'_> {
        let (question, hit, countdown) = match self.phase {
            GamePhase::QuizPrompt { question } => (self.quiz.question(question), None, None),
            GamePhase::DeathScreen { hit } => (None, Some(hit), None),
            GamePhase::CorrectCountdown { remaining } => (None, None, Some(remaining)),
            GamePhase::Playing | GamePhase::WrongAnswer { .. } => (None, None, None),
        };

        Snapshot {
            player: PlayerView {
                rect: self.player.rect(),
                stance: self.player.stance,
                on_ground: self.player.on_ground,
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    rect: o.rect(),
                    kind: o.kind,
                })
                .collect(),
            score: self.score,
            display_score: self.display_score(),
            speed: self.speed,
            phase: self.phase,
            question,
            hit,
            countdown,
        }
    }
}
