//! Idle/demo mode - AI plays the game
//!
//! Uses only the public command API, so anything it can do a player can do.
//! Handy for attract screens and for soak-testing the loop headless.

use crate::sim::{GamePhase, GameState, ObstacleKind};

/// Jump when a ground obstacle is this many seconds from contact
pub const JUMP_LEAD: f32 = 0.17;
/// Duck when an aerial obstacle is this many seconds from contact
pub const DUCK_LEAD: f32 = 0.25;

/// Issue this frame's commands
pub fn autopilot(state: &mut GameState) {
    match state.phase {
        GamePhase::QuizPrompt { question } => {
            // Knows every answer
            if let Some(answer) = state.quiz.question(question).map(|q| q.correct_index) {
                state.submit_answer(answer);
            }
            return;
        }
        GamePhase::WrongAnswer { .. } | GamePhase::DeathScreen { .. } => {
            state.acknowledge();
            return;
        }
        GamePhase::CorrectCountdown { .. } => return,
        GamePhase::Playing => {}
    }

    let player = state.player.rect();
    let speed = state.speed.max(1.0);

    // Closest obstacle we haven't fully passed yet
    let threat = state
        .obstacles
        .iter()
        .filter(|o| o.rect().right() > player.x())
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
        .map(|o| (o.kind, (o.pos.x - player.right()) / speed));

    match threat {
        Some((ObstacleKind::Ground, time_to_contact)) if time_to_contact <= JUMP_LEAD => {
            state.jump();
        }
        Some((ObstacleKind::Aerial, time_to_contact)) if time_to_contact <= DUCK_LEAD => {
            state.start_duck();
        }
        _ => state.stop_duck(),
    }
}
