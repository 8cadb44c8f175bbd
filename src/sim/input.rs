//! Player commands
//!
//! Discrete commands replacing raw key/click handlers. Anything issued in a
//! phase that doesn't accept it is dropped on the floor: no error, no queue.

use super::physics;
use super::quiz::AnswerOutcome;
use super::state::{GameEvent, GamePhase, GameState, Stance};
use super::timer::TimerId;

impl GameState {
    /// Jump, if playing and on the ground
    pub fn jump(&mut self) {
        if !self.phase.is_playing() {
            return;
        }
        if physics::jump(&mut self.player, &self.tuning) {
            self.events.push(GameEvent::Jumped);
        }
    }

    /// Crouch, if playing and on the ground
    pub fn start_duck(&mut self) {
        if !self.phase.is_playing() {
            return;
        }
        if physics::set_stance(&mut self.player, Stance::Ducking, &self.tuning) {
            self.events.push(GameEvent::Ducked);
        }
    }

    /// Stand back up, if playing and on the ground
    pub fn stop_duck(&mut self) {
        if !self.phase.is_playing() {
            return;
        }
        if physics::set_stance(&mut self.player, Stance::Normal, &self.tuning) {
            self.events.push(GameEvent::StoodUp);
        }
    }

    /// Answer the open quiz question. `None` if no quiz is showing.
    pub fn submit_answer(&mut self, choice: usize) -> Option<AnswerOutcome> {
        let GamePhase::QuizPrompt { question } = self.phase else {
            return None;
        };
        let outcome = self.quiz.answer(choice)?;

        match outcome {
            AnswerOutcome::Correct => {
                let from = self.tuning.countdown_from;
                let timer = self.countdown.start();
                self.phase = GamePhase::CorrectCountdown { remaining: from };
                self.events.push(GameEvent::AnswerCorrect { question });
                self.events.push(GameEvent::CountdownStarted { timer, from });
                log::info!("Correct answer to question {}", question);
            }
            AnswerOutcome::Wrong => {
                self.phase = GamePhase::WrongAnswer { question, chosen: choice };
                self.events.push(GameEvent::AnswerWrong { question, chosen: choice });
                log::info!("Wrong answer {} to question {}", choice, question);
            }
        }
        Some(outcome)
    }

    /// Dismiss the wrong-answer or death overlay, restarting the run
    pub fn acknowledge(&mut self) {
        if self.phase.awaits_acknowledge() {
            self.reset();
        }
    }

    /// Pump the countdown with real elapsed time (not game time)
    pub fn advance_timers(&mut self, real_dt: f32) {
        let fired = self.countdown.advance(real_dt);
        for _ in 0..fired {
            let Some(id) = self.countdown.active() else {
                break;
            };
            self.fire_timer(id);
        }
    }

    /// Countdown callback. Ids from a cancelled or replaced run are ignored.
    pub fn fire_timer(&mut self, id: TimerId) {
        if !self.countdown.is_current(id) {
            log::debug!("Ignoring stale timer {}", id.raw());
            return;
        }

        let GamePhase::CorrectCountdown { remaining } = self.phase else {
            // Armed timer without a countdown showing: just disarm it
            self.countdown.cancel();
            return;
        };

        let remaining = remaining.saturating_sub(1);
        if remaining > 0 {
            self.phase = GamePhase::CorrectCountdown { remaining };
            self.events.push(GameEvent::CountdownTick { remaining });
        } else {
            self.countdown.cancel();
            self.phase = GamePhase::Playing;
            self.events.push(GameEvent::Resumed);
            log::debug!("Countdown finished, resuming");
        }
    }
}
