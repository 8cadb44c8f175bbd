//! Simulation tick
//!
//! Core game loop that advances one session by `dt` seconds of play.

use super::physics;
use super::spawner::spawn_obstacle;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one timestep.
///
/// Does nothing outside `Playing`: every overlay freezes score, speed,
/// physics, spawning and the quiz timer.
pub fn tick(state: &mut GameState, dt: f32) {
    // Don't tick if an overlay is up
    if !state.phase.is_playing() {
        return;
    }
    if !dt.is_finite() || dt <= 0.0 {
        return;
    }

    state.time_ticks += 1;

    // Quiz interruption takes the whole tick
    state.quiz_timer += dt;
    if state.quiz_timer >= state.tuning.quiz_interval {
        state.quiz_timer = 0.0;
        if let Some(question) = state.quiz.current_index() {
            state.phase = GamePhase::QuizPrompt { question };
            state.events.push(GameEvent::QuizStarted { question });
            log::info!("Quiz time: question {}", question);
            return;
        }
    }

    // Score and speed both grow with time played
    state.score += dt * state.tuning.score_rate;
    state.speed = physics::ramp_speed(state.speed, &state.tuning, dt);

    physics::integrate_player(&mut state.player, &state.tuning, dt);

    // Spawning
    if state.spawn_timer.advance(dt, &mut state.rng, &state.tuning) {
        let id = state.next_entity_id();
        let obstacle = spawn_obstacle(&mut state.rng, &state.tuning, id);
        state.events.push(GameEvent::ObstacleSpawned {
            id,
            kind: obstacle.kind,
        });
        state.obstacles.push(obstacle);
    }

    physics::scroll_obstacles(&mut state.obstacles, state.speed, dt);

    // Collision detection
    let player_rect = state.player.rect();
    if let Some(hit) = state
        .obstacles
        .iter()
        .find(|obs| player_rect.overlaps(&obs.rect()))
    {
        let kind = hit.kind;
        state.phase = GamePhase::DeathScreen { hit: kind };
        state.events.push(GameEvent::Died { hit: kind });
        log::info!(
            "Run over: hit {:?} at score {}",
            kind,
            state.display_score()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::quiz::Question;
    use crate::sim::state::{Obstacle, ObstacleKind, Stance};
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn questions() -> Vec<Question> {
        (0..3)
            .map(|i| Question {
                prompt: format!("Question {i}"),
                options: vec!["yes".into(), "no".into()],
                correct_index: 0,
            })
            .collect()
    }

    fn session(seed: u64) -> GameState {
        let tuning = Tuning {
            shuffle_questions: false,
            ..Default::default()
        };
        GameState::new(seed, tuning, questions())
    }

    fn ground_obstacle_at(state: &GameState, x: f32) -> Obstacle {
        let size = state.tuning.ground_obstacle_size();
        Obstacle {
            id: 99,
            kind: ObstacleKind::Ground,
            pos: Vec2::new(x, state.tuning.ground_y() - size.y),
            size,
        }
    }

    fn aerial_obstacle_at(state: &GameState, x: f32) -> Obstacle {
        let size = state.tuning.aerial_obstacle_size();
        Obstacle {
            id: 98,
            kind: ObstacleKind::Aerial,
            pos: Vec2::new(x, state.tuning.ground_y() - size.y - state.tuning.aerial_offset),
            size,
        }
    }

    #[test]
    fn test_score_and_speed_grow() {
        let mut state = session(1);
        let mut last_score = state.score;
        let mut last_speed = state.speed;
        for _ in 0..240 {
            tick(&mut state, SIM_DT);
            assert!(state.score >= last_score);
            assert!(state.speed >= last_speed);
            last_score = state.score;
            last_speed = state.speed;
        }
        // 2 seconds at 10 points/s
        assert!((state.score - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_first_spawn_after_initial_interval() {
        let mut state = session(2);
        // 1.5 s at 120 Hz, with a little slack for float accumulation
        for _ in 0..178 {
            tick(&mut state, SIM_DT);
        }
        assert!(state.obstacles.is_empty());
        for _ in 0..4 {
            tick(&mut state, SIM_DT);
        }
        assert_eq!(state.obstacles.len(), 1);
        let events = state.drain_events();
        assert!(matches!(events[0], GameEvent::ObstacleSpawned { .. }));
    }

    #[test]
    fn test_obstacles_never_move_right() {
        let mut state = session(3);
        for _ in 0..600 {
            let before: Vec<(u32, f32)> = state.obstacles.iter().map(|o| (o.id, o.pos.x)).collect();
            // Keep the runner safe: this test is about scrolling
            state.player.pos.y = -1000.0;
            state.player.vel_y = 0.0;
            state.player.on_ground = false;
            tick(&mut state, SIM_DT);
            for obs in &state.obstacles {
                if let Some((_, x)) = before.iter().find(|(id, _)| *id == obs.id) {
                    assert!(obs.pos.x < *x);
                }
                assert!(obs.pos.x + obs.size.x > 0.0);
            }
            if !state.is_running() {
                break;
            }
        }
    }

    #[test]
    fn test_collision_ends_run() {
        let mut state = session(4);
        let obstacle = ground_obstacle_at(&state, state.player.pos.x + 10.0);
        state.obstacles.push(obstacle);
        tick(&mut state, SIM_DT);
        assert_eq!(
            state.phase,
            GamePhase::DeathScreen {
                hit: ObstacleKind::Ground
            }
        );
        assert!(state.drain_events().contains(&GameEvent::Died {
            hit: ObstacleKind::Ground
        }));
    }

    #[test]
    fn test_ducking_passes_under_aerial() {
        let mut state = session(5);
        crate::sim::physics::set_stance(&mut state.player, Stance::Ducking, &state.tuning);
        let obstacle = aerial_obstacle_at(&state, state.player.pos.x);
        state.obstacles.push(obstacle);
        tick(&mut state, SIM_DT);
        assert!(state.is_running());

        // Standing up under it is fatal
        crate::sim::physics::set_stance(&mut state.player, Stance::Normal, &state.tuning);
        tick(&mut state, SIM_DT);
        assert_eq!(
            state.phase,
            GamePhase::DeathScreen {
                hit: ObstacleKind::Aerial
            }
        );
    }

    #[test]
    fn test_quiz_interrupts_and_freezes() {
        let mut state = session(6);
        state.quiz_timer = state.tuning.quiz_interval - SIM_DT / 2.0;
        let score = state.score;
        let speed = state.speed;

        tick(&mut state, SIM_DT);
        assert_eq!(state.phase, GamePhase::QuizPrompt { question: 0 });
        // The interrupting tick does no other work
        assert_eq!(state.score, score);
        assert_eq!(state.speed, speed);
        assert_eq!(state.quiz_timer, 0.0);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::QuizStarted { question: 0 }]
        );
    }

    #[test]
    fn test_empty_deck_never_quizzes() {
        let tuning = Tuning {
            quiz_interval: 0.1,
            ..Default::default()
        };
        let mut state = GameState::new(1, tuning, Vec::new());
        for _ in 0..60 {
            tick(&mut state, SIM_DT);
        }
        assert!(state.is_running());
    }

    #[test]
    fn test_bad_dt_is_ignored() {
        let mut state = session(7);
        tick(&mut state, -1.0);
        tick(&mut state, f32::NAN);
        tick(&mut state, 0.0);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.time_ticks, 0);
    }

    proptest! {
        #[test]
        fn prop_overlays_freeze_everything(dt in 0.0f32..5.0, phase_pick in 0u8..4) {
            let mut state = session(8);
            for _ in 0..200 {
                tick(&mut state, SIM_DT);
            }
            state.phase = match phase_pick {
                0 => GamePhase::QuizPrompt { question: 0 },
                1 => GamePhase::WrongAnswer { question: 0, chosen: 1 },
                2 => GamePhase::CorrectCountdown { remaining: 2 },
                _ => GamePhase::DeathScreen { hit: ObstacleKind::Aerial },
            };

            let player = state.player.clone();
            let obstacles = state.obstacles.clone();
            let score = state.score;
            let speed = state.speed;
            let spawn_timer = state.spawn_timer.clone();
            let quiz_timer = state.quiz_timer;

            tick(&mut state, dt);

            prop_assert_eq!(state.player, player);
            prop_assert_eq!(state.obstacles, obstacles);
            prop_assert_eq!(state.score, score);
            prop_assert_eq!(state.speed, speed);
            prop_assert_eq!(state.spawn_timer, spawn_timer);
            prop_assert_eq!(state.quiz_timer, quiz_timer);
        }
    }
}
