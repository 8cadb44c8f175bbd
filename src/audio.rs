//! Audio cues
//!
//! Procedurally generated sound effects - no external files needed. Which
//! cue goes with which game event is plain data and works on every target;
//! playback needs the Web Audio API and only exists on wasm32.

use crate::sim::{GameEvent, ObstacleKind};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player leaves the ground
    Jump,
    /// Quiz overlay pops up
    QuizChime,
    /// Right answer
    Correct,
    /// One countdown step
    CountdownBeep,
    /// Play resumes
    Go,
    /// Wrong answer
    Wrong,
    /// Ran into a house
    CrashGround,
    /// Ran into a parrot
    CrashAerial,
}

impl SoundEffect {
    /// The cue for a game event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jumped => Some(SoundEffect::Jump),
            GameEvent::QuizStarted { .. } => Some(SoundEffect::QuizChime),
            GameEvent::AnswerCorrect { .. } => Some(SoundEffect::Correct),
            GameEvent::CountdownTick { .. } => Some(SoundEffect::CountdownBeep),
            GameEvent::Resumed => Some(SoundEffect::Go),
            GameEvent::AnswerWrong { .. } => Some(SoundEffect::Wrong),
            GameEvent::Died {
                hit: ObstacleKind::Ground,
            } => Some(SoundEffect::CrashGround),
            GameEvent::Died {
                hit: ObstacleKind::Aerial,
            } => Some(SoundEffect::CrashAerial),
            GameEvent::Ducked
            | GameEvent::StoodUp
            | GameEvent::ObstacleSpawned { .. }
            | GameEvent::CountdownStarted { .. }
            | GameEvent::Reset => None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        master_volume: f32,
        muted: bool,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                master_volume: 0.6,
                muted: false,
            }
        }

        /// Set master volume (0.0 - 1.0)
        pub fn set_master_volume(&mut self, vol: f32) {
            self.master_volume = vol.clamp(0.0, 1.0);
        }

        pub fn toggle_muted(&mut self) -> bool {
            self.muted = !self.muted;
            self.muted
        }

        fn effective_volume(&self) -> f32 {
            if self.muted { 0.0 } else { self.master_volume }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            let vol = self.effective_volume();
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Jump => self.sweep(ctx, vol * 0.3, 300.0, 600.0, 0.12, OscillatorType::Square),
                SoundEffect::QuizChime => {
                    self.note(ctx, vol * 0.3, 660.0, 0.0, 0.15);
                    self.note(ctx, vol * 0.3, 880.0, 0.12, 0.2);
                }
                SoundEffect::Correct => {
                    // Rising arpeggio
                    for (i, freq) in [523.0, 659.0, 784.0].into_iter().enumerate() {
                        self.note(ctx, vol * 0.3, freq, i as f64 * 0.08, 0.15);
                    }
                }
                SoundEffect::CountdownBeep => self.note(ctx, vol * 0.25, 440.0, 0.0, 0.1),
                SoundEffect::Go => self.note(ctx, vol * 0.3, 880.0, 0.0, 0.25),
                SoundEffect::Wrong => self.sweep(ctx, vol * 0.35, 220.0, 110.0, 0.4, OscillatorType::Sawtooth),
                SoundEffect::CrashGround => self.sweep(ctx, vol * 0.4, 150.0, 50.0, 0.3, OscillatorType::Sine),
                SoundEffect::CrashAerial => {
                    self.sweep(ctx, vol * 0.3, 1200.0, 500.0, 0.2, OscillatorType::Triangle)
                }
            }
        }

        // === Sound generators ===

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Short sine blip starting `delay` seconds from now
        fn note(&self, ctx: &AudioContext, vol: f32, freq: f32, delay: f64, len: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time() + delay;

            gain.gain().set_value_at_time(0.0, ctx.current_time()).ok();
            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain().exponential_ramp_to_value_at_time(0.01, t + len).ok();

            osc.start_with_when(t).ok();
            osc.stop_with_when(t + len + 0.05).ok();
        }

        /// Pitch sweep from `from` to `to` Hz
        fn sweep(
            &self,
            ctx: &AudioContext,
            vol: f32,
            from: f32,
            to: f32,
            len: f64,
            osc_type: OscillatorType,
        ) {
            let Some((osc, gain)) = self.create_osc(ctx, from, osc_type) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain().exponential_ramp_to_value_at_time(0.01, t + len).ok();
            osc.frequency().set_value_at_time(from, t).ok();
            osc.frequency().exponential_ramp_to_value_at_time(to, t + len).ok();

            osc.start().ok();
            osc.stop_with_when(t + len + 0.05).ok();
        }
    }
}
