//! Demo/autoplay mode - a bot plays the game
//!
//! The bot picks a horizontal offset from the top block for each drop and
//! commits when the swing passes it. Lower skill spreads the offsets wider,
//! past the miss threshold. `run_attempt` drives the whole lifecycle at a
//! fixed timestep with no renderer attached.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{DROP_DURATION, FRAME_DT};
use crate::geometry::PlayField;
use crate::sim::{Command, GameOverCause, GamePhase, GameState, MISS_THRESHOLD, step};
use crate::swing::SwingOscillator;

/// How close the swing must come to the chosen point to commit.
/// Wider than one frame of swing travel so a pass is never skipped.
pub const AIM_WINDOW: f32 = 6.0;

/// Seeded bot player
#[derive(Debug, Clone)]
pub struct Autoplayer {
    rng: Pcg32,
    /// 0 = sloppy, 1 = never misses
    skill: f32,
    /// Offset from the top block chosen for the pending drop
    target: Option<f32>,
}

impl Autoplayer {
    pub fn new(seed: u64, skill: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            skill: skill.clamp(0.0, 1.0),
            target: None,
        }
    }

    /// Widest offset the bot may aim for
    pub fn spread(&self) -> f32 {
        (MISS_THRESHOLD - AIM_WINDOW) * (2.0 - self.skill)
    }

    /// Whether to commit a drop with the swing at `swing_x`
    pub fn decide(&mut self, top_x: f32, swing_x: f32, bounds: (f32, f32)) -> bool {
        let offset = match self.target {
            Some(offset) => offset,
            None => {
                let spread = self.spread();
                let offset = self.rng.random_range(-spread..=spread);
                self.target = Some(offset);
                offset
            }
        };

        // Points the swing never reaches are moved to the nearest edge
        let aim_x = (top_x + offset).clamp(bounds.0, bounds.1);
        if (swing_x - aim_x).abs() <= AIM_WINDOW {
            self.target = None;
            true
        } else {
            false
        }
    }
}

/// Result of one driven attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptSummary {
    pub score: u32,
    pub best: u32,
    pub height: usize,
    /// `None` if the frame budget ran out first
    pub cause: Option<GameOverCause>,
    pub frames: u32,
}

/// Play the current attempt until game over or `max_frames` frames pass
pub fn run_attempt(
    state: &mut GameState,
    field: &PlayField,
    bot: &mut Autoplayer,
    max_frames: u32,
) -> AttemptSummary {
    let mut swing = SwingOscillator::for_field(field);
    let bounds = field.swing_bounds();
    let mut fall_elapsed = 0.0;
    let mut frames = 0;

    while frames < max_frames {
        match state.phase {
            GamePhase::Swinging => {
                swing.advance(FRAME_DT);
                let x = swing.snapshot();
                if bot.decide(state.tower.top().x, x, bounds) {
                    swing.stop();
                    fall_elapsed = 0.0;
                    step(state, Command::Drop { x });
                }
            }
            GamePhase::Falling { .. } => {
                fall_elapsed += FRAME_DT;
                if fall_elapsed >= DROP_DURATION {
                    step(state, Command::FallComplete);
                    swing.restart();
                }
            }
            GamePhase::Paused | GamePhase::GameOver { .. } => break,
        }
        frames += 1;
    }

    let cause = match state.phase {
        GamePhase::GameOver { cause } => Some(cause),
        _ => None,
    };
    AttemptSummary {
        score: state.score.score,
        best: state.score.best,
        height: state.tower.height(),
        cause,
        frames,
    }
}
