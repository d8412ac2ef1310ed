//! Attempt state machine
//!
//! `step` is the only place a `GameState` changes. Commands that do not fit
//! the current phase are ignored, so a second drop while one is still
//! falling cannot reach the landing logic.

use super::placement::{Landing, attempt_landing};
use super::state::{GameEvent, GameOverCause, GamePhase, GameState};
use crate::consts::BLOCK_SIZE;

/// Input from the presentation/animation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Commit a drop at the swing position sampled at the moment of input
    Drop { x: f32 },
    /// The fall animation finished; resolve the landing
    FallComplete,
    /// Pause or resume while swinging
    TogglePause,
    /// Start a new attempt (from game over or the pause menu)
    Restart,
}

/// Apply one command, returning what happened
pub fn step(state: &mut GameState, command: Command) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match (state.phase, command) {
        (GamePhase::Swinging, Command::Drop { x }) => {
            log::debug!("Drop committed at x={:.1} over top x={:.1}", x, state.tower.top().x);
            state.phase = GamePhase::Falling { drop_x: x };
            events.push(GameEvent::DropCommitted { x });
        }
        (GamePhase::Falling { drop_x }, Command::FallComplete) => {
            land(state, drop_x, &mut events);
        }
        (GamePhase::Swinging, Command::TogglePause) => {
            state.phase = GamePhase::Paused;
            events.push(GameEvent::Paused);
        }
        (GamePhase::Paused, Command::TogglePause) => {
            state.phase = GamePhase::Swinging;
            events.push(GameEvent::Resumed);
        }
        (GamePhase::GameOver { .. } | GamePhase::Paused, Command::Restart) => {
            state.reset_attempt();
            log::info!("Attempt {} started (best {})", state.attempt, state.score.best);
            events.push(GameEvent::Restarted {
                attempt: state.attempt,
            });
        }
        (phase, command) => {
            log::debug!("Ignoring {:?} during {:?}", command, phase);
        }
    }

    events
}

/// Resolve a finished fall
fn land(state: &mut GameState, drop_x: f32, events: &mut Vec<GameEvent>) {
    match attempt_landing(&state.tower, drop_x) {
        Landing::Miss { dx } => {
            log::debug!("Missed by {:.1}", dx);
            events.push(GameEvent::Missed { dx });
            game_over(state, GameOverCause::Miss, events);
        }
        Landing::Hit { dx, tower } => {
            let previous_best = state.score.best;
            state.score = state
                .rules
                .score_rule
                .apply(state.score, dx, BLOCK_SIZE, state.placements);
            state.placements += 1;
            state.tower = tower;
            state.tilt = state
                .rules
                .tilt
                .next_tilt(state.tilt, state.tower.height(), dx);

            let level = state.tower.top().level;
            log::debug!(
                "Landed level {} dx={:.1} tilt={:.2} score={}",
                level,
                dx,
                state.tilt,
                state.score.score
            );
            events.push(GameEvent::Landed {
                level,
                dx,
                tilt: state.tilt,
            });
            if state.score.best > previous_best {
                events.push(GameEvent::NewBest {
                    best: state.score.best,
                });
            }

            if state.rules.tilt.collapses(state.tilt) {
                game_over(state, GameOverCause::Collapse, events);
            } else {
                state.phase = GamePhase::Swinging;
            }
        }
    }
}

fn game_over(state: &mut GameState, cause: GameOverCause, events: &mut Vec<GameEvent>) {
    let lean = if state.tilt >= 0.0 { 1.0 } else { -1.0 };
    state.phase = GamePhase::GameOver { cause };

    log::info!(
        "Game over ({:?}) on attempt {}: score {}, height {}, best {}",
        cause,
        state.attempt,
        state.score.score,
        state.tower.height(),
        state.score.best
    );
    events.push(GameEvent::GameOver {
        cause,
        score: state.score.score,
        height: state.tower.height() as u32,
        lean,
    });
}
