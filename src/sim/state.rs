//! Game state and attempt lifecycle types
//!
//! Everything needed to resume an attempt lives here and serializes.

use serde::{Deserialize, Serialize};

use super::scoring::{ScoreRule, ScoreState};
use super::tilt::TiltRules;
use super::tower::Tower;

/// Why an attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Drop landed too far from the top block
    Miss,
    /// Tower leaned past the collapse limit
    Collapse,
}

/// Current phase of an attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to commit a drop
    Swinging,
    /// Block is falling; `drop_x` was frozen when the drop was committed
    Falling { drop_x: f32 },
    /// Game is paused (only reachable from `Swinging`)
    Paused,
    /// Attempt ended; only `Restart` leaves this phase
    GameOver { cause: GameOverCause },
}

/// Something the presentation layer should react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Drop committed at `x`, fall animation should start
    DropCommitted { x: f32 },
    /// Block landed on the tower
    Landed { level: u32, dx: f32, tilt: f32 },
    /// Block missed the tower
    Missed { dx: f32 },
    /// Score passed the previous best
    NewBest { best: u32 },
    /// Attempt ended; `lean` is the side the tower topples toward (±1)
    GameOver {
        cause: GameOverCause,
        score: u32,
        height: u32,
        lean: f32,
    },
    Paused,
    Resumed,
    /// Fresh tower and score for attempt number `attempt`
    Restarted { attempt: u32 },
}

/// Gameplay rules that can differ between games
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GameRules {
    pub score_rule: ScoreRule,
    pub tilt: TiltRules,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Horizontal center the base block is placed at
    pub center_x: f32,
    pub tower: Tower,
    pub score: ScoreState,
    /// Successful placements this attempt (equals the score under the default rule)
    pub placements: u32,
    /// Last computed lean in [-1, 1]
    pub tilt: f32,
    pub phase: GamePhase,
    pub rules: GameRules,
    /// 1-based attempt counter within this session
    pub attempt: u32,
}

impl GameState {
    /// New session with the first attempt ready to swing
    pub fn new(center_x: f32, rules: GameRules) -> Self {
        Self {
            center_x,
            tower: Tower::new(center_x),
            score: ScoreState::default(),
            placements: 0,
            tilt: 0.0,
            phase: GamePhase::Swinging,
            rules,
            attempt: 1,
        }
    }

    /// Continue a session with a best score carried over from elsewhere
    pub fn with_best(mut self, best: u32) -> Self {
        self.score.best = self.score.best.max(best);
        self
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    /// Whether a new drop may be committed right now
    pub fn accepts_drop(&self) -> bool {
        self.phase == GamePhase::Swinging
    }

    /// Discard the tower and score, keeping `best` and the rules
    pub(crate) fn reset_attempt(&mut self) {
        self.tower = Tower::new(self.center_x);
        self.score = self.score.reset();
        self.placements = 0;
        self.tilt = 0.0;
        self.phase = GamePhase::Swinging;
        self.attempt += 1;
    }
}
