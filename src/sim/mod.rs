//! Deterministic placement engine
//!
//! All gameplay rules live here. This module must stay pure:
//! - No clocks, no animation state, no rendering
//! - Drop coordinates arrive as explicit commands
//! - Same state + same commands = same outcome

pub mod placement;
pub mod scoring;
pub mod state;
pub mod step;
pub mod tilt;
pub mod tower;

pub use placement::{Landing, MISS_THRESHOLD, attempt_landing};
pub use scoring::{ScoreRule, ScoreState, placement_points, update_score};
pub use state::{GameEvent, GameOverCause, GamePhase, GameRules, GameState};
pub use step::{Command, step};
pub use tilt::{MIN_COLLAPSE_LIMIT, TiltModel, TiltRules, compute_tilt};
pub use tower::{Block, Tower};
