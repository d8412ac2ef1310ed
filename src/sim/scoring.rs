//! Score tracking
//!
//! The default rule counts placements. The accuracy rule pays more for
//! drops close to the block below and grows with the run of hits.

use serde::{Deserialize, Serialize};

/// Current attempt score and the best seen this session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u32,
    pub best: u32,
}

impl ScoreState {
    /// Add `points` to the score, raising `best` if it is passed
    pub fn award(self, points: u32) -> Self {
        let score = self.score.saturating_add(points);
        Self {
            score,
            best: self.best.max(score),
        }
    }

    /// Fresh attempt: score back to zero, best kept
    pub fn reset(self) -> Self {
        Self {
            score: 0,
            best: self.best,
        }
    }
}

/// One successful placement worth one point
pub fn update_score(state: ScoreState) -> ScoreState {
    state.award(1)
}

/// Largest combo that still raises the multiplier
pub const MAX_COMBO: u32 = 10;

/// Points for a placement under the accuracy rule.
///
/// `combo` is the number of hits earlier in the same attempt. A perfect drop
/// is worth 5 before the multiplier, an edge drop 1 or 2.
pub fn placement_points(dx: f32, block_size: f32, combo: u32) -> u32 {
    let accuracy = (1.0 - dx.abs() / block_size).max(0.0);
    let base = 1.0 + (accuracy * 4.0).round();
    let multiplier = 1.0 + combo.min(MAX_COMBO) as f32 * 0.1;
    (base * multiplier).round() as u32
}

/// Which scoring rule a game uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoreRule {
    /// +1 per placement
    #[default]
    PerPlacement,
    /// `placement_points` per placement
    Accuracy,
}

impl ScoreRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreRule::PerPlacement => "Per placement",
            ScoreRule::Accuracy => "Accuracy",
        }
    }

    /// Apply one successful placement to `state`
    pub fn apply(&self, state: ScoreState, dx: f32, block_size: f32, combo: u32) -> ScoreState {
        match self {
            ScoreRule::PerPlacement => update_score(state),
            ScoreRule::Accuracy => state.award(placement_points(dx, block_size, combo)),
        }
    }
}
