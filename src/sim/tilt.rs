//! Tower lean
//!
//! Tilt is a value in [-1, 1]: taller towers and off-center drops lean more.
//! By default it is cosmetic; `TiltRules` can make a large lean end the run.

use serde::{Deserialize, Serialize};

use super::placement::MISS_THRESHOLD;
use crate::consts::{TILT_MIN_HEIGHT, TILT_RAMP_BLOCKS};
use crate::{clamp01, direction};

/// Lean after a placement, from the current height and that placement's offset only
pub fn compute_tilt(tower_height: usize, dx: f32) -> f32 {
    let height_factor = clamp01((tower_height as f32 - TILT_MIN_HEIGHT) / TILT_RAMP_BLOCKS);
    let offset_factor = clamp01(dx.abs() / MISS_THRESHOLD);

    direction(dx) * height_factor * offset_factor
}

/// How successive placements combine into the tower's lean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TiltModel {
    /// Recomputed from scratch after every hit
    #[default]
    Instantaneous,
    /// Each hit's lean is added to the previous one, clamped to [-1, 1]
    Accumulating,
}

/// Tilt behavior for a game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiltRules {
    pub model: TiltModel,
    /// End the attempt when the lean reaches `collapse_limit`
    pub collapse_enabled: bool,
    /// Magnitude at which the tower topples, read through `effective_limit`
    pub collapse_limit: f32,
}

/// Smallest collapse limit honored; a centered tower never topples
pub const MIN_COLLAPSE_LIMIT: f32 = 0.01;

impl Default for TiltRules {
    fn default() -> Self {
        Self {
            model: TiltModel::Instantaneous,
            collapse_enabled: false,
            collapse_limit: 1.0,
        }
    }
}

impl TiltRules {
    /// Lean after a hit that left the tower `tower_height` tall
    pub fn next_tilt(&self, previous: f32, tower_height: usize, dx: f32) -> f32 {
        let tilt = compute_tilt(tower_height, dx);
        match self.model {
            TiltModel::Instantaneous => tilt,
            TiltModel::Accumulating => (previous + tilt).clamp(-1.0, 1.0),
        }
    }

    /// Collapse limit clamped to [MIN_COLLAPSE_LIMIT, 1]
    pub fn effective_limit(&self) -> f32 {
        if self.collapse_limit.is_nan() {
            return 1.0;
        }
        self.collapse_limit.clamp(MIN_COLLAPSE_LIMIT, 1.0)
    }

    /// Whether `tilt` topples the tower
    pub fn collapses(&self, tilt: f32) -> bool {
        self.collapse_enabled && tilt.abs() >= self.effective_limit()
    }
}
