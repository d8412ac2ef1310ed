//! Swinging block actuator
//!
//! Moves the candidate drop position back and forth between the swing bounds
//! at constant speed. The engine never reads it directly: a drop takes a
//! `snapshot()` and passes that value along in `Command::Drop`.

use serde::{Deserialize, Serialize};

use crate::consts::SWING_DURATION;
use crate::geometry::PlayField;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwingOscillator {
    left: f32,
    right: f32,
    /// Seconds for one side-to-side sweep
    sweep_secs: f32,
    /// Seconds since the swing (re)started
    elapsed: f32,
    running: bool,
}

impl SwingOscillator {
    pub fn new(left: f32, right: f32, sweep_secs: f32) -> Self {
        Self {
            left: left.min(right),
            right: left.max(right),
            sweep_secs: sweep_secs.max(f32::EPSILON),
            elapsed: 0.0,
            running: true,
        }
    }

    /// Swing across the field's bounds at the default speed
    pub fn for_field(field: &PlayField) -> Self {
        let (left, right) = field.swing_bounds();
        Self::new(left, right, SWING_DURATION)
    }

    /// Advance by `dt` seconds (no-op while stopped)
    pub fn advance(&mut self, dt: f32) {
        if self.running {
            self.elapsed += dt;
        }
    }

    /// Freeze in place (while a block is falling)
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Start again from the middle, heading right
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current center X
    pub fn position(&self) -> f32 {
        let span = self.right - self.left;
        if span <= 0.0 {
            return self.left;
        }
        // Distance travelled, starting from the middle of the range
        let travelled = self.elapsed / self.sweep_secs * span + span / 2.0;
        let m = travelled.rem_euclid(2.0 * span);
        if m <= span {
            self.left + m
        } else {
            self.left + 2.0 * span - m
        }
    }

    /// Frozen copy of the current position for a drop command
    pub fn snapshot(&self) -> f32 {
        self.position()
    }
}
