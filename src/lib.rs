//! Neon Tower - a one-button tower stacking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic placement engine (tower, landing, scoring, tilt, state machine)
//! - `geometry`: Play-field layout shared with whatever draws the blocks
//! - `swing`: Reference swing actuator that produces drop coordinates
//! - `autoplay`: Seeded bot and headless attempt driver
//! - `platform`: Browser/native platform abstraction
//! - `persistence`: JSON key/value storage

pub mod autoplay;
pub mod geometry;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod swing;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use highscores::HighScores;
pub use settings::{DayNightMode, Settings, Theme};

/// Game configuration constants
pub mod consts {
    /// Logical width (and height) of a block, in play-field units.
    /// The hit tolerance is derived from it, so renderers must draw with the same value.
    pub const BLOCK_SIZE: f32 = 60.0;
    /// Fraction of `BLOCK_SIZE` a drop may be off-center and still land
    pub const MISS_THRESHOLD_RATIO: f32 = 0.7;

    /// Tower height at or below which no tilt is shown
    pub const TILT_MIN_HEIGHT: f32 = 4.0;
    /// Number of blocks over which tilt ramps from 0 to full strength
    pub const TILT_RAMP_BLOCKS: f32 = 10.0;
    /// Visual rotation of the play area at tilt = ±1
    pub const MAX_TILT_DEG: f32 = 14.0;

    /// Play field as a fraction of the screen
    pub const PLAY_WIDTH_RATIO: f32 = 0.9;
    pub const PLAY_HEIGHT_RATIO: f32 = 0.7;
    /// Distance from the bottom of the play field to the platform line
    pub const PLATFORM_INSET: f32 = 60.0;
    /// Vertical position of the swinging block's top edge
    pub const SWING_Y: f32 = 80.0;
    /// Gap kept between the swinging block and the side walls
    pub const SWING_MARGIN: f32 = 8.0;
    /// Rows visible before the camera starts scrolling
    pub const MAX_VISIBLE_BLOCKS: usize = 9;

    /// One sweep of the swing from side to side (seconds)
    pub const SWING_DURATION: f32 = 0.9;
    /// Fall time from the swing line to the tower top (seconds)
    pub const DROP_DURATION: f32 = 0.45;
    /// Fixed timestep for headless drivers (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}

/// Clamp to [0, 1]
#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Sign of a horizontal offset: -1 left, 1 right, 0 dead center
#[inline]
pub fn direction(dx: f32) -> f32 {
    if dx == 0.0 {
        0.0
    } else if dx > 0.0 {
        1.0
    } else {
        -1.0
    }
}
