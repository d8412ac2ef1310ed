//! Play-field layout
//!
//! Screen Y grows downward. Blocks are `BLOCK_SIZE` squares whose center X is
//! the value stored in the tower; everything a renderer needs to place them
//! comes from here so the drawn size and the hit tolerance cannot drift apart.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Block;

/// Fixed-size play area inside the screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
}

impl PlayField {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Play area sized from the window, like the mobile layout
    pub fn from_screen(screen_width: f32, screen_height: f32) -> Self {
        Self::new(
            screen_width * PLAY_WIDTH_RATIO,
            screen_height * PLAY_HEIGHT_RATIO,
        )
    }

    /// Where the base block and the swing start
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Y of the platform surface the base block rests on
    #[inline]
    pub fn platform_y(&self) -> f32 {
        self.height - PLATFORM_INSET
    }

    /// Leftmost and rightmost center X the swinging block reaches
    pub fn swing_bounds(&self) -> (f32, f32) {
        let left = BLOCK_SIZE / 2.0 + SWING_MARGIN;
        let right = self.width - BLOCK_SIZE / 2.0 - SWING_MARGIN;
        if right < left {
            // Field narrower than a block: swing collapses onto the center
            (self.center_x(), self.center_x())
        } else {
            (left, right)
        }
    }

    /// Top edge of a block at `level`, before camera scroll
    pub fn block_top_y(&self, level: u32) -> f32 {
        self.platform_y() - (level + 1) as f32 * BLOCK_SIZE
    }

    /// Top-left corner of `block` on screen for a tower `tower_height` tall
    pub fn block_origin(&self, block: &Block, tower_height: usize) -> Vec2 {
        Vec2::new(
            block.x - BLOCK_SIZE / 2.0,
            self.block_top_y(block.level) + scroll_offset(tower_height),
        )
    }

    /// Top-left corner of the swinging block at center `x`
    pub fn swing_origin(&self, x: f32) -> Vec2 {
        Vec2::new(x - BLOCK_SIZE / 2.0, SWING_Y)
    }
}

/// How far the view shifts down so the top of a tall tower stays visible
pub fn scroll_offset(tower_height: usize) -> f32 {
    tower_height.saturating_sub(MAX_VISIBLE_BLOCKS) as f32 * BLOCK_SIZE
}

/// Play-area rotation for a lean in [-1, 1]
#[inline]
pub fn tilt_degrees(tilt: f32) -> f32 {
    tilt.clamp(-1.0, 1.0) * MAX_TILT_DEG
}
