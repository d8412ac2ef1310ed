//! Landing decision for a dropped block
//!
//! Pure: the input tower is never modified, a hit returns a new one.

use super::tower::Tower;
use crate::consts::{BLOCK_SIZE, MISS_THRESHOLD_RATIO};

/// Largest horizontal offset from the top block that still counts as a hit
pub const MISS_THRESHOLD: f32 = BLOCK_SIZE * MISS_THRESHOLD_RATIO;

/// Outcome of a drop
#[derive(Debug, Clone, PartialEq)]
pub enum Landing {
    /// Block landed; `tower` includes it as the new top
    Hit { dx: f32, tower: Tower },
    /// Block fell past the tower
    Miss { dx: f32 },
}

impl Landing {
    pub fn is_miss(&self) -> bool {
        matches!(self, Landing::Miss { .. })
    }

    /// Signed offset from the previous top block (positive = right)
    pub fn dx(&self) -> f32 {
        match *self {
            Landing::Hit { dx, .. } | Landing::Miss { dx } => dx,
        }
    }

    pub fn tower(&self) -> Option<&Tower> {
        match self {
            Landing::Hit { tower, .. } => Some(tower),
            Landing::Miss { .. } => None,
        }
    }
}

/// Decide whether a block dropped with its center at `drop_x` lands on `tower`.
///
/// `drop_x` is not clamped to the play field; anything far away is just a miss.
/// An offset of exactly `MISS_THRESHOLD` is still a hit. On a hit the new block
/// sits at `drop_x` itself, never snapped toward the block below.
pub fn attempt_landing(tower: &Tower, drop_x: f32) -> Landing {
    let dx = drop_x - tower.top().x;

    if dx.abs() > MISS_THRESHOLD {
        return Landing::Miss { dx };
    }

    Landing::Hit {
        dx,
        tower: tower.with_block(drop_x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_value() {
        assert!((MISS_THRESHOLD - 42.0).abs() < 1e-4);
    }

    #[test]
    fn test_small_offset_hits() {
        let tower = Tower::new(100.0);
        let landing = attempt_landing(&tower, 105.0);

        assert!(!landing.is_miss());
        assert_eq!(landing.dx(), 5.0);
        let tower = landing.tower().unwrap();
        assert_eq!(tower.height(), 2);
        assert_eq!(tower.top().level, 1);
        assert_eq!(tower.top().x, 105.0);
    }

    #[test]
    fn test_large_offset_misses() {
        let tower = Tower::new(100.0);
        let landing = attempt_landing(&tower, 200.0);

        assert!(landing.is_miss());
        assert_eq!(landing.dx(), 100.0);
        assert!(landing.tower().is_none());
        assert_eq!(tower.height(), 1);
    }

    #[test]
    fn test_boundary_is_hit_on_both_sides() {
        let tower = Tower::new(100.0);
        assert!(!attempt_landing(&tower, 100.0 + MISS_THRESHOLD).is_miss());
        assert!(!attempt_landing(&tower, 100.0 - MISS_THRESHOLD).is_miss());
        assert!(attempt_landing(&tower, 100.0 + MISS_THRESHOLD + 0.01).is_miss());
        assert!(attempt_landing(&tower, 100.0 - MISS_THRESHOLD - 0.01).is_miss());
    }

    #[test]
    fn test_perfect_drop() {
        let tower = Tower::new(100.0);
        let landing = attempt_landing(&tower, 100.0);
        assert_eq!(landing.dx(), 0.0);
        assert!(!landing.is_miss());
    }

    #[test]
    fn test_offsets_accumulate_without_snapping() {
        let mut tower = Tower::new(100.0);
        for _ in 0..5 {
            let drop_x = tower.top().x + 30.0;
            match attempt_landing(&tower, drop_x) {
                Landing::Hit { tower: next, .. } => tower = next,
                Landing::Miss { .. } => panic!("30 units off should land"),
            }
        }
        assert_eq!(tower.top().x, 250.0);
        assert_eq!(tower.height(), 6);
    }

    #[test]
    fn test_far_outside_field_is_miss() {
        let tower = Tower::new(100.0);
        assert!(attempt_landing(&tower, -1.0e6).is_miss());
        assert!(attempt_landing(&tower, 1.0e6).is_miss());
    }
}
