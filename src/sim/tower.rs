//! Tower model
//!
//! An ordered stack of blocks, base first. The tower is never empty: it is
//! seeded with one base block and only ever grows by one level at a time.

use serde::{Deserialize, Serialize};

/// One segment of the tower
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique within a tower, assigned in insertion order
    pub id: u32,
    /// 0 = sitting on the platform, 1 = first block above, etc.
    pub level: u32,
    /// Center X in play-field coordinates
    pub x: f32,
}

/// Stack of placed blocks, ordered by level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TowerRepr")]
pub struct Tower {
    blocks: Vec<Block>,
    /// Next block ID
    next_id: u32,
}

/// Serialized form, checked before it becomes a `Tower`.
/// A stored `next_id` is ignored and recomputed from the blocks.
#[derive(Deserialize)]
struct TowerRepr {
    blocks: Vec<Block>,
}

impl TryFrom<TowerRepr> for Tower {
    type Error = String;

    fn try_from(repr: TowerRepr) -> Result<Self, Self::Error> {
        let Some(last) = repr.blocks.last() else {
            return Err("tower has no blocks".to_string());
        };

        for (i, block) in repr.blocks.iter().enumerate() {
            if block.level as usize != i {
                return Err(format!("block {} has level {}, expected {}", block.id, block.level, i));
            }
            if !block.x.is_finite() {
                return Err(format!("block {} has non-finite x", block.id));
            }
        }
        // Ids follow insertion order, so strictly increasing also rules out duplicates
        if let Some(w) = repr.blocks.windows(2).find(|w| w[1].id <= w[0].id) {
            return Err(format!("block id {} follows id {}", w[1].id, w[0].id));
        }

        let next_id = last
            .id
            .checked_add(1)
            .ok_or_else(|| "block ids exhausted".to_string())?;
        Ok(Self {
            blocks: repr.blocks,
            next_id,
        })
    }
}

impl Tower {
    /// Create a tower with a single base block centered at `center_x`
    pub fn new(center_x: f32) -> Self {
        Self {
            blocks: vec![Block {
                id: 0,
                level: 0,
                x: center_x,
            }],
            next_id: 1,
        }
    }

    /// The current top block, the only one a drop is tested against
    pub fn top(&self) -> &Block {
        // Constructors only ever produce non-empty towers
        &self.blocks[self.blocks.len() - 1]
    }

    /// Number of blocks, base included
    pub fn height(&self) -> usize {
        self.blocks.len()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Return a copy of this tower with a new top block at exactly `x`
    pub fn with_block(&self, x: f32) -> Self {
        let mut next = self.clone();
        let level = self.top().level + 1;
        next.blocks.push(Block {
            id: next.next_id,
            level,
            x,
        });
        next.next_id += 1;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tower() {
        let tower = Tower::new(150.0);
        assert_eq!(tower.height(), 1);
        assert_eq!(tower.top().level, 0);
        assert_eq!(tower.top().x, 150.0);
    }

    #[test]
    fn test_with_block_leaves_original_untouched() {
        let tower = Tower::new(100.0);
        let taller = tower.with_block(112.5);

        assert_eq!(tower.height(), 1);
        assert_eq!(taller.height(), 2);
        assert_eq!(taller.top().level, 1);
        assert_eq!(taller.top().x, 112.5);
    }

    #[test]
    fn test_levels_contiguous_and_ids_unique() {
        let mut tower = Tower::new(0.0);
        for i in 0..10 {
            tower = tower.with_block(i as f32 * 3.0);
        }

        for (i, block) in tower.blocks().iter().enumerate() {
            assert_eq!(block.level as usize, i);
        }
        let mut ids: Vec<u32> = tower.blocks().iter().map(|b| b.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), tower.height());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(tower.top().level as usize + 1, tower.height());
    }

    #[test]
    fn test_deserialize_rejects_empty_tower() {
        let result = serde_json::from_str::<Tower>(r#"{"blocks":[],"next_id":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_level_gap() {
        let json = r#"{"blocks":[{"id":0,"level":0,"x":10.0},{"id":1,"level":5,"x":12.0}],"next_id":2}"#;
        assert!(serde_json::from_str::<Tower>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_duplicate_ids() {
        let json = r#"{"blocks":[{"id":0,"level":0,"x":10.0},{"id":0,"level":1,"x":12.0}],"next_id":1}"#;
        assert!(serde_json::from_str::<Tower>(json).is_err());
    }

    #[test]
    fn test_deserialize_recomputes_next_id() {
        // Stale next_id would hand out id 0 again
        let json = r#"{"blocks":[{"id":0,"level":0,"x":10.0},{"id":1,"level":1,"x":12.0}],"next_id":0}"#;
        let tower: Tower = serde_json::from_str(json).unwrap();
        let taller = tower.with_block(14.0);
        assert_eq!(taller.top().id, 2);
        assert_eq!(taller.top().level, 2);
    }

    #[test]
    fn test_serialized_tower_loads_back() {
        let tower = Tower::new(100.0).with_block(110.0).with_block(95.0);
        let json = serde_json::to_string(&tower).unwrap();
        let back: Tower = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tower);
    }
}
