use std::collections::HashMap;

use crate::world::block::{BlockPos, BlockType};

/// Sparse voxel grid: one block type per occupied integer coordinate.
/// The map is the single source of truth for occupancy; a key is either
/// absent or holds exactly one type.
#[derive(Debug, Clone, Default)]
pub struct BlockStore {
    blocks: HashMap<BlockPos, BlockType>,
}

impl BlockStore {
    pub fn new() -> Self {
        Self {
            blocks: HashMap::new(),
        }
    }

    /// Inserts a block only if the cell is empty. First writer wins;
    /// returns whether the block was actually placed.
    pub fn add(&mut self, pos: BlockPos, block: BlockType) -> bool {
        if self.blocks.contains_key(&pos) {
            return false;
        }
        self.blocks.insert(pos, block);
        true
    }

    /// Removes and returns the block at `pos`, if any. The caller decides
    /// whether the removed type gets credited to an inventory.
    pub fn remove(&mut self, pos: BlockPos) -> Option<BlockType> {
        self.blocks.remove(&pos)
    }

    pub fn get(&self, pos: BlockPos) -> Option<BlockType> {
        self.blocks.get(&pos).copied()
    }

    pub fn contains(&self, pos: BlockPos) -> bool {
        self.blocks.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BlockPos, BlockType)> + '_ {
        self.blocks.iter().map(|(p, b)| (*p, *b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_first_writer_wins() {
        let mut store = BlockStore::new();
        let pos = BlockPos::new(1, 2, 3);

        assert!(store.add(pos, BlockType::Stone));
        assert!(!store.add(pos, BlockType::Sand));
        assert_eq!(store.get(pos), Some(BlockType::Stone));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_returns_type_and_clears_cell() {
        let mut store = BlockStore::new();
        let pos = BlockPos::new(0, 0, 0);
        store.add(pos, BlockType::Wood);

        assert_eq!(store.remove(pos), Some(BlockType::Wood));
        assert!(!store.contains(pos));
        assert_eq!(store.remove(pos), None);
    }

    #[test]
    fn coordinate_uniqueness_over_mixed_ops() {
        let mut store = BlockStore::new();
        let pos = BlockPos::new(-4, 1, 7);

        for _ in 0..3 {
            store.add(pos, BlockType::Dirt);
            store.add(pos, BlockType::Grass);
            store.remove(pos);
            store.add(pos, BlockType::Sand);
        }
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(pos), Some(BlockType::Sand));
    }
}
