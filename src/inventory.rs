use crate::world::block::BlockType;

/// Per-block-type counters backing the hotbar. Counts never go negative:
/// a debit that would underflow is refused instead.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    counts: [u32; BlockType::ALL.len()],
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inventory pre-loaded with the given stock.
    pub fn with_stock(stock: &[(BlockType, u32)]) -> Self {
        let mut inv = Self::new();
        for &(block, count) in stock {
            inv.credit(block, count);
        }
        inv
    }

    pub fn count(&self, block: BlockType) -> u32 {
        self.counts[block.slot()]
    }

    pub fn credit(&mut self, block: BlockType, amount: u32) {
        self.counts[block.slot()] += amount;
    }

    /// Removes `amount` of `block` if available; returns whether the debit
    /// happened.
    pub fn debit(&mut self, block: BlockType, amount: u32) -> bool {
        let slot = block.slot();
        if self.counts[slot] < amount {
            return false;
        }
        self.counts[slot] -= amount;
        true
    }

    /// Counts in declared block-type order, for hotbar rendering.
    pub fn snapshot(&self) -> Vec<(BlockType, u32)> {
        BlockType::ALL
            .iter()
            .map(|&b| (b, self.counts[b.slot()]))
            .collect()
    }
}
