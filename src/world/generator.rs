use log::info;

use crate::config::worldgen::WorldGenConfig;
use crate::world::block::{BlockPos, BlockType};
use crate::world::store::BlockStore;

/// Seed-free height-field generator. The undulation is a fixed sin/cos
/// surface, so regenerating with the same config always yields the same
/// world.
pub struct TerrainGenerator {
    config: WorldGenConfig,
}

impl TerrainGenerator {
    pub fn new(config: WorldGenConfig) -> Self {
        Self { config }
    }

    /// Surface height of the column at (x, z).
    pub fn height(&self, x: i32, z: i32) -> i32 {
        let c = &self.config;
        let h = (x as f64 * c.x_frequency).sin() * c.x_amplitude
            + (z as f64 * c.z_frequency).cos() * c.z_amplitude
            + c.base_height;
        h.floor() as i32
    }

    /// Fills the store with the startup terrain: every column of the square
    /// region from the floor up to its surface height, grass on top, dirt
    /// for the next `dirt_depth` layers, stone below.
    pub fn populate(&self, store: &mut BlockStore) {
        let r = self.config.region_radius;
        for x in -r..=r {
            for z in -r..=r {
                let h = self.height(x, z);
                for y in self.config.floor_y..=h {
                    let block = if y == h {
                        BlockType::Grass
                    } else if y >= h - self.config.dirt_depth {
                        BlockType::Dirt
                    } else {
                        BlockType::Stone
                    };
                    store.add(BlockPos::new(x, y, z), block);
                }
            }
        }
        info!(
            "Generated terrain: {} blocks over a {}x{} region",
            store.len(),
            2 * r + 1,
            2 * r + 1
        );
    }
}
