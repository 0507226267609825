use serde::{Deserialize, Serialize};

use crate::world::block::BlockType;

/// Creature population, wander behavior and respawn tuning. All delays are
/// in virtual-clock milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatureConfig {
    pub initial_count: usize,
    pub hit_points: u8,
    /// Side length of the cubic body.
    pub body_size: f32,
    /// Height of the body center above the ground surface.
    pub ground_offset: f32,
    pub base_speed: f32,
    pub speed_spread: f32,
    pub turn_delay_min_ms: f64,
    pub turn_delay_spread_ms: f64,
    /// Creatures bounce back when farther than this from the world origin.
    pub world_radius: f32,
    pub spawn_ring_inner: f32,
    pub spawn_ring_spread: f32,
    pub respawn_delay_ms: f64,
    /// Resource and amount credited to the inventory per defeated creature.
    pub reward_block: BlockType,
    pub defeat_reward: u32,
}

impl Default for CreatureConfig {
    fn default() -> Self {
        Self {
            initial_count: 8,
            hit_points: 3,
            body_size: 0.85,
            ground_offset: 0.43,
            base_speed: 1.0,
            speed_spread: 0.8,
            turn_delay_min_ms: 1200.0,
            turn_delay_spread_ms: 1800.0,
            world_radius: 34.0,
            spawn_ring_inner: 8.0,
            spawn_ring_spread: 18.0,
            respawn_delay_ms: 1500.0,
            reward_block: BlockType::Wood,
            defeat_reward: 2,
        }
    }
}
