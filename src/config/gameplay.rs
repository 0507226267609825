use serde::{Deserialize, Serialize};

use crate::world::block::BlockType;

/// Player body, movement and interaction tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub player_height: f32,
    pub player_radius: f32,
    pub gravity: f32,
    /// Exponential horizontal damping, per second.
    pub friction: f32,
    pub move_acceleration: f32,
    pub jump_velocity: f32,
    /// Below this y the player is teleported back to the respawn point.
    pub void_floor: f32,
    pub spawn_point: [f32; 3],
    pub respawn_point: [f32; 3],
    /// Half-width of the column filter for the downward ground ray.
    pub ground_probe_radius: f32,
    /// Maximum distance at which a primary action can strike a creature.
    pub creature_reach: f32,
    /// Cap for the block-targeting grid walk.
    pub block_reach: f32,
    /// Block counts granted at world start, in hotbar order.
    pub starting_stock: Vec<(BlockType, u32)>,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            player_height: 1.7,
            player_radius: 0.35,
            gravity: 20.0,
            friction: 9.5,
            move_acceleration: 24.0,
            jump_velocity: 8.0,
            void_floor: -20.0,
            spawn_point: [8.0, 8.0, 8.0],
            respawn_point: [0.0, 8.0, 0.0],
            ground_probe_radius: 1.5,
            creature_reach: 4.5,
            block_reach: 96.0,
            starting_stock: vec![
                (BlockType::Grass, 15),
                (BlockType::Dirt, 30),
                (BlockType::Stone, 20),
                (BlockType::Wood, 20),
                (BlockType::Sand, 20),
            ],
        }
    }
}
