use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::utils::math::Aabb;

/// The fixed set of placeable block kinds, in hotbar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Grass,
    Dirt,
    Stone,
    Wood,
    Sand,
}

impl BlockType {
    pub const ALL: [BlockType; 5] = [
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Wood,
        BlockType::Sand,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BlockType::Grass => "Grass",
            BlockType::Dirt => "Dirt",
            BlockType::Stone => "Stone",
            BlockType::Wood => "Wood",
            BlockType::Sand => "Sand",
        }
    }

    /// Hotbar swatch color.
    pub fn color(&self) -> &'static str {
        match self {
            BlockType::Grass => "#4caf50",
            BlockType::Dirt => "#8b5a2b",
            BlockType::Stone => "#888888",
            BlockType::Wood => "#a97142",
            BlockType::Sand => "#d8c07c",
        }
    }

    /// Hotbar index of this type.
    pub fn slot(&self) -> usize {
        Self::ALL.iter().position(|b| b == self).unwrap_or(0)
    }
}

/// Integer grid coordinate of a voxel. Blocks are unit cubes centered on
/// their coordinate, so the cell spans +/-0.5 on every axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Maps a continuous position to its grid cell. Rounding, not
    /// truncation: cell boundaries sit halfway between integer coordinates.
    pub fn from_world(p: Vec3) -> Self {
        Self {
            x: p.x.round() as i32,
            y: p.y.round() as i32,
            z: p.z.round() as i32,
        }
    }

    pub fn center(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::cube(self.center(), 0.5)
    }

    pub fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}
