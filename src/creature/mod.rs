pub mod registry;

pub use registry::{CreatureHit, CreatureRegistry};

use glam::Vec3;

use crate::utils::math::Aabb;

/// Stable handle for one creature, assigned by the registry. Identities are
/// never reused, so the rendering layer can key meshes on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreatureId(pub u32);

/// A wandering creature. The position is the center of its cubic body;
/// the wander direction is a horizontal unit heading re-rolled on a timer
/// and reversed on boundary or obstacle contact.
#[derive(Debug, Clone)]
pub struct Creature {
    pub id: CreatureId,
    pub position: Vec3,
    pub hp: u8,
    pub speed: f32,
    pub wander_dir: Vec3,
    pub next_turn_ms: f64,
}

impl Creature {
    pub fn aabb(&self, body_size: f32) -> Aabb {
        Aabb::cube(self.position, body_size * 0.5)
    }
}
