use glam::Vec3;

use crate::world::block::BlockPos;
use crate::world::store::BlockStore;

/// Downward ground scan range and the eye-level fallback for empty columns.
const GROUND_SCAN_TOP: i32 = 30;
const GROUND_SCAN_BOTTOM: i32 = -5;
const GROUND_FALLBACK: f32 = 1.0;

/// Three-point body probe. `pos` is the top of the body (the player's eye);
/// samples the rounded (x, z) column at feet, torso and head offsets derived
/// from `body_height`. Deliberately not a volume sweep: only one column is
/// sampled, so a body overlapping a neighbouring column by less than half a
/// cell goes undetected.
pub fn collides_at(store: &BlockStore, pos: Vec3, body_height: f32) -> bool {
    let x = pos.x.round() as i32;
    let z = pos.z.round() as i32;

    let feet = (pos.y - body_height + 0.1).round() as i32;
    let torso = (pos.y - body_height * 0.5).round() as i32;
    let head = (pos.y - 0.1).round() as i32;

    store.contains(BlockPos::new(x, feet, z))
        || store.contains(BlockPos::new(x, torso, z))
        || store.contains(BlockPos::new(x, head, z))
}

/// Top surface of the rounded (x, z) column: the y of the highest occupied
/// cell plus half a block, or the eye-level fallback when the column is
/// empty within scan range. Keeps creatures glued to terrain without full
/// physics.
pub fn ground_height(store: &BlockStore, x: f32, z: f32) -> f32 {
    let cx = x.round() as i32;
    let cz = z.round() as i32;

    for y in (GROUND_SCAN_BOTTOM..=GROUND_SCAN_TOP).rev() {
        if store.contains(BlockPos::new(cx, y, cz)) {
            return y as f32 + 0.5;
        }
    }
    GROUND_FALLBACK
}
