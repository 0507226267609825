use glam::{IVec3, Vec3};

use crate::world::block::BlockPos;
use crate::world::store::BlockStore;

/// A voxel struck by a ray: the cell, the outward normal of the face the
/// ray entered through, and the distance to that face. The normal is zero
/// only when the ray started inside the cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockHit {
    pub pos: BlockPos,
    pub normal: IVec3,
    pub distance: f32,
}

impl BlockHit {
    /// Cell adjacent to the struck face; the candidate for placement.
    pub fn adjacent(&self) -> BlockPos {
        self.pos
            .offset(self.normal.x, self.normal.y, self.normal.z)
    }
}

/// Grid walk from `origin` along `direction`, visiting cells in the exact
/// order the ray pierces them, until a stored block or `max_dist` is
/// reached. Cells are centered on integer coordinates, so boundaries sit
/// at half-integers.
pub fn cast(store: &BlockStore, origin: Vec3, direction: Vec3, max_dist: f32) -> Option<BlockHit> {
    let dir = direction.normalize_or_zero();
    if dir == Vec3::ZERO {
        return None;
    }

    // Shift by half a cell so boundaries land on integers for the walk.
    let u = origin + Vec3::splat(0.5);
    let mut x = u.x.floor() as i32;
    let mut y = u.y.floor() as i32;
    let mut z = u.z.floor() as i32;

    let step_x = if dir.x > 0.0 { 1 } else { -1 };
    let step_y = if dir.y > 0.0 { 1 } else { -1 };
    let step_z = if dir.z > 0.0 { 1 } else { -1 };

    let mut t_max_x = boundary_distance(u.x, x, dir.x);
    let mut t_max_y = boundary_distance(u.y, y, dir.y);
    let mut t_max_z = boundary_distance(u.z, z, dir.z);

    let t_delta_x = if dir.x != 0.0 { (1.0 / dir.x).abs() } else { f32::INFINITY };
    let t_delta_y = if dir.y != 0.0 { (1.0 / dir.y).abs() } else { f32::INFINITY };
    let t_delta_z = if dir.z != 0.0 { (1.0 / dir.z).abs() } else { f32::INFINITY };

    let mut t = 0.0;
    let mut normal = IVec3::ZERO;

    while t <= max_dist {
        let pos = BlockPos::new(x, y, z);
        if store.contains(pos) {
            return Some(BlockHit {
                pos,
                normal,
                distance: t,
            });
        }

        if t_max_x < t_max_y && t_max_x < t_max_z {
            x += step_x;
            t = t_max_x;
            t_max_x += t_delta_x;
            normal = IVec3::new(-step_x, 0, 0);
        } else if t_max_y < t_max_z {
            y += step_y;
            t = t_max_y;
            t_max_y += t_delta_y;
            normal = IVec3::new(0, -step_y, 0);
        } else {
            z += step_z;
            t = t_max_z;
            t_max_z += t_delta_z;
            normal = IVec3::new(0, 0, -step_z);
        }
    }

    None
}

/// Ray distance from `u` to the next cell boundary on one axis.
fn boundary_distance(u: f32, cell: i32, dir: f32) -> f32 {
    if dir > 0.0 {
        (cell as f32 + 1.0 - u) / dir
    } else if dir < 0.0 {
        (cell as f32 - u) / dir
    } else {
        f32::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::block::BlockType;

    fn store_with(cells: &[(i32, i32, i32)]) -> BlockStore {
        let mut store = BlockStore::new();
        for &(x, y, z) in cells {
            store.add(BlockPos::new(x, y, z), BlockType::Stone);
        }
        store
    }

    #[test]
    fn straight_ray_hits_first_block_on_entry_face() {
        let store = store_with(&[(0, 0, -5), (0, 0, -6)]);
        let hit = cast(&store, Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 96.0).unwrap();

        assert_eq!(hit.pos, BlockPos::new(0, 0, -5));
        assert_eq!(hit.normal, IVec3::new(0, 0, 1));
        assert!((hit.distance - 4.5).abs() < 1e-4);
        assert_eq!(hit.adjacent(), BlockPos::new(0, 0, -4));
    }

    #[test]
    fn downward_ray_reports_top_face() {
        let store = store_with(&[(2, 1, 2)]);
        let origin = Vec3::new(2.0, 8.0, 2.0);
        let hit = cast(&store, origin, Vec3::new(0.0, -1.0, 0.0), 96.0).unwrap();

        assert_eq!(hit.pos, BlockPos::new(2, 1, 2));
        assert_eq!(hit.normal, IVec3::new(0, 1, 0));
        assert_eq!(hit.adjacent(), BlockPos::new(2, 2, 2));
    }

    #[test]
    fn ray_respects_max_distance() {
        let store = store_with(&[(0, 0, -50)]);
        assert!(cast(&store, Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 10.0).is_none());
        assert!(cast(&store, Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 96.0).is_some());
    }

    #[test]
    fn empty_store_misses() {
        let store = BlockStore::new();
        assert!(cast(&store, Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 96.0).is_none());
    }

    #[test]
    fn origin_inside_solid_cell_hits_with_zero_normal() {
        let store = store_with(&[(0, 0, 0)]);
        let hit = cast(&store, Vec3::new(0.1, 0.0, 0.1), Vec3::new(1.0, 0.0, 0.0), 96.0).unwrap();

        assert_eq!(hit.pos, BlockPos::new(0, 0, 0));
        assert_eq!(hit.normal, IVec3::ZERO);
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn diagonal_ray_walks_cell_by_cell() {
        let store = store_with(&[(3, 0, 3)]);
        let hit = cast(&store, Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0), 96.0).unwrap();
        assert_eq!(hit.pos, BlockPos::new(3, 0, 3));
    }
}
