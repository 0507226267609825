use glam::Vec3;
use log::debug;

use crate::config::gameplay::GameplayConfig;
use crate::physics::collision::collides_at;
use crate::player::{PlayerInput, PlayerState};
use crate::utils::math::Ray;
use crate::world::store::BlockStore;

/// Advances the player body one tick at a time: damping, gravity, input
/// acceleration, collide-and-revert horizontal motion, ground snapping and
/// the out-of-world safety net.
pub struct PlayerMotion {
    config: GameplayConfig,
}

impl PlayerMotion {
    pub fn new(config: GameplayConfig) -> Self {
        Self { config }
    }

    pub fn update(
        &self,
        dt: f32,
        player: &mut PlayerState,
        input: &PlayerInput,
        store: &BlockStore,
    ) {
        let cfg = &self.config;
        let mut vel = player.velocity;

        // Frame-rate adjusted damping on the horizontal axes, then gravity.
        vel.x -= vel.x * cfg.friction * dt;
        vel.z -= vel.z * cfg.friction * dt;
        vel.y -= cfg.gravity * dt;

        let dir = Vec3::new(
            (input.right as i32 - input.left as i32) as f32,
            0.0,
            (input.forward as i32 - input.backward as i32) as f32,
        )
        .normalize_or_zero();

        if input.forward || input.backward {
            vel.z -= dir.z * cfg.move_acceleration * dt;
        }
        if input.left || input.right {
            vel.x -= dir.x * cfg.move_acceleration * dt;
        }

        // Horizontal step in world space; view-local velocity is carried
        // through the yaw basis. A collision cancels the whole move, no
        // sliding along walls.
        let step = player.right() * (-vel.x * dt) + player.forward() * (-vel.z * dt);
        let target = player.position + step;
        if collides_at(store, target, cfg.player_height) {
            vel.x = 0.0;
            vel.z = 0.0;
        } else {
            player.position = target;
        }

        player.position.y += vel.y * dt;

        // Vertical resolution goes through a downward ray rather than the
        // column probe: snap onto the first surface below once the eye
        // drops to body height above it.
        match self.ground_surface_below(store, player.position) {
            Some(surface) if player.position.y <= surface + cfg.player_height => {
                player.position.y = surface + cfg.player_height;
                vel.y = 0.0;
                player.grounded = true;
            }
            _ => player.grounded = false,
        }

        if player.position.y < cfg.void_floor {
            player.position = Vec3::from(cfg.respawn_point);
            vel = Vec3::ZERO;
            player.grounded = false;
            debug!("player fell below {}, respawned", cfg.void_floor);
        }

        player.velocity = vel;
    }

    /// Only permitted while grounded; airborne requests are ignored.
    pub fn jump(&self, player: &mut PlayerState) -> bool {
        if !player.grounded {
            return false;
        }
        player.velocity.y = self.config.jump_velocity;
        player.grounded = false;
        true
    }

    /// Surface height of the nearest block face straight below the eye,
    /// considering only blocks within the probe radius horizontally and not
    /// above the eye.
    fn ground_surface_below(&self, store: &BlockStore, pos: Vec3) -> Option<f32> {
        let ray = Ray::new(pos, Vec3::NEG_Y);
        let radius = self.config.ground_probe_radius;
        let mut nearest: Option<f32> = None;

        for (bp, _) in store.iter() {
            let c = bp.center();
            if (c.x - pos.x).abs() >= radius || (c.z - pos.z).abs() >= radius || c.y > pos.y {
                continue;
            }
            if let Some(t) = ray.intersects_aabb(&bp.aabb()) {
                if nearest.map_or(true, |n| t < n) {
                    nearest = Some(t);
                }
            }
        }
        nearest.map(|t| ray.at(t).y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::block::{BlockPos, BlockType};

    fn motion() -> PlayerMotion {
        PlayerMotion::new(GameplayConfig::default())
    }

    fn flat_ground(top: i32) -> BlockStore {
        let mut store = BlockStore::new();
        for x in -3..=3 {
            for z in -3..=3 {
                for y in -2..=top {
                    store.add(BlockPos::new(x, y, z), BlockType::Grass);
                }
            }
        }
        store
    }

    fn settled_player(store: &BlockStore) -> PlayerState {
        let motion = motion();
        let mut player = PlayerState::new(Vec3::new(0.0, 8.0, 0.0));
        for _ in 0..200 {
            motion.update(0.016, &mut player, &PlayerInput::default(), store);
            if player.grounded {
                break;
            }
        }
        assert!(player.grounded, "player never settled");
        player
    }

    #[test]
    fn gravity_and_friction_follow_the_model() {
        let motion = motion();
        let store = BlockStore::new();
        let mut player = PlayerState::new(Vec3::new(0.0, 100.0, 0.0));
        player.velocity = Vec3::new(10.0, 0.0, 10.0);

        motion.update(0.01, &mut player, &PlayerInput::default(), &store);
        assert!((player.velocity.x - (10.0 - 10.0 * 9.5 * 0.01)).abs() < 1e-4);
        assert!((player.velocity.z - (10.0 - 10.0 * 9.5 * 0.01)).abs() < 1e-4);
        assert!((player.velocity.y - (-20.0 * 0.01)).abs() < 1e-4);
        assert!(!player.grounded);
    }

    #[test]
    fn falling_player_settles_at_body_height_above_surface() {
        let store = flat_ground(3);
        let player = settled_player(&store);
        assert!((player.position.y - (3.5 + 1.7)).abs() < 1e-4);
        assert_eq!(player.velocity.y, 0.0);
    }

    #[test]
    fn jump_applies_exact_impulse_and_clears_grounded() {
        let store = flat_ground(3);
        let motion = motion();
        let mut player = settled_player(&store);

        assert!(motion.jump(&mut player));
        assert_eq!(player.velocity.y, 8.0);
        assert!(!player.grounded);
    }

    #[test]
    fn airborne_jump_is_ignored() {
        let motion = motion();
        let mut player = PlayerState::new(Vec3::new(0.0, 50.0, 0.0));
        player.velocity.y = -3.0;

        assert!(!motion.jump(&mut player));
        assert_eq!(player.velocity.y, -3.0);
    }

    #[test]
    fn walking_off_a_ledge_clears_grounded() {
        // Single-column pillar: once the player drifts past the column the
        // downward ray loses its surface.
        let mut store = BlockStore::new();
        for y in -2..=3 {
            store.add(BlockPos::new(0, y, 0), BlockType::Stone);
        }
        let motion = motion();
        let mut player = settled_player(&store);
        player.position.x = 2.0;

        motion.update(0.016, &mut player, &PlayerInput::default(), &store);
        assert!(!player.grounded);
    }

    #[test]
    fn wall_cancels_horizontal_motion() {
        let mut store = flat_ground(3);
        // Tall wall across x = 2.
        for z in -3..=3 {
            for y in 4..=8 {
                store.add(BlockPos::new(2, y, z), BlockType::Stone);
            }
        }
        let motion = motion();
        let mut player = settled_player(&store);
        // Face +X: forward = (-sin, 0, -cos) with yaw = -pi/2.
        player.yaw = -std::f32::consts::FRAC_PI_2;

        let input = PlayerInput {
            forward: true,
            ..Default::default()
        };
        for _ in 0..300 {
            motion.update(0.016, &mut player, &input, &store);
        }
        // Stopped before the wall column, never inside it.
        assert!(player.position.x < 1.5);
        assert!(player.position.x > 0.5);
        assert!(player.velocity.x.abs() < 1e-3);
        assert!(player.velocity.z.abs() < 1e-3);
    }

    #[test]
    fn falling_out_of_the_world_respawns() {
        let motion = motion();
        let store = BlockStore::new();
        let mut player = PlayerState::new(Vec3::new(5.0, -19.9, 5.0));
        player.velocity.y = -30.0;

        motion.update(0.05, &mut player, &PlayerInput::default(), &store);
        assert_eq!(player.position, Vec3::new(0.0, 8.0, 0.0));
        assert_eq!(player.velocity, Vec3::ZERO);
    }

    #[test]
    fn forward_input_moves_along_the_view_direction() {
        let store = flat_ground(3);
        let motion = motion();
        let mut player = settled_player(&store);
        let start = player.position;

        let input = PlayerInput {
            forward: true,
            ..Default::default()
        };
        for _ in 0..30 {
            motion.update(0.016, &mut player, &input, &store);
        }
        // Yaw zero faces -Z.
        assert!(player.position.z < start.z - 0.1);
        assert!((player.position.x - start.x).abs() < 1e-3);
    }
}
