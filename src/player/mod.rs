pub mod input;

pub use input::PlayerInput;

use glam::Vec3;

/// The player body. `position` is the eye point; the body extends one
/// body-height straight down from it. `velocity` is view-local: x is strafe,
/// z is fore/aft (negative z moves forward, matching the pointer-lock rig
/// the simulation is driven by), y is vertical in world space.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub grounded: bool,
}

impl PlayerState {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            grounded: false,
        }
    }

    /// Horizontal forward direction for the current yaw. Yaw zero faces -Z.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Horizontal right direction for the current yaw.
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }
}
