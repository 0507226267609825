use serde::{Deserialize, Serialize};

/// Startup terrain shape. The height field is a fixed sin/cos undulation,
/// so these parameters fully determine the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    /// Columns are generated for x, z in [-region_radius, region_radius].
    pub region_radius: i32,
    /// Lowest generated layer.
    pub floor_y: i32,
    /// Layers of dirt directly beneath the grass surface.
    pub dirt_depth: i32,
    pub x_frequency: f64,
    pub z_frequency: f64,
    pub x_amplitude: f64,
    pub z_amplitude: f64,
    pub base_height: f64,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            region_radius: 30,
            floor_y: -2,
            dirt_depth: 2,
            x_frequency: 0.22,
            z_frequency: 0.2,
            x_amplitude: 1.3,
            z_amplitude: 1.3,
            base_height: 2.0,
        }
    }
}
