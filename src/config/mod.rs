pub mod core;
pub mod creatures;
pub mod gameplay;
pub mod worldgen;

pub use self::core::{ConfigError, SimConfig};
pub use creatures::CreatureConfig;
pub use gameplay::GameplayConfig;
pub use worldgen::WorldGenConfig;
