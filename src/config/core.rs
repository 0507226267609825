use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::creatures::CreatureConfig;
use crate::config::gameplay::GameplayConfig;
use crate::config::worldgen::WorldGenConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Aggregate simulation configuration. Every section falls back to its
/// defaults, so a partial TOML file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seeds the creature RNG; terrain is seed-free.
    pub seed: u64,
    /// Upper bound on per-tick delta time, in seconds.
    pub tick_clamp: f32,
    pub worldgen: WorldGenConfig,
    pub gameplay: GameplayConfig,
    pub creatures: CreatureConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            tick_clamp: 0.05,
            worldgen: WorldGenConfig::default(),
            gameplay: GameplayConfig::default(),
            creatures: CreatureConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_round_trip_through_toml() {
        let config = SimConfig::default();
        let text = toml::to_string(&config).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();

        let loaded = SimConfig::load(file.path()).unwrap();
        assert_eq!(loaded.seed, config.seed);
        assert_eq!(loaded.tick_clamp, config.tick_clamp);
        assert_eq!(loaded.worldgen.region_radius, config.worldgen.region_radius);
        assert_eq!(loaded.gameplay.jump_velocity, config.gameplay.jump_velocity);
        assert_eq!(loaded.creatures.initial_count, config.creatures.initial_count);
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"seed = 7\n\n[creatures]\ninitial_count = 2\n")
            .unwrap();

        let loaded = SimConfig::load(file.path()).unwrap();
        assert_eq!(loaded.seed, 7);
        assert_eq!(loaded.creatures.initial_count, 2);
        assert_eq!(loaded.creatures.hit_points, 3);
        assert_eq!(loaded.gameplay.player_height, 1.7);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SimConfig::load(Path::new("/nonexistent/voxwild.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
