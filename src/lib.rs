pub mod config;
pub mod creature;
pub mod engine;
pub mod events;
pub mod inventory;
pub mod physics;
pub mod player;
pub mod utils;
pub mod world;

// Re-export commonly used types
pub use config::core::SimConfig;
pub use config::creatures::CreatureConfig;
pub use config::gameplay::GameplayConfig;
pub use config::worldgen::WorldGenConfig;
pub use creature::{Creature, CreatureId, CreatureRegistry};
pub use engine::{PlacementError, PrimaryOutcome, Simulation};
pub use events::SimEvent;
pub use inventory::Inventory;
pub use physics::motion::PlayerMotion;
pub use player::{PlayerInput, PlayerState};
pub use utils::math::{Aabb, Ray};
pub use world::block::{BlockPos, BlockType};
pub use world::generator::TerrainGenerator;
pub use world::store::BlockStore;
