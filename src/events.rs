use crossbeam_channel::{unbounded, Receiver, Sender};
use glam::Vec3;

use crate::creature::CreatureId;
use crate::world::block::{BlockPos, BlockType};

/// Simulation-to-renderer notifications, so the rendering layer can add and
/// remove meshes without owning any simulation state.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    BlockPlaced { pos: BlockPos, block: BlockType },
    BlockRemoved { pos: BlockPos, block: BlockType },
    CreatureSpawned { id: CreatureId, position: Vec3 },
    CreatureDamaged { id: CreatureId, hp: u8 },
    CreatureDied { id: CreatureId },
}

/// Unbounded event pipe owned by the simulation; consumers drain the
/// receiver with `try_iter`.
pub struct EventBus {
    sender: Sender<SimEvent>,
    receiver: Receiver<SimEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    pub fn emit(&self, event: SimEvent) {
        // The receiver lives as long as the bus, so a send cannot fail.
        let _ = self.sender.send(event);
    }

    pub fn receiver(&self) -> &Receiver<SimEvent> {
        &self.receiver
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
