use crossbeam_channel::Receiver;
use glam::Vec3;
use log::info;
use thiserror::Error;

use crate::config::SimConfig;
use crate::creature::{CreatureId, CreatureRegistry};
use crate::events::{EventBus, SimEvent};
use crate::inventory::Inventory;
use crate::physics::PlayerMotion;
use crate::player::{PlayerInput, PlayerState};
use crate::world::block::{BlockPos, BlockType};
use crate::world::generator::TerrainGenerator;
use crate::world::raycast;
use crate::world::store::BlockStore;

/// What a primary action (mine / attack) resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimaryOutcome {
    CreatureDamaged { id: CreatureId, remaining_hp: u8 },
    BlockRemoved { pos: BlockPos, block: BlockType },
    NoTarget,
}

/// Why a secondary action (place) was refused. None of these are fatal;
/// the world is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("no targeted block face")]
    NoTarget,
    #[error("insufficient inventory for the selected block")]
    InsufficientInventory,
    #[error("target cell is too close to the player")]
    TooCloseToPlayer,
    #[error("target cell is already occupied")]
    Occupied,
}

/// The whole voxel sandbox behind one facade: block store, inventory,
/// creatures, player body and the virtual clock. The host drives it with
/// `tick` plus the two action handlers and renders from the event stream.
/// Everything is owned here, so independent simulations can coexist.
pub struct Simulation {
    config: SimConfig,
    store: BlockStore,
    inventory: Inventory,
    creatures: CreatureRegistry,
    player: PlayerState,
    input: PlayerInput,
    motion: PlayerMotion,
    events: EventBus,
    selected_slot: usize,
    now_ms: f64,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        let mut store = BlockStore::new();
        TerrainGenerator::new(config.worldgen.clone()).populate(&mut store);

        let events = EventBus::new();
        let mut creatures = CreatureRegistry::new(config.creatures.clone(), config.seed);
        creatures.populate(&store, &events);

        let inventory = Inventory::with_stock(&config.gameplay.starting_stock);
        let player = PlayerState::new(Vec3::from(config.gameplay.spawn_point));
        let motion = PlayerMotion::new(config.gameplay.clone());

        info!(
            "Simulation ready: {} blocks, {} creatures",
            store.len(),
            creatures.len()
        );

        Self {
            config,
            store,
            inventory,
            creatures,
            player,
            input: PlayerInput::default(),
            motion,
            events,
            selected_slot: 0,
            now_ms: 0.0,
        }
    }

    /// Advances one frame. `dt` is clamped to the configured cap to bound
    /// integration error during frame drops. The player only moves while
    /// the host reports pointer lock; creatures always do.
    pub fn tick(&mut self, dt: f32, input_locked: bool) {
        let dt = dt.clamp(0.0, self.config.tick_clamp);
        self.now_ms += dt as f64 * 1000.0;

        if input_locked {
            self.motion
                .update(dt, &mut self.player, &self.input, &self.store);
        }
        self.creatures
            .update(dt, self.now_ms, &self.store, &self.events);
    }

    /// Mine / attack. Creatures are tested first within their own reach and
    /// shadow any block behind them; otherwise the nearest block along the
    /// view ray is removed and collected.
    pub fn handle_primary_action(&mut self, origin: Vec3, direction: Vec3) -> PrimaryOutcome {
        if let Some((id, _)) =
            self.creatures
                .ray_target(origin, direction, self.config.gameplay.creature_reach)
        {
            if let Some(hit) = self.creatures.damage(id, self.now_ms, &self.events) {
                if hit.died {
                    self.inventory.credit(
                        self.config.creatures.reward_block,
                        self.config.creatures.defeat_reward,
                    );
                }
                return PrimaryOutcome::CreatureDamaged {
                    id,
                    remaining_hp: hit.remaining_hp,
                };
            }
        }

        match raycast::cast(
            &self.store,
            origin,
            direction,
            self.config.gameplay.block_reach,
        ) {
            Some(hit) => match self.remove_block(hit.pos, true) {
                Some(block) => PrimaryOutcome::BlockRemoved {
                    pos: hit.pos,
                    block,
                },
                None => PrimaryOutcome::NoTarget,
            },
            None => PrimaryOutcome::NoTarget,
        }
    }

    /// Place `block` against the targeted face. Refusals are ordered:
    /// no target, then inventory, then player clearance, then occupancy;
    /// inventory is only debited once the block is really in the store.
    pub fn handle_secondary_action(
        &mut self,
        origin: Vec3,
        direction: Vec3,
        block: BlockType,
    ) -> Result<BlockPos, PlacementError> {
        let hit = raycast::cast(
            &self.store,
            origin,
            direction,
            self.config.gameplay.block_reach,
        )
        .ok_or(PlacementError::NoTarget)?;

        if self.inventory.count(block) == 0 {
            return Err(PlacementError::InsufficientInventory);
        }

        let place = hit.adjacent();
        if self.placement_blocked_by_player(place) {
            return Err(PlacementError::TooCloseToPlayer);
        }
        if !self.store.add(place, block) {
            return Err(PlacementError::Occupied);
        }

        self.inventory.debit(block, 1);
        self.events.emit(SimEvent::BlockPlaced { pos: place, block });
        Ok(place)
    }

    /// Removes the block at `pos` if present, crediting the inventory when
    /// `collect` is set. Removing an empty cell is a no-op.
    pub fn remove_block(&mut self, pos: BlockPos, collect: bool) -> Option<BlockType> {
        let block = self.store.remove(pos)?;
        if collect {
            self.inventory.credit(block, 1);
        }
        self.events.emit(SimEvent::BlockRemoved { pos, block });
        Some(block)
    }

    /// Jump request from the host; ignored while airborne.
    pub fn jump(&mut self) -> bool {
        self.motion.jump(&mut self.player)
    }

    pub fn inventory_snapshot(&self) -> Vec<(BlockType, u32)> {
        self.inventory.snapshot()
    }

    /// Hotbar selection; indices outside the block-type range are ignored.
    pub fn set_selected_slot(&mut self, slot: usize) {
        if slot < BlockType::ALL.len() {
            self.selected_slot = slot;
        }
    }

    pub fn selected_slot(&self) -> usize {
        self.selected_slot
    }

    pub fn selected_block(&self) -> BlockType {
        BlockType::ALL[self.selected_slot]
    }

    /// Notification stream for the rendering layer; drain with `try_iter`.
    pub fn events(&self) -> &Receiver<SimEvent> {
        self.events.receiver()
    }

    /// Movement flags, written by the external input layer.
    pub fn input_mut(&mut self) -> &mut PlayerInput {
        &mut self.input
    }

    /// View heading, owned by the external pointer-lock rig.
    pub fn set_view_yaw(&mut self, yaw: f32) {
        self.player.yaw = yaw;
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn block_store(&self) -> &BlockStore {
        &self.store
    }

    pub fn creatures(&self) -> &CreatureRegistry {
        &self.creatures
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// True when the cell overlaps the exclusion box around the player's
    /// body: within radius + half a cell horizontally, within body height
    /// of the eye vertically (measured at the cell's top face).
    fn placement_blocked_by_player(&self, place: BlockPos) -> bool {
        let g = &self.config.gameplay;
        let p = self.player.position;
        let c = place.center();

        (c.x - p.x).abs() < g.player_radius + 0.5
            && (c.z - p.z).abs() < g.player_radius + 0.5
            && (c.y + 0.5 - p.y).abs() < g.player_height
    }
}
