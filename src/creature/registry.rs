use glam::Vec3;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::config::creatures::CreatureConfig;
use crate::creature::{Creature, CreatureId};
use crate::events::{EventBus, SimEvent};
use crate::physics::collision::{collides_at, ground_height};
use crate::utils::math::Ray;
use crate::world::store::BlockStore;

/// Outcome of one successful hit on a creature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreatureHit {
    pub id: CreatureId,
    pub remaining_hp: u8,
    pub died: bool,
}

/// Owns every live creature plus the pending-respawn queue. All randomness
/// flows through one seeded RNG so runs are reproducible; all delays are
/// measured on the caller-supplied virtual clock.
pub struct CreatureRegistry {
    config: CreatureConfig,
    rng: ChaCha12Rng,
    creatures: Vec<Creature>,
    next_id: u32,
    /// Virtual-clock timestamps at which a replacement spawns. Entries are
    /// never canceled once queued.
    pending_respawns: Vec<f64>,
}

impl CreatureRegistry {
    pub fn new(config: CreatureConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha12Rng::seed_from_u64(seed),
            creatures: Vec::new(),
            next_id: 0,
            pending_respawns: Vec::new(),
        }
    }

    /// Spawns the initial population on the ring around the origin.
    pub fn populate(&mut self, store: &BlockStore, events: &EventBus) {
        for _ in 0..self.config.initial_count {
            self.spawn(store, events);
        }
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }

    pub fn get(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id == id)
    }

    pub fn pending_respawns(&self) -> usize {
        self.pending_respawns.len()
    }

    #[cfg(test)]
    pub(crate) fn creatures_mut(&mut self) -> &mut Vec<Creature> {
        &mut self.creatures
    }

    /// One AI step for every live creature, plus any respawns that have
    /// come due on the virtual clock.
    pub fn update(&mut self, dt: f32, now_ms: f64, store: &BlockStore, events: &EventBus) {
        self.process_respawns(now_ms, store, events);

        for creature in &mut self.creatures {
            if now_ms > creature.next_turn_ms {
                let dir = Vec3::new(
                    self.rng.gen::<f32>() - 0.5,
                    0.0,
                    self.rng.gen::<f32>() - 0.5,
                )
                .normalize_or_zero();
                // A degenerate roll keeps the previous heading.
                if dir != Vec3::ZERO {
                    creature.wander_dir = dir;
                }
                creature.next_turn_ms = now_ms
                    + self.config.turn_delay_min_ms
                    + self.rng.gen::<f64>() * self.config.turn_delay_spread_ms;
            }

            let mut tentative = creature.position;
            tentative.x += creature.wander_dir.x * creature.speed * dt;
            tentative.z += creature.wander_dir.z * creature.speed * dt;

            // Probe the tentative spot at the current elevation, from the
            // top of the body like the player's eye probe. Checking before
            // the ground snap is what makes walls bounce the creature
            // instead of hoisting it on top of them.
            let top = Vec3::new(
                tentative.x,
                creature.position.y + self.config.body_size * 0.5,
                tentative.z,
            );
            let out_of_bounds =
                tentative.x.hypot(tentative.z) > self.config.world_radius;
            if out_of_bounds || collides_at(store, top, self.config.body_size) {
                creature.wander_dir = -creature.wander_dir;
            } else {
                tentative.y = ground_height(store, tentative.x, tentative.z)
                    + self.config.ground_offset;
                creature.position = tentative;
            }
        }
    }

    /// Applies one hit. Returns None for an unknown (already removed) id.
    /// At zero hit points the creature leaves the active set immediately
    /// and a replacement is queued `respawn_delay_ms` ahead.
    pub fn damage(
        &mut self,
        id: CreatureId,
        now_ms: f64,
        events: &EventBus,
    ) -> Option<CreatureHit> {
        let index = self.creatures.iter().position(|c| c.id == id)?;
        let creature = &mut self.creatures[index];
        creature.hp = creature.hp.saturating_sub(1);
        let remaining = creature.hp;

        if remaining == 0 {
            self.creatures.swap_remove(index);
            self.pending_respawns
                .push(now_ms + self.config.respawn_delay_ms);
            events.emit(SimEvent::CreatureDied { id });
            debug!("creature {:?} defeated, respawn queued", id);
            Some(CreatureHit {
                id,
                remaining_hp: 0,
                died: true,
            })
        } else {
            events.emit(SimEvent::CreatureDamaged { id, hp: remaining });
            Some(CreatureHit {
                id,
                remaining_hp: remaining,
                died: false,
            })
        }
    }

    /// Nearest live creature struck by the ray within `max_dist`, if any.
    pub fn ray_target(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_dist: f32,
    ) -> Option<(CreatureId, f32)> {
        let ray = Ray::new(origin, direction);
        let mut best: Option<(CreatureId, f32)> = None;

        for creature in &self.creatures {
            if let Some(t) = ray.intersects_aabb(&creature.aabb(self.config.body_size)) {
                if t <= max_dist && best.map_or(true, |(_, bt)| t < bt) {
                    best = Some((creature.id, t));
                }
            }
        }
        best
    }

    fn process_respawns(&mut self, now_ms: f64, store: &BlockStore, events: &EventBus) {
        let mut i = 0;
        while i < self.pending_respawns.len() {
            if self.pending_respawns[i] <= now_ms {
                self.pending_respawns.swap_remove(i);
                self.spawn(store, events);
            } else {
                i += 1;
            }
        }
    }

    /// Places a fresh creature on a random ring position, snapped to the
    /// terrain surface.
    fn spawn(&mut self, store: &BlockStore, events: &EventBus) {
        let angle = self.rng.gen::<f32>() * std::f32::consts::TAU;
        let radius =
            self.config.spawn_ring_inner + self.rng.gen::<f32>() * self.config.spawn_ring_spread;
        let x = angle.cos() * radius;
        let z = angle.sin() * radius;
        let y = ground_height(store, x, z) + self.config.ground_offset;

        let wander_dir = Vec3::new(
            self.rng.gen::<f32>() - 0.5,
            0.0,
            self.rng.gen::<f32>() - 0.5,
        )
        .normalize_or_zero();

        let id = CreatureId(self.next_id);
        self.next_id += 1;

        let creature = Creature {
            id,
            position: Vec3::new(x.round(), y, z.round()),
            hp: self.config.hit_points,
            speed: self.config.base_speed + self.rng.gen::<f32>() * self.config.speed_spread,
            wander_dir,
            next_turn_ms: 0.0,
        };
        events.emit(SimEvent::CreatureSpawned {
            id,
            position: creature.position,
        });
        self.creatures.push(creature);
    }
}
