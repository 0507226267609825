use anyhow::Result;
use glam::Vec3;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::path::Path;

use voxwild::{PrimaryOutcome, SimConfig, SimEvent, Simulation};

/// Headless demo session: builds a world, walks the player around, mines a
/// few blocks and picks a fight with whatever wanders into reach. The real
/// host (renderer + input capture) drives the same API per frame.
fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let config_path = Path::new("voxwild.toml");
    let config = if config_path.exists() {
        SimConfig::load(config_path)?
    } else {
        SimConfig::default()
    };

    let mut sim = Simulation::new(config);

    // Let the player fall onto the terrain.
    while !sim.player().grounded {
        sim.tick(1.0 / 60.0, true);
    }
    info!("Player settled at {}", sim.player().position);

    // Walk forward for two seconds, hopping once.
    sim.input_mut().forward = true;
    sim.jump();
    for _ in 0..120 {
        sim.tick(1.0 / 60.0, true);
    }
    sim.input_mut().clear();
    info!("Player wandered to {}", sim.player().position);

    // Mine straight down, then put one block back next to us.
    let eye = sim.player().position;
    let outcome = sim.handle_primary_action(eye, Vec3::NEG_Y);
    info!("Primary action: {:?}", outcome);

    sim.set_selected_slot(2);
    let placed = sim.handle_secondary_action(eye, Vec3::new(4.0, -1.0, 0.0), sim.selected_block());
    info!("Secondary action: {:?}", placed);

    // Swing toward the first creature on the roster; it usually wanders
    // out of reach, in which case the swing just mines whatever it crosses.
    let target = sim.creatures().iter().next().map(|c| c.position);
    if let Some(target) = target {
        let eye = sim.player().position;
        let outcome = sim.handle_primary_action(eye, target - eye);
        match outcome {
            PrimaryOutcome::NoTarget => info!("Creature swing: missed"),
            hit => info!("Creature swing: {:?}", hit),
        }
    }

    // Run the world for ten simulated seconds and summarize.
    for _ in 0..600 {
        sim.tick(1.0 / 60.0, true);
    }

    let mut spawned = 0;
    let mut block_changes = 0;
    for event in sim.events().try_iter() {
        match event {
            SimEvent::CreatureSpawned { .. } => spawned += 1,
            SimEvent::BlockPlaced { .. } | SimEvent::BlockRemoved { .. } => block_changes += 1,
            _ => {}
        }
    }
    info!(
        "Session summary: {} creatures live, {} spawn events, {} block changes",
        sim.creatures().len(),
        spawned,
        block_changes
    );
    for (block, count) in sim.inventory_snapshot() {
        info!("  {:<6} x{}", block.label(), count);
    }

    Ok(())
}
