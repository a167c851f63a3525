#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a headless Blaze Defence battle.
//!
//! The adapter wires the deterministic spawning system to the authoritative
//! world, deploys a fixed loadout as cost allows, and pumps ticks until the
//! battle terminates, printing the outcome digest.

use anyhow::{Context, Result};
use blaze_defence_catalog::definition;
use blaze_defence_core::{
    CardId, CategoryBuffs, Command, Deck, Event, GridCell, MissionParams, GRID_ROWS,
};
use blaze_defence_system_spawning::{Config, Spawning};
use blaze_defence_world::{query, World};
use clap::{Parser, ValueEnum};

/// Frames between deployment attempts.
const DEPLOY_INTERVAL: u64 = 30;

/// Mission difficulty selectable from the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Difficulty {
    /// Three columns, relaxed spawn cadence.
    Easy,
    /// Five columns.
    Normal,
    /// Seven columns, heavy pressure.
    Hard,
}

impl Difficulty {
    fn mission(self) -> MissionParams {
        match self {
            Self::Easy => MissionParams::easy(),
            Self::Normal => MissionParams::normal(),
            Self::Hard => MissionParams::hard(),
        }
    }
}

/// Runs one unattended battle and prints the outcome digest.
#[derive(Debug, Parser)]
#[command(name = "blaze-defence")]
struct Args {
    /// Mission difficulty to simulate.
    #[arg(long, value_enum, default_value = "easy")]
    difficulty: Difficulty,

    /// Seed for the deterministic spawn stream.
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mission = args.difficulty.mission();
    let deck = Deck::from_cards(vec![
        CardId::Extinguisher,
        CardId::Sprinkler,
        CardId::EmergencyBell,
        CardId::EscapeLadder,
        CardId::Standpipe,
        CardId::IndoorHydrant,
    ]);

    let mut world = World::new();
    let mut events = Vec::new();
    blaze_defence_world::apply(
        &mut world,
        Command::ConfigureBattle {
            mission,
            deck: deck.clone(),
            category_buffs: CategoryBuffs::none(),
        },
        &mut events,
    );

    let mut spawning = Spawning::new(Config::new(
        mission.columns(),
        mission.spawn_interval(),
        args.seed,
    ));
    let mut commands = Vec::new();
    let mut next_card = 0;
    let mut spawned = 0u32;
    let mut breached = 0u32;

    loop {
        events.clear();
        blaze_defence_world::apply(&mut world, Command::Tick, &mut events);

        spawning.handle(&events, &mut commands);
        for command in commands.drain(..) {
            blaze_defence_world::apply(&mut world, command, &mut events);
        }

        for event in &events {
            match event {
                Event::EnemySpawned { .. } => spawned += 1,
                Event::EnemyBreached { .. } => breached += 1,
                _ => {}
            }
        }

        let snapshot = query::match_snapshot(&world);
        if snapshot.phase.is_terminal() {
            break;
        }

        if snapshot.frame % DEPLOY_INTERVAL == 0 {
            if let Some(command) = next_deployment(&world, &deck, &mut next_card) {
                blaze_defence_world::apply(&mut world, command, &mut events);
            }
        }
    }

    let outcome = query::outcome(&world).context("battle ended without an outcome")?;
    let snapshot = query::match_snapshot(&world);

    println!(
        "{} after {} frames",
        if outcome.victory { "VICTORY" } else { "DEFEAT" },
        snapshot.frame,
    );
    println!(
        "spawned {spawned}, breached {breached}, extinguished {}",
        outcome.stats.kills,
    );
    println!(
        "evacuated {} | hp {:.0} | cost {:.0}",
        outcome.stats.evacuated, outcome.stats.hp, outcome.stats.cost,
    );
    println!(
        "score {} (evac {} + time {} + hp {} + cost {} + kills {} + rescue {}) x{:.2}",
        outcome.score.total,
        outcome.score.evacuation_points,
        outcome.score.time_bonus,
        outcome.score.hp_bonus,
        outcome.score.cost_bonus,
        outcome.score.kill_bonus,
        outcome.score.rescue_points,
        outcome.score.multiplier,
    );

    Ok(())
}

/// Picks the next affordable deck card and the first free cell for it.
///
/// Cells are scanned from the defense line upward so extinguishing equipment
/// concentrates where breaches happen.
fn next_deployment(world: &World, deck: &Deck, next_card: &mut usize) -> Option<Command> {
    let cards = deck.cards();
    if cards.is_empty() {
        return None;
    }

    let card = cards[*next_card % cards.len()];
    let snapshot = query::match_snapshot(world);
    if snapshot.cost < definition(card).cost() {
        return None;
    }

    let occupied: Vec<GridCell> = query::tower_view(world)
        .into_vec()
        .into_iter()
        .map(|tower| tower.cell)
        .collect();
    let columns = query::mission(world).columns();

    for row in (0..GRID_ROWS).rev() {
        for column in 0..columns {
            let cell = GridCell::new(row, column);
            if !occupied.contains(&cell) {
                *next_card += 1;
                return Some(Command::PlaceTower { cell, card });
            }
        }
    }

    None
}
