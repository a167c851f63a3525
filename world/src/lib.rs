#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative battle state management for Blaze Defence.
//!
//! The [`World`] owns the tower map, the enemy collection, and the match
//! counters. Adapters mutate it exclusively through [`apply`], which executes
//! one [`Command`] and broadcasts [`Event`] values describing what happened.
//! One `Command::Tick` advances the simulation exactly one frame: economy and
//! recovery first, then enemy stepping, then tower resolution, then the
//! one-shot terminal transition check. Enemies move before towers fire, so an
//! attack resolved this tick sees each enemy at its post-movement position.

mod combat;
mod enemies;
mod scoring;
mod towers;

use std::collections::BTreeMap;

use blaze_defence_catalog::{definition, CardRole, SupportEffect};
use blaze_defence_core::{
    BattleOutcome, BattleStats, CardId, CategoryBuffs, Command, Deck, Event, FireType, GridCell,
    MatchPhase, MissionParams, ModifierSet, PlacementError, RemovalError, BASE_COST_REGEN,
    GRID_ROWS, INITIAL_HP, MAX_COST, REGEN_INTERVAL,
};

use crate::enemies::EnemyState;
use crate::towers::TowerState;

/// Represents the authoritative Blaze Defence battle state.
#[derive(Debug)]
pub struct World {
    mission: MissionParams,
    deck: Deck,
    category_buffs: CategoryBuffs,
    phase: MatchPhase,
    frame: u64,
    hp: f32,
    cost: f32,
    evacuated: f32,
    damage_taken: f32,
    kill_count: u32,
    rescue_points: u32,
    towers: BTreeMap<GridCell, TowerState>,
    enemies: Vec<EnemyState>,
    next_enemy_id: u32,
    modifiers: ModifierSet,
    outcome: Option<BattleOutcome>,
}

impl World {
    /// Creates a new world awaiting battle configuration.
    #[must_use]
    pub fn new() -> Self {
        let mission = MissionParams::easy();
        Self {
            mission,
            deck: Deck::default(),
            category_buffs: CategoryBuffs::none(),
            phase: MatchPhase::Setup,
            frame: 0,
            hp: INITIAL_HP,
            cost: mission.starting_cost(),
            evacuated: 0.0,
            damage_taken: 0.0,
            kill_count: 0,
            rescue_points: 0,
            towers: BTreeMap::new(),
            enemies: Vec::new(),
            next_enemy_id: 0,
            modifiers: ModifierSet::default(),
            outcome: None,
        }
    }

    fn reset(&mut self, mission: MissionParams, deck: Deck, category_buffs: CategoryBuffs) {
        self.mission = mission;
        self.deck = deck;
        self.category_buffs = category_buffs;
        self.phase = MatchPhase::Running;
        self.frame = 0;
        self.hp = INITIAL_HP;
        self.cost = mission.starting_cost().clamp(0.0, MAX_COST);
        self.evacuated = 0.0;
        self.damage_taken = 0.0;
        self.kill_count = 0;
        self.rescue_points = 0;
        self.towers.clear();
        self.enemies.clear();
        self.next_enemy_id = 0;
        self.modifiers = ModifierSet::default();
        self.outcome = None;
    }

    fn refresh_modifiers(&mut self) {
        let view = tower_view_of(&self.towers);
        self.modifiers = blaze_defence_system_modifiers::recompute(&view);
    }

    fn tick(&mut self, out_events: &mut Vec<Event>) {
        if self.phase != MatchPhase::Running {
            return;
        }

        self.frame += 1;
        out_events.push(Event::TimeAdvanced { frame: self.frame });

        self.cost = (self.cost + BASE_COST_REGEN + self.modifiers.cost_regen).min(MAX_COST);
        if self.frame % REGEN_INTERVAL == 0 {
            self.hp = (self.hp + self.modifiers.hp_regen).min(INITIAL_HP);
            let goal = self.mission.evacuation_goal() as f32;
            self.evacuated = (self.evacuated + self.modifiers.evacuation_rate).min(goal);
        }

        let breach_damage = enemies::step_enemies(
            &mut self.enemies,
            &self.modifiers,
            self.mission.columns(),
            out_events,
        );
        if breach_damage > 0.0 {
            self.damage_taken += breach_damage;
            self.hp = (self.hp - breach_damage).max(0.0);
        }

        self.resolve_towers(out_events);

        self.evaluate_transitions(out_events);
    }

    fn resolve_towers(&mut self, out_events: &mut Vec<Event>) {
        let cells: Vec<GridCell> = self.towers.keys().copied().collect();
        let mut structural_change = false;

        for cell in cells {
            let action = {
                let Some(tower) = self.towers.get_mut(&cell) else {
                    continue;
                };
                tower.timer += 1;
                tower.life_time += 1;

                let card = definition(tower.card);
                if let Some(duration) = card.lifetime().frames() {
                    if tower.life_time >= duration {
                        TowerAction::Expire(tower.card)
                    } else {
                        trigger_action(tower, &self.modifiers)
                    }
                } else if let Some((delay, into)) = card.transform_schedule() {
                    if tower.life_time >= delay {
                        let from = tower.card;
                        tower.card = into;
                        tower.timer = 0;
                        tower.life_time = 0;
                        TowerAction::Transform { from, into }
                    } else {
                        trigger_action(tower, &self.modifiers)
                    }
                } else {
                    trigger_action(tower, &self.modifiers)
                }
            };

            match action {
                TowerAction::Idle => {}
                TowerAction::Expire(card) => {
                    let _ = self.towers.remove(&cell);
                    out_events.push(Event::TowerExpired { cell, card });
                    structural_change = true;
                }
                TowerAction::Transform { from, into } => {
                    out_events.push(Event::TowerTransformed { cell, from, into });
                    structural_change = true;
                }
                TowerAction::Fire(card_id) => {
                    let card = definition(card_id);
                    let power_bonus = combat::adjacent_power_bonus(&self.towers, cell)
                        + self.modifiers.global_power
                        + self.category_buffs.power_bonus(card.category());
                    let report = combat::resolve_attack(
                        cell,
                        card,
                        power_bonus,
                        &mut self.enemies,
                        out_events,
                    );
                    if report.kills > 0 {
                        self.kill_count += report.kills;
                        self.cost = (self.cost + report.refund).min(MAX_COST);
                    }
                }
                TowerAction::BankScore { amount } => {
                    self.rescue_points += amount;
                    out_events.push(Event::ScoreAwarded { cell, amount });
                }
            }
        }

        if structural_change {
            self.refresh_modifiers();
        }
    }

    fn evaluate_transitions(&mut self, out_events: &mut Vec<Event>) {
        if self.phase != MatchPhase::Running {
            return;
        }

        if self.hp <= 0.0 {
            self.phase = MatchPhase::Defeat;
            out_events.push(Event::PhaseChanged {
                phase: MatchPhase::Defeat,
            });
            self.finalize(false, out_events);
            return;
        }

        let goal_reached = self.evacuated >= self.mission.evacuation_goal() as f32;
        if self.frame >= self.mission.time_limit() || goal_reached {
            self.phase = MatchPhase::Victory;
            out_events.push(Event::PhaseChanged {
                phase: MatchPhase::Victory,
            });
            self.finalize(true, out_events);
        }
    }

    fn finalize(&mut self, victory: bool, out_events: &mut Vec<Event>) {
        let stats = BattleStats {
            evacuated: self.evacuated as u32,
            hp: self.hp,
            cost: self.cost,
            kills: self.kill_count,
            clear_frame: self.frame,
        };
        let score = scoring::compute(
            victory,
            &stats,
            self.mission.time_limit(),
            self.mission.evacuation_goal(),
            self.damage_taken,
            self.rescue_points,
        );
        let outcome = BattleOutcome {
            victory,
            stats,
            score,
        };
        self.outcome = Some(outcome);
        out_events.push(Event::BattleEnded { outcome });
    }

    fn place_tower(&mut self, cell: GridCell, card: CardId, out_events: &mut Vec<Event>) {
        let price = towers::discounted_cost(definition(card), self.modifiers.cost_discount);

        let reason = if self.phase != MatchPhase::Running {
            Some(PlacementError::BattleNotRunning)
        } else if cell.row() >= GRID_ROWS || cell.column() >= self.mission.columns() {
            Some(PlacementError::OutOfBounds)
        } else if self.towers.contains_key(&cell) {
            Some(PlacementError::Occupied)
        } else if !self.deck.contains(card) {
            Some(PlacementError::NotInDeck)
        } else if self.cost < price {
            Some(PlacementError::InsufficientCost)
        } else {
            None
        };

        if let Some(reason) = reason {
            out_events.push(Event::PlacementRejected { cell, card, reason });
            return;
        }

        self.cost -= price;
        let _ = self.towers.insert(cell, TowerState::new(card));
        out_events.push(Event::TowerPlaced { cell, card });
        self.refresh_modifiers();
    }

    fn remove_tower(&mut self, cell: GridCell, out_events: &mut Vec<Event>) {
        let reason = if self.phase != MatchPhase::Running {
            Some(RemovalError::BattleNotRunning)
        } else {
            match self.towers.get(&cell) {
                None => Some(RemovalError::MissingTower),
                Some(tower) if definition(tower.card).is_permanent_fixture() => {
                    Some(RemovalError::PermanentFixture)
                }
                Some(_) => None,
            }
        };

        if let Some(reason) = reason {
            out_events.push(Event::RemovalRejected { cell, reason });
            return;
        }

        let removed = self.towers.remove(&cell).map(|tower| tower.card);
        if let Some(card) = removed {
            out_events.push(Event::TowerRemoved { cell, card });
            self.refresh_modifiers();
        }
    }

    fn spawn_enemy(&mut self, column: u32, fire_type: FireType, out_events: &mut Vec<Event>) {
        if self.phase != MatchPhase::Running || column >= self.mission.columns() {
            return;
        }

        let enemy = blaze_defence_core::EnemyId::new(self.next_enemy_id);
        self.next_enemy_id += 1;
        self.enemies.push(EnemyState::spawn(enemy, fire_type, column));
        out_events.push(Event::EnemySpawned {
            enemy,
            fire_type,
            column,
        });
    }

    fn surrender(&mut self, out_events: &mut Vec<Event>) {
        if self.phase != MatchPhase::Running {
            return;
        }
        self.phase = MatchPhase::Defeat;
        out_events.push(Event::PhaseChanged {
            phase: MatchPhase::Defeat,
        });
        self.finalize(false, out_events);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one tower's timer advance within a tick.
enum TowerAction {
    Idle,
    Expire(CardId),
    Transform { from: CardId, into: CardId },
    Fire(CardId),
    BankScore { amount: u32 },
}

fn trigger_action(tower: &mut TowerState, modifiers: &ModifierSet) -> TowerAction {
    match definition(tower.card).role() {
        CardRole::Combat(stats) => {
            let interval = towers::effective_interval(stats.speed(), modifiers.attack_speed);
            if tower.timer as f32 >= interval {
                tower.timer = 0;
                TowerAction::Fire(tower.card)
            } else {
                TowerAction::Idle
            }
        }
        CardRole::Support(SupportEffect::PeriodicScore { amount, interval }) => {
            if tower.timer >= interval {
                tower.timer = 0;
                TowerAction::BankScore { amount }
            } else {
                TowerAction::Idle
            }
        }
        CardRole::Support(_) => TowerAction::Idle,
    }
}

fn tower_view_of(towers: &BTreeMap<GridCell, TowerState>) -> blaze_defence_core::TowerView {
    let snapshots = towers
        .iter()
        .map(|(cell, tower)| tower.snapshot(*cell))
        .collect();
    blaze_defence_core::TowerView::from_snapshots(snapshots)
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureBattle {
            mission,
            deck,
            category_buffs,
        } => {
            world.reset(mission, deck, category_buffs);
            out_events.push(Event::BattleStarted { mission });
            out_events.push(Event::PhaseChanged {
                phase: MatchPhase::Running,
            });
        }
        Command::Tick => world.tick(out_events),
        Command::PlaceTower { cell, card } => world.place_tower(cell, card, out_events),
        Command::RemoveTower { cell } => world.remove_tower(cell, out_events),
        Command::SpawnEnemy { column, fire_type } => {
            world.spawn_enemy(column, fire_type, out_events);
        }
        Command::Surrender => world.surrender(out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use blaze_defence_core::{
        BattleOutcome, EnemyView, MatchPhase, MatchSnapshot, MissionParams, ModifierSet, TowerView,
    };

    use super::{tower_view_of, World};

    /// Phase the match lifecycle currently occupies.
    #[must_use]
    pub fn phase(world: &World) -> MatchPhase {
        world.phase
    }

    /// Parameters of the configured mission.
    #[must_use]
    pub fn mission(world: &World) -> MissionParams {
        world.mission
    }

    /// Captures the per-tick digest of the match counters.
    #[must_use]
    pub fn match_snapshot(world: &World) -> MatchSnapshot {
        MatchSnapshot {
            phase: world.phase,
            frame: world.frame,
            hp: world.hp,
            cost: world.cost,
            evacuated: world.evacuated,
            kills: world.kill_count,
        }
    }

    /// Captures a read-only view of the placed towers.
    #[must_use]
    pub fn tower_view(world: &World) -> TowerView {
        tower_view_of(&world.towers)
    }

    /// Captures a read-only view of the enemies on the grid.
    #[must_use]
    pub fn enemy_view(world: &World) -> EnemyView {
        let snapshots = world.enemies.iter().map(|enemy| enemy.snapshot()).collect();
        EnemyView::from_snapshots(snapshots)
    }

    /// Provides read-only access to the cached modifier aggregate.
    #[must_use]
    pub fn modifier_set(world: &World) -> &ModifierSet {
        &world.modifiers
    }

    /// Terminal payload, present once the battle has ended.
    #[must_use]
    pub fn outcome(world: &World) -> Option<BattleOutcome> {
        world.outcome
    }
}
