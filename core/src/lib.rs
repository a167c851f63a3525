#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Blaze Defence battle engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use serde::{Deserialize, Serialize};

/// Number of rows in every battle grid; the last row is the defense line.
pub const GRID_ROWS: u32 = 6;

/// Hit points the defense line starts with; also the regeneration ceiling.
pub const INITIAL_HP: f32 = 100.0;

/// Upper bound on banked deployment cost.
pub const MAX_COST: f32 = 9999.0;

/// Cost regenerated every tick before equipment bonuses are added.
pub const BASE_COST_REGEN: f32 = 0.05;

/// Ticks between applications of hit-point regeneration and evacuation.
pub const REGEN_INTERVAL: u64 = 60;

/// Cost refunded for every extinguished enemy.
pub const KILL_COST_REFUND: f32 = 15.0;

/// Default battle length in ticks (90 seconds at 60 ticks per second).
pub const DEFAULT_TIME_LIMIT: u64 = 5400;

/// Maximum number of cards a battle deck may carry.
pub const MAX_DECK_CARDS: usize = 6;

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Resets the world for a new battle and starts the simulation.
    ConfigureBattle {
        /// Parameters describing the mission about to start.
        mission: MissionParams,
        /// Cards available for placement during the battle.
        deck: Deck,
        /// Per-category power bonuses earned before the battle.
        category_buffs: CategoryBuffs,
    },
    /// Advances the simulation by exactly one frame.
    Tick,
    /// Requests placement of an equipment tower on the provided cell.
    PlaceTower {
        /// Cell the tower should occupy.
        cell: GridCell,
        /// Card describing the tower to construct.
        card: CardId,
    },
    /// Requests removal of the tower occupying the provided cell.
    RemoveTower {
        /// Cell whose tower should be removed.
        cell: GridCell,
    },
    /// Requests that a new enemy enter the grid above the first row.
    SpawnEnemy {
        /// Column the enemy descends along.
        column: u32,
        /// Fire classification assigned to the enemy.
        fire_type: FireType,
    },
    /// Abandons the battle, ending it in defeat.
    Surrender,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Announces that a configured battle began simulating.
    BattleStarted {
        /// Parameters of the mission that started.
        mission: MissionParams,
    },
    /// Indicates that the simulation clock advanced one frame.
    TimeAdvanced {
        /// Frame counter value after the advance.
        frame: u64,
    },
    /// Confirms that an enemy entered the grid.
    EnemySpawned {
        /// Identifier assigned to the new enemy.
        enemy: EnemyId,
        /// Fire classification of the enemy.
        fire_type: FireType,
        /// Column the enemy descends along.
        column: u32,
    },
    /// Reports a hit resolved against an enemy, with the applied damage.
    AttackLanded {
        /// Enemy that absorbed the hit.
        enemy: EnemyId,
        /// Cell of the attacking tower.
        origin: GridCell,
        /// Damage applied after matchup and buff multipliers.
        damage: f32,
    },
    /// Confirms that an enemy was extinguished by an attack.
    EnemyKilled {
        /// Enemy removed from the battle.
        enemy: EnemyId,
        /// Cost refunded for the kill.
        reward: f32,
    },
    /// Reports that an enemy crossed the defense line.
    EnemyBreached {
        /// Enemy that reached the line.
        enemy: EnemyId,
        /// Hit-point damage dealt to the defense line.
        damage: f32,
    },
    /// Confirms that a tower was placed into the world.
    TowerPlaced {
        /// Cell the tower occupies.
        cell: GridCell,
        /// Card the tower was built from.
        card: CardId,
    },
    /// Confirms that a tower was removed on player request.
    TowerRemoved {
        /// Cell the tower occupied.
        cell: GridCell,
        /// Card the tower was built from.
        card: CardId,
    },
    /// Reports that a tower reached the end of its finite duration.
    TowerExpired {
        /// Cell the tower occupied.
        cell: GridCell,
        /// Card the tower was built from.
        card: CardId,
    },
    /// Reports that a tower transformed into a different card in place.
    TowerTransformed {
        /// Cell the tower occupies.
        cell: GridCell,
        /// Card the tower was built from before transforming.
        from: CardId,
        /// Card the tower now embodies.
        into: CardId,
    },
    /// Reports that a tower placement request was rejected.
    PlacementRejected {
        /// Cell provided in the placement request.
        cell: GridCell,
        /// Card requested for placement.
        card: CardId,
        /// Specific reason the placement failed.
        reason: PlacementError,
    },
    /// Reports that a tower removal request was rejected.
    RemovalRejected {
        /// Cell provided in the removal request.
        cell: GridCell,
        /// Specific reason the removal failed.
        reason: RemovalError,
    },
    /// Reports rescue points banked by periodic-score equipment.
    ScoreAwarded {
        /// Cell of the awarding tower.
        cell: GridCell,
        /// Points banked toward the final score.
        amount: u32,
    },
    /// Announces that the match lifecycle entered a new phase.
    PhaseChanged {
        /// Phase that became active.
        phase: MatchPhase,
    },
    /// Reports the terminal outcome of the battle, emitted exactly once.
    BattleEnded {
        /// Victory flag, raw stats, and the computed score breakdown.
        outcome: BattleOutcome,
    },
}

/// Unique identifier assigned to an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates a new enemy identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Location of a single grid cell expressed as row and column coordinates.
///
/// Row zero is the spawn edge; row `GRID_ROWS - 1` is the defense line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    row: u32,
    column: u32,
}

impl GridCell {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Reports whether `other` lies within the 3x3 neighborhood of this cell.
    #[must_use]
    pub fn is_adjacent(&self, other: GridCell) -> bool {
        self.row.abs_diff(other.row) <= 1 && self.column.abs_diff(other.column) <= 1
    }
}

/// Fire classification carried by every enemy.
///
/// The classification determines intrinsic durability and pace as well as
/// damage-type matchups and the hit-point damage dealt on a breach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FireType {
    /// Ordinary combustible fire.
    ClassA,
    /// Oil fire: durable, slow, weak to foam and resistant to water.
    ClassB,
    /// Electrical fire: fragile, fast, weak to inert gas.
    ClassC,
}

impl FireType {
    /// Hit points an enemy of this classification spawns with.
    #[must_use]
    pub const fn base_hp(self) -> f32 {
        match self {
            Self::ClassA => 20.0,
            Self::ClassB => 40.0,
            Self::ClassC => 15.0,
        }
    }

    /// Rows advanced per tick before slow and drag modifiers.
    #[must_use]
    pub const fn base_speed(self) -> f32 {
        match self {
            Self::ClassA => 0.02,
            Self::ClassB => 0.015,
            Self::ClassC => 0.04,
        }
    }

    /// Hit-point damage dealt to the defense line on a breach.
    #[must_use]
    pub const fn breach_damage(self) -> f32 {
        match self {
            Self::ClassA => 10.0,
            Self::ClassB => 20.0,
            Self::ClassC => 15.0,
        }
    }
}

/// Attacking modality used to look up fire-type matchup multipliers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    /// Plain water discharge.
    Water,
    /// Smothering foam.
    Foam,
    /// Inert gas flooding.
    Gas,
}

impl DamageType {
    /// Damage multiplier applied when this modality strikes `fire_type`.
    ///
    /// Water is half effective against oil fires, foam twice as effective,
    /// and inert gas carries a bonus against electrical fires. Every other
    /// pairing is neutral.
    #[must_use]
    pub const fn multiplier_against(self, fire_type: FireType) -> f32 {
        match (self, fire_type) {
            (Self::Water, FireType::ClassB) => 0.5,
            (Self::Foam, FireType::ClassB) => 2.0,
            (Self::Gas, FireType::ClassC) => 1.5,
            _ => 1.0,
        }
    }
}

/// Equipment family a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Extinguishing equipment.
    Fire,
    /// Alarm equipment.
    Alarm,
    /// Evacuation equipment.
    Evacuation,
    /// Facilities supporting firefighting operations.
    Facility,
    /// Special-purpose equipment.
    Other,
}

/// Cards that can be placed as equipment towers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardId {
    /// Portable extinguisher showering the surrounding cells.
    Extinguisher,
    /// Mobile dry-powder unit scattering foam nearby.
    PortablePowder,
    /// Indoor hydrant firing a pressurized column with knockback.
    IndoorHydrant,
    /// Sprinkler heads covering a three-row band.
    Sprinkler,
    /// Foam discharge outlets hitting the surround plus its row.
    FoamSystem,
    /// Inert gas flooding the whole grid.
    InertGasSystem,
    /// Emergency bell accelerating cost recovery.
    EmergencyBell,
    /// Automatic fire alarm accelerating cost recovery further.
    AutoFireAlarm,
    /// Broadcast system recovering cost and guiding evacuees.
    BroadcastSystem,
    /// Fire-service notifier that later summons a pump engine.
    FireNotification,
    /// Escape ladder raising the evacuation rate.
    EscapeLadder,
    /// Guidance light raising evacuation and regenerating hit points.
    GuidanceLight,
    /// Descending lifeline with a strong evacuation rate.
    DescentDevice,
    /// Rescue chute boosting evacuation, regen, and attack speed.
    RescueChute,
    /// Standpipe boosting the power of adjacent attackers.
    Standpipe,
    /// Emergency outlet boosting attack speed and regenerating hit points.
    EmergencyOutlet,
    /// Smoke control slowing every enemy and aiding evacuation.
    SmokeControl,
    /// Fire door sealing its row for a short time before burning out.
    FireDoor,
    /// Emergency elevator speeding attacks and discounting placements.
    EmergencyElevator,
    /// Packaged automatic extinguishing unit covering a three-row band.
    PackageFireSystem,
    /// Compact automatic alarm recovering cost.
    CompactFireAlarm,
    /// Disaster control center boosting every aggregate at once.
    DisasterControlCenter,
    /// Illuminated evacuation sign banking rescue points on an interval.
    EvacuationSign,
    /// Pump engine summoned by the fire-service notifier.
    FireEngine,
}

/// Phases of the match lifecycle state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Battle parameters are being assembled; the clock is not running.
    Setup,
    /// The simulation advances on every tick.
    Running,
    /// Terminal phase: the defense held until the time limit or the
    /// evacuation goal.
    Victory,
    /// Terminal phase: the defense line lost all hit points.
    Defeat,
}

impl MatchPhase {
    /// Reports whether the phase is terminal.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

/// Reasons a tower placement request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementError {
    /// The battle is not in the running phase.
    BattleNotRunning,
    /// The requested cell lies outside the configured grid.
    OutOfBounds,
    /// The requested cell already hosts a tower.
    Occupied,
    /// The discounted card cost exceeds the banked cost.
    InsufficientCost,
    /// The requested card is not part of the configured deck.
    NotInDeck,
}

/// Reasons a tower removal request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemovalError {
    /// The battle is not in the running phase.
    BattleNotRunning,
    /// No tower occupies the provided cell.
    MissingTower,
    /// The tower is a permanent fixture and cannot be retired.
    PermanentFixture,
}

/// Cached aggregate of every passive bonus granted by placed support towers.
///
/// The world recomputes this value only when the tower collection changes
/// structurally (placement, removal, expiry, transform). Timer progression
/// during attack resolution must never trigger a recompute; dozens of towers
/// scanned every tick would defeat the cache.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModifierSet {
    /// Cost regenerated per tick on top of [`BASE_COST_REGEN`].
    pub cost_regen: f32,
    /// Evacuees rescued per [`REGEN_INTERVAL`] ticks.
    pub evacuation_rate: f32,
    /// Hit points restored per [`REGEN_INTERVAL`] ticks.
    pub hp_regen: f32,
    /// Fractional attack-speed bonus applied to every combat tower.
    pub attack_speed: f32,
    /// Fractional slow applied to every enemy, capped below immobilization.
    pub global_slow: f32,
    /// Fractional power bonus applied to every attack.
    pub global_power: f32,
    /// Fractional discount applied to placement costs.
    pub cost_discount: f32,
    /// Rows currently sealed by row-blocking equipment.
    pub blocked_rows: Vec<u32>,
}

impl ModifierSet {
    /// Ceiling on the aggregate slow so enemies are never fully stopped.
    pub const MAX_GLOBAL_SLOW: f32 = 0.75;

    /// Ceiling on the aggregate placement discount.
    pub const MAX_COST_DISCOUNT: f32 = 0.9;

    /// Reports whether the provided row is currently sealed.
    #[must_use]
    pub fn is_row_blocked(&self, row: u32) -> bool {
        self.blocked_rows.contains(&row)
    }
}

/// Parameters describing a mission, supplied at battle start.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissionParams {
    columns: u32,
    spawn_interval: u32,
    evacuation_goal: u32,
    time_limit: u64,
    starting_cost: f32,
}

impl MissionParams {
    /// Creates mission parameters from explicit values.
    #[must_use]
    pub const fn new(
        columns: u32,
        spawn_interval: u32,
        evacuation_goal: u32,
        time_limit: u64,
        starting_cost: f32,
    ) -> Self {
        Self {
            columns,
            spawn_interval,
            evacuation_goal,
            time_limit,
            starting_cost,
        }
    }

    /// Beginner mission: a narrow three-column floor.
    #[must_use]
    pub const fn easy() -> Self {
        Self::new(3, 150, 30, DEFAULT_TIME_LIMIT, 100.0)
    }

    /// Intermediate mission: a five-column floor with a faster spawn cadence.
    #[must_use]
    pub const fn normal() -> Self {
        Self::new(5, 120, 50, DEFAULT_TIME_LIMIT, 100.0)
    }

    /// Advanced mission: the full seven-column floor under heavy pressure.
    #[must_use]
    pub const fn hard() -> Self {
        Self::new(7, 90, 80, DEFAULT_TIME_LIMIT, 100.0)
    }

    /// Number of grid columns available for placement and spawning.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Base ticks between enemy spawns before time-based tightening.
    #[must_use]
    pub const fn spawn_interval(&self) -> u32 {
        self.spawn_interval
    }

    /// Evacuee count that ends the battle in victory.
    #[must_use]
    pub const fn evacuation_goal(&self) -> u32 {
        self.evacuation_goal
    }

    /// Battle length in ticks; surviving until this frame is a victory.
    #[must_use]
    pub const fn time_limit(&self) -> u64 {
        self.time_limit
    }

    /// Cost banked when the battle begins.
    #[must_use]
    pub const fn starting_cost(&self) -> f32 {
        self.starting_cost
    }

    /// Returns a copy with the provided starting cost.
    #[must_use]
    pub const fn with_starting_cost(mut self, starting_cost: f32) -> Self {
        self.starting_cost = starting_cost;
        self
    }
}

/// Cards available for placement during one battle.
///
/// A deck holds at most [`MAX_DECK_CARDS`] entries; extras supplied at
/// construction are dropped rather than rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<CardId>,
}

impl Deck {
    /// Builds a deck from the provided cards, clamping to the size limit.
    #[must_use]
    pub fn from_cards(mut cards: Vec<CardId>) -> Self {
        cards.truncate(MAX_DECK_CARDS);
        Self { cards }
    }

    /// Cards carried by the deck in their configured order.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Reports whether the deck carries the provided card.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }
}

/// Per-category attack-power bonuses earned before the battle.
///
/// The pre-battle phases compute these from briefing rewards; the core only
/// reads them back during damage resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CategoryBuffs {
    bonuses: [f32; 5],
}

impl CategoryBuffs {
    /// Creates an empty buff table granting no bonuses.
    #[must_use]
    pub const fn none() -> Self {
        Self { bonuses: [0.0; 5] }
    }

    /// Returns a copy with the provided power bonus for `category`.
    #[must_use]
    pub const fn with_power_bonus(mut self, category: Category, bonus: f32) -> Self {
        self.bonuses[Self::index(category)] = bonus;
        self
    }

    /// Fractional power bonus granted to attacks from `category` equipment.
    #[must_use]
    pub const fn power_bonus(&self, category: Category) -> f32 {
        self.bonuses[Self::index(category)]
    }

    const fn index(category: Category) -> usize {
        match category {
            Category::Fire => 0,
            Category::Alarm => 1,
            Category::Evacuation => 2,
            Category::Facility => 3,
            Category::Other => 4,
        }
    }
}

/// Immutable representation of a single tower's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TowerSnapshot {
    /// Cell the tower occupies.
    pub cell: GridCell,
    /// Card the tower was built from.
    pub card: CardId,
    /// Ticks accumulated since the last trigger.
    pub timer: u32,
    /// Ticks accumulated since placement or the last transform.
    pub life_time: u32,
}

/// Read-only snapshot describing all towers placed on the grid.
#[derive(Clone, Debug, Default)]
pub struct TowerView {
    snapshots: Vec<TowerSnapshot>,
}

impl TowerView {
    /// Creates a new tower view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<TowerSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.cell);
        Self { snapshots }
    }

    /// Iterator over the captured tower snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &TowerSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<TowerSnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a single enemy's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemySnapshot {
    /// Unique identifier assigned to the enemy.
    pub id: EnemyId,
    /// Fire classification of the enemy.
    pub fire_type: FireType,
    /// Left edge of the enemy footprint in fractional columns.
    pub column: f32,
    /// Top edge of the enemy footprint in fractional rows.
    pub progress: f32,
    /// Footprint edge length in whole cells.
    pub size: u32,
    /// Remaining hit points.
    pub hp: f32,
    /// Hit points the enemy spawned with.
    pub max_hp: f32,
    /// Indicates the enemy breached the line and is playing out its
    /// terminal animation.
    pub attacking: bool,
    /// Ticks remaining on the local slow debuff.
    pub slow_frames: u32,
}

/// Read-only snapshot describing all enemies on the grid.
#[derive(Clone, Debug, Default)]
pub struct EnemyView {
    snapshots: Vec<EnemySnapshot>,
}

impl EnemyView {
    /// Creates a new enemy view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<EnemySnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured enemy snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &EnemySnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<EnemySnapshot> {
        self.snapshots
    }
}

/// Per-tick digest of the match counters, captured for rendering and UI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchSnapshot {
    /// Phase the match lifecycle currently occupies.
    pub phase: MatchPhase,
    /// Frames simulated since the battle began.
    pub frame: u64,
    /// Remaining defense-line hit points.
    pub hp: f32,
    /// Banked deployment cost.
    pub cost: f32,
    /// Evacuees rescued so far.
    pub evacuated: f32,
    /// Enemies extinguished so far.
    pub kills: u32,
}

/// Raw counters captured when a battle terminates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleStats {
    /// Whole evacuees rescued.
    pub evacuated: u32,
    /// Remaining defense-line hit points.
    pub hp: f32,
    /// Remaining banked cost.
    pub cost: f32,
    /// Enemies extinguished.
    pub kills: u32,
    /// Frame on which the battle terminated.
    pub clear_frame: u64,
}

/// Commendation badges evaluated when a battle terminates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeSet {
    /// The defense line absorbed no breach damage.
    pub unscathed: bool,
    /// The evacuation goal was reached.
    pub full_evacuation: bool,
    /// The cost reserve finished at or above the commendation threshold.
    pub reserves: bool,
}

impl BadgeSet {
    /// Number of badges earned.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.unscathed as u32 + self.full_evacuation as u32 + self.reserves as u32
    }

    /// Reports whether every badge was earned.
    #[must_use]
    pub const fn all(&self) -> bool {
        self.unscathed && self.full_evacuation && self.reserves
    }
}

/// Weighted score components and the applied badge multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Points granted for rescued evacuees.
    pub evacuation_points: u32,
    /// Points granted for remaining time; zero unless victorious.
    pub time_bonus: u32,
    /// Points granted for remaining hit points.
    pub hp_bonus: u32,
    /// Points granted for remaining cost.
    pub cost_bonus: u32,
    /// Points granted for extinguished enemies.
    pub kill_bonus: u32,
    /// Points banked by periodic-score equipment during the battle.
    pub rescue_points: u32,
    /// Badges earned at termination.
    pub badges: BadgeSet,
    /// Multiplier derived from the earned badges.
    pub multiplier: f32,
    /// Final score after the multiplier.
    pub total: u32,
}

/// Terminal payload describing how a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleOutcome {
    /// True when the defense held; false on a breach defeat or surrender.
    pub victory: bool,
    /// Raw counters captured at termination.
    pub stats: BattleStats,
    /// Weighted score computed once at termination.
    pub score: ScoreBreakdown,
}
