#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Immutable equipment catalog for the Blaze Defence battle engine.
//!
//! Every placeable unit is described by a [`CardDefinition`] looked up through
//! [`definition`]. The catalog is pure reference data: combat cards carry
//! attack parameters, support cards carry a closed [`SupportEffect`] with
//! typed magnitudes, and nothing in this crate mutates state.

use blaze_defence_core::{CardId, Category, DamageType};

/// Range shape a combat card sweeps when its trigger fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeShape {
    /// Padded box around the tower, scaled by the enemy footprint.
    Surround,
    /// Horizontal band around the tower row, unconstrained column.
    Wide,
    /// Three-row band around the tower, unconstrained column.
    TripleRow,
    /// Union of the surround box and the tower's own row band.
    SurroundRow,
    /// The tower's column, strictly above the tower.
    Line,
    /// Exactly the tower's own row.
    Row,
    /// The entire grid.
    Global,
    /// No targeting; the card only ever acts through its support effect.
    SelfOnly,
}

/// Temporary slow debuff applied by a combat card on every hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlowDebuff {
    value: f32,
    frames: u32,
}

impl SlowDebuff {
    /// Creates a new slow debuff description.
    #[must_use]
    pub const fn new(value: f32, frames: u32) -> Self {
        Self { value, frames }
    }

    /// Fractional speed reduction while the debuff is active.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Ticks the debuff lasts after a hit.
    #[must_use]
    pub const fn frames(&self) -> u32 {
        self.frames
    }
}

/// Attack parameters carried by combat cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CombatStats {
    power: f32,
    speed: u32,
    damage_type: DamageType,
    knockback: f32,
    slow: Option<SlowDebuff>,
}

impl CombatStats {
    /// Creates combat stats without knockback or slow.
    #[must_use]
    pub const fn new(power: f32, speed: u32, damage_type: DamageType) -> Self {
        Self {
            power,
            speed,
            damage_type,
            knockback: 0.0,
            slow: None,
        }
    }

    /// Returns a copy with the provided knockback distance in rows.
    #[must_use]
    pub const fn with_knockback(mut self, knockback: f32) -> Self {
        self.knockback = knockback;
        self
    }

    /// Returns a copy applying the provided slow debuff on every hit.
    #[must_use]
    pub const fn with_slow(mut self, slow: SlowDebuff) -> Self {
        self.slow = Some(slow);
        self
    }

    /// Base damage applied per hit before multipliers.
    #[must_use]
    pub const fn power(&self) -> f32 {
        self.power
    }

    /// Base ticks between triggers before attack-speed bonuses.
    #[must_use]
    pub const fn speed(&self) -> u32 {
        self.speed
    }

    /// Modality used to look up fire-type matchups.
    #[must_use]
    pub const fn damage_type(&self) -> DamageType {
        self.damage_type
    }

    /// Rows an enemy is pushed back per hit; zero for most cards.
    #[must_use]
    pub const fn knockback(&self) -> f32 {
        self.knockback
    }

    /// Slow debuff applied on every hit, if the card carries one.
    #[must_use]
    pub const fn slow(&self) -> Option<SlowDebuff> {
        self.slow
    }
}

/// Passive contribution a support card makes while placed.
///
/// Each variant carries its own typed magnitude fields and is aggregated into
/// the cached modifier set by exhaustive pattern matching, so adding a kind is
/// a compile-time-checked exercise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SupportEffect {
    /// Adds to the per-tick cost regeneration.
    Economy {
        /// Cost recovered per tick.
        rate: f32,
    },
    /// Adds to cost regeneration and the evacuation rate at once.
    EconomyAndEvacuation {
        /// Cost recovered per tick.
        rate: f32,
        /// Evacuees rescued per regeneration interval.
        evacuation: f32,
    },
    /// Recovers cost until the tower transforms into a different card.
    EconomyWithTransform {
        /// Cost recovered per tick until the transform.
        rate: f32,
        /// Ticks after placement at which the transform happens.
        delay: u32,
        /// Card the tower becomes, identity and cell preserved.
        into: CardId,
    },
    /// Adds to the evacuation rate.
    Evacuation {
        /// Evacuees rescued per regeneration interval.
        rate: f32,
    },
    /// Adds to the evacuation rate and hit-point regeneration.
    EvacuationWithRegen {
        /// Evacuees rescued per regeneration interval.
        evacuation: f32,
        /// Hit points restored per regeneration interval.
        regen: f32,
    },
    /// Adds evacuation, hit-point regeneration, and attack speed at once.
    EvacuationWithRegenAndSpeed {
        /// Evacuees rescued per regeneration interval.
        evacuation: f32,
        /// Hit points restored per regeneration interval.
        regen: f32,
        /// Fractional attack-speed bonus for every combat tower.
        attack_speed: f32,
    },
    /// Boosts the power of attackers in the surrounding 3x3 neighborhood.
    ///
    /// Not part of the global aggregate; resolved per attack because it
    /// depends on the attacker's position.
    AdjacentPowerBuff {
        /// Fractional power bonus granted to each adjacent attacker.
        bonus: f32,
    },
    /// Adds attack speed and hit-point regeneration.
    AttackSpeedWithRegen {
        /// Fractional attack-speed bonus for every combat tower.
        attack_speed: f32,
        /// Hit points restored per regeneration interval.
        regen: f32,
    },
    /// Slows every enemy and adds to the evacuation rate.
    GlobalSlowWithEvacuation {
        /// Fractional speed reduction applied to every enemy.
        slow: f32,
        /// Evacuees rescued per regeneration interval.
        evacuation: f32,
    },
    /// Seals the tower's row against enemy advancement until it burns out.
    RowBlock {
        /// Ticks the row stays sealed; matches the card duration.
        frames: u32,
    },
    /// Speeds every attack and discounts placement costs.
    SupportCommand {
        /// Fractional attack-speed bonus for every combat tower.
        attack_speed: f32,
        /// Fractional discount on placement costs.
        cost_discount: f32,
    },
    /// Boosts power, attack speed, evacuation, and regeneration at once.
    CommandCenter {
        /// Fractional power bonus for every attack.
        power: f32,
        /// Fractional attack-speed bonus for every combat tower.
        attack_speed: f32,
        /// Evacuees rescued per regeneration interval.
        evacuation: f32,
        /// Hit points restored per regeneration interval.
        regen: f32,
    },
    /// Banks rescue points on its own trigger interval.
    ///
    /// This is the one support kind that fires like a combat tower instead
    /// of contributing to the cached aggregate.
    PeriodicScore {
        /// Points banked per trigger.
        amount: u32,
        /// Ticks between triggers.
        interval: u32,
    },
}

/// Role a card plays once placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardRole {
    /// The tower attacks on its trigger interval.
    Combat(CombatStats),
    /// The tower contributes a passive effect and never attacks.
    Support(SupportEffect),
}

/// How long a tower built from a card stays on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardLifetime {
    /// The tower retires after the given number of ticks.
    Frames(u32),
    /// The tower never expires from elapsed life time.
    Infinite,
}

impl CardLifetime {
    /// Reports whether the lifetime never expires.
    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Finite duration in ticks, if any.
    #[must_use]
    pub const fn frames(&self) -> Option<u32> {
        match self {
            Self::Frames(frames) => Some(*frames),
            Self::Infinite => None,
        }
    }
}

/// Immutable template describing a placeable unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardDefinition {
    id: CardId,
    category: Category,
    tier: u8,
    cost: f32,
    lifetime: CardLifetime,
    range: RangeShape,
    role: CardRole,
    permanent_fixture: bool,
}

impl CardDefinition {
    /// Card this definition describes.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Equipment family the card belongs to.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Unlock tier within the card's equipment family.
    #[must_use]
    pub const fn tier(&self) -> u8 {
        self.tier
    }

    /// Undiscounted placement cost.
    #[must_use]
    pub const fn cost(&self) -> f32 {
        self.cost
    }

    /// How long a tower built from the card stays on the grid.
    #[must_use]
    pub const fn lifetime(&self) -> CardLifetime {
        self.lifetime
    }

    /// Range shape swept on a trigger; `SelfOnly` for most support cards.
    #[must_use]
    pub const fn range(&self) -> RangeShape {
        self.range
    }

    /// Role the card plays once placed.
    #[must_use]
    pub const fn role(&self) -> CardRole {
        self.role
    }

    /// Reports whether the tower resists player removal.
    #[must_use]
    pub const fn is_permanent_fixture(&self) -> bool {
        self.permanent_fixture
    }

    /// Attack parameters, when the card is a combat card.
    #[must_use]
    pub const fn combat_stats(&self) -> Option<CombatStats> {
        match self.role {
            CardRole::Combat(stats) => Some(stats),
            CardRole::Support(_) => None,
        }
    }

    /// Passive effect, when the card is a support card.
    #[must_use]
    pub const fn support_effect(&self) -> Option<SupportEffect> {
        match self.role {
            CardRole::Combat(_) => None,
            CardRole::Support(effect) => Some(effect),
        }
    }

    /// Scheduled in-place transform, when the card defines one.
    #[must_use]
    pub const fn transform_schedule(&self) -> Option<(u32, CardId)> {
        match self.role {
            CardRole::Support(SupportEffect::EconomyWithTransform { delay, into, .. }) => {
                Some((delay, into))
            }
            _ => None,
        }
    }
}

/// Every card the catalog defines, in tier-then-family order.
pub const ALL_CARDS: [CardId; 24] = [
    CardId::Extinguisher,
    CardId::PortablePowder,
    CardId::IndoorHydrant,
    CardId::Sprinkler,
    CardId::FoamSystem,
    CardId::InertGasSystem,
    CardId::EmergencyBell,
    CardId::AutoFireAlarm,
    CardId::BroadcastSystem,
    CardId::FireNotification,
    CardId::EscapeLadder,
    CardId::GuidanceLight,
    CardId::DescentDevice,
    CardId::RescueChute,
    CardId::Standpipe,
    CardId::EmergencyOutlet,
    CardId::SmokeControl,
    CardId::FireDoor,
    CardId::EmergencyElevator,
    CardId::PackageFireSystem,
    CardId::CompactFireAlarm,
    CardId::DisasterControlCenter,
    CardId::EvacuationSign,
    CardId::FireEngine,
];

/// Looks up the immutable definition for the provided card.
#[must_use]
pub const fn definition(card: CardId) -> &'static CardDefinition {
    match card {
        CardId::Extinguisher => &EXTINGUISHER,
        CardId::PortablePowder => &PORTABLE_POWDER,
        CardId::IndoorHydrant => &INDOOR_HYDRANT,
        CardId::Sprinkler => &SPRINKLER,
        CardId::FoamSystem => &FOAM_SYSTEM,
        CardId::InertGasSystem => &INERT_GAS_SYSTEM,
        CardId::EmergencyBell => &EMERGENCY_BELL,
        CardId::AutoFireAlarm => &AUTO_FIRE_ALARM,
        CardId::BroadcastSystem => &BROADCAST_SYSTEM,
        CardId::FireNotification => &FIRE_NOTIFICATION,
        CardId::EscapeLadder => &ESCAPE_LADDER,
        CardId::GuidanceLight => &GUIDANCE_LIGHT,
        CardId::DescentDevice => &DESCENT_DEVICE,
        CardId::RescueChute => &RESCUE_CHUTE,
        CardId::Standpipe => &STANDPIPE,
        CardId::EmergencyOutlet => &EMERGENCY_OUTLET,
        CardId::SmokeControl => &SMOKE_CONTROL,
        CardId::FireDoor => &FIRE_DOOR,
        CardId::EmergencyElevator => &EMERGENCY_ELEVATOR,
        CardId::PackageFireSystem => &PACKAGE_FIRE_SYSTEM,
        CardId::CompactFireAlarm => &COMPACT_FIRE_ALARM,
        CardId::DisasterControlCenter => &DISASTER_CONTROL_CENTER,
        CardId::EvacuationSign => &EVACUATION_SIGN,
        CardId::FireEngine => &FIRE_ENGINE,
    }
}

const EXTINGUISHER: CardDefinition = CardDefinition {
    id: CardId::Extinguisher,
    category: Category::Fire,
    tier: 1,
    cost: 40.0,
    lifetime: CardLifetime::Frames(1500),
    range: RangeShape::Surround,
    role: CardRole::Combat(CombatStats::new(20.0, 40, DamageType::Water)),
    permanent_fixture: false,
};

const PORTABLE_POWDER: CardDefinition = CardDefinition {
    id: CardId::PortablePowder,
    category: Category::Fire,
    tier: 1,
    cost: 60.0,
    lifetime: CardLifetime::Frames(1500),
    range: RangeShape::Surround,
    role: CardRole::Combat(CombatStats::new(30.0, 45, DamageType::Foam)),
    permanent_fixture: false,
};

const INDOOR_HYDRANT: CardDefinition = CardDefinition {
    id: CardId::IndoorHydrant,
    category: Category::Fire,
    tier: 2,
    cost: 80.0,
    lifetime: CardLifetime::Frames(2100),
    range: RangeShape::Line,
    role: CardRole::Combat(CombatStats::new(40.0, 50, DamageType::Water).with_knockback(0.1)),
    permanent_fixture: false,
};

const SPRINKLER: CardDefinition = CardDefinition {
    id: CardId::Sprinkler,
    category: Category::Fire,
    tier: 2,
    cost: 90.0,
    lifetime: CardLifetime::Frames(3600),
    range: RangeShape::TripleRow,
    role: CardRole::Combat(CombatStats::new(30.0, 60, DamageType::Water)),
    permanent_fixture: false,
};

const FOAM_SYSTEM: CardDefinition = CardDefinition {
    id: CardId::FoamSystem,
    category: Category::Fire,
    tier: 3,
    cost: 120.0,
    lifetime: CardLifetime::Frames(1500),
    range: RangeShape::SurroundRow,
    role: CardRole::Combat(CombatStats::new(80.0, 60, DamageType::Foam)),
    permanent_fixture: false,
};

const INERT_GAS_SYSTEM: CardDefinition = CardDefinition {
    id: CardId::InertGasSystem,
    category: Category::Fire,
    tier: 3,
    cost: 120.0,
    lifetime: CardLifetime::Frames(1500),
    range: RangeShape::Global,
    role: CardRole::Combat(CombatStats::new(15.0, 20, DamageType::Gas)),
    permanent_fixture: false,
};

const EMERGENCY_BELL: CardDefinition = CardDefinition {
    id: CardId::EmergencyBell,
    category: Category::Alarm,
    tier: 1,
    cost: 30.0,
    lifetime: CardLifetime::Frames(1800),
    range: RangeShape::SelfOnly,
    role: CardRole::Support(SupportEffect::Economy { rate: 0.05 }),
    permanent_fixture: false,
};

const AUTO_FIRE_ALARM: CardDefinition = CardDefinition {
    id: CardId::AutoFireAlarm,
    category: Category::Alarm,
    tier: 2,
    cost: 60.0,
    lifetime: CardLifetime::Frames(2700),
    range: RangeShape::SelfOnly,
    role: CardRole::Support(SupportEffect::Economy { rate: 0.1 }),
    permanent_fixture: false,
};

const BROADCAST_SYSTEM: CardDefinition = CardDefinition {
    id: CardId::BroadcastSystem,
    category: Category::Alarm,
    tier: 3,
    cost: 100.0,
    lifetime: CardLifetime::Frames(3600),
    range: RangeShape::SelfOnly,
    role: CardRole::Support(SupportEffect::EconomyAndEvacuation {
        rate: 0.167,
        evacuation: 0.5,
    }),
    permanent_fixture: false,
};

const FIRE_NOTIFICATION: CardDefinition = CardDefinition {
    id: CardId::FireNotification,
    category: Category::Alarm,
    tier: 3,
    cost: 120.0,
    lifetime: CardLifetime::Infinite,
    range: RangeShape::SelfOnly,
    role: CardRole::Support(SupportEffect::EconomyWithTransform {
        rate: 0.083,
        delay: 600,
        into: CardId::FireEngine,
    }),
    permanent_fixture: false,
};

const ESCAPE_LADDER: CardDefinition = CardDefinition {
    id: CardId::EscapeLadder,
    category: Category::Evacuation,
    tier: 1,
    cost: 40.0,
    lifetime: CardLifetime::Infinite,
    range: RangeShape::SelfOnly,
    role: CardRole::Support(SupportEffect::Evacuation { rate: 0.5 }),
    permanent_fixture: false,
};

const GUIDANCE_LIGHT: CardDefinition = CardDefinition {
    id: CardId::GuidanceLight,
    category: Category::Evacuation,
    tier: 2,
    cost: 60.0,
    lifetime: CardLifetime::Infinite,
    range: RangeShape::SelfOnly,
    role: CardRole::Support(SupportEffect::EvacuationWithRegen {
        evacuation: 0.8,
        regen: 0.3,
    }),
    permanent_fixture: false,
};

const DESCENT_DEVICE: CardDefinition = CardDefinition {
    id: CardId::DescentDevice,
    category: Category::Evacuation,
    tier: 2,
    cost: 80.0,
    lifetime: CardLifetime::Frames(3600),
    range: RangeShape::SelfOnly,
    role: CardRole::Support(SupportEffect::Evacuation { rate: 1.0 }),
    permanent_fixture: false,
};

const RESCUE_CHUTE: CardDefinition = CardDefinition {
    id: CardId::RescueChute,
    category: Category::Evacuation,
    tier: 3,
    cost: 120.0,
    lifetime: CardLifetime::Frames(2700),
    range: RangeShape::Global,
    role: CardRole::Support(SupportEffect::EvacuationWithRegenAndSpeed {
        evacuation: 1.5,
        regen: 0.5,
        attack_speed: 0.1,
    }),
    permanent_fixture: false,
};

const STANDPIPE: CardDefinition = CardDefinition {
    id: CardId::Standpipe,
    category: Category::Facility,
    tier: 1,
    cost: 60.0,
    lifetime: CardLifetime::Infinite,
    range: RangeShape::Surround,
    role: CardRole::Support(SupportEffect::AdjacentPowerBuff { bonus: 0.3 }),
    permanent_fixture: false,
};

const EMERGENCY_OUTLET: CardDefinition = CardDefinition {
    id: CardId::EmergencyOutlet,
    category: Category::Facility,
    tier: 2,
    cost: 100.0,
    lifetime: CardLifetime::Frames(3600),
    range: RangeShape::Global,
    role: CardRole::Support(SupportEffect::AttackSpeedWithRegen {
        attack_speed: 0.2,
        regen: 0.4,
    }),
    permanent_fixture: false,
};

const SMOKE_CONTROL: CardDefinition = CardDefinition {
    id: CardId::SmokeControl,
    category: Category::Facility,
    tier: 3,
    cost: 150.0,
    lifetime: CardLifetime::Frames(2700),
    range: RangeShape::Global,
    role: CardRole::Support(SupportEffect::GlobalSlowWithEvacuation {
        slow: 0.15,
        evacuation: 0.5,
    }),
    permanent_fixture: false,
};

const FIRE_DOOR: CardDefinition = CardDefinition {
    id: CardId::FireDoor,
    category: Category::Other,
    tier: 1,
    cost: 120.0,
    lifetime: CardLifetime::Frames(300),
    range: RangeShape::Row,
    role: CardRole::Support(SupportEffect::RowBlock { frames: 300 }),
    permanent_fixture: true,
};

const EMERGENCY_ELEVATOR: CardDefinition = CardDefinition {
    id: CardId::EmergencyElevator,
    category: Category::Other,
    tier: 1,
    cost: 100.0,
    lifetime: CardLifetime::Infinite,
    range: RangeShape::Global,
    role: CardRole::Support(SupportEffect::SupportCommand {
        attack_speed: 0.15,
        cost_discount: 0.1,
    }),
    permanent_fixture: true,
};

const PACKAGE_FIRE_SYSTEM: CardDefinition = CardDefinition {
    id: CardId::PackageFireSystem,
    category: Category::Other,
    tier: 2,
    cost: 60.0,
    lifetime: CardLifetime::Frames(2400),
    range: RangeShape::TripleRow,
    role: CardRole::Combat(CombatStats::new(15.0, 35, DamageType::Water)),
    permanent_fixture: false,
};

const COMPACT_FIRE_ALARM: CardDefinition = CardDefinition {
    id: CardId::CompactFireAlarm,
    category: Category::Other,
    tier: 2,
    cost: 50.0,
    lifetime: CardLifetime::Frames(2700),
    range: RangeShape::SelfOnly,
    role: CardRole::Support(SupportEffect::Economy { rate: 0.083 }),
    permanent_fixture: true,
};

const DISASTER_CONTROL_CENTER: CardDefinition = CardDefinition {
    id: CardId::DisasterControlCenter,
    category: Category::Other,
    tier: 3,
    cost: 200.0,
    lifetime: CardLifetime::Frames(3600),
    range: RangeShape::Global,
    role: CardRole::Support(SupportEffect::CommandCenter {
        power: 0.2,
        attack_speed: 0.2,
        evacuation: 1.0,
        regen: 0.8,
    }),
    permanent_fixture: true,
};

const EVACUATION_SIGN: CardDefinition = CardDefinition {
    id: CardId::EvacuationSign,
    category: Category::Evacuation,
    tier: 1,
    cost: 50.0,
    lifetime: CardLifetime::Infinite,
    range: RangeShape::SelfOnly,
    role: CardRole::Support(SupportEffect::PeriodicScore {
        amount: 20,
        interval: 60,
    }),
    permanent_fixture: false,
};

const FIRE_ENGINE: CardDefinition = CardDefinition {
    id: CardId::FireEngine,
    category: Category::Alarm,
    tier: 3,
    cost: 0.0,
    lifetime: CardLifetime::Frames(300),
    range: RangeShape::Global,
    role: CardRole::Combat(
        CombatStats::new(100.0, 10, DamageType::Water)
            .with_knockback(1.5)
            .with_slow(SlowDebuff::new(0.5, 300)),
    ),
    permanent_fixture: true,
};

#[cfg(test)]
mod tests {
    use super::{
        definition, CardLifetime, CardRole, RangeShape, SupportEffect, ALL_CARDS,
    };
    use blaze_defence_core::{CardId, DamageType};

    #[test]
    fn every_definition_reports_its_own_id() {
        for card in ALL_CARDS {
            assert_eq!(definition(card).id(), card);
        }
    }

    #[test]
    fn extinguisher_matches_its_combat_profile() {
        let card = definition(CardId::Extinguisher);
        let stats = card.combat_stats().expect("combat card");
        assert_eq!(stats.power(), 20.0);
        assert_eq!(stats.speed(), 40);
        assert_eq!(stats.damage_type(), DamageType::Water);
        assert_eq!(stats.knockback(), 0.0);
        assert_eq!(card.range(), RangeShape::Surround);
        assert_eq!(card.lifetime(), CardLifetime::Frames(1500));
    }

    #[test]
    fn fire_notification_transforms_into_the_pump_engine() {
        let card = definition(CardId::FireNotification);
        assert!(card.lifetime().is_infinite());
        assert_eq!(card.transform_schedule(), Some((600, CardId::FireEngine)));
    }

    #[test]
    fn cards_without_transform_report_none() {
        assert_eq!(definition(CardId::Extinguisher).transform_schedule(), None);
        assert_eq!(definition(CardId::EmergencyBell).transform_schedule(), None);
    }

    #[test]
    fn pump_engine_is_free_and_suppresses() {
        let card = definition(CardId::FireEngine);
        assert_eq!(card.cost(), 0.0);
        let stats = card.combat_stats().expect("combat card");
        assert_eq!(stats.knockback(), 1.5);
        let slow = stats.slow().expect("slow debuff");
        assert_eq!(slow.value(), 0.5);
        assert_eq!(slow.frames(), 300);
    }

    #[test]
    fn permanent_fixtures_cover_the_special_set() {
        let permanent: Vec<CardId> = ALL_CARDS
            .into_iter()
            .filter(|card| definition(*card).is_permanent_fixture())
            .collect();
        assert_eq!(
            permanent,
            vec![
                CardId::FireDoor,
                CardId::EmergencyElevator,
                CardId::CompactFireAlarm,
                CardId::DisasterControlCenter,
                CardId::FireEngine,
            ],
        );
    }

    #[test]
    fn combat_cards_never_use_the_self_range() {
        for card in ALL_CARDS {
            let def = definition(card);
            if matches!(def.role(), CardRole::Combat(_)) {
                assert_ne!(def.range(), RangeShape::SelfOnly, "{card:?}");
            }
        }
    }

    #[test]
    fn only_the_pump_engine_costs_nothing() {
        for card in ALL_CARDS {
            let def = definition(card);
            if card == CardId::FireEngine {
                assert_eq!(def.cost(), 0.0);
            } else {
                assert!(def.cost() > 0.0, "{card:?}");
            }
        }
    }

    #[test]
    fn row_block_duration_matches_the_card_lifetime() {
        let card = definition(CardId::FireDoor);
        let CardRole::Support(SupportEffect::RowBlock { frames }) = card.role() else {
            panic!("fire door must be a row block");
        };
        assert_eq!(card.lifetime(), CardLifetime::Frames(frames));
    }

    #[test]
    fn support_cards_expose_their_effect() {
        let effect = definition(CardId::BroadcastSystem)
            .support_effect()
            .expect("support card");
        assert_eq!(
            effect,
            SupportEffect::EconomyAndEvacuation {
                rate: 0.167,
                evacuation: 0.5,
            },
        );
        assert!(definition(CardId::Sprinkler).support_effect().is_none());
    }
}
