//! Authoritative tower state management utilities.

use blaze_defence_catalog::CardDefinition;
use blaze_defence_core::{CardId, GridCell, TowerSnapshot};

/// Mutable state of a tower stored inside the world, keyed by its cell.
#[derive(Clone, Debug)]
pub(crate) struct TowerState {
    /// Card the tower currently embodies; replaced on a transform.
    pub(crate) card: CardId,
    /// Ticks accumulated since the last trigger.
    pub(crate) timer: u32,
    /// Ticks accumulated since placement or the last transform.
    pub(crate) life_time: u32,
}

impl TowerState {
    /// Creates a freshly placed tower with zeroed timers.
    pub(crate) fn new(card: CardId) -> Self {
        Self {
            card,
            timer: 0,
            life_time: 0,
        }
    }

    /// Captures an immutable snapshot for queries.
    pub(crate) fn snapshot(&self, cell: GridCell) -> TowerSnapshot {
        TowerSnapshot {
            cell,
            card: self.card,
            timer: self.timer,
            life_time: self.life_time,
        }
    }
}

/// Ticks between triggers after the aggregate attack-speed bonus.
///
/// The base interval shrinks as the bonus grows and is floored at one tick
/// so a degenerate bonus can never divide the interval away entirely. The
/// result stays fractional; the integer timer fires on the first tick at or
/// past it.
pub(crate) fn effective_interval(base_speed: u32, attack_speed_bonus: f32) -> f32 {
    (base_speed as f32 / (1.0 + attack_speed_bonus)).max(1.0)
}

/// Placement cost after the aggregate discount, in whole cost.
///
/// Rounded to the nearest whole number so a ten-percent discount on a
/// 40-cost card prices at 36 rather than riding a representation error
/// one below it.
pub(crate) fn discounted_cost(definition: &CardDefinition, discount: f32) -> f32 {
    (definition.cost() * (1.0 - discount)).round().max(0.0)
}

#[cfg(test)]
mod tests {
    use super::{discounted_cost, effective_interval, TowerState};
    use blaze_defence_catalog::definition;
    use blaze_defence_core::{CardId, GridCell};

    #[test]
    fn interval_shrinks_with_the_attack_speed_bonus() {
        assert_eq!(effective_interval(40, 0.0), 40.0);
        assert_eq!(effective_interval(40, 0.25), 32.0);
        assert!((effective_interval(60, 0.2) - 50.0).abs() < 1e-3);
    }

    #[test]
    fn interval_never_drops_below_one_tick() {
        assert_eq!(effective_interval(1, 10.0), 1.0);
        assert_eq!(effective_interval(0, 0.0), 1.0);
    }

    #[test]
    fn discount_prices_to_whole_cost() {
        let card = definition(CardId::Extinguisher);
        assert_eq!(discounted_cost(card, 0.0), 40.0);
        assert_eq!(discounted_cost(card, 0.1), 36.0);
        assert_eq!(discounted_cost(card, 0.25), 30.0);
    }

    #[test]
    fn discount_never_produces_a_negative_cost() {
        let card = definition(CardId::Extinguisher);
        assert_eq!(discounted_cost(card, 2.0), 0.0);
    }

    #[test]
    fn snapshot_preserves_the_tower_fields() {
        let mut tower = TowerState::new(CardId::Sprinkler);
        tower.timer = 12;
        tower.life_time = 340;
        let snapshot = tower.snapshot(GridCell::new(2, 4));
        assert_eq!(snapshot.cell, GridCell::new(2, 4));
        assert_eq!(snapshot.card, CardId::Sprinkler);
        assert_eq!(snapshot.timer, 12);
        assert_eq!(snapshot.life_time, 340);
    }
}
