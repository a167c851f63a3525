#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure aggregation system that folds placed support towers into a cached
//! [`ModifierSet`].
//!
//! The world invokes [`recompute`] after every structural tower change:
//! placement, removal, expiry, and transform. Timer progression during attack
//! resolution must not trigger a recompute; the cached aggregate is what makes
//! per-tick reads of the global bonuses O(1) regardless of tower count.

use blaze_defence_catalog::{definition, SupportEffect};
use blaze_defence_core::{ModifierSet, TowerView};

/// Scans every placed tower once and produces the aggregate modifier set.
///
/// Each support effect adds its contribution to the matching aggregate
/// fields; a single card may feed several fields at once. Positional effects
/// (adjacent power buffs) and self-triggering effects (periodic score) are
/// deliberately absent from the aggregate: the former depend on the
/// attacker's cell and the latter run on their own timers.
#[must_use]
pub fn recompute(towers: &TowerView) -> ModifierSet {
    let mut aggregate = ModifierSet::default();

    for tower in towers.iter() {
        let Some(effect) = definition(tower.card).support_effect() else {
            continue;
        };

        match effect {
            SupportEffect::Economy { rate } => {
                aggregate.cost_regen += rate;
            }
            SupportEffect::EconomyAndEvacuation { rate, evacuation } => {
                aggregate.cost_regen += rate;
                aggregate.evacuation_rate += evacuation;
            }
            SupportEffect::EconomyWithTransform { rate, .. } => {
                aggregate.cost_regen += rate;
            }
            SupportEffect::Evacuation { rate } => {
                aggregate.evacuation_rate += rate;
            }
            SupportEffect::EvacuationWithRegen { evacuation, regen } => {
                aggregate.evacuation_rate += evacuation;
                aggregate.hp_regen += regen;
            }
            SupportEffect::EvacuationWithRegenAndSpeed {
                evacuation,
                regen,
                attack_speed,
            } => {
                aggregate.evacuation_rate += evacuation;
                aggregate.hp_regen += regen;
                aggregate.attack_speed += attack_speed;
            }
            SupportEffect::AdjacentPowerBuff { .. } => {}
            SupportEffect::AttackSpeedWithRegen {
                attack_speed,
                regen,
            } => {
                aggregate.attack_speed += attack_speed;
                aggregate.hp_regen += regen;
            }
            SupportEffect::GlobalSlowWithEvacuation { slow, evacuation } => {
                aggregate.global_slow += slow;
                aggregate.evacuation_rate += evacuation;
            }
            SupportEffect::RowBlock { .. } => {
                aggregate.blocked_rows.push(tower.cell.row());
            }
            SupportEffect::SupportCommand {
                attack_speed,
                cost_discount,
            } => {
                aggregate.attack_speed += attack_speed;
                aggregate.cost_discount += cost_discount;
            }
            SupportEffect::CommandCenter {
                power,
                attack_speed,
                evacuation,
                regen,
            } => {
                aggregate.global_power += power;
                aggregate.attack_speed += attack_speed;
                aggregate.evacuation_rate += evacuation;
                aggregate.hp_regen += regen;
            }
            SupportEffect::PeriodicScore { .. } => {}
        }
    }

    aggregate.global_slow = aggregate.global_slow.min(ModifierSet::MAX_GLOBAL_SLOW);
    aggregate.cost_discount = aggregate.cost_discount.min(ModifierSet::MAX_COST_DISCOUNT);
    aggregate.blocked_rows.sort_unstable();
    aggregate.blocked_rows.dedup();

    aggregate
}

#[cfg(test)]
mod tests {
    use super::recompute;
    use blaze_defence_core::{CardId, GridCell, ModifierSet, TowerSnapshot, TowerView};

    fn tower(row: u32, column: u32, card: CardId) -> TowerSnapshot {
        TowerSnapshot {
            cell: GridCell::new(row, column),
            card,
            timer: 0,
            life_time: 0,
        }
    }

    fn view(snapshots: Vec<TowerSnapshot>) -> TowerView {
        TowerView::from_snapshots(snapshots)
    }

    #[test]
    fn empty_tower_set_produces_the_default_aggregate() {
        assert_eq!(recompute(&view(Vec::new())), ModifierSet::default());
    }

    #[test]
    fn combat_towers_contribute_nothing() {
        let aggregate = recompute(&view(vec![
            tower(0, 0, CardId::Extinguisher),
            tower(1, 1, CardId::Sprinkler),
        ]));
        assert_eq!(aggregate, ModifierSet::default());
    }

    #[test]
    fn evacuation_contribution_is_exactly_additive() {
        let without = recompute(&view(vec![tower(0, 0, CardId::EmergencyBell)]));
        let with = recompute(&view(vec![
            tower(0, 0, CardId::EmergencyBell),
            tower(1, 0, CardId::EscapeLadder),
        ]));

        assert_eq!(with.evacuation_rate, without.evacuation_rate + 0.5);

        let removed = recompute(&view(vec![tower(0, 0, CardId::EmergencyBell)]));
        assert_eq!(removed, without);
    }

    #[test]
    fn one_card_feeds_several_fields_at_once() {
        let aggregate = recompute(&view(vec![tower(2, 1, CardId::RescueChute)]));
        assert_eq!(aggregate.evacuation_rate, 1.5);
        assert_eq!(aggregate.hp_regen, 0.5);
        assert_eq!(aggregate.attack_speed, 0.1);
        assert_eq!(aggregate.cost_regen, 0.0);
    }

    #[test]
    fn economy_rates_accumulate_across_towers() {
        let aggregate = recompute(&view(vec![
            tower(0, 0, CardId::EmergencyBell),
            tower(0, 1, CardId::AutoFireAlarm),
            tower(0, 2, CardId::BroadcastSystem),
        ]));
        let expected = 0.05 + 0.1 + 0.167;
        assert!((aggregate.cost_regen - expected).abs() < f32::EPSILON);
    }

    #[test]
    fn global_slow_is_capped_below_immobilization() {
        let towers: Vec<TowerSnapshot> = (0..7)
            .map(|column| tower(0, column, CardId::SmokeControl))
            .collect();
        let aggregate = recompute(&view(towers));
        assert_eq!(aggregate.global_slow, ModifierSet::MAX_GLOBAL_SLOW);
    }

    #[test]
    fn cost_discount_is_capped() {
        let towers: Vec<TowerSnapshot> = (0..5)
            .flat_map(|row| (0..3).map(move |column| tower(row, column, CardId::EmergencyElevator)))
            .collect();
        let aggregate = recompute(&view(towers));
        assert_eq!(aggregate.cost_discount, ModifierSet::MAX_COST_DISCOUNT);
    }

    #[test]
    fn row_blocks_record_their_rows_once() {
        let aggregate = recompute(&view(vec![
            tower(3, 0, CardId::FireDoor),
            tower(3, 2, CardId::FireDoor),
            tower(1, 1, CardId::FireDoor),
        ]));
        assert_eq!(aggregate.blocked_rows, vec![1, 3]);
        assert!(aggregate.is_row_blocked(3));
        assert!(!aggregate.is_row_blocked(2));
    }

    #[test]
    fn adjacency_and_score_effects_stay_out_of_the_aggregate() {
        let aggregate = recompute(&view(vec![
            tower(0, 0, CardId::Standpipe),
            tower(0, 1, CardId::EvacuationSign),
        ]));
        assert_eq!(aggregate, ModifierSet::default());
    }

    #[test]
    fn command_center_feeds_power_speed_evacuation_and_regen() {
        let aggregate = recompute(&view(vec![tower(5, 0, CardId::DisasterControlCenter)]));
        assert_eq!(aggregate.global_power, 0.2);
        assert_eq!(aggregate.attack_speed, 0.2);
        assert_eq!(aggregate.evacuation_rate, 1.0);
        assert_eq!(aggregate.hp_regen, 0.8);
    }
}
