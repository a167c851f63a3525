//! Targeting geometry and damage resolution for firing towers.

use std::collections::BTreeMap;

use blaze_defence_catalog::{definition, CardDefinition, RangeShape, SupportEffect};
use blaze_defence_core::{Event, GridCell, KILL_COST_REFUND};

use crate::enemies::EnemyState;
use crate::towers::TowerState;

/// Padding added to the enemy half-extent for box-shaped range tests.
const SURROUND_PADDING: f32 = 1.2;

/// Half-height of the narrow band used by the surround-row union.
const ROW_BAND: f32 = 0.5;

/// Tally of an attack's lethal results.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct AttackReport {
    /// Enemies extinguished by the attack.
    pub(crate) kills: u32,
    /// Cost refunded for those kills.
    pub(crate) refund: f32,
}

/// Sums the power bonuses of buffing towers around the attacker's cell.
///
/// Resolved on every attack rather than cached: the contribution depends on
/// the attacker's own position, unlike the global aggregate.
pub(crate) fn adjacent_power_bonus(
    towers: &BTreeMap<GridCell, TowerState>,
    origin: GridCell,
) -> f32 {
    towers
        .iter()
        .filter(|(cell, _)| **cell != origin && origin.is_adjacent(**cell))
        .filter_map(|(_, tower)| match definition(tower.card).support_effect() {
            Some(SupportEffect::AdjacentPowerBuff { bonus }) => Some(bonus),
            _ => None,
        })
        .sum()
}

/// Reports whether the enemy falls inside the tower's range shape.
///
/// The tower sits at the center of its cell; the enemy is measured from the
/// center of its (possibly grown) footprint with a half-extent of `size / 2`.
pub(crate) fn in_range(shape: RangeShape, origin: GridCell, enemy: &EnemyState) -> bool {
    let half_extent = enemy.size as f32 / 2.0;
    let center_row = enemy.progress + half_extent;
    let center_column = enemy.column + half_extent;
    let tower_row = origin.row() as f32 + 0.5;
    let tower_column = origin.column() as f32 + 0.5;
    let row_delta = (center_row - tower_row).abs();
    let column_delta = (center_column - tower_column).abs();

    match shape {
        RangeShape::Surround => {
            row_delta < half_extent + SURROUND_PADDING
                && column_delta < half_extent + SURROUND_PADDING
        }
        RangeShape::Wide | RangeShape::TripleRow => row_delta < half_extent + SURROUND_PADDING,
        RangeShape::SurroundRow => {
            let surround = row_delta < half_extent + SURROUND_PADDING
                && column_delta < half_extent + SURROUND_PADDING;
            surround || row_delta < half_extent + ROW_BAND
        }
        RangeShape::Line => {
            let tower_column_index = origin.column() as f32;
            enemy.column <= tower_column_index
                && tower_column_index < enemy.column + enemy.size as f32
                && enemy.progress < origin.row() as f32
        }
        RangeShape::Row => {
            let row = origin.row() as f32;
            enemy.progress < row + 1.0 && enemy.progress + enemy.size as f32 > row
        }
        RangeShape::Global => true,
        RangeShape::SelfOnly => false,
    }
}

/// Resolves one trigger of a combat tower against the enemy collection.
///
/// Every in-range, non-breached enemy absorbs one hit: damage after matchup
/// and power multipliers, knockback clamped so the footprint never leaves
/// the grid top, and the card's slow debuff if it carries one. Enemies
/// brought to zero hit points are removed and tallied into the report.
pub(crate) fn resolve_attack(
    origin: GridCell,
    card: &CardDefinition,
    power_bonus: f32,
    enemies: &mut Vec<EnemyState>,
    out_events: &mut Vec<Event>,
) -> AttackReport {
    let Some(stats) = card.combat_stats() else {
        return AttackReport::default();
    };

    let mut report = AttackReport::default();

    enemies.retain_mut(|enemy| {
        if enemy.attacking {
            return true;
        }
        if !in_range(card.range(), origin, enemy) {
            return true;
        }

        let damage = stats.power()
            * (1.0 + power_bonus)
            * stats.damage_type().multiplier_against(enemy.fire_type);
        enemy.hp -= damage;

        if stats.knockback() > 0.0 {
            let floor = -(enemy.size as f32);
            enemy.progress = (enemy.progress - stats.knockback()).max(floor);
        }

        if let Some(slow) = stats.slow() {
            enemy.slow_value = slow.value();
            enemy.slow_timer = slow.frames();
        }

        out_events.push(Event::AttackLanded {
            enemy: enemy.id,
            origin,
            damage,
        });

        if enemy.hp <= 0.0 {
            report.kills += 1;
            report.refund += KILL_COST_REFUND;
            out_events.push(Event::EnemyKilled {
                enemy: enemy.id,
                reward: KILL_COST_REFUND,
            });
            return false;
        }

        true
    });

    report
}
