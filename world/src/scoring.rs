//! Final score computation and badge evaluation.

use blaze_defence_core::{BadgeSet, BattleStats, ScoreBreakdown};

/// Points granted per rescued evacuee.
const EVACUEE_POINTS: u32 = 100;

/// Points granted per second left on the clock after a victory.
const TIME_BONUS_PER_SECOND: u32 = 50;

/// Points granted per remaining hit point.
const HP_POINTS: u32 = 20;

/// Points granted per extinguished enemy.
const KILL_POINTS: u32 = 100;

/// Remaining cost that earns the reserves commendation.
const RESERVES_THRESHOLD: f32 = 500.0;

/// Multiplier granted per individual badge.
const BADGE_MULTIPLIER: f32 = 1.2;

/// Flat multiplier replacing the product when every badge is earned.
///
/// Earning all three badges grants 2.0 rather than the ~1.728 that three
/// stacked individual badges would multiply out to.
const ALL_BADGES_MULTIPLIER: f32 = 2.0;

/// Simulation ticks per second of battle time.
const FRAMES_PER_SECOND: u64 = 60;

/// Computes the one-shot score breakdown for a terminated battle.
pub(crate) fn compute(
    victory: bool,
    stats: &BattleStats,
    time_limit: u64,
    evacuation_goal: u32,
    damage_taken: f32,
    rescue_points: u32,
) -> ScoreBreakdown {
    let evacuation_points = stats.evacuated * EVACUEE_POINTS;
    let time_bonus = if victory {
        let remaining_seconds = time_limit.saturating_sub(stats.clear_frame) / FRAMES_PER_SECOND;
        remaining_seconds as u32 * TIME_BONUS_PER_SECOND
    } else {
        0
    };
    let hp_bonus = stats.hp.max(0.0).floor() as u32 * HP_POINTS;
    let cost_bonus = stats.cost.max(0.0).floor() as u32;
    let kill_bonus = stats.kills * KILL_POINTS;

    let badges = BadgeSet {
        unscathed: damage_taken <= 0.0,
        full_evacuation: stats.evacuated >= evacuation_goal,
        reserves: stats.cost >= RESERVES_THRESHOLD,
    };
    let multiplier = if badges.all() {
        ALL_BADGES_MULTIPLIER
    } else {
        BADGE_MULTIPLIER.powi(badges.count() as i32)
    };

    let base =
        evacuation_points + time_bonus + hp_bonus + cost_bonus + kill_bonus + rescue_points;
    let total = (base as f32 * multiplier).round() as u32;

    ScoreBreakdown {
        evacuation_points,
        time_bonus,
        hp_bonus,
        cost_bonus,
        kill_bonus,
        rescue_points,
        badges,
        multiplier,
        total,
    }
}
