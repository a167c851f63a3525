//! Authoritative enemy state and the per-tick stepping rules.

use blaze_defence_core::{EnemyId, EnemySnapshot, Event, FireType, ModifierSet, GRID_ROWS};

/// Progress value enemies spawn at and are reset to on corrupted state.
pub(crate) const MIN_PROGRESS: f32 = -1.0;

/// Advanced progress beyond which a fresh enemy grows to full size.
const GROWTH_THRESHOLD: f32 = 2.0;

/// Footprint edge length after the one-time growth.
const GROWN_SIZE: u32 = 3;

/// Ticks a breached enemy plays its terminal animation before removal.
const ATTACK_ANIM_FRAMES: u32 = 30;

/// Half-cell tolerance so enemies visually settle on the defense line.
const BREACH_TOLERANCE: f32 = 0.5;

/// Lower bound on the size-based drag divisor.
const MIN_DRAG: f32 = 0.1;

/// Mutable state of a single enemy owned by the world.
#[derive(Clone, Debug)]
pub(crate) struct EnemyState {
    pub(crate) id: EnemyId,
    pub(crate) fire_type: FireType,
    pub(crate) column: f32,
    pub(crate) progress: f32,
    pub(crate) size: u32,
    pub(crate) hp: f32,
    pub(crate) max_hp: f32,
    pub(crate) attacking: bool,
    pub(crate) anim_timer: u32,
    pub(crate) slow_timer: u32,
    pub(crate) slow_value: f32,
}

impl EnemyState {
    /// Creates a fresh enemy entering the grid above the first row.
    pub(crate) fn spawn(id: EnemyId, fire_type: FireType, column: u32) -> Self {
        let hp = fire_type.base_hp();
        Self {
            id,
            fire_type,
            column: column as f32,
            progress: MIN_PROGRESS,
            size: 1,
            hp,
            max_hp: hp,
            attacking: false,
            anim_timer: 0,
            slow_timer: 0,
            slow_value: 0.0,
        }
    }

    /// Captures an immutable snapshot for queries.
    pub(crate) fn snapshot(&self) -> EnemySnapshot {
        EnemySnapshot {
            id: self.id,
            fire_type: self.fire_type,
            column: self.column,
            progress: self.progress,
            size: self.size,
            hp: self.hp,
            max_hp: self.max_hp,
            attacking: self.attacking,
            slow_frames: self.slow_timer,
        }
    }

    fn footprint_intersects_row(&self, row: u32) -> bool {
        let top = self.progress;
        let bottom = self.progress + self.size as f32;
        top < (row + 1) as f32 && bottom > row as f32
    }
}

fn drag_divisor(size: u32) -> f32 {
    let divisor = if size >= GROWN_SIZE {
        2.0
    } else {
        1.0 + (size.saturating_sub(1)) as f32 * 0.6
    };
    divisor.max(MIN_DRAG)
}

fn recentered_column(column: f32, columns: u32) -> f32 {
    let max_left = columns.saturating_sub(GROWN_SIZE) as f32;
    (column - 1.0).clamp(0.0, max_left.max(0.0))
}

/// Advances every enemy by one tick and returns the breach damage total.
///
/// Enemies that already breached only decay their terminal animation and are
/// dropped once it finishes; each breach therefore contributes its damage
/// exactly once, on the tick the line is crossed.
pub(crate) fn step_enemies(
    enemies: &mut Vec<EnemyState>,
    modifiers: &ModifierSet,
    columns: u32,
    out_events: &mut Vec<Event>,
) -> f32 {
    let mut breach_total = 0.0;

    enemies.retain_mut(|enemy| {
        if enemy.attacking {
            enemy.anim_timer = enemy.anim_timer.saturating_sub(1);
            return enemy.anim_timer > 0;
        }

        if enemy.slow_timer > 0 {
            enemy.slow_timer -= 1;
            if enemy.slow_timer == 0 {
                enemy.slow_value = 0.0;
            }
        }

        let effective_speed = enemy.fire_type.base_speed()
            * (1.0 - modifiers.global_slow)
            * (1.0 - enemy.slow_value);
        let mut next_progress = enemy.progress + effective_speed / drag_divisor(enemy.size);
        if !next_progress.is_finite() {
            next_progress = MIN_PROGRESS;
        }

        let held = modifiers
            .blocked_rows
            .iter()
            .any(|&row| enemy.footprint_intersects_row(row));
        if held {
            next_progress = enemy.progress;
        }

        if enemy.size == 1 && next_progress > GROWTH_THRESHOLD {
            enemy.size = GROWN_SIZE;
            enemy.hp = enemy.max_hp;
            enemy.column = recentered_column(enemy.column, columns);
            next_progress = enemy.progress;
        }

        enemy.progress = next_progress.max(MIN_PROGRESS);

        let bottom = enemy.progress + enemy.size as f32;
        if bottom - enemy.size as f32 / 2.0 >= GRID_ROWS as f32 - BREACH_TOLERANCE {
            enemy.attacking = true;
            enemy.anim_timer = ATTACK_ANIM_FRAMES;
            let damage = enemy.fire_type.breach_damage();
            breach_total += damage;
            out_events.push(Event::EnemyBreached {
                enemy: enemy.id,
                damage,
            });
        }

        true
    });

    breach_total
}

#[cfg(test)]
mod tests {
    use super::{
        drag_divisor, step_enemies, EnemyState, ATTACK_ANIM_FRAMES, GROWN_SIZE, MIN_PROGRESS,
    };
    use blaze_defence_core::{EnemyId, Event, FireType, ModifierSet};

    fn enemy(progress: f32) -> EnemyState {
        let mut state = EnemyState::spawn(EnemyId::new(0), FireType::ClassA, 1);
        state.progress = progress;
        state
    }

    #[test]
    fn drag_grows_with_size_and_stays_positive() {
        assert_eq!(drag_divisor(1), 1.0);
        assert_eq!(drag_divisor(2), 1.6);
        assert_eq!(drag_divisor(3), 2.0);
        assert!(drag_divisor(0) >= 0.1);
    }

    #[test]
    fn enemies_advance_by_their_effective_speed() {
        let mut enemies = vec![enemy(0.0)];
        let mut events = Vec::new();
        let moved = step_enemies(&mut enemies, &ModifierSet::default(), 3, &mut events);
        assert_eq!(moved, 0.0);
        assert!((enemies[0].progress - FireType::ClassA.base_speed()).abs() < 1e-6);
    }

    #[test]
    fn global_and_local_slows_multiply() {
        let mut enemies = vec![enemy(0.0)];
        enemies[0].slow_timer = 10;
        enemies[0].slow_value = 0.5;
        let modifiers = ModifierSet {
            global_slow: 0.5,
            ..ModifierSet::default()
        };
        let mut events = Vec::new();
        let _ = step_enemies(&mut enemies, &modifiers, 3, &mut events);
        let expected = FireType::ClassA.base_speed() * 0.5 * 0.5;
        assert!((enemies[0].progress - expected).abs() < 1e-6);
    }

    #[test]
    fn slow_debuff_expires_and_clears_its_value() {
        let mut enemies = vec![enemy(0.0)];
        enemies[0].slow_timer = 1;
        enemies[0].slow_value = 0.9;
        let mut events = Vec::new();
        let _ = step_enemies(&mut enemies, &ModifierSet::default(), 3, &mut events);
        assert_eq!(enemies[0].slow_timer, 0);
        assert_eq!(enemies[0].slow_value, 0.0);
    }

    #[test]
    fn corrupted_progress_resets_to_the_spawn_edge() {
        let mut enemies = vec![enemy(0.0)];
        enemies[0].slow_value = f32::NAN;
        enemies[0].slow_timer = 5;
        let mut events = Vec::new();
        let _ = step_enemies(&mut enemies, &ModifierSet::default(), 3, &mut events);
        assert_eq!(enemies[0].progress, MIN_PROGRESS);
    }

    #[test]
    fn blocked_row_holds_the_enemy_in_place() {
        let mut enemies = vec![enemy(2.5)];
        enemies[0].size = GROWN_SIZE;
        let modifiers = ModifierSet {
            blocked_rows: vec![3],
            ..ModifierSet::default()
        };
        let mut events = Vec::new();
        let _ = step_enemies(&mut enemies, &modifiers, 7, &mut events);
        assert_eq!(enemies[0].progress, 2.5);
    }

    #[test]
    fn blocked_row_elsewhere_does_not_hold_the_enemy() {
        let mut enemies = vec![enemy(0.0)];
        let modifiers = ModifierSet {
            blocked_rows: vec![4],
            ..ModifierSet::default()
        };
        let mut events = Vec::new();
        let _ = step_enemies(&mut enemies, &modifiers, 7, &mut events);
        assert!(enemies[0].progress > 0.0);
    }

    #[test]
    fn growth_holds_position_restores_hp_and_recenters() {
        let mut enemies = vec![enemy(2.0)];
        enemies[0].column = 3.0;
        enemies[0].hp = 1.0;
        let mut events = Vec::new();
        let _ = step_enemies(&mut enemies, &ModifierSet::default(), 7, &mut events);

        let grown = &enemies[0];
        assert_eq!(grown.size, GROWN_SIZE);
        assert_eq!(grown.progress, 2.0);
        assert_eq!(grown.hp, grown.max_hp);
        assert_eq!(grown.column, 2.0);
    }

    #[test]
    fn growth_happens_only_once() {
        let mut enemies = vec![enemy(2.0)];
        let mut events = Vec::new();
        let _ = step_enemies(&mut enemies, &ModifierSet::default(), 7, &mut events);
        assert_eq!(enemies[0].size, GROWN_SIZE);

        let before = enemies[0].progress;
        let _ = step_enemies(&mut enemies, &ModifierSet::default(), 7, &mut events);
        assert_eq!(enemies[0].size, GROWN_SIZE);
        assert!(enemies[0].progress > before);
    }

    #[test]
    fn growth_clamps_the_recentered_column_into_the_grid() {
        let mut enemies = vec![enemy(2.0)];
        enemies[0].column = 0.0;
        let mut events = Vec::new();
        let _ = step_enemies(&mut enemies, &ModifierSet::default(), 3, &mut events);
        assert_eq!(enemies[0].column, 0.0);
    }

    #[test]
    fn breach_fires_exactly_once_and_schedules_the_animation() {
        let mut enemies = vec![enemy(4.99)];
        enemies[0].size = 1;
        let mut events = Vec::new();
        let total = step_enemies(&mut enemies, &ModifierSet::default(), 3, &mut events);

        assert_eq!(total, FireType::ClassA.breach_damage());
        assert!(enemies[0].attacking);
        assert_eq!(enemies[0].anim_timer, ATTACK_ANIM_FRAMES);
        assert_eq!(
            events
                .iter()
                .filter(|event| matches!(event, Event::EnemyBreached { .. }))
                .count(),
            1,
        );

        // Later ticks only decay the animation; no second breach payment.
        let mut later_events = Vec::new();
        let later_total = step_enemies(&mut enemies, &ModifierSet::default(), 3, &mut later_events);
        assert_eq!(later_total, 0.0);
        assert!(later_events.is_empty());
        assert_eq!(enemies[0].anim_timer, ATTACK_ANIM_FRAMES - 1);
    }

    #[test]
    fn breached_enemy_is_dropped_when_the_animation_ends() {
        let mut enemies = vec![enemy(4.99)];
        let mut events = Vec::new();
        let _ = step_enemies(&mut enemies, &ModifierSet::default(), 3, &mut events);

        for _ in 0..ATTACK_ANIM_FRAMES {
            let _ = step_enemies(&mut enemies, &ModifierSet::default(), 3, &mut events);
        }
        assert!(enemies.is_empty());
    }

    #[test]
    fn progress_never_falls_below_the_spawn_edge() {
        let mut enemies = vec![enemy(-1.0)];
        let modifiers = ModifierSet {
            global_slow: ModifierSet::MAX_GLOBAL_SLOW,
            ..ModifierSet::default()
        };
        let mut events = Vec::new();
        let _ = step_enemies(&mut enemies, &modifiers, 3, &mut events);
        assert!(enemies[0].progress >= MIN_PROGRESS);
    }
}
