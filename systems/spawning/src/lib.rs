#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic spawning system responsible for emitting enemy spawn commands.

use blaze_defence_core::{Command, Event, FireType};

const RNG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const RNG_INCREMENT: u64 = 1;

/// Floor on the spawn interval once time-based tightening kicks in.
const MIN_SPAWN_INTERVAL: u32 = 30;

/// Elapsed frames that shave one tick off the spawn interval.
const TIGHTEN_DIVISOR: u64 = 500;

/// Elapsed frames that widen the fire-type pool by one level.
const LEVEL_DIVISOR: u64 = 1500;

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    columns: u32,
    spawn_interval: u32,
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided grid width, base spawn
    /// cadence, and seed.
    #[must_use]
    pub const fn new(columns: u32, spawn_interval: u32, rng_seed: u64) -> Self {
        Self {
            columns,
            spawn_interval,
            rng_seed,
        }
    }
}

/// Pure system that deterministically emits spawn commands as time advances.
///
/// The spawn cadence tightens as the battle wears on and the fire-type pool
/// widens from ordinary fires toward oil and electrical fires, reproducing
/// the escalation curve of the original battles.
#[derive(Debug)]
pub struct Spawning {
    columns: u32,
    spawn_interval: u32,
    rng_state: u64,
}

impl Spawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            columns: config.columns,
            spawn_interval: config.spawn_interval,
            rng_state: config.rng_seed,
        }
    }

    /// Consumes world events and emits spawn commands for elapsed frames.
    pub fn handle(&mut self, events: &[Event], out: &mut Vec<Command>) {
        if self.columns == 0 || self.spawn_interval == 0 {
            return;
        }

        for event in events {
            if let Event::TimeAdvanced { frame } = event {
                let interval = self.effective_interval(*frame);
                if *frame % u64::from(interval) == 0 {
                    let column = self.select_column();
                    let fire_type = self.select_fire_type(*frame);
                    out.push(Command::SpawnEnemy { column, fire_type });
                }
            }
        }
    }

    fn effective_interval(&self, frame: u64) -> u32 {
        let tightened = u64::from(self.spawn_interval).saturating_sub(frame / TIGHTEN_DIVISOR);
        (tightened as u32).max(MIN_SPAWN_INTERVAL)
    }

    fn select_column(&mut self) -> u32 {
        let value = self.advance_rng();
        (value % u64::from(self.columns)) as u32
    }

    /// Picks a fire type from a pool that widens with elapsed time.
    ///
    /// At level zero only ordinary and oil fires appear (two-to-one);
    /// electrical fires join at level one and all three classes stay in the
    /// pool from level two on.
    fn select_fire_type(&mut self, frame: u64) -> FireType {
        let level = (frame / LEVEL_DIVISOR).min(2);
        let pool = 2 * level + 3;
        let index = ((self.advance_rng() % pool) / 2).min(2);
        match index {
            0 => FireType::ClassA,
            1 => FireType::ClassB,
            _ => FireType::ClassC,
        }
    }

    fn advance_rng(&mut self) -> u64 {
        self.rng_state = self
            .rng_state
            .wrapping_mul(RNG_MULTIPLIER)
            .wrapping_add(RNG_INCREMENT);
        self.rng_state
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, Spawning, MIN_SPAWN_INTERVAL};
    use blaze_defence_core::{Command, Event};

    #[test]
    fn interval_tightens_with_elapsed_frames_down_to_the_floor() {
        let spawning = Spawning::new(Config::new(3, 150, 1));
        assert_eq!(spawning.effective_interval(0), 150);
        assert_eq!(spawning.effective_interval(1_000), 148);
        assert_eq!(spawning.effective_interval(100_000), MIN_SPAWN_INTERVAL);
    }

    #[test]
    fn emits_nothing_between_spawn_frames() {
        let mut spawning = Spawning::new(Config::new(3, 150, 1));
        let mut out = Vec::new();
        spawning.handle(&[Event::TimeAdvanced { frame: 149 }], &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn emits_one_spawn_on_each_interval_boundary() {
        let mut spawning = Spawning::new(Config::new(3, 150, 1));
        let mut out = Vec::new();
        spawning.handle(
            &[
                Event::TimeAdvanced { frame: 150 },
                Event::TimeAdvanced { frame: 151 },
                Event::TimeAdvanced { frame: 300 },
            ],
            &mut out,
        );
        assert_eq!(out.len(), 2);
        for command in &out {
            let Command::SpawnEnemy { column, .. } = command else {
                panic!("expected spawn command");
            };
            assert!(*column < 3);
        }
    }

    #[test]
    fn degenerate_configuration_is_silent() {
        let mut no_columns = Spawning::new(Config::new(0, 150, 1));
        let mut out = Vec::new();
        no_columns.handle(&[Event::TimeAdvanced { frame: 150 }], &mut out);
        assert!(out.is_empty());

        let mut no_interval = Spawning::new(Config::new(3, 0, 1));
        no_interval.handle(&[Event::TimeAdvanced { frame: 150 }], &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn identical_seeds_replay_identical_spawns() {
        let events: Vec<Event> = (1..=3_000)
            .map(|frame| Event::TimeAdvanced { frame })
            .collect();

        let mut first = Spawning::new(Config::new(5, 120, 0x1234_5678));
        let mut second = Spawning::new(Config::new(5, 120, 0x1234_5678));
        let mut first_out = Vec::new();
        let mut second_out = Vec::new();
        first.handle(&events, &mut first_out);
        second.handle(&events, &mut second_out);

        assert!(!first_out.is_empty());
        assert_eq!(first_out, second_out);
    }
}
