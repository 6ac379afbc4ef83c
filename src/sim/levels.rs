//! Level progression table

use serde::{Deserialize, Serialize};

/// Tuning for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    /// Fall acceleration (scaled by `GRAVITY_SCALE` each tick)
    pub fall_accel: f32,
    /// Ticks between spawns
    pub spawn_interval: u32,
    /// Level length in seconds
    pub duration: f32,
    /// Cumulative score needed when the timer runs out
    pub score_target: u64,
}

const fn level(fall_accel: f32, spawn_interval: u32, duration: f32, score_target: u64) -> LevelDef {
    LevelDef {
        fall_accel,
        spawn_interval,
        duration,
        score_target,
    }
}

pub static LEVELS: [LevelDef; 5] = [
    level(2.4, 75, 50.0, 200),
    level(3.0, 65, 55.0, 450),
    level(3.6, 58, 60.0, 800),
    level(4.2, 52, 60.0, 1200),
    level(4.8, 46, 65.0, 1700),
];

/// Definition for `index`, clamped to the last level
pub fn level_def(index: usize) -> &'static LevelDef {
    &LEVELS[index.min(LEVELS.len() - 1)]
}

pub fn has_next_level(index: usize) -> bool {
    index + 1 < LEVELS.len()
}
