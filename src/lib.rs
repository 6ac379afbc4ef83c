//! Recycle Sorter - a falling-object sorting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, drop resolution, scoring, levels)
//! - `game`: Top-level state machine (menu, playing, paused, game over)
//! - `renderer`: Draw-call interface and scene composition
//! - `audio`: Named sound cues with a capability-checked backend
//! - `highscores`: Single persisted high score
//! - `platform`: Input events, file storage and the terminal frontend
//! - `settings`: Runtime preferences

pub mod audio;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, GamePhase};
pub use highscores::HighScore;
pub use settings::Settings;

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Play area dimensions
    pub const SCREEN_W: f32 = 1000.0;
    pub const SCREEN_H: f32 = 650.0;

    /// Target tick rate
    pub const FPS: u32 = 60;
    /// Largest real-time step fed into one tick (keeps timers sane after a stall)
    pub const MAX_FRAME_DT: f32 = 0.1;

    pub const LIVES_START: u8 = 3;

    /// Scales a level's fall acceleration into per-tick velocity gain.
    /// Empirical: keeps level 1 readable while preserving level ordering.
    pub const GRAVITY_SCALE: f32 = 0.02;

    /// Falling object size
    pub const OBJECT_W: f32 = 120.0;
    pub const OBJECT_H: f32 = 40.0;

    /// Spawn window
    pub const SPAWN_Y: f32 = -50.0;
    pub const SPAWN_MIN_X: i32 = 60;
    pub const SPAWN_MAX_X: i32 = SCREEN_W as i32 - 160;
    pub const SPAWN_VX: f32 = 0.3;
    pub const SPAWN_VY_MIN: f32 = 0.5;
    pub const SPAWN_VY_MAX: f32 = 1.5;
    /// Degrees per tick
    pub const SPAWN_SPIN: f32 = 0.25;

    /// An object is missed once its top edge passes this far below the screen
    pub const MISS_MARGIN: f32 = 60.0;

    /// Receptacle row along the bottom edge
    pub const BIN_MARGIN: f32 = 20.0;
    pub const BIN_H: f32 = 110.0;
    pub const BIN_BOTTOM_GAP: f32 = 20.0;

    /// Scoring
    pub const BASE_POINTS: u64 = 50;
    pub const STREAK_BONUS_STEP: u64 = 5;
    pub const STREAK_BONUS_CAP: u64 = 150;

    /// Tip display durations (seconds)
    pub const PLACEMENT_TIP_SECS: f32 = 3.5;
    pub const LEVEL_UP_TIP_SECS: f32 = 3.0;
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(245, 245, 245);
    pub const BLACK: Rgb = Rgb(20, 20, 20);
    pub const DIM: Rgb = Rgb(30, 30, 30);
    pub const GOLD: Rgb = Rgb(250, 204, 21);
    pub const HEART: Rgb = Rgb(255, 90, 90);

    /// Scale each channel by `factor` (clamped to 0..=255)
    pub fn scaled(self, factor: f32) -> Rgb {
        let ch = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
        Rgb(ch(self.0), ch(self.1), ch(self.2))
    }
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
