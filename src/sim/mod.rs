//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed-rate ticks only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod catalog;
pub mod collision;
pub mod drag;
pub mod levels;
pub mod object;
pub mod receptacle;
pub mod scoring;
pub mod state;
pub mod tick;

pub use catalog::{Category, ITEMS, ItemDef, find_item};
pub use collision::{Rect, find_drop_target};
pub use drag::{drag, grab, release};
pub use levels::{LEVELS, LevelDef, has_next_level, level_def};
pub use object::{DragState, FallingObject};
pub use receptacle::{Receptacle, layout_receptacles};
pub use scoring::{placement_points, streak_bonus};
pub use state::{DropOutcome, EndReason, GameEvent, RoundState};
pub use tick::tick;
