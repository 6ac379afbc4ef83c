//! Platform abstraction layer
//!
//! Handles the outside world:
//! - Input events (pointer + named key actions)
//! - Storage (JSON high score file)
//! - Terminal frontend (crossterm drawing, polling and bell audio)

pub mod input;
pub mod storage;
pub mod terminal;

pub use input::{InputEvent, KeyAction};
pub use storage::JsonFileStore;
