//! Transport-agnostic input events

use glam::Vec2;

/// Named key actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Start,
    PauseToggle,
    MuteToggle,
    Restart,
    Quit,
}

/// One discrete input event, positions in play-area coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(Vec2),
    PointerUp(Vec2),
    PointerMove(Vec2),
    Key(KeyAction),
}
