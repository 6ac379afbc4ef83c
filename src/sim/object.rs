//! Falling objects and their kinematics

use glam::Vec2;
use rand::Rng;

use super::catalog::{Category, ItemDef};
use super::collision::Rect;
use crate::consts::*;

/// Drag state - either falling freely or held by the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Free,
    /// Held; `grab_offset` is object origin minus pointer at grab time
    Dragging { grab_offset: Vec2 },
}

/// A labelled item falling through the play area
#[derive(Debug, Clone, PartialEq)]
pub struct FallingObject {
    pub id: u32,
    pub name: &'static str,
    pub category: Category,
    pub tip: &'static str,
    /// Top-left corner
    pub pos: Vec2,
    /// Units per tick
    pub vel: Vec2,
    pub size: Vec2,
    pub drag: DragState,
    /// Degrees
    pub rotation: f32,
    /// Degrees per tick
    pub rotation_speed: f32,
}

impl FallingObject {
    pub fn new(id: u32, item: &ItemDef, pos: Vec2, vel: Vec2, rotation_speed: f32) -> Self {
        Self {
            id,
            name: item.name,
            category: item.category,
            tip: item.tip,
            pos,
            vel,
            size: Vec2::new(OBJECT_W, OBJECT_H),
            drag: DragState::Free,
            rotation: 0.0,
            rotation_speed,
        }
    }

    /// Spawn `item` above the visible area with a randomized start
    pub fn spawn<R: Rng>(id: u32, item: &ItemDef, rng: &mut R) -> Self {
        let x = rng.random_range(SPAWN_MIN_X..=SPAWN_MAX_X) as f32;
        let vx = rng.random_range(-SPAWN_VX..SPAWN_VX);
        let vy = rng.random_range(SPAWN_VY_MIN..SPAWN_VY_MAX);
        let spin = rng.random_range(-SPAWN_SPIN..SPAWN_SPIN);
        Self::new(id, item, Vec2::new(x, SPAWN_Y), Vec2::new(vx, vy), spin)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Rotation to draw with; held objects are drawn upright
    pub fn display_rotation(&self) -> f32 {
        if self.is_dragging() { 0.0 } else { self.rotation }
    }

    /// One tick of motion. Held objects don't move on their own.
    pub fn advance(&mut self, fall_accel: f32) {
        match self.drag {
            DragState::Free => {
                self.vel.y += fall_accel * GRAVITY_SCALE;
                self.pos += self.vel;
                self.rotation = (self.rotation + self.rotation_speed) % 360.0;
            }
            DragState::Dragging { .. } => {
                self.vel = Vec2::ZERO;
            }
        }
    }

    /// Start a drag with the pointer at `pointer`
    pub fn grab(&mut self, pointer: Vec2) {
        self.drag = DragState::Dragging {
            grab_offset: self.pos - pointer,
        };
        self.vel = Vec2::ZERO;
    }

    /// Follow the pointer, keeping the offset captured at grab time
    pub fn drag_to(&mut self, pointer: Vec2) {
        if let DragState::Dragging { grab_offset } = self.drag {
            self.pos = pointer + grab_offset;
            self.vel = Vec2::ZERO;
        }
    }

    /// Let go; the object resumes falling from rest
    pub fn release(&mut self) {
        self.drag = DragState::Free;
        self.vel = Vec2::ZERO;
    }

    /// Top edge has passed below the play area
    pub fn is_missed(&self) -> bool {
        self.pos.y > SCREEN_H + MISS_MARGIN
    }
}
