//! Receptacles (bins) along the bottom of the play area

use serde::{Deserialize, Serialize};

use super::catalog::Category;
use super::collision::Rect;
use crate::consts::*;

/// A fixed drop zone accepting one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Receptacle {
    pub label: Category,
    pub bounds: Rect,
}

impl Receptacle {
    pub fn new(label: Category, bounds: Rect) -> Self {
        Self { label, bounds }
    }
}

/// One receptacle per category, evenly spaced left to right in `Category::ALL` order
pub fn layout_receptacles() -> [Receptacle; Category::COUNT] {
    let n = Category::COUNT as f32;
    let w = ((SCREEN_W - BIN_MARGIN * (n + 1.0)) / n).floor();
    let y = SCREEN_H - BIN_H - BIN_BOTTOM_GAP;

    Category::ALL.map(|cat| {
        let x = BIN_MARGIN + cat.index() as f32 * (w + BIN_MARGIN);
        Receptacle::new(cat, Rect::new(x, y, w, BIN_H))
    })
}
