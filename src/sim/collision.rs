//! Axis-aligned rectangles and drop-target resolution
//!
//! Grabbing tests a point against an object's rectangle; dropping tests the
//! object's rectangle against every receptacle for any non-zero overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::receptacle::Receptacle;

/// Axis-aligned rectangle: top-left corner plus size (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Half-open containment: left/top edges inside, right/bottom outside
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// True when the two rectangles share a region of non-zero area.
    /// Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// First receptacle (in slice order) that overlaps `rect`
pub fn find_drop_target<'a>(rect: &Rect, receptacles: &'a [Receptacle]) -> Option<&'a Receptacle> {
    receptacles.iter().find(|r| r.bounds.intersects(rect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog::Category;

    #[test]
    fn test_point_containment_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 10.0);
        assert!(r.contains_point(Vec2::new(10.0, 10.0)));
        assert!(r.contains_point(Vec2::new(29.9, 19.9)));
        assert!(!r.contains_point(Vec2::new(30.0, 15.0)));
        assert!(!r.contains_point(Vec2::new(15.0, 20.0)));
    }

    #[test]
    fn test_overlap_requires_area() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Edge contact only
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        // Sliver of overlap
        assert!(a.intersects(&Rect::new(9.5, 9.5, 10.0, 10.0)));
        // Containment counts too
        assert!(a.intersects(&Rect::new(2.0, 2.0, 1.0, 1.0)));
    }

    #[test]
    fn test_first_overlapping_receptacle_wins() {
        // Deliberately overlapping bins to pin the tie-break
        let bins = [
            Receptacle::new(Category::Metal, Rect::new(0.0, 0.0, 100.0, 100.0)),
            Receptacle::new(Category::Paper, Rect::new(50.0, 0.0, 100.0, 100.0)),
        ];
        let obj = Rect::new(60.0, 10.0, 20.0, 20.0);
        let hit = find_drop_target(&obj, &bins).unwrap();
        assert_eq!(hit.label, Category::Metal);

        let miss = Rect::new(500.0, 500.0, 20.0, 20.0);
        assert!(find_drop_target(&miss, &bins).is_none());
    }
}
