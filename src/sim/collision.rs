//! Axis-aligned rectangle collision
//!
//! Everything in the runner is a box, so this is the whole collision story.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, top-left origin, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }
}

/// True if `a` and `b` intersect on both axes.
///
/// Edges that merely touch don't count.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x() < b.right() && a.right() > b.x() && a.y() < b.bottom() && a.bottom() > b.y()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_hit() {
        let player = Rect::new(80.0, 50.0, 60.0, 80.0);
        let house = Rect::new(80.0, 60.0, 50.0, 60.0);
        assert!(overlaps(&player, &house));
        assert!(house.overlaps(&player));
    }

    #[test]
    fn test_overlap_miss_x() {
        let player = Rect::new(80.0, 50.0, 60.0, 80.0);
        let house = Rect::new(200.0, 60.0, 50.0, 60.0);
        assert!(!overlaps(&player, &house));
    }

    #[test]
    fn test_touching_edges_dont_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge
        assert!(!overlaps(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)));
        // Shares the bottom edge
        assert!(!overlaps(&a, &Rect::new(0.0, 10.0, 10.0, 10.0)));
        // A sliver of overlap does count
        assert!(overlaps(&a, &Rect::new(9.9, 9.9, 10.0, 10.0)));
    }

    #[test]
    fn test_ducking_player_under_parrot() {
        // Ground at 290: ducked player spans 250..290, parrot spans 160..220
        let ducked = Rect::new(80.0, 250.0, 60.0, 40.0);
        let standing = Rect::new(80.0, 210.0, 60.0, 80.0);
        let parrot = Rect::new(90.0, 160.0, 80.0, 60.0);
        assert!(!overlaps(&ducked, &parrot));
        assert!(overlaps(&standing, &parrot));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }
    }
}
