//! Axis-aligned rectangles
//!
//! `x, y` is the bottom-left corner; the arena origin is bottom-left too, so
//! `top` is the larger y value.

use glam::Vec2;

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w > 0.0 && h > 0.0, "rect size must be positive: {w}x{h}");
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    /// The default playable area
    pub fn arena() -> Self {
        Self::new(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.h
    }

    /// Bottom-left corner
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// True once the rectangle lies entirely beyond any side of `container`
    pub fn is_outside(&self, container: &Rect) -> bool {
        self.x > container.right()
            || self.x + self.w < container.left()
            || self.y > container.top()
            || self.y + self.h < container.bottom()
    }

    /// Shift the rectangle so it fits inside `container`
    pub fn clamped_within(&self, container: &Rect) -> Rect {
        let x = self.x.clamp(container.left(), (container.right() - self.w).max(container.left()));
        let y = self.y.clamp(container.bottom(), (container.top() - self.h).max(container.bottom()));
        Rect::new(x, y, self.w, self.h)
    }
}
