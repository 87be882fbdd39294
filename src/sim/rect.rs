//! Axis-aligned rectangle geometry for walls and the goal
//!
//! Screen convention: y grows downward, so `top <= bottom`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle from its top-left corner and size
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, origin.x + size.x, origin.y + size.y)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// True when the edges are ordered and the area is non-zero
    pub fn is_well_formed(&self) -> bool {
        self.left < self.right && self.top < self.bottom
    }

    /// Strict interior test (points on an edge are outside)
    #[inline]
    pub fn contains_point_strict(&self, p: Vec2) -> bool {
        p.x > self.left && p.x < self.right && p.y > self.top && p.y < self.bottom
    }

    /// Whether `other` lies entirely within this rectangle (edges may touch)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    /// Whether the bounding box of a circle overlaps this rectangle's interior
    #[inline]
    pub fn overlaps_circle_bounds(&self, center: Vec2, radius: f32) -> bool {
        center.x + radius > self.left
            && center.x - radius < self.right
            && center.y + radius > self.top
            && center.y - radius < self.bottom
    }

    /// Overlap of a circle's bounding box with this rectangle, per axis.
    /// Zero on an axis where they are separated.
    pub fn circle_bounds_overlap(&self, center: Vec2, radius: f32) -> Vec2 {
        let x = (center.x + radius).min(self.right) - (center.x - radius).max(self.left);
        let y = (center.y + radius).min(self.bottom) - (center.y - radius).max(self.top);
        Vec2::new(x.max(0.0), y.max(0.0))
    }
}
