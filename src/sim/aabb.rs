//! Axis-aligned bounding boxes
//!
//! Every collidable thing on the table (ball, paddles, boundary zones) is a
//! rectangle described by its center and half extents.

use glam::Vec2;
use serde::Serialize;

/// Axis-aligned box given by center and half extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb {
    pub center: Vec2,
    /// Half width / half height, never negative
    pub half_extents: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
        }
    }

    /// Box of the given full size centered on `center`
    pub fn from_size(center: Vec2, size: Vec2) -> Self {
        Self::new(center, size / 2.0)
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        overlaps(self, other)
    }
}

/// True when both boxes' projections overlap on x and y.
///
/// Intervals are closed: boxes whose edges touch count as colliding.
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    let x = a.center.x + a.half_extents.x >= b.center.x - b.half_extents.x
        && b.center.x + b.half_extents.x >= a.center.x - a.half_extents.x;
    let y = a.center.y + a.half_extents.y >= b.center.y - b.half_extents.y
        && b.center.y + b.half_extents.y >= a.center.y - a.half_extents.y;
    x && y
}
