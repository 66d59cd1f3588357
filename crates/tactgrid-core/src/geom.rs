//! World-space geometry primitives.

use std::ops::{Add, Sub};

/// A point (or vector) in world space.
///
/// `y` is up; grid layouts tessellate the XZ plane.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct WorldPoint {
    /// East-west axis.
    pub x: f32,
    /// Vertical axis.
    pub y: f32,
    /// North-south axis.
    pub z: f32,
}

impl WorldPoint {
    /// Origin.
    pub const ZERO: WorldPoint = WorldPoint::new(0.0, 0.0, 0.0);
    /// Unit up vector.
    pub const UP: WorldPoint = WorldPoint::new(0.0, 1.0, 0.0);

    /// Build a point from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: WorldPoint) -> f32 {
        let d = other - self;
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }
}

impl Add for WorldPoint {
    type Output = WorldPoint;

    fn add(self, rhs: WorldPoint) -> WorldPoint {
        WorldPoint::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for WorldPoint {
    type Output = WorldPoint;

    fn sub(self, rhs: WorldPoint) -> WorldPoint {
        WorldPoint::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// The world-space footprint of a single cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellExtent {
    /// Width along the X axis.
    pub x: f32,
    /// Depth along the Z axis.
    pub y: f32,
}

impl CellExtent {
    /// Build an extent from width and depth.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for CellExtent {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = WorldPoint::new(1.0, 2.0, 3.0);
        let b = WorldPoint::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }
}
