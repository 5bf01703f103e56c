//! Axis-aligned overlap tests for arcade bodies
//!
//! Bodies are positioned by their center, like sprites with origin 0.5.

use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box of `size` centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap (touching edges do not collide)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Offset that moves this box fully inside `bounds` (zero if it already is)
    pub fn clamp_offset(&self, bounds: &Aabb) -> Vec2 {
        let mut offset = Vec2::ZERO;
        if self.min.x < bounds.min.x {
            offset.x = bounds.min.x - self.min.x;
        } else if self.max.x > bounds.max.x {
            offset.x = bounds.max.x - self.max.x;
        }
        if self.min.y < bounds.min.y {
            offset.y = bounds.min.y - self.min.y;
        } else if self.max.y > bounds.max.y {
            offset.y = bounds.max.y - self.max.y;
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Aabb::from_center(Vec2::new(100.0, 300.0), Vec2::new(80.0, 50.0));
        let b = Aabb::from_center(Vec2::new(150.0, 320.0), Vec2::new(60.0, 60.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_miss() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_center(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_clamp_offset() {
        let bounds = Aabb {
            min: Vec2::ZERO,
            max: Vec2::new(800.0, 600.0),
        };
        let below = Aabb::from_center(Vec2::new(100.0, 590.0), Vec2::new(80.0, 50.0));
        assert_eq!(below.clamp_offset(&bounds), Vec2::new(0.0, -15.0));

        let inside = Aabb::from_center(Vec2::new(100.0, 300.0), Vec2::new(80.0, 50.0));
        assert_eq!(inside.clamp_offset(&bounds), Vec2::ZERO);
    }
}
