//! Axis-aligned box collision
//!
//! Everything in the game is a rectangle, so collision is a plain AABB
//! overlap test. Hitboxes are shrunk around their centers to make near
//! misses feel fair.

use glam::Vec2;

/// An axis-aligned box stored as center + half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    /// Box from its center and full size
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size * 0.5,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    /// Same center, extents scaled by `scale`
    pub fn shrunk(&self, scale: f32) -> Self {
        Self {
            center: self.center,
            half: self.half * scale,
        }
    }

    /// Overlap test, inclusive of touching edges
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        !(a_max.x < b_min.x || a_min.x > b_max.x || a_max.y < b_min.y || a_min.y > b_max.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_center_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    /// Reference check written directly against edge coordinates
    fn reference(a: &Aabb, b: &Aabb) -> bool {
        let (al, ar) = (a.center.x - a.half.x, a.center.x + a.half.x);
        let (ab, at) = (a.center.y - a.half.y, a.center.y + a.half.y);
        let (bl, br) = (b.center.x - b.half.x, b.center.x + b.half.x);
        let (bb, bt) = (b.center.y - b.half.y, b.center.y + b.half.y);
        al <= br && bl <= ar && ab <= bt && bb <= at
    }

    fn check(a: Aabb, b: Aabb, expected: bool) {
        assert_eq!(a.overlaps(&b), expected);
        assert_eq!(b.overlaps(&a), expected);
        assert_eq!(reference(&a, &b), expected);
    }

    #[test]
    fn test_fully_inside() {
        check(boxed(100.0, 100.0, 50.0, 50.0), boxed(100.0, 100.0, 10.0, 10.0), true);
    }

    #[test]
    fn test_edge_touching() {
        // Right edge of a at x=110, left edge of b at x=110
        check(boxed(100.0, 100.0, 20.0, 20.0), boxed(120.0, 100.0, 20.0, 20.0), true);
    }

    #[test]
    fn test_disjoint() {
        check(boxed(0.0, 0.0, 10.0, 10.0), boxed(100.0, 100.0, 10.0, 10.0), false);
    }

    #[test]
    fn test_overlap_one_axis_only() {
        // Same x range, separated vertically
        check(boxed(50.0, 0.0, 20.0, 20.0), boxed(50.0, 40.0, 20.0, 20.0), false);
        // Same y range, separated horizontally
        check(boxed(0.0, 50.0, 20.0, 20.0), boxed(40.0, 50.0, 20.0, 20.0), false);
    }

    #[test]
    fn test_identical() {
        check(boxed(7.0, 9.0, 26.0, 26.0), boxed(7.0, 9.0, 26.0, 26.0), true);
    }

    #[test]
    fn test_shrunk_hitbox_misses_corner_graze() {
        let a = boxed(0.0, 0.0, 20.0, 20.0);
        let b = boxed(18.0, 0.0, 20.0, 20.0);
        assert!(a.overlaps(&b));
        // Shrunk to 70%: half widths 7 each, centers 18 apart
        assert!(!a.shrunk(0.7).overlaps(&b.shrunk(0.7)));
    }

    proptest! {
        #[test]
        fn prop_symmetric_and_matches_reference(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = boxed(ax, ay, aw, ah);
            let b = boxed(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            prop_assert_eq!(a.overlaps(&b), reference(&a, &b));
        }
    }
}
