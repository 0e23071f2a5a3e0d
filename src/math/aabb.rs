// Copyright 2026 @TwoCookingMice

use super::constants::{Float, Int, Point3f};
use super::interval::Interval;
use super::ray::Ray3f;

// Minimum thickness of any axis slab. Flat primitives (quads) would
// otherwise produce a zero-size interval and a degenerate slab test.
const PAD_DELTA: Float = 1e-4;

/// Axis-aligned bounding box, stored as one interval per axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AABB {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Default for AABB {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl AABB {
    pub const EMPTY: Self = Self {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    pub const UNIVERSE: Self = Self {
        x: Interval::UNIVERSE,
        y: Interval::UNIVERSE,
        z: Interval::UNIVERSE,
    };

    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        let mut bbox = Self { x, y, z };
        bbox.pad_to_minimums();
        bbox
    }

    /// Treat the two points as extrema, in either coordinate order.
    pub fn from_points(a: &Point3f, b: &Point3f) -> Self {
        let mut bbox = Self {
            x: Interval::new(a[0], b[0]),
            y: Interval::new(a[1], b[1]),
            z: Interval::new(a[2], b[2]),
        };
        bbox.pad_to_minimums();
        bbox
    }

    /// Bounding box of three extremal points, e.g. a triangle's vertices.
    pub fn from_triple(a: &Point3f, b: &Point3f, c: &Point3f) -> Self {
        let mut bbox = Self {
            x: Interval::new(a[0].min(b[0]).min(c[0]), a[0].max(b[0]).max(c[0])),
            y: Interval::new(a[1].min(b[1]).min(c[1]), a[1].max(b[1]).max(c[1])),
            z: Interval::new(a[2].min(b[2]).min(c[2]), a[2].max(b[2]).max(c[2])),
        };
        bbox.pad_to_minimums();
        bbox
    }

    /// The box tightly enclosing the two input boxes. Inputs are already
    /// padded, so no re-padding happens here.
    pub fn enclose(box0: &AABB, box1: &AABB) -> Self {
        Self {
            x: Interval::enclose(&box0.x, &box1.x),
            y: Interval::enclose(&box0.y, &box1.y),
            z: Interval::enclose(&box0.z, &box1.z),
        }
    }

    pub fn axis_interval(&self, n: Int) -> &Interval {
        match n {
            1 => &self.y,
            2 => &self.z,
            _ => &self.x,
        }
    }

    /// Index of the longest axis. Ties resolve to the winner of the
    /// first comparison.
    pub fn longest_axis(&self) -> Int {
        if self.x.size() > self.y.size() {
            if self.x.size() > self.z.size() { 0 } else { 2 }
        } else {
            if self.y.size() > self.z.size() { 1 } else { 2 }
        }
    }

    /// Slab method. Narrows a local copy of `ray_t` axis by axis and fails
    /// as soon as the range collapses. A near-zero direction component
    /// yields infinite slab bounds, which the comparisons handle without
    /// branching.
    pub fn hit(&self, ray: &Ray3f, mut ray_t: Interval) -> bool {
        let origin = ray.origin();
        let dir = ray.dir();

        for axis in 0..3 {
            let ax = self.axis_interval(axis);

            let adinv = 1.0 / dir[axis as usize];
            let t0 = (ax.min - origin[axis as usize]) * adinv;
            let t1 = (ax.max - origin[axis as usize]) * adinv;

            if t0 < t1 {
                if t0 > ray_t.min { ray_t.min = t0; }
                if t1 < ray_t.max { ray_t.max = t1; }
            } else {
                if t1 > ray_t.min { ray_t.min = t1; }
                if t0 < ray_t.max { ray_t.max = t0; }
            }

            if ray_t.max <= ray_t.min {
                return false;
            }
        }

        true
    }

    fn pad_to_minimums(&mut self) {
        if self.x.size() < PAD_DELTA { self.x = self.x.expand(PAD_DELTA); }
        if self.y.size() < PAD_DELTA { self.y = self.y.expand(PAD_DELTA); }
        if self.z.size() < PAD_DELTA { self.z = self.z.expand(PAD_DELTA); }
    }
}

/* Tests for AABB */
#[cfg(test)]
mod tests {
    use super::{AABB, Interval, PAD_DELTA, Ray3f};
    use crate::math::constants::Vector3f;

    fn unit_cube() -> AABB {
        AABB::from_points(&Vector3f::new(0.0, 0.0, 0.0), &Vector3f::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_aabb_axis_rays() {
        let bbox = unit_cube();
        let range = Interval::new(0.001, 1.0e8);

        // One ray straight through the cube along each axis.
        for axis in 0..3usize {
            let mut origin = Vector3f::new(0.5, 0.5, 0.5);
            origin[axis] = -1.0;
            let mut dir = Vector3f::zeros();
            dir[axis] = 1.0;

            let towards = Ray3f::new(origin, dir, None);
            assert!(bbox.hit(&towards, range));

            let away = Ray3f::new(origin, -dir, None);
            assert!(!bbox.hit(&away, range));
        }
    }

    #[test]
    fn test_aabb_hit_respects_range() {
        let bbox = unit_cube();
        let origin = Vector3f::new(-1.0, 0.5, 0.5);
        let dir = Vector3f::new(1.0, 0.0, 0.0);
        let ray = Ray3f::new(origin, dir, None);

        // The cube spans t in [1, 2] for this ray.
        assert!(bbox.hit(&ray, Interval::new(0.0, 10.0)));
        assert!(!bbox.hit(&ray, Interval::new(0.0, 0.5)));
        assert!(!bbox.hit(&ray, Interval::new(5.0, 10.0)));
    }

    #[test]
    fn test_aabb_parallel_ray_outside_slab() {
        let bbox = unit_cube();

        // Parallel to x, outside the y slab. The division by zero produces
        // infinite bounds and the test must still miss.
        let ray = Ray3f::new(Vector3f::new(-1.0, 2.0, 0.5), Vector3f::new(1.0, 0.0, 0.0), None);
        assert!(!bbox.hit(&ray, Interval::new(0.001, 1.0e8)));

        // Parallel to x, inside both other slabs.
        let inside = Ray3f::new(Vector3f::new(-1.0, 0.5, 0.5), Vector3f::new(1.0, 0.0, 0.0), None);
        assert!(bbox.hit(&inside, Interval::new(0.001, 1.0e8)));
    }

    #[test]
    fn test_aabb_padding() {
        // A quad-like box that is flat in z.
        let flat = AABB::from_points(&Vector3f::new(0.0, 0.0, 1.0), &Vector3f::new(2.0, 2.0, 1.0));
        assert!(flat.x.size() >= PAD_DELTA);
        assert!(flat.y.size() >= PAD_DELTA);
        assert!(flat.z.size() >= PAD_DELTA);

        let degenerate = AABB::new(Interval::new(0.0, 0.0), Interval::new(0.0, 0.0), Interval::new(0.0, 0.0));
        assert!(degenerate.x.size() >= PAD_DELTA);
        assert!(degenerate.y.size() >= PAD_DELTA);
        assert!(degenerate.z.size() >= PAD_DELTA);
    }

    #[test]
    fn test_aabb_from_triple() {
        let bbox = AABB::from_triple(
            &Vector3f::new(0.0, 0.0, 0.0),
            &Vector3f::new(2.0, -1.0, 0.0),
            &Vector3f::new(1.0, 3.0, 0.5),
        );
        assert_eq!(bbox.x.min, 0.0);
        assert_eq!(bbox.x.max, 2.0);
        assert_eq!(bbox.y.min, -1.0);
        assert_eq!(bbox.y.max, 3.0);
        assert_eq!(bbox.z.min, 0.0);
        assert_eq!(bbox.z.max, 0.5);
    }

    #[test]
    fn test_aabb_enclose() {
        let a = AABB::from_points(&Vector3f::new(0.0, 0.0, 0.0), &Vector3f::new(1.0, 1.0, 1.0));
        let b = AABB::from_points(&Vector3f::new(-1.0, 0.5, 0.0), &Vector3f::new(0.5, 3.0, 0.5));
        let u = AABB::enclose(&a, &b);

        assert_eq!(u.x.min, -1.0);
        assert_eq!(u.x.max, 1.0);
        assert_eq!(u.y.min, 0.0);
        assert_eq!(u.y.max, 3.0);

        let from_empty = AABB::enclose(&AABB::EMPTY, &a);
        assert_eq!(from_empty, a);
    }

    #[test]
    fn test_aabb_longest_axis() {
        let bbox = AABB::new(
            Interval::new(0.0, 4.0),
            Interval::new(0.0, 1.0),
            Interval::new(0.0, 2.0),
        );
        assert_eq!(bbox.longest_axis(), 0);

        let tall = AABB::new(
            Interval::new(0.0, 1.0),
            Interval::new(0.0, 5.0),
            Interval::new(0.0, 2.0),
        );
        assert_eq!(tall.longest_axis(), 1);

        let deep = AABB::new(
            Interval::new(0.0, 1.0),
            Interval::new(0.0, 2.0),
            Interval::new(0.0, 5.0),
        );
        assert_eq!(deep.longest_axis(), 2);
    }
}
