// Copyright @yucwang 2026

use super::quad::Quad;
use crate::core::bvh::BvhNode;
use crate::core::error::GeometryError;
use crate::core::hittable::{HitRecord, Hittable, Primitive};
use crate::core::hittable_list::HittableList;
use crate::core::material::Material;
use crate::math::aabb::AABB;
use crate::math::constants::{Point3f, Vector3f};
use crate::math::interval::Interval;
use crate::math::ray::Ray3f;
use std::sync::Arc;

/// Axis-aligned box built from six quads. The sides get their own small
/// BVH, the same way compound shapes are accelerated in the scene.
pub struct BoxShape {
    sides: BvhNode,
    bbox: AABB,
}

impl BoxShape {
    /// `a` and `b` are opposite corners, in any coordinate order.
    pub fn new(a: Point3f, b: Point3f, material: Arc<dyn Material>) -> Result<Self, GeometryError> {
        let min = Point3f::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z));
        let max = Point3f::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z));

        let dx = Vector3f::new(max.x - min.x, 0.0, 0.0);
        let dy = Vector3f::new(0.0, max.y - min.y, 0.0);
        let dz = Vector3f::new(0.0, 0.0, max.z - min.z);

        let mut sides = HittableList::new();
        // front
        sides.add(Arc::new(Quad::new(
            Point3f::new(min.x, min.y, max.z), dx, dy, material.clone())?));
        // right
        sides.add(Arc::new(Quad::new(
            Point3f::new(max.x, min.y, max.z), -dz, dy, material.clone())?));
        // back
        sides.add(Arc::new(Quad::new(
            Point3f::new(max.x, min.y, min.z), -dx, dy, material.clone())?));
        // left
        sides.add(Arc::new(Quad::new(
            Point3f::new(min.x, min.y, min.z), dz, dy, material.clone())?));
        // top
        sides.add(Arc::new(Quad::new(
            Point3f::new(min.x, max.y, max.z), dx, -dz, material.clone())?));
        // bottom
        sides.add(Arc::new(Quad::new(
            Point3f::new(min.x, min.y, min.z), dx, dz, material)?));

        let bbox = sides.bounding_box();
        let sides = BvhNode::new(&sides)?;

        Ok(Self { sides, bbox })
    }
}

impl Hittable for BoxShape {
    fn hit(&self, ray: &Ray3f, ray_t: Interval) -> Option<HitRecord> {
        let mut rec = self.sides.hit(ray, ray_t)?;
        rec.primitive = Primitive::Box;
        Some(rec)
    }

    fn bounding_box(&self) -> AABB {
        self.bbox
    }
}

/* Tests for BoxShape */
