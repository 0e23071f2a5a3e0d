// Copyright @yucwang 2026

use crate::core::hittable::{HitRecord, Hittable};
use crate::math::aabb::AABB;
use crate::math::interval::Interval;
use crate::math::ray::Ray3f;
use std::sync::Arc;

/// Linear aggregate of hittables. Serves as the scene's object store before
/// the BVH is built, and as the compound shape for boxes.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Arc<dyn Hittable>>,
    bbox: AABB,
}

impl HittableList {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            bbox: AABB::EMPTY,
        }
    }

    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.bbox = AABB::enclose(&self.bbox, &object.bounding_box());
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn to_objects(&self) -> Vec<Arc<dyn Hittable>> {
        self.objects.clone()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray3f, ray_t: Interval) -> Option<HitRecord> {
        let mut closest_so_far = ray_t.max;
        let mut closest_hit = None;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest_hit = Some(rec);
            }
        }

        closest_hit
    }

    fn bounding_box(&self) -> AABB {
        self.bbox
    }
}
