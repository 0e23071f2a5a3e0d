// Copyright @yucwang 2026

use crate::core::error::GeometryError;
use crate::core::hittable::{HitRecord, Hittable};
use crate::core::hittable_list::HittableList;
use crate::math::aabb::AABB;
use crate::math::interval::Interval;
use crate::math::ray::Ray3f;
use std::sync::Arc;

/// Binary bounding-volume hierarchy over a list of hittables. Built once by
/// recursive median split along the bounding box's longest axis, immutable
/// afterwards, so traversals may share it freely across threads.
pub struct BvhNode {
    left: Arc<dyn Hittable>,
    // None marks a single-object node; traversal then tests `left` alone,
    // which is equivalent to the duplicated-child formulation.
    right: Option<Arc<dyn Hittable>>,
    bbox: AABB,
    depth: u32,
    node_count: usize,
}

impl BvhNode {
    pub fn new(list: &HittableList) -> Result<Self, GeometryError> {
        Self::from_objects(list.to_objects())
    }

    pub fn from_objects(mut objects: Vec<Arc<dyn Hittable>>) -> Result<Self, GeometryError> {
        if objects.is_empty() {
            return Err(GeometryError::EmptyBvh);
        }

        let len = objects.len();
        Ok(Self::build(&mut objects, 0, len))
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    fn build(objects: &mut Vec<Arc<dyn Hittable>>, start: usize, end: usize) -> Self {
        // Bounding box of the whole span decides the split axis.
        let mut bbox = AABB::EMPTY;
        for object in &objects[start..end] {
            bbox = AABB::enclose(&bbox, &object.bounding_box());
        }
        let axis = bbox.longest_axis();

        let object_span = end - start;
        match object_span {
            1 => Self {
                left: objects[start].clone(),
                right: None,
                bbox,
                depth: 0,
                node_count: 1,
            },
            2 => Self {
                left: objects[start].clone(),
                right: Some(objects[start + 1].clone()),
                bbox,
                depth: 0,
                node_count: 1,
            },
            _ => {
                objects[start..end].sort_unstable_by(|a, b| {
                    let a_min = a.bounding_box().axis_interval(axis).min;
                    let b_min = b.bounding_box().axis_interval(axis).min;
                    a_min.total_cmp(&b_min)
                });

                let mid = start + object_span / 2;
                let left = Self::build(objects, start, mid);
                let right = Self::build(objects, mid, end);

                Self {
                    depth: 1 + left.depth.max(right.depth),
                    node_count: 1 + left.node_count + right.node_count,
                    bbox,
                    left: Arc::new(left),
                    right: Some(Arc::new(right)),
                }
            }
        }
    }
}

impl Hittable for BvhNode {
    fn hit(&self, ray: &Ray3f, ray_t: Interval) -> Option<HitRecord> {
        if !self.bbox.hit(ray, ray_t) {
            return None;
        }

        let hit_left = self.left.hit(ray, ray_t);

        let right = match &self.right {
            Some(right) => right,
            None => return hit_left,
        };

        // Closest-first pruning: the right child only needs to beat the
        // left child's hit.
        let right_max = hit_left.as_ref().map_or(ray_t.max, |rec| rec.t);
        let hit_right = right.hit(ray, Interval::new(ray_t.min, right_max));

        hit_right.or(hit_left)
    }

    fn bounding_box(&self) -> AABB {
        self.bbox
    }
}

/* Tests for BvhNode */
