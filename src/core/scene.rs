// Copyright @yucwang 2026

use crate::core::bvh::BvhNode;
use crate::core::error::GeometryError;
use crate::core::hittable::{HitRecord, Hittable};
use crate::core::hittable_list::HittableList;
use crate::math::aabb::AABB;
use crate::math::color::BLACK;
use crate::math::constants::{Color, Float, Int};
use crate::math::interval::Interval;
use crate::math::ray::Ray3f;
use log::info;
use std::sync::Arc;
use std::time::Instant;

/// Scene aggregate: the object list, the subset of objects flagged as
/// importance-sampling targets, and the render settings the integrator
/// reads. After `build_bvh` the object list is wrapped in a BVH root and
/// everything is read-only for the duration of the render.
pub struct Scene {
    objects: HittableList,
    lights: Vec<Arc<dyn Hittable>>,
    root: Option<Arc<BvhNode>>,

    pub background: Color,
    pub sky_blend: bool,
    pub bounce_max_depth: Int,
    pub samples_per_pixel: u32,
    pub min_hit_distance: Float,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: HittableList::new(),
            lights: Vec::new(),
            root: None,
            background: BLACK,
            sky_blend: false,
            bounce_max_depth: 10,
            samples_per_pixel: 10,
            min_hit_distance: 0.001,
        }
    }

    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.objects.add(object);
    }

    /// Add an object the integrator should also importance-sample towards.
    /// The shape must support solid-angle sampling.
    pub fn add_light(&mut self, object: Arc<dyn Hittable>) {
        debug_assert!(object.has_pdf());
        self.lights.push(object.clone());
        self.objects.add(object);
    }

    pub fn lights(&self) -> &[Arc<dyn Hittable>] {
        &self.lights
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Wrap the object list in a BVH root. Call once, after the scene is
    /// fully assembled and before rendering.
    pub fn build_bvh(&mut self) -> Result<(), GeometryError> {
        let build_start = Instant::now();
        let root = BvhNode::new(&self.objects)?;
        info!(
            "BVH built: {} nodes, depth {}, {:.1} ms",
            root.node_count(),
            root.depth(),
            build_start.elapsed().as_secs_f64() * 1000.0
        );
        self.root = Some(Arc::new(root));
        Ok(())
    }

    pub fn bvh_root(&self) -> Option<&BvhNode> {
        self.root.as_deref()
    }

    /// Closest intersection, through the BVH root when built, otherwise a
    /// linear scan of the object list.
    pub fn intersect(&self, ray: &Ray3f, ray_t: Interval) -> Option<HitRecord> {
        match &self.root {
            Some(root) => root.hit(ray, ray_t),
            None => self.objects.hit(ray, ray_t),
        }
    }

    pub fn bounding_box(&self) -> AABB {
        self.objects.bounding_box()
    }
}

#[cfg(test)]
mod tests {
    use super::Scene;
    use crate::materials::diffuse_light::DiffuseLight;
    use crate::materials::lambertian::Lambertian;
    use crate::math::color::WHITE;
    use crate::math::constants::{Color, Vector3f};
    use crate::math::interval::Interval;
    use crate::math::ray::Ray3f;
    use crate::shapes::quad::Quad;
    use crate::shapes::sphere::Sphere;
    use std::sync::Arc;

    #[test]
    fn test_scene_registers_lights() {
        let mut scene = Scene::new();
        scene.add(Arc::new(Sphere::stationary(
            Vector3f::new(0.0, 0.0, -3.0),
            1.0,
            Arc::new(Lambertian::from_color(WHITE)),
        )));
        assert_eq!(scene.lights().len(), 0);

        let lamp = Quad::new(
            Vector3f::new(-1.0, 5.0, -1.0),
            Vector3f::new(2.0, 0.0, 0.0),
            Vector3f::new(0.0, 0.0, 2.0),
            Arc::new(DiffuseLight::from_color(Color::new(4.0, 4.0, 4.0))),
        )
        .expect("valid quad");
        scene.add_light(Arc::new(lamp));

        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.object_count(), 2);
    }

    #[test]
    fn test_scene_intersect_with_and_without_bvh() {
        let mut scene = Scene::new();
        scene.add(Arc::new(Sphere::stationary(
            Vector3f::new(0.0, 0.0, -3.0),
            1.0,
            Arc::new(Lambertian::from_color(WHITE)),
        )));

        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), None);
        let range = Interval::new(0.001, 1.0e8);

        let linear = scene.intersect(&ray, range).expect("linear hit");
        scene.build_bvh().expect("bvh build");
        let through_bvh = scene.intersect(&ray, range).expect("bvh hit");

        assert!((linear.t - through_bvh.t).abs() < 1e-12);
    }
}
