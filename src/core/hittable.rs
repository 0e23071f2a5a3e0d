// Copyright @yucwang 2026

use crate::core::material::Material;
use crate::core::rng::LcgRng;
use crate::math::aabb::AABB;
use crate::math::constants::{Float, Point3f, Vector2f, Vector3f};
use crate::math::interval::Interval;
use crate::math::ray::Ray3f;
use std::sync::Arc;

/// Tag recorded on every hit so the integrator can tell what kind of
/// primitive was struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Sphere,
    Quad,
    Box,
}

/// Per-intersection output. A successful `hit` builds a fresh record; a
/// `None` return leaves nothing for the caller to read.
pub struct HitRecord {
    pub p: Point3f,
    pub normal: Vector3f,
    pub t: Float,
    pub front_face: bool,
    pub material: Arc<dyn Material>,
    pub uv: Vector2f,
    pub primitive: Primitive,
}

impl HitRecord {
    pub fn new(
        p: Point3f,
        t: Float,
        material: Arc<dyn Material>,
        uv: Vector2f,
        primitive: Primitive,
    ) -> Self {
        Self {
            p,
            normal: Vector3f::zeros(),
            t,
            front_face: false,
            material,
            uv,
            primitive,
        }
    }

    /// Orient the stored normal against the incoming ray and remember which
    /// side was struck. `outward_normal` is assumed to have unit length.
    pub fn set_face_normal(&mut self, ray_dir: &Vector3f, outward_normal: &Vector3f) {
        self.front_face = ray_dir.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            *outward_normal
        } else {
            -outward_normal
        };
    }
}

pub trait Hittable: Send + Sync {
    fn hit(&self, ray: &Ray3f, ray_t: Interval) -> Option<HitRecord>;

    fn bounding_box(&self) -> AABB;

    /// Density of `random_scattering_ray` picking `direction` from `origin`.
    /// Non-zero only for shapes that support solid-angle light sampling.
    fn pdf_value(&self, _origin: &Point3f, _direction: &Vector3f) -> Float {
        0.0
    }

    /// Random direction from `origin` towards this shape.
    fn random_scattering_ray(&self, _origin: &Point3f, _rng: &mut LcgRng) -> Vector3f {
        Vector3f::new(1.0, 0.0, 0.0)
    }

    /// Marks importance-sampling targets (lights) for the scene.
    fn has_pdf(&self) -> bool {
        false
    }
}
