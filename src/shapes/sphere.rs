// Copyright @yucwang 2026

use crate::core::hittable::{HitRecord, Hittable, Primitive};
use crate::core::material::Material;
use crate::core::rng::LcgRng;
use crate::math::aabb::AABB;
use crate::math::constants::{Float, INFINITY, PI, Point3f, Vector2f, Vector3f};
use crate::math::interval::Interval;
use crate::math::onb::Onb;
use crate::math::ray::Ray3f;
use crate::math::sampling::sample_to_sphere;
use std::sync::Arc;

/// Sphere with an optionally moving center: `center(t) = origin + t * motion`
/// for ray time t in [0, 1].
pub struct Sphere {
    center: Point3f,
    motion: Vector3f,
    radius: Float,
    material: Arc<dyn Material>,
    bbox: AABB,
}

impl Sphere {
    pub fn stationary(center: Point3f, radius: Float, material: Arc<dyn Material>) -> Self {
        let radius = radius.max(0.0);
        let radius_vector = Vector3f::new(radius, radius, radius);
        let bbox = AABB::from_points(&(center - radius_vector), &(center + radius_vector));

        Self {
            center,
            motion: Vector3f::zeros(),
            radius,
            material,
            bbox,
        }
    }

    pub fn moving(
        start_center: Point3f,
        end_center: Point3f,
        radius: Float,
        material: Arc<dyn Material>,
    ) -> Self {
        let radius = radius.max(0.0);
        let radius_vector = Vector3f::new(radius, radius, radius);
        let box0 = AABB::from_points(&(start_center - radius_vector), &(start_center + radius_vector));
        let box1 = AABB::from_points(&(end_center - radius_vector), &(end_center + radius_vector));

        Self {
            center: start_center,
            motion: end_center - start_center,
            radius,
            material,
            bbox: AABB::enclose(&box0, &box1),
        }
    }

    fn center_at(&self, time: Float) -> Point3f {
        self.center + time * self.motion
    }

    // u: angle around the y axis from x = -1, v: angle from y = -1 to y = +1,
    // both mapped into [0, 1]. `p` lies on the unit sphere.
    fn sphere_uv(p: &Point3f) -> Vector2f {
        let theta = (-p.y).acos();
        let phi = (-p.z).atan2(p.x) + PI;

        Vector2f::new(phi / (2.0 * PI), theta / PI)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray3f, ray_t: Interval) -> Option<HitRecord> {
        let current_center = self.center_at(ray.time());

        let oc = current_center - ray.origin();
        let a = ray.dir().norm_squared();
        let h = ray.dir().dot(&oc);
        let c = oc.norm_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Nearest root inside the acceptable range.
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let phit = ray.at(root);
        let outward_normal = (phit - current_center) / self.radius;

        let mut rec = HitRecord::new(
            phit,
            root,
            self.material.clone(),
            Self::sphere_uv(&outward_normal),
            Primitive::Sphere,
        );
        rec.set_face_normal(&ray.dir(), &outward_normal);

        Some(rec)
    }

    fn bounding_box(&self) -> AABB {
        self.bbox
    }

    /// Density of sampling `direction` over the solid-angle cone the sphere
    /// subtends from `origin`. Only meaningful for stationary spheres.
    fn pdf_value(&self, origin: &Point3f, direction: &Vector3f) -> Float {
        let ray = Ray3f::new(*origin, *direction, None);
        if self.hit(&ray, Interval::new(0.001, INFINITY)).is_none() {
            return 0.0;
        }

        let distance_squared = (self.center - origin).norm_squared();
        let cos_theta_max = (1.0 - self.radius * self.radius / distance_squared)
            .max(0.0)
            .sqrt();
        let solid_angle = 2.0 * PI * (1.0 - cos_theta_max);

        1.0 / solid_angle
    }

    fn random_scattering_ray(&self, origin: &Point3f, rng: &mut LcgRng) -> Vector3f {
        let direction = self.center - origin;
        let distance_squared = direction.norm_squared();
        let uvw = Onb::new(&direction.normalize());

        uvw.transform(&sample_to_sphere(self.radius, distance_squared, rng))
    }

    fn has_pdf(&self) -> bool {
        true
    }
}

/* Tests for Sphere */
