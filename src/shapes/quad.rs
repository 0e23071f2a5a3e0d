// Copyright @yucwang 2026

use crate::core::error::GeometryError;
use crate::core::hittable::{HitRecord, Hittable, Primitive};
use crate::core::material::Material;
use crate::core::rng::LcgRng;
use crate::math::aabb::AABB;
use crate::math::constants::{EPSILON, Float, INFINITY, Point3f, Vector2f, Vector3f};
use crate::math::interval::Interval;
use crate::math::ray::Ray3f;
use std::sync::Arc;

/// Planar parallelogram anchored at `q` and spanned by the edge vectors
/// `u` and `v`.
pub struct Quad {
    q: Point3f,
    u: Vector3f,
    v: Vector3f,
    w: Vector3f,
    normal: Vector3f,
    d: Float,
    area: Float,
    material: Arc<dyn Material>,
    bbox: AABB,
}

impl Quad {
    pub fn new(
        q: Point3f,
        u: Vector3f,
        v: Vector3f,
        material: Arc<dyn Material>,
    ) -> Result<Self, GeometryError> {
        let n = u.cross(&v);
        let cross_norm = n.norm();
        if cross_norm < EPSILON {
            return Err(GeometryError::DegenerateQuad { cross_norm });
        }

        let normal = n / cross_norm;
        let d = normal.dot(&q);
        let w = n / n.dot(&n);

        // Bounding box of all four vertices, via the two diagonals.
        let diagonal1 = AABB::from_points(&q, &(q + u + v));
        let diagonal2 = AABB::from_points(&(q + u), &(q + v));
        let bbox = AABB::enclose(&diagonal1, &diagonal2);

        Ok(Self {
            q,
            u,
            v,
            w,
            normal,
            d,
            area: cross_norm,
            material,
            bbox,
        })
    }
}

impl Hittable for Quad {
    fn hit(&self, ray: &Ray3f, ray_t: Interval) -> Option<HitRecord> {
        let denom = self.normal.dot(&ray.dir());

        // Parallel to the plane.
        if denom.abs() < EPSILON {
            return None;
        }

        let t = (self.d - self.normal.dot(&ray.origin())) / denom;
        if !ray_t.surrounds(t) {
            return None;
        }

        // Planar coordinates of the hit point in the (u, v) frame.
        let p = ray.at(t);
        let planar_hit = p - self.q;
        let alpha = self.w.dot(&planar_hit.cross(&self.v));
        let beta = self.w.dot(&self.u.cross(&planar_hit));

        if !Interval::UNITARY.contains(alpha) || !Interval::UNITARY.contains(beta) {
            return None;
        }

        let mut rec = HitRecord::new(
            p,
            t,
            self.material.clone(),
            Vector2f::new(alpha, beta),
            Primitive::Quad,
        );
        rec.set_face_normal(&ray.dir(), &self.normal);

        Some(rec)
    }

    fn bounding_box(&self) -> AABB {
        self.bbox
    }

    /// Area-based density converted to solid angle at `origin`.
    fn pdf_value(&self, origin: &Point3f, direction: &Vector3f) -> Float {
        let ray = Ray3f::new(*origin, *direction, None);
        let rec = match self.hit(&ray, Interval::new(0.001, INFINITY)) {
            Some(rec) => rec,
            None => return 0.0,
        };

        let distance_squared = rec.t * rec.t * direction.norm_squared();
        let cosine = (direction.dot(&rec.normal) / direction.norm()).abs();

        distance_squared / (cosine * self.area)
    }

    fn random_scattering_ray(&self, origin: &Point3f, rng: &mut LcgRng) -> Vector3f {
        let p = self.q + rng.next_float() * self.u + rng.next_float() * self.v;
        p - origin
    }

    fn has_pdf(&self) -> bool {
        true
    }
}

/* Tests for Quad */
#[cfg(test)]
mod tests {
    use super::Quad;
    use crate::core::hittable::Hittable;
    use crate::core::rng::LcgRng;
    use crate::materials::lambertian::Lambertian;
    use crate::math::color::WHITE;
    use crate::math::constants::{Float, Vector3f};
    use crate::math::interval::Interval;
    use crate::math::ray::Ray3f;
    use std::sync::Arc;

    fn unit_quad() -> Quad {
        Quad::new(
            Vector3f::new(0.0, 0.0, -2.0),
            Vector3f::new(1.0, 0.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
            Arc::new(Lambertian::from_color(WHITE)),
        )
        .expect("valid quad")
    }

    #[test]
    fn test_quad_hit_inside_and_outside() {
        let quad = unit_quad();
        let range = Interval::new(0.001, 1.0e8);

        let inside = Ray3f::new(Vector3f::new(0.5, 0.5, 0.0), Vector3f::new(0.0, 0.0, -1.0), None);
        let rec = quad.hit(&inside, range).expect("center shot must hit");
        assert!((rec.t - 2.0).abs() < 1e-9);
        assert_eq!(rec.uv, nalgebra::Vector2::new(0.5, 0.5));

        let outside = Ray3f::new(Vector3f::new(1.5, 0.5, 0.0), Vector3f::new(0.0, 0.0, -1.0), None);
        assert!(quad.hit(&outside, range).is_none());

        let parallel = Ray3f::new(Vector3f::new(0.5, 0.5, 0.0), Vector3f::new(1.0, 0.0, 0.0), None);
        assert!(quad.hit(&parallel, range).is_none());
    }

    #[test]
    fn test_quad_degenerate_edges_rejected() {
        let result = Quad::new(
            Vector3f::zeros(),
            Vector3f::new(1.0, 0.0, 0.0),
            Vector3f::new(2.0, 0.0, 0.0),
            Arc::new(Lambertian::from_color(WHITE)),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_quad_pdf_value_head_on() {
        // Unit-area quad seen head-on from distance 2: pdf = d^2 / area.
        let quad = unit_quad();
        let origin = Vector3f::new(0.5, 0.5, 0.0);
        let direction = Vector3f::new(0.0, 0.0, -1.0);

        let pdf = quad.pdf_value(&origin, &direction);
        assert!((pdf - 4.0).abs() < 1e-9, "pdf = {}", pdf);

        assert_eq!(quad.pdf_value(&origin, &Vector3f::new(0.0, 1.0, 0.0)), 0.0);
    }

    #[test]
    fn test_quad_random_rays_land_on_quad() {
        let quad = unit_quad();
        let origin = Vector3f::new(0.5, 0.5, 1.0);
        let mut rng = LcgRng::new(23);

        for _ in 0..500 {
            let dir = quad.random_scattering_ray(&origin, &mut rng);
            let ray = Ray3f::new(origin, dir, None);
            assert!(quad.hit(&ray, Interval::new(0.001, 1.0e8)).is_some());
        }
    }

    #[test]
    fn test_quad_pdf_integrates_against_sampling() {
        // E[1/pdf] over the quad's own samples equals the solid angle it
        // subtends, so E[pdf(sample)] stays finite and positive.
        let quad = unit_quad();
        let origin = Vector3f::new(0.5, 0.5, 1.0);
        let mut rng = LcgRng::new(41);

        let mut sum = 0.0;
        let samples = 2000;
        for _ in 0..samples {
            let dir = quad.random_scattering_ray(&origin, &mut rng);
            let pdf = quad.pdf_value(&origin, &dir);
            assert!(pdf > 0.0);
            sum += 1.0 / pdf;
        }

        let solid_angle_estimate = sum / samples as Float;
        // The quad covers a visible but clearly sub-hemisphere solid angle.
        assert!(solid_angle_estimate > 0.05 && solid_angle_estimate < 2.0 * std::f64::consts::PI);
    }
}
