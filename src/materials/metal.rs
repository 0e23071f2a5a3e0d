// Copyright @yucwang 2026

use crate::core::hittable::HitRecord;
use crate::core::material::{Material, Scatter, ScatterRecord, ScatterType};
use crate::core::rng::LcgRng;
use crate::math::constants::{Color, Float, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::sampling::sample_uniform_sphere;

pub fn reflect(v: &Vector3f, n: &Vector3f) -> Vector3f {
    v - 2.0 * v.dot(n) * n
}

/// Mirror reflector. `fuzz` perturbs the reflected direction with a random
/// unit vector, scaled by at most 1.
pub struct Metal {
    albedo: Color,
    fuzz: Float,
}

impl Metal {
    pub fn new(albedo: Color, fuzz: Float) -> Self {
        Self {
            albedo,
            fuzz: fuzz.min(1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        ray_in: &Ray3f,
        rec: &HitRecord,
        rng: &mut LcgRng,
    ) -> Option<ScatterRecord> {
        let reflected = reflect(&ray_in.dir(), &rec.normal).normalize()
            + self.fuzz * sample_uniform_sphere(rng);
        let reflected_ray = Ray3f::new(rec.p, reflected, Some(ray_in.time()));

        Some(ScatterRecord {
            attenuation: self.albedo,
            scatter_type: ScatterType::Reflect,
            scatter: Scatter::Specular { ray: reflected_ray },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{reflect, Metal};
    use crate::core::hittable::{HitRecord, Primitive};
    use crate::core::material::{Material, Scatter};
    use crate::core::rng::LcgRng;
    use crate::math::color::WHITE;
    use crate::math::constants::{Vector2f, Vector3f};
    use crate::math::ray::Ray3f;
    use std::sync::Arc;

    #[test]
    fn test_reflect_about_normal() {
        let v = Vector3f::new(1.0, -1.0, 0.0);
        let n = Vector3f::new(0.0, 1.0, 0.0);
        assert_eq!(reflect(&v, &n), Vector3f::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_polished_metal_reflects_exactly() {
        let material = Metal::new(WHITE, 0.0);
        let mut rec = HitRecord::new(
            Vector3f::zeros(),
            1.0,
            Arc::new(Metal::new(WHITE, 0.0)),
            Vector2f::zeros(),
            Primitive::Sphere,
        );
        rec.set_face_normal(
            &Vector3f::new(1.0, -1.0, 0.0),
            &Vector3f::new(0.0, 1.0, 0.0),
        );

        let ray_in = Ray3f::new(Vector3f::new(-1.0, 1.0, 0.0), Vector3f::new(1.0, -1.0, 0.0), None);
        let mut rng = LcgRng::new(5);
        let srec = material.scatter(&ray_in, &rec, &mut rng).expect("scatters");

        assert!(srec.is_specular());
        match srec.scatter {
            Scatter::Specular { ray } => {
                let d = ray.dir().normalize();
                let expected = Vector3f::new(1.0, 1.0, 0.0).normalize();
                assert!((d - expected).norm() < 1e-9);
            }
            _ => panic!("metal must scatter specularly"),
        }
    }
}
