// Copyright @yucwang 2026

use super::metal::reflect;
use crate::core::hittable::HitRecord;
use crate::core::material::{Material, Scatter, ScatterRecord, ScatterType};
use crate::core::rng::LcgRng;
use crate::math::color::WHITE;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;

/// `uv` is the unit incoming direction, `cos_theta` the cosine against the
/// normal, `etai_over_etat` the refractive index ratio.
pub fn refract(uv: &Vector3f, n: &Vector3f, cos_theta: Float, etai_over_etat: Float) -> Vector3f {
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.norm_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Clear dielectric (glass, water). Schlick's approximation decides between
/// reflection and refraction; total internal reflection overrides it.
pub struct Dielectric {
    // Refractive index in vacuum or air, or the ratio over the index of the
    // enclosing medium.
    refraction_index: Float,
}

impl Dielectric {
    pub fn new(refraction_index: Float) -> Self {
        Self { refraction_index }
    }

    fn reflectance(cosine: Float, refraction_index: Float) -> Float {
        // Schlick's approximation.
        let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
        let r0 = r0 * r0;
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(
        &self,
        ray_in: &Ray3f,
        rec: &HitRecord,
        rng: &mut LcgRng,
    ) -> Option<ScatterRecord> {
        let ri = if rec.front_face {
            1.0 / self.refraction_index
        } else {
            self.refraction_index
        };

        let unit_direction = ray_in.dir().normalize();
        let cos_theta = (-unit_direction).dot(&rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = ri * sin_theta > 1.0;
        let reflect_prob = Self::reflectance(cos_theta, ri);

        let (scattering_direction, scatter_type) =
            if cannot_refract || reflect_prob > rng.next_float() {
                (reflect(&unit_direction, &rec.normal), ScatterType::Reflect)
            } else {
                (
                    refract(&unit_direction, &rec.normal, cos_theta, ri),
                    ScatterType::Refract,
                )
            };

        let scattered_ray = Ray3f::new(rec.p, scattering_direction, Some(ray_in.time()));

        Some(ScatterRecord {
            // The glass surface absorbs nothing.
            attenuation: WHITE,
            scatter_type,
            scatter: Scatter::Specular { ray: scattered_ray },
        })
    }
}
