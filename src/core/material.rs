// Copyright @yucwang 2026

use crate::core::hittable::HitRecord;
use crate::core::pdf::Pdf;
use crate::core::rng::LcgRng;
use crate::math::color::BLACK;
use crate::math::constants::{Color, Float};
use crate::math::ray::Ray3f;

/// Whether a bounce reflected off or refracted through the surface. Only
/// used for ray statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterType {
    Reflect,
    Refract,
}

/// How a scattered ray continues: a delta-distributed specular ray, or a
/// diffuse density to importance-sample from.
pub enum Scatter {
    Specular { ray: Ray3f },
    Diffuse { pdf: Box<dyn Pdf> },
}

/// Output of `Material::scatter`.
pub struct ScatterRecord {
    pub attenuation: Color,
    pub scatter_type: ScatterType,
    pub scatter: Scatter,
}

impl ScatterRecord {
    pub fn is_specular(&self) -> bool {
        matches!(self.scatter, Scatter::Specular { .. })
    }
}

pub trait Material: Send + Sync {
    /// Purely emissive surfaces return `None`.
    fn scatter(
        &self,
        _ray_in: &Ray3f,
        _rec: &HitRecord,
        _rng: &mut LcgRng,
    ) -> Option<ScatterRecord> {
        None
    }

    fn emitted(&self, _ray_in: &Ray3f, _rec: &HitRecord) -> Color {
        BLACK
    }

    /// The material's own BRDF-weighted density for `scattered`, combined by
    /// the integrator with the sampling density.
    fn scattering_pdf_value(
        &self,
        _ray_in: &Ray3f,
        _rec: &HitRecord,
        _scattered: &Ray3f,
    ) -> Float {
        0.0
    }
}
