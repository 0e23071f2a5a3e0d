// Copyright @yucwang 2026

use crate::core::hittable::HitRecord;
use crate::core::material::{Material, Scatter, ScatterRecord, ScatterType};
use crate::core::pdf::UniformSpherePdf;
use crate::core::rng::LcgRng;
use crate::core::texture::Texture;
use crate::math::constants::{Color, Float, PI};
use crate::math::ray::Ray3f;
use crate::textures::solid_color::SolidColor;
use std::sync::Arc;

/// Direction-independent scatterer: every outgoing direction on the sphere
/// is equally likely.
pub struct Isotropic {
    texture: Arc<dyn Texture>,
}

impl Isotropic {
    pub fn from_color(albedo: Color) -> Self {
        Self {
            texture: Arc::new(SolidColor::new(albedo)),
        }
    }

    pub fn from_texture(texture: Arc<dyn Texture>) -> Self {
        Self { texture }
    }
}

impl Material for Isotropic {
    fn scatter(
        &self,
        _ray_in: &Ray3f,
        rec: &HitRecord,
        _rng: &mut LcgRng,
    ) -> Option<ScatterRecord> {
        Some(ScatterRecord {
            attenuation: self.texture.value(rec.uv, &rec.p),
            scatter_type: ScatterType::Reflect,
            scatter: Scatter::Diffuse {
                pdf: Box::new(UniformSpherePdf),
            },
        })
    }

    fn scattering_pdf_value(
        &self,
        _ray_in: &Ray3f,
        _rec: &HitRecord,
        _scattered: &Ray3f,
    ) -> Float {
        1.0 / (4.0 * PI)
    }
}
