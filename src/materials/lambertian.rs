// Copyright @yucwang 2026

use crate::core::hittable::HitRecord;
use crate::core::material::{Material, Scatter, ScatterRecord, ScatterType};
use crate::core::pdf::CosineHemispherePdf;
use crate::core::rng::LcgRng;
use crate::core::texture::Texture;
use crate::math::constants::{Color, Float, INV_PI};
use crate::math::ray::Ray3f;
use crate::textures::solid_color::SolidColor;
use std::sync::Arc;

/// Ideal diffuse reflector with cosine-weighted scattering.
pub struct Lambertian {
    texture: Arc<dyn Texture>,
}

impl Lambertian {
    pub fn from_color(albedo: Color) -> Self {
        Self {
            texture: Arc::new(SolidColor::new(albedo)),
        }
    }

    pub fn from_texture(texture: Arc<dyn Texture>) -> Self {
        Self { texture }
    }
}

impl Material for Lambertian {
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
                pdf: Box::new(CosineHemispherePdf::new(&rec.normal)),
            },
        })
    }

    fn scattering_pdf_value(
        &self,
        _ray_in: &Ray3f,
        rec: &HitRecord,
        scattered: &Ray3f,
    ) -> Float {
        let cos_theta = rec.normal.dot(&scattered.dir().normalize());
        if cos_theta < 0.0 {
            0.0
        } else {
            cos_theta * INV_PI
        }
    }
}
