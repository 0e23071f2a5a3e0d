// Copyright @yucwang 2026

use crate::core::hittable::HitRecord;
use crate::core::material::Material;
use crate::core::texture::Texture;
use crate::math::color::BLACK;
use crate::math::constants::Color;
use crate::math::ray::Ray3f;
use crate::textures::solid_color::SolidColor;
use std::sync::Arc;

/// Emits from its front face and never scatters.
pub struct DiffuseLight {
    texture: Arc<dyn Texture>,
}

impl DiffuseLight {
    pub fn from_color(emit: Color) -> Self {
        Self {
            texture: Arc::new(SolidColor::new(emit)),
        }
    }

    pub fn from_texture(texture: Arc<dyn Texture>) -> Self {
        Self { texture }
    }
}

impl Material for DiffuseLight {
    fn emitted(&self, _ray_in: &Ray3f, rec: &HitRecord) -> Color {
        if !rec.front_face {
            return BLACK;
        }

        self.texture.value(rec.uv, &rec.p)
    }
}
