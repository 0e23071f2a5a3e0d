// Copyright @yucwang 2026

use crate::core::texture::Texture;
use crate::math::constants::{Color, Point3f, Vector2f};

pub struct SolidColor {
    albedo: Color,
}

impl SolidColor {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Texture for SolidColor {
    fn value(&self, _uv: Vector2f, _p: &Point3f) -> Color {
        self.albedo
    }
}
