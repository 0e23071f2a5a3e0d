// Copyright @yucwang 2026

use crate::math::constants::{Color, Point3f, Vector2f};

pub trait Texture: Send + Sync {
    fn value(&self, uv: Vector2f, p: &Point3f) -> Color;
}
