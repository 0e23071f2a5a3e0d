// Copyright @yucwang 2026

use super::solid_color::SolidColor;
use crate::core::texture::Texture;
use crate::math::constants::{Color, Float, Point3f, Vector2f};
use std::sync::Arc;

/// Spatial checker pattern: alternates the two textures on an integer
/// lattice of side `scale`.
pub struct CheckerTexture {
    inv_scale: Float,
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
}

impl CheckerTexture {
    pub fn new(scale: Float, even: Arc<dyn Texture>, odd: Arc<dyn Texture>) -> Self {
        Self {
            inv_scale: 1.0 / scale,
            even,
            odd,
        }
    }

    pub fn from_colors(scale: Float, even: Color, odd: Color) -> Self {
        Self::new(
            scale,
            Arc::new(SolidColor::new(even)),
            Arc::new(SolidColor::new(odd)),
        )
    }
}

impl Texture for CheckerTexture {
    fn value(&self, uv: Vector2f, p: &Point3f) -> Color {
        let x = (self.inv_scale * p.x).floor() as i64;
        let y = (self.inv_scale * p.y).floor() as i64;
        let z = (self.inv_scale * p.z).floor() as i64;

        if (x + y + z) % 2 == 0 {
            self.even.value(uv, p)
        } else {
            self.odd.value(uv, p)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CheckerTexture;
    use crate::core::texture::Texture;
    use crate::math::color::{BLACK, WHITE};
    use crate::math::constants::{Vector2f, Vector3f};

    #[test]
    fn test_checker_alternates_cells() {
        let tex = CheckerTexture::from_colors(1.0, WHITE, BLACK);
        let uv = Vector2f::zeros();

        let a = tex.value(uv, &Vector3f::new(0.5, 0.5, 0.5));
        let b = tex.value(uv, &Vector3f::new(1.5, 0.5, 0.5));
        assert_ne!(a, b);

        let c = tex.value(uv, &Vector3f::new(2.5, 0.5, 0.5));
        assert_eq!(a, c);
    }
}
