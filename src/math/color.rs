// Copyright @yucwang 2026

use super::constants::{Color, Float};
use super::interval::Interval;

pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
pub const SKY_BLUE: Color = Color::new(135.0 / 255.0, 206.0 / 255.0, 235.0 / 255.0);

/// Gamma-2 transform of one linear channel.
pub fn linear_to_gamma(linear_component: Float) -> Float {
    if linear_component > 0.0 {
        linear_component.sqrt()
    } else {
        0.0
    }
}

/// Gamma-correct, clamp to [0, 0.999] and quantize a linear pixel color
/// to 8-bit RGB.
pub fn compute_color(pixel_color: &Color) -> [u8; 3] {
    let intensity = Interval::new(0.0, 0.999);

    let r = intensity.clamp(linear_to_gamma(pixel_color[0]));
    let g = intensity.clamp(linear_to_gamma(pixel_color[1]));
    let b = intensity.clamp(linear_to_gamma(pixel_color[2]));

    [
        (256.0 * r) as u8,
        (256.0 * g) as u8,
        (256.0 * b) as u8,
    ]
}

pub fn lerp(a: Float, start: &Color, end: &Color) -> Color {
    (1.0 - a) * start + a * end
}

/* Tests for color */
