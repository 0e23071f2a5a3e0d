/* Copyright 2026 @Yuchen Wong */

pub type Float = f64;
pub type Int = i32;
pub type UInt = u32;

pub type Vector2f = nalgebra::Vector2<Float>;
pub type Vector3f = nalgebra::Vector3<Float>;
pub type Point3f = Vector3f;
pub type Color = Vector3f;

pub const EPSILON: Float = 1e-8;
pub const INFINITY: Float = std::f64::INFINITY;
pub const PI: Float = std::f64::consts::PI;
pub const INV_PI: Float = std::f64::consts::FRAC_1_PI;

pub fn degrees_to_radians(degrees: Float) -> Float {
    degrees * PI / 180.0
}
