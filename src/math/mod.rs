// Copyright 2026 @TwoCookingMice

pub mod aabb;
pub mod bitmap;
pub mod color;
pub mod constants;
pub mod interval;
pub mod onb;
pub mod ray;
pub mod sampling;
