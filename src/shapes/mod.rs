// Copyright @yucwang 2026

pub mod boxes;
pub mod quad;
pub mod sphere;
