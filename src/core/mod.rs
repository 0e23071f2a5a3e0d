// Copyright @yucwang 2026

pub mod bvh;
pub mod camera;
pub mod error;
pub mod hittable;
pub mod hittable_list;
pub mod material;
pub mod pdf;
pub mod rng;
pub mod scene;
pub mod texture;
