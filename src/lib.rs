// Copyright @yucwang 2026

#![allow(dead_code)]

pub extern crate nalgebra as na;

pub mod core;
pub mod materials;
pub mod math;
pub mod scenes;
pub mod shapes;
pub mod textures;
