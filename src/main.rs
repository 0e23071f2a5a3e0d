// Copyright @yucwang 2026

#![allow(dead_code)]

pub extern crate nalgebra as na;

mod core;
mod materials;
mod math;
mod scenes;
mod shapes;
mod textures;

use self::math::bitmap::Bitmap;
use self::scenes::{bouncing_spheres, cornell_box, simple_light};

use std::env;

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <output.png> [--scene cornell|spheres|light] [--spp N] [--max-depth N] [--seed N] [--width N] [--height N]",
            args[0]
        );
        std::process::exit(1);
    }

    let output_path = &args[1];
    let mut scene_name = String::from("cornell");
    let mut spp: u32 = 64;
    let mut max_depth: i32 = 50;
    let mut seed: u64 = 0;
    let mut width: usize = 600;
    let mut height: usize = 600;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--scene" => {
                i += 1;
                if let Some(name) = args.get(i) {
                    scene_name = name.clone();
                }
            }
            "--spp" => {
                i += 1;
                spp = args.get(i).and_then(|v| v.parse::<u32>().ok()).unwrap_or(spp);
            }
            "--max-depth" => {
                i += 1;
                max_depth = args
                    .get(i)
                    .and_then(|v| v.parse::<i32>().ok())
                    .unwrap_or(max_depth);
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(0);
            }
            "--width" => {
                i += 1;
                width = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(width);
            }
            "--height" => {
                i += 1;
                height = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(height);
            }
            _ => {}
        }
        i += 1;
    }

    let (mut scene, mut camera) = match scene_name.as_str() {
        "cornell" => cornell_box(),
        "spheres" => bouncing_spheres(),
        "light" => simple_light(),
        other => {
            eprintln!("unknown scene: {}", other);
            std::process::exit(1);
        }
    }
    .expect("failed to assemble scene");

    scene.samples_per_pixel = spp;
    scene.bounce_max_depth = max_depth;
    scene.build_bvh().expect("failed to build bvh");

    camera.seed = seed;
    camera.initialize(&scene, width, height);

    let mut bitmap = Bitmap::new(width, height);
    camera.render(&scene, &mut bitmap);

    image::save_buffer(
        output_path,
        bitmap.raw(),
        width as u32,
        height as u32,
        image::ColorType::Rgb8,
    )
    .expect("failed to write image");
}
