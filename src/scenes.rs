// Copyright @yucwang 2026

use crate::core::camera::Camera;
use crate::core::error::GeometryError;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::materials::dielectric::Dielectric;
use crate::materials::diffuse_light::DiffuseLight;
use crate::materials::lambertian::Lambertian;
use crate::materials::metal::Metal;
use crate::math::color::{BLACK, WHITE};
use crate::math::constants::{Color, Float, Point3f, Vector3f};
use crate::shapes::boxes::BoxShape;
use crate::shapes::quad::Quad;
use crate::shapes::sphere::Sphere;
use crate::textures::checker::CheckerTexture;
use std::sync::Arc;

/// The classic box room with a ceiling lamp and two blocks.
pub fn cornell_box() -> Result<(Scene, Camera), GeometryError> {
    let mut scene = Scene::new();
    scene.background = BLACK;

    let red = Arc::new(Lambertian::from_color(Color::new(0.65, 0.05, 0.05)));
    let white = Arc::new(Lambertian::from_color(Color::new(0.73, 0.73, 0.73)));
    let green = Arc::new(Lambertian::from_color(Color::new(0.12, 0.45, 0.15)));
    let light = Arc::new(DiffuseLight::from_color(Color::new(15.0, 15.0, 15.0)));

    scene.add(Arc::new(Quad::new(
        Point3f::new(555.0, 0.0, 0.0),
        Vector3f::new(0.0, 555.0, 0.0),
        Vector3f::new(0.0, 0.0, 555.0),
        green,
    )?));
    scene.add(Arc::new(Quad::new(
        Point3f::new(0.0, 0.0, 0.0),
        Vector3f::new(0.0, 555.0, 0.0),
        Vector3f::new(0.0, 0.0, 555.0),
        red,
    )?));
    scene.add_light(Arc::new(Quad::new(
        Point3f::new(343.0, 554.0, 332.0),
        Vector3f::new(-130.0, 0.0, 0.0),
        Vector3f::new(0.0, 0.0, -105.0),
        light,
    )?));
    scene.add(Arc::new(Quad::new(
        Point3f::new(0.0, 0.0, 0.0),
        Vector3f::new(555.0, 0.0, 0.0),
        Vector3f::new(0.0, 0.0, 555.0),
        white.clone(),
    )?));
    scene.add(Arc::new(Quad::new(
        Point3f::new(555.0, 555.0, 555.0),
        Vector3f::new(-555.0, 0.0, 0.0),
        Vector3f::new(0.0, 0.0, -555.0),
        white.clone(),
    )?));
    scene.add(Arc::new(Quad::new(
        Point3f::new(0.0, 0.0, 555.0),
        Vector3f::new(555.0, 0.0, 0.0),
        Vector3f::new(0.0, 555.0, 0.0),
        white.clone(),
    )?));

    scene.add(Arc::new(BoxShape::new(
        Point3f::new(130.0, 0.0, 65.0),
        Point3f::new(295.0, 165.0, 230.0),
        white.clone(),
    )?));
    scene.add(Arc::new(BoxShape::new(
        Point3f::new(265.0, 0.0, 295.0),
        Point3f::new(430.0, 330.0, 460.0),
        white,
    )?));

    // A glass sphere in front of the tall block. Sampling towards it picks
    // up the caustic it throws on the floor.
    scene.add_light(Arc::new(Sphere::stationary(
        Point3f::new(190.0, 90.0, 190.0),
        90.0,
        Arc::new(Dielectric::new(1.5)),
    )));

    let mut camera = Camera::new();
    camera.vertical_fov = 40.0;
    camera.lookfrom = Point3f::new(278.0, 278.0, -800.0);
    camera.lookat = Point3f::new(278.0, 278.0, 0.0);
    camera.world_up = Vector3f::new(0.0, 1.0, 0.0);
    camera.defocus_angle = 0.0;
    camera.focus_distance = 10.0;

    Ok((scene, camera))
}

/// A field of small random spheres around three large ones, with a sky
/// gradient background and a slight defocus blur.
pub fn bouncing_spheres() -> Result<(Scene, Camera), GeometryError> {
    let mut scene = Scene::new();
    scene.sky_blend = true;

    let checker = Arc::new(CheckerTexture::from_colors(
        0.32,
        Color::new(0.2, 0.3, 0.1),
        Color::new(0.9, 0.9, 0.9),
    ));
    scene.add(Arc::new(Sphere::stationary(
        Point3f::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::from_texture(checker)),
    )));

    let mut rng = LcgRng::new(7);
    for a in -11..11 {
        for b in -11..11 {
            let choose_material = rng.next_float();
            let center = Point3f::new(
                a as Float + 0.9 * rng.next_float(),
                0.2,
                b as Float + 0.9 * rng.next_float(),
            );

            if (center - Point3f::new(4.0, 0.2, 0.0)).norm() <= 0.9 {
                continue;
            }

            if choose_material < 0.8 {
                let albedo = Color::new(
                    rng.next_float() * rng.next_float(),
                    rng.next_float() * rng.next_float(),
                    rng.next_float() * rng.next_float(),
                );
                let end_center = center + Vector3f::new(0.0, rng.next_in_range(0.0, 0.5), 0.0);
                scene.add(Arc::new(Sphere::moving(
                    center,
                    end_center,
                    0.2,
                    Arc::new(Lambertian::from_color(albedo)),
                )));
            } else if choose_material < 0.95 {
                let albedo = Color::new(
                    rng.next_in_range(0.5, 1.0),
                    rng.next_in_range(0.5, 1.0),
                    rng.next_in_range(0.5, 1.0),
                );
                let fuzz = rng.next_in_range(0.0, 0.5);
                scene.add(Arc::new(Sphere::stationary(
                    center,
                    0.2,
                    Arc::new(Metal::new(albedo, fuzz)),
                )));
            } else {
                scene.add(Arc::new(Sphere::stationary(
                    center,
                    0.2,
                    Arc::new(Dielectric::new(1.5)),
                )));
            }
        }
    }

    scene.add(Arc::new(Sphere::stationary(
        Point3f::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Dielectric::new(1.5)),
    )));
    scene.add(Arc::new(Sphere::stationary(
        Point3f::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::from_color(Color::new(0.4, 0.2, 0.1))),
    )));
    scene.add(Arc::new(Sphere::stationary(
        Point3f::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )));

    let mut camera = Camera::new();
    camera.vertical_fov = 20.0;
    camera.lookfrom = Point3f::new(13.0, 2.0, 3.0);
    camera.lookat = Point3f::new(0.0, 0.0, 0.0);
    camera.world_up = Vector3f::new(0.0, 1.0, 0.0);
    camera.defocus_angle = 0.6;
    camera.focus_distance = 10.0;

    Ok((scene, camera))
}

/// A lit sphere over a ground plane against an empty background. Small and
/// quick, useful for sanity renders.
pub fn simple_light() -> Result<(Scene, Camera), GeometryError> {
    let mut scene = Scene::new();
    scene.background = BLACK;

    scene.add(Arc::new(Sphere::stationary(
        Point3f::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::from_color(Color::new(0.48, 0.83, 0.53))),
    )));
    scene.add(Arc::new(Sphere::stationary(
        Point3f::new(0.0, 2.0, 0.0),
        2.0,
        Arc::new(Lambertian::from_color(WHITE)),
    )));
    scene.add_light(Arc::new(Quad::new(
        Point3f::new(3.0, 1.0, -2.0),
        Vector3f::new(2.0, 0.0, 0.0),
        Vector3f::new(0.0, 2.0, 0.0),
        Arc::new(DiffuseLight::from_color(Color::new(4.0, 4.0, 4.0))),
    )?));

    let mut camera = Camera::new();
    camera.vertical_fov = 20.0;
    camera.lookfrom = Point3f::new(26.0, 3.0, 6.0);
    camera.lookat = Point3f::new(0.0, 2.0, 0.0);
    camera.world_up = Vector3f::new(0.0, 1.0, 0.0);

    Ok((scene, camera))
}

#[cfg(test)]
mod tests {
    use super::{bouncing_spheres, cornell_box, simple_light};

    #[test]
    fn test_cornell_box_assembles() {
        let (mut scene, _camera) = cornell_box().expect("cornell box must assemble");
        assert_eq!(scene.object_count(), 9);
        // The lamp and the glass sphere are the sampling targets.
        assert_eq!(scene.lights().len(), 2);
        scene.build_bvh().expect("bvh build");
    }

    #[test]
    fn test_bouncing_spheres_assembles() {
        let (mut scene, _camera) = bouncing_spheres().expect("sphere field must assemble");
        assert!(scene.object_count() > 100);
        scene.build_bvh().expect("bvh build");
    }

    #[test]
    fn test_simple_light_assembles() {
        let (mut scene, _camera) = simple_light().expect("light scene must assemble");
        assert_eq!(scene.object_count(), 3);
        assert_eq!(scene.lights().len(), 1);
        scene.build_bvh().expect("bvh build");
    }
}
