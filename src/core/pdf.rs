// Copyright @yucwang 2026

use crate::core::hittable::Hittable;
use crate::core::rng::LcgRng;
use crate::math::constants::{Float, PI, Point3f, Vector3f};
use crate::math::onb::Onb;
use crate::math::sampling::{sample_cosine_hemisphere, sample_uniform_sphere};
use std::sync::Arc;

/// Probability density over scattering directions. `value` reports the
/// density of `direction`; `generate` draws a direction from the same
/// distribution.
pub trait Pdf {
    fn value(&self, direction: &Vector3f) -> Float;
    fn generate(&self, rng: &mut LcgRng) -> Vector3f;
}

/// Uniform density over the whole sphere of directions.
pub struct UniformSpherePdf;

impl Pdf for UniformSpherePdf {
    fn value(&self, _direction: &Vector3f) -> Float {
        1.0 / (4.0 * PI)
    }

    fn generate(&self, rng: &mut LcgRng) -> Vector3f {
        sample_uniform_sphere(rng)
    }
}

/// Cosine-weighted density over the hemisphere around a surface normal.
pub struct CosineHemispherePdf {
    uvw: Onb,
}

impl CosineHemispherePdf {
    pub fn new(normal: &Vector3f) -> Self {
        Self { uvw: Onb::new(normal) }
    }
}

impl Pdf for CosineHemispherePdf {
    fn value(&self, direction: &Vector3f) -> Float {
        let cosine_theta = direction.normalize().dot(self.uvw.w());
        (cosine_theta / PI).max(0.0)
    }

    fn generate(&self, rng: &mut LcgRng) -> Vector3f {
        let local = sample_cosine_hemisphere(rng);
        self.uvw.transform(&local).normalize()
    }
}

/// Solid-angle density of directions from a point towards one shape.
pub struct HittablePdf<'a> {
    object: &'a dyn Hittable,
    hit_point: Point3f,
}

impl<'a> HittablePdf<'a> {
    pub fn new(object: &'a dyn Hittable, hit_point: Point3f) -> Self {
        Self { object, hit_point }
    }
}

impl<'a> Pdf for HittablePdf<'a> {
    fn value(&self, direction: &Vector3f) -> Float {
        self.object.pdf_value(&self.hit_point, direction)
    }

    fn generate(&self, rng: &mut LcgRng) -> Vector3f {
        self.object.random_scattering_ray(&self.hit_point, rng)
    }
}

/// Uniform 1/N mixture over a list of light shapes. `value` averages the
/// per-light densities; `generate` samples one light picked uniformly at
/// random.
pub struct HittablesPdf<'a> {
    hittables: &'a [Arc<dyn Hittable>],
    hit_point: Point3f,
}

impl<'a> HittablesPdf<'a> {
    pub fn new(hittables: &'a [Arc<dyn Hittable>], hit_point: Point3f) -> Self {
        Self { hittables, hit_point }
    }
}

impl<'a> Pdf for HittablesPdf<'a> {
    fn value(&self, direction: &Vector3f) -> Float {
        let weight = 1.0 / (self.hittables.len() as Float);

        self.hittables
            .iter()
            .map(|object| weight * object.pdf_value(&self.hit_point, direction))
            .sum()
    }

    fn generate(&self, rng: &mut LcgRng) -> Vector3f {
        let index = rng.next_int(0, self.hittables.len() as i32 - 1) as usize;
        self.hittables[index].random_scattering_ray(&self.hit_point, rng)
    }
}

/// Unbiased 50/50 blend of two densities.
pub struct MixturePdf<'a> {
    p0: &'a dyn Pdf,
    p1: &'a dyn Pdf,
}

impl<'a> MixturePdf<'a> {
    pub fn new(p0: &'a dyn Pdf, p1: &'a dyn Pdf) -> Self {
        Self { p0, p1 }
    }
}

impl<'a> Pdf for MixturePdf<'a> {
    fn value(&self, direction: &Vector3f) -> Float {
        0.5 * self.p0.value(direction) + 0.5 * self.p1.value(direction)
    }

    fn generate(&self, rng: &mut LcgRng) -> Vector3f {
        if rng.next_float() < 0.5 {
            self.p0.generate(rng)
        } else {
            self.p1.generate(rng)
        }
    }
}

/* Tests for the PDF framework */
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::LcgRng;
    use crate::math::constants::{Float, PI, Vector3f};

    #[test]
    fn test_uniform_sphere_pdf_value() {
        let pdf = UniformSpherePdf;
        let expected = 1.0 / (4.0 * PI);
        assert_eq!(pdf.value(&Vector3f::new(0.0, 1.0, 0.0)), expected);
        assert_eq!(pdf.value(&Vector3f::new(1.0, -2.0, 0.5)), expected);
    }

    #[test]
    fn test_cosine_pdf_zero_below_horizon() {
        let pdf = CosineHemispherePdf::new(&Vector3f::new(0.0, 1.0, 0.0));
        assert_eq!(pdf.value(&Vector3f::new(0.0, -1.0, 0.0)), 0.0);
        assert!((pdf.value(&Vector3f::new(0.0, 1.0, 0.0)) - 1.0 / PI).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_pdf_generates_above_horizon() {
        let normal = Vector3f::new(0.0, 1.0, 0.0);
        let pdf = CosineHemispherePdf::new(&normal);
        let mut rng = LcgRng::new(29);

        for _ in 0..1000 {
            let d = pdf.generate(&mut rng);
            assert!(d.dot(&normal) >= 0.0);
            assert!((d.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_cosine_pdf_normalization() {
        // Monte-Carlo integration of the density over the sphere of
        // directions with uniform sampling must converge to 1.
        let pdf = CosineHemispherePdf::new(&Vector3f::new(0.0, 0.0, 1.0));
        let uniform = UniformSpherePdf;
        let mut rng = LcgRng::new(31);

        let samples = 200_000;
        let mut sum = 0.0;
        for _ in 0..samples {
            let d = uniform.generate(&mut rng);
            sum += pdf.value(&d) / uniform.value(&d);
        }

        let integral = sum / (samples as Float);
        assert!(
            (integral - 1.0).abs() < 0.01,
            "integral = {}",
            integral
        );
    }

    #[test]
    fn test_hittable_pdf_follows_shape() {
        use crate::materials::lambertian::Lambertian;
        use crate::math::color::WHITE;
        use crate::shapes::sphere::Sphere;
        use std::sync::Arc;

        let sphere = Sphere::stationary(
            Vector3f::new(0.0, 0.0, -4.0),
            1.0,
            Arc::new(Lambertian::from_color(WHITE)),
        );
        let pdf = HittablePdf::new(&sphere, Vector3f::zeros());
        let mut rng = LcgRng::new(43);

        let towards = Vector3f::new(0.0, 0.0, -1.0);
        assert_eq!(pdf.value(&towards), sphere.pdf_value(&Vector3f::zeros(), &towards));
        assert_eq!(pdf.value(&Vector3f::new(0.0, 1.0, 0.0)), 0.0);

        for _ in 0..100 {
            let d = pdf.generate(&mut rng);
            assert!(pdf.value(&d) > 0.0);
        }
    }

    #[test]
    fn test_mixture_pdf_value_blend() {
        let uniform = UniformSpherePdf;
        let cosine = CosineHemispherePdf::new(&Vector3f::new(0.0, 0.0, 1.0));
        let mix = MixturePdf::new(&uniform, &cosine);

        let up = Vector3f::new(0.0, 0.0, 1.0);
        let expected = 0.5 * uniform.value(&up) + 0.5 * cosine.value(&up);
        assert!((mix.value(&up) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_mixture_pdf_generate_split() {
        // One sub-PDF only emits hemisphere directions, the other the whole
        // sphere. Counting below-horizon draws estimates how often the
        // uniform branch was taken: for a fair coin it is 25% of all draws.
        let uniform = UniformSpherePdf;
        let cosine = CosineHemispherePdf::new(&Vector3f::new(0.0, 0.0, 1.0));
        let mix = MixturePdf::new(&uniform, &cosine);
        let mut rng = LcgRng::new(37);

        let draws = 10_000;
        let mut below = 0usize;
        for _ in 0..draws {
            if mix.generate(&mut rng).z < 0.0 {
                below += 1;
            }
        }

        let fraction = below as Float / draws as Float;
        assert!(
            (fraction - 0.25).abs() < 0.03,
            "below-horizon fraction = {}",
            fraction
        );
    }
}
