// Copyright @yucwang 2026

use super::constants::{Float, PI, Vector2f, Vector3f};
use crate::core::rng::LcgRng;

/// Uniformly distributed point on the unit sphere.
pub fn sample_uniform_sphere(rng: &mut LcgRng) -> Vector3f {
    let z = 1.0 - 2.0 * rng.next_float();
    let r = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * PI * rng.next_float();

    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/// Concentric mapping of the unit square onto the unit disk.
pub fn sample_uniform_disk_concentric(u: &Vector2f) -> Vector2f {
    let r1 = 2.0 * u.x - 1.0;
    let r2 = 2.0 * u.y - 1.0;

    let (r, phi) = if r1 == 0.0 && r2 == 0.0 {
        (0.0, 0.0)
    } else if r1 * r1 > r2 * r2 {
        (r1, (PI / 4.0) * (r2 / r1))
    } else {
        (r2, (PI / 2.0) - (r1 / r2) * (PI / 4.0))
    };

    let (sin_phi, cos_phi) = phi.sin_cos();
    Vector2f::new(r * cos_phi, r * sin_phi)
}

/// Cosine-weighted direction in the local frame where +z is the normal.
pub fn sample_cosine_hemisphere(rng: &mut LcgRng) -> Vector3f {
    let u = Vector2f::new(rng.next_float(), rng.next_float());
    let p = sample_uniform_disk_concentric(&u);
    let z = (1.0 - p.x * p.x - p.y * p.y).max(0.0).sqrt();

    Vector3f::new(p.x, p.y, z)
}

/// Jittered offset inside the stratified sub-cell (`s_row`, `s_col`) of the
/// pixel's sqrt_spp x sqrt_spp grid, centered so the result lies in
/// [-0.5, 0.5] per component.
pub fn sample_square_stratified(
    s_row: usize,
    s_col: usize,
    inv_sqrt_spp: Float,
    rng: &mut LcgRng,
) -> Vector2f {
    let px = ((s_col as Float) + rng.next_float()) * inv_sqrt_spp - 0.5;
    let py = ((s_row as Float) + rng.next_float()) * inv_sqrt_spp - 0.5;

    Vector2f::new(px, py)
}

/// Random point on the defocus disk spanned by the two basis vectors.
pub fn sample_defocus_disk(
    center: &Vector3f,
    disk_u: &Vector3f,
    disk_v: &Vector3f,
    rng: &mut LcgRng,
) -> Vector3f {
    let u = Vector2f::new(rng.next_float(), rng.next_float());
    let p = sample_uniform_disk_concentric(&u);

    center + p.x * disk_u + p.y * disk_v
}

/// Direction towards a sphere of `radius` whose center is `distance_squared`
/// away, sampled uniformly over the subtended solid-angle cone. Local frame:
/// +z points at the sphere center.
pub fn sample_to_sphere(radius: Float, distance_squared: Float, rng: &mut LcgRng) -> Vector3f {
    let r1 = rng.next_float();
    let r2 = rng.next_float();
    let z = 1.0 + r2 * ((1.0 - radius * radius / distance_squared).max(0.0).sqrt() - 1.0);

    let phi = 2.0 * PI * r1;
    let r = (1.0 - z * z).max(0.0).sqrt();

    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/* Tests for sampling */
