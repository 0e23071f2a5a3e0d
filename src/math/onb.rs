// Copyright @yucwang 2026

use super::constants::Vector3f;

/// Orthonormal basis around a surface normal. `w` is the normal; `u` and
/// `v` are derived from whichever world axis is least parallel to it.
pub struct Onb {
    u: Vector3f,
    v: Vector3f,
    w: Vector3f,
}

impl Onb {
    /// `normal` is assumed to be a unit vector.
    pub fn new(normal: &Vector3f) -> Self {
        let a = if normal.x.abs() > 0.9 {
            Vector3f::new(0.0, 1.0, 0.0)
        } else {
            Vector3f::new(1.0, 0.0, 0.0)
        };

        let w = *normal;
        let v = w.cross(&a).normalize();
        let u = w.cross(&v);

        Self { u, v, w }
    }

    pub fn u(&self) -> &Vector3f {
        &self.u
    }

    pub fn v(&self) -> &Vector3f {
        &self.v
    }

    pub fn w(&self) -> &Vector3f {
        &self.w
    }

    /// Map basis-local coordinates into world space.
    pub fn transform(&self, local: &Vector3f) -> Vector3f {
        local[0] * self.u + local[1] * self.v + local[2] * self.w
    }
}

/* Tests for Onb */
