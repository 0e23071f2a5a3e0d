// Copyright 2026 @TwoCookingMice

use super::constants::{Float, Point3f, Vector3f};

/// A ray with a time tag for motion blur. The direction is stored as given;
/// callers that need a unit direction normalize explicitly.
#[derive(Debug, Clone)]
pub struct Ray3f {
    origin: Point3f,
    dir: Vector3f,
    time: Float,
}

impl Ray3f {
    pub fn new(origin: Point3f, dir: Vector3f, time: Option<Float>) -> Self {
        Self { origin, dir, time: time.unwrap_or(0.0) }
    }

    pub fn origin(&self) -> Point3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn time(&self) -> Float {
        self.time
    }

    pub fn at(&self, t: Float) -> Point3f {
        self.origin + self.dir * t
    }
}

/* Tests for Ray */
