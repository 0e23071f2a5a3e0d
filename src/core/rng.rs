// Copyright @yucwang 2026

use crate::math::constants::{Float, Int};

/// Deterministic linear congruential generator. Every render task owns its
/// own instance, seeded from the render seed and the pixel coordinates, so
/// parallel execution stays race-free and reproducible.
pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Uniform in [0, 1].
    pub fn next_float(&mut self) -> Float {
        (self.next_u32() as Float) / (u32::MAX as Float)
    }

    /// Uniform in [min, max].
    pub fn next_in_range(&mut self, min: Float, max: Float) -> Float {
        min + (max - min) * self.next_float()
    }

    /// Uniform integer in [min, max], both ends inclusive.
    pub fn next_int(&mut self, min: Int, max: Int) -> Int {
        let span = (max - min + 1) as u32;
        min + (self.next_u32() % span) as Int
    }
}
