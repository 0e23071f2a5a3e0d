// Copyright @yucwang 2026

use super::constants::{Float, INFINITY};

/// Closed scalar range [min, max]. The default instance is empty
/// (min = +inf, max = -inf) so that it is the identity of `enclose`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Default for Interval {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Interval {
    pub const EMPTY: Self = Self { min: INFINITY, max: -INFINITY };
    pub const UNIVERSE: Self = Self { min: -INFINITY, max: INFINITY };
    pub const UNITARY: Self = Self { min: 0.0, max: 1.0 };

    /// Build the interval spanning the two values, in either argument order.
    pub fn new(a: Float, b: Float) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// The interval tightly enclosing the two input intervals.
    pub fn enclose(a: &Interval, b: &Interval) -> Self {
        Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        }
    }

    pub fn size(&self) -> Float {
        self.max - self.min
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn surrounds(&self, x: Float) -> bool {
        self.min < x && x < self.max
    }

    pub fn clamp(&self, x: Float) -> Float {
        if x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }

    /// Pad both ends by `delta / 2`, growing the size by `delta`.
    pub fn expand(&self, delta: Float) -> Self {
        let padding = delta / 2.0;
        Self { min: self.min - padding, max: self.max + padding }
    }
}

/* Tests for Interval */
#[cfg(test)]
mod tests {
    use super::Interval;

    #[test]
    fn test_interval_constructors() {
        let i = Interval::new(3.0, -1.0);
        assert_eq!(i.min, -1.0);
        assert_eq!(i.max, 3.0);
        assert_eq!(i.size(), 4.0);

        let a = Interval::new(0.0, 1.0);
        let b = Interval::new(-2.0, 0.5);
        let u = Interval::enclose(&a, &b);
        assert_eq!(u.min, -2.0);
        assert_eq!(u.max, 1.0);

        let from_empty = Interval::enclose(&Interval::EMPTY, &a);
        assert_eq!(from_empty, a);
    }

    #[test]
    fn test_interval_queries() {
        let i = Interval::new(0.0, 2.0);
        assert!(i.contains(0.0));
        assert!(i.contains(2.0));
        assert!(!i.surrounds(0.0));
        assert!(i.surrounds(1.0));
        assert!(!i.contains(2.5));

        assert_eq!(i.clamp(-1.0), 0.0);
        assert_eq!(i.clamp(3.0), 2.0);
        assert_eq!(i.clamp(0.7), 0.7);
    }

    #[test]
    fn test_interval_expand() {
        let i = Interval::new(1.0, 2.0).expand(2.0);
        assert_eq!(i.min, 0.0);
        assert_eq!(i.max, 3.0);
    }

    #[test]
    fn test_interval_emptiness() {
        assert!(Interval::EMPTY.is_empty());
        assert!(Interval::default().is_empty());
        assert!(!Interval::UNITARY.is_empty());
        assert!(!Interval::new(1.0, 1.0).is_empty());
        assert!(!Interval::UNIVERSE.is_empty());
    }
}
