//! Ascending ordering of plane coefficients.
//!
//! Both the offset solver and the partial-volume evaluator work on three
//! non-negative coefficients sorted so that `m1 <= m2 <= m3`.

use glam::DVec3;

/// Three non-negative coefficients with `m1 <= m2 <= m3`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrderedTriple {
    pub m1: f64,
    pub m2: f64,
    pub m3: f64,
}

impl OrderedTriple {
    /// Sort three values ascending.
    ///
    /// Takes min/max of the first pair, then moves the third value into place
    /// with at most one swap.
    #[inline]
    pub fn sort(b1: f64, b2: f64, b3: f64) -> Self {
        let mut m1 = b1.min(b2);
        let mut m3 = b1.max(b2);
        let mut m2 = b3;

        if m2 < m1 {
            std::mem::swap(&mut m1, &mut m2);
        } else if m2 > m3 {
            std::mem::swap(&mut m2, &mut m3);
        }

        Self { m1, m2, m3 }
    }

    /// Absolute values of `normal`, scaled to unit L1 norm, then sorted.
    ///
    /// An all-zero normal is a caller error and yields NaN coefficients.
    #[inline]
    pub fn from_normal(normal: DVec3) -> Self {
        let n = normal.abs();
        let n = n / (n.x + n.y + n.z);
        Self::sort(n.x, n.y, n.z)
    }

    #[inline]
    pub fn m12(&self) -> f64 {
        self.m1 + self.m2
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        self.m1 + self.m2 + self.m3
    }

    /// Largest coefficient does not exceed the sum of the other two.
    ///
    /// Non-strict on the linear side: equality is not flat.
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.m3 < self.m12()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_all_permutations() {
        let perms = [
            (1.0, 2.0, 3.0),
            (1.0, 3.0, 2.0),
            (2.0, 1.0, 3.0),
            (2.0, 3.0, 1.0),
            (3.0, 1.0, 2.0),
            (3.0, 2.0, 1.0),
        ];
        for (a, b, c) in perms {
            let t = OrderedTriple::sort(a, b, c);
            assert_eq!((t.m1, t.m2, t.m3), (1.0, 2.0, 3.0), "input ({}, {}, {})", a, b, c);
        }
    }

    #[test]
    fn test_sort_with_ties() {
        let t = OrderedTriple::sort(0.5, 0.0, 0.5);
        assert_eq!((t.m1, t.m2, t.m3), (0.0, 0.5, 0.5));
        let t = OrderedTriple::sort(0.0, 0.0, 1.0);
        assert_eq!((t.m1, t.m2, t.m3), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_normal_is_unit_l1() {
        let t = OrderedTriple::from_normal(DVec3::new(-3.0, 1.0, -4.0));
        assert!((t.sum() - 1.0).abs() < 1e-15);
        assert!((t.m1 - 0.125).abs() < 1e-15);
        assert!((t.m2 - 0.375).abs() < 1e-15);
        assert!((t.m3 - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_flat_condition_is_strict() {
        assert!(OrderedTriple::sort(0.3, 0.3, 0.4).is_flat());
        assert!(!OrderedTriple::sort(0.0, 0.5, 0.5).is_flat());
        assert!(!OrderedTriple::sort(0.1, 0.1, 0.8).is_flat());
    }
}
