//! Property-based tests for the PLIC algebra using proptest
//!
//! These verify invariants over random normals and fractions:
//! - offset -> volume round trip, near-axis normals included
//! - complement symmetry
//! - continuity of the offset solver at its breakpoints
//! - signed-frame planes reproduce their fraction

use plic3d::{cell_fraction, plane_offset, DVec3, InterfacePlane, OffsetBreakpoints, OffsetRegime};
use proptest::prelude::*;

/// Strictly positive normal component
fn component() -> impl Strategy<Value = f64> {
    0.01f64..1.0
}

/// Strictly positive normal component, sometimes many orders of magnitude
/// below the others
fn wide_component() -> impl Strategy<Value = f64> {
    prop_oneof![1e-12f64..1e-6, 0.01f64..1.0]
}

/// Signed normal with at least one component away from zero
fn signed_normal() -> impl Strategy<Value = DVec3> {
    (-1.0f64..1.0, -1.0f64..1.0, 0.05f64..1.0, any::<bool>()).prop_map(|(x, y, z, flip)| {
        DVec3::new(x, y, if flip { -z } else { z })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Property: offset then volume reproduces the fraction, including
    /// near-degenerate normals
    #[test]
    fn round_trip(
        a in wide_component(),
        b in wide_component(),
        c in wide_component(),
        ch in 0.0f64..=1.0
    ) {
        let n = DVec3::new(a, b, c);
        let alpha = plane_offset(n, ch);
        prop_assert!((0.0..=1.0).contains(&alpha), "alpha = {}", alpha);
        let v = cell_fraction(n / n.element_sum(), alpha);
        prop_assert!((v - ch).abs() < 1e-9, "normal {:?} ch {} -> {}", n, ch, v);
    }

    /// Property: alpha(c) + alpha(1 - c) == 1
    #[test]
    fn complement_symmetry(n in signed_normal(), ch in 0.0f64..=1.0) {
        let a = plane_offset(n, ch);
        let b = plane_offset(n, 1.0 - ch);
        prop_assert!((a + b - 1.0).abs() < 1e-9);
    }

    /// Property: adjacent offset regimes agree at each breakpoint
    #[test]
    fn breakpoint_continuity(a in component(), b in component(), c in component()) {
        let bp = OffsetBreakpoints::from_normal(DVec3::new(a, b, c));

        let l = OffsetRegime::CubeRoot.evaluate(&bp, bp.v1);
        let r = OffsetRegime::Quadratic.evaluate(&bp, bp.v1);
        prop_assert!((l - r).abs() < 1e-9, "V1: {} vs {}", l, r);

        if bp.v2 < bp.v3 {
            let l = OffsetRegime::Quadratic.evaluate(&bp, bp.v2);
            let r = OffsetRegime::CubicTrig.evaluate(&bp, bp.v2);
            prop_assert!((l - r).abs() < 1e-9, "V2: {} vs {}", l, r);

            let last = if bp.coeffs.is_flat() {
                OffsetRegime::FlatTrig
            } else {
                OffsetRegime::Linear
            };
            let l = OffsetRegime::CubicTrig.evaluate(&bp, bp.v3);
            let r = last.evaluate(&bp, bp.v3);
            prop_assert!((l - r).abs() < 1e-9, "V3: {} vs {}", l, r);
        }
    }

    /// Property: alpha is non-decreasing in the fraction
    #[test]
    fn offset_monotonic(a in component(), b in component(), c in component(),
                        lo in 0.0f64..=1.0, hi in 0.0f64..=1.0) {
        let n = DVec3::new(a, b, c);
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        prop_assert!(plane_offset(n, lo) <= plane_offset(n, hi) + 1e-12);
    }

    /// Property: a plane built in the signed frame cuts its own fraction
    #[test]
    fn signed_plane_reproduces_fraction(n in signed_normal(), ch in 0.0f64..=1.0) {
        let plane = InterfacePlane::from_fraction(n, ch);
        prop_assert!((plane.fraction() - ch).abs() < 1e-9);
    }
}
