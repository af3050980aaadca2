//! Partial-volume evaluator: plane + cell slab -> volume fraction.
//!
//! Computes the part of the box `[r0, r0 + dr0] x [0, 1] x [0, 1]` lying on
//! the `m . x <= alpha` side of a plane, for signed, unnormalized `m`.
//! The slab is mapped onto the unit cube (shift to `r0`, reflect negative
//! coefficients, scale by the L1 norm), the offset is folded to `a <= 0.5`,
//! and the volume under the plane is evaluated with the five-piece closed
//! form of Aoki & Kawano (Computers & Fluids, 2016).
//!
//! This is the building block for swept face volumes in geometric advection
//! and, with `r0 = 0, dr0 = 1`, for level-set to volume-fraction conversion.

use glam::DVec3;

use crate::coefficients::OrderedTriple;
use crate::constants::CONST_TINY;

/// Closed-form branch of the unit-cube volume under a plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeRegime {
    /// `a <= 0`: nothing below the plane.
    Empty,
    /// `a < b1`: corner tetrahedron.
    CubeTip,
    /// `b1 <= a < b2`
    Quadratic,
    /// `b2 <= a < min(b1 + b2, b3)`
    CubicCorrection,
    /// `a >= b3` in a flat box (`b3 < b1 + b2`).
    FlatQuartic,
    /// `a >= b1 + b2` with `b3 >= b1 + b2`.
    Linear,
}

/// Sorted, unit-L1 coefficients of the folded unit-cube problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeCoefficients {
    pub coeffs: OrderedTriple,
    /// `6 b1 b2 b3`, unguarded. Every regime dividing by it requires
    /// `b1 > 0`, so it is never zero where it is used.
    pub pr: f64,
}

impl VolumeCoefficients {
    pub fn new(coeffs: OrderedTriple) -> Self {
        let pr = 6.0 * coeffs.m1 * coeffs.m2 * coeffs.m3;
        Self { coeffs, pr }
    }

    /// Regime that owns the folded offset `a` in `[0, 0.5]`.
    pub fn regime(&self, a: f64) -> VolumeRegime {
        let OrderedTriple { m1: b1, m2: b2, m3: b3 } = self.coeffs;
        let b12 = self.coeffs.m12();
        if a <= 0.0 {
            VolumeRegime::Empty
        } else if a < b1 {
            VolumeRegime::CubeTip
        } else if a < b2 {
            VolumeRegime::Quadratic
        } else if a < b12.min(b3) {
            VolumeRegime::CubicCorrection
        } else if self.coeffs.is_flat() {
            VolumeRegime::FlatQuartic
        } else {
            VolumeRegime::Linear
        }
    }

    /// Folded volume for `a` in `[0, 0.5]`.
    pub fn folded_volume(&self, a: f64) -> f64 {
        self.regime(a).evaluate(self, a)
    }
}

impl VolumeRegime {
    /// Evaluate this regime's closed form at the folded offset `a`.
    pub fn evaluate(self, vc: &VolumeCoefficients, a: f64) -> f64 {
        let OrderedTriple { m1: b1, m2: b2, m3: b3 } = vc.coeffs;
        let b12 = vc.coeffs.m12();
        match self {
            VolumeRegime::Empty => 0.0,
            VolumeRegime::CubeTip => a * a * a / vc.pr,
            VolumeRegime::Quadratic => {
                a * (a - b1) / (2.0 * b2 * b3) + b1 * b1 / (6.0 * b2 * b3 + CONST_TINY)
            }
            VolumeRegime::CubicCorrection => {
                (a * a * (3.0 * b12 - a) + b1 * b1 * (b1 - 3.0 * a) + b2 * b2 * (b2 - 3.0 * a))
                    / vc.pr
            }
            VolumeRegime::FlatQuartic => {
                (a * a * (3.0 - 2.0 * a)
                    + b1 * b1 * (b1 - 3.0 * a)
                    + b2 * b2 * (b2 - 3.0 * a)
                    + b3 * b3 * (b3 - 3.0 * a))
                    / vc.pr
            }
            VolumeRegime::Linear => (a - 0.5 * b12) / b3,
        }
    }
}

/// Unit-cube problem derived from a plane and a slab along the first axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitCubeProblem {
    pub coeffs: VolumeCoefficients,
    /// Normalized, clamped offset before folding, in `[0, 1]`.
    pub alpha: f64,
}

impl UnitCubeProblem {
    pub fn new(normal: DVec3, alpha: f64, r0: f64, dr0: f64) -> Self {
        let DVec3 { x: m1, y: m2, z: m3 } = normal;

        // Move the origin to r0
        let mut al = alpha - m1 * r0;

        // Reflect the box onto the positive octant
        al += (-m1 * dr0).max(0.0) + (-m2).max(0.0) + (-m3).max(0.0);

        let tmp = m1.abs() * dr0 + m2.abs() + m3.abs();
        let n1 = m1.abs() / tmp;
        let n2 = m2.abs() / tmp;
        let n3 = m3.abs() / tmp;
        let al = (al / tmp).clamp(0.0, 1.0);

        Self {
            coeffs: VolumeCoefficients::new(OrderedTriple::sort(n1 * dr0, n2, n3)),
            alpha: al,
        }
    }

    /// Offset folded to `[0, 0.5]`.
    pub fn folded_alpha(&self) -> f64 {
        self.alpha.min(1.0 - self.alpha)
    }

    /// Fraction of the unit cube below the plane.
    pub fn volume(&self) -> f64 {
        let v = self.coeffs.folded_volume(self.folded_alpha());
        if self.alpha <= 0.5 {
            v
        } else {
            1.0 - v
        }
    }
}

/// Volume of `[r0, r0 + dr0] x [0, 1] x [0, 1]` on the `normal . x <= alpha`
/// side of the plane, in units of the full cell (result in `[0, dr0]`).
///
/// `normal.x` is the coefficient along the clipped axis. The normal must not
/// be zero and `dr0` must be positive.
pub fn partial_volume(normal: DVec3, alpha: f64, r0: f64, dr0: f64) -> f64 {
    UnitCubeProblem::new(normal, alpha, r0, dr0).volume() * dr0
}

/// Volume fraction of the unit cell below the plane `normal . x <= alpha`.
pub fn cell_fraction(normal: DVec3, alpha: f64) -> f64 {
    partial_volume(normal, alpha, 0.0, 1.0)
}
