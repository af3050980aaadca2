//! Plane-offset solver: normal + volume fraction -> alpha.
//!
//! Finds `alpha` such that the half-space `m1*x1 + m2*x2 + m3*x3 <= alpha`
//! cut against the unit cube has volume `c`, with `m` the absolute normal
//! scaled to unit L1 norm. The problem is folded onto `ch = min(c, 1 - c)`
//! and solved in closed form on one of five regimes:
//!
//! | Regime       | Range                         |
//! |--------------|-------------------------------|
//! | `CubeRoot`   | `ch < V1`                     |
//! | `Quadratic`  | `V1 <= ch < V2`               |
//! | `CubicTrig`  | `V2 <= ch < V3`               |
//! | `Linear`     | `ch >= V3`, `m3 >= m1 + m2`   |
//! | `FlatTrig`   | `ch >= V3`, `m3 < m1 + m2`    |
//!
//! Adjacent regimes agree at their shared breakpoint, so the result is
//! continuous in `c`.

use glam::DVec3;

use crate::coefficients::OrderedTriple;
use crate::constants::CONST_TINY;
use crate::field::FieldAccess;

/// Closed-form branch used to compute alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetRegime {
    /// Plane cuts a single corner tetrahedron.
    CubeRoot,
    /// Plane crosses the `m1` edge.
    Quadratic,
    /// Depressed cubic, solved by trisection around `m1 + m2`.
    CubicTrig,
    /// Plane crosses all four edges along the dominant axis.
    Linear,
    /// Hexagonal cut in a flat box, solved by trisection around 0.5.
    FlatTrig,
}

/// Volume breakpoints of the folded problem for one normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetBreakpoints {
    pub coeffs: OrderedTriple,
    /// `max(6 m1 m2 m3, CONST_TINY)`
    pub pr: f64,
    pub v1: f64,
    pub v2: f64,
    pub v3: f64,
    /// `m3` in a flat box, `m1 + m2` otherwise.
    pub mm: f64,
}

impl OffsetBreakpoints {
    pub fn new(coeffs: OrderedTriple) -> Self {
        let OrderedTriple { m1, m2, m3 } = coeffs;
        let m12 = coeffs.m12();
        let pr = (6.0 * m1 * m2 * m3).max(CONST_TINY);
        let v1 = m1 * m1 * m1 / pr;
        let v2 = v1 + 0.5 * (m2 - m1) / m3;

        let (mm, v3) = if coeffs.is_flat() {
            let v3 = (m3 * m3 * (3.0 * m12 - m3)
                + m1 * m1 * (m1 - 3.0 * m3)
                + m2 * m2 * (m2 - 3.0 * m3))
                / pr;
            (m3, v3)
        } else {
            (m12, 0.5 * m12 / m3)
        };

        Self { coeffs, pr, v1, v2, v3, mm }
    }

    /// Breakpoints for a raw (signed, unnormalized) normal.
    pub fn from_normal(normal: DVec3) -> Self {
        Self::new(OrderedTriple::from_normal(normal))
    }

    /// Regime that owns the folded fraction `ch` in `[0, 0.5]`.
    pub fn regime(&self, ch: f64) -> OffsetRegime {
        if ch < self.v1 {
            OffsetRegime::CubeRoot
        } else if ch < self.v2 {
            OffsetRegime::Quadratic
        } else if ch < self.v3 {
            OffsetRegime::CubicTrig
        } else if self.coeffs.is_flat() {
            OffsetRegime::FlatTrig
        } else {
            OffsetRegime::Linear
        }
    }

    /// Folded alpha for `ch` in `[0, 0.5]`.
    pub fn folded_alpha(&self, ch: f64) -> f64 {
        self.regime(ch).evaluate(self, ch)
    }
}

impl OffsetRegime {
    /// Evaluate this regime's closed form at the folded fraction `ch`.
    ///
    /// Outside its own range a regime still returns its analytic
    /// continuation, which is what the breakpoint continuity checks use.
    pub fn evaluate(self, bp: &OffsetBreakpoints, ch: f64) -> f64 {
        let OrderedTriple { m1, m2, m3 } = bp.coeffs;
        let m12 = bp.coeffs.m12();
        match self {
            OffsetRegime::CubeRoot => (bp.pr * ch).cbrt(),
            OffsetRegime::Quadratic => {
                0.5 * (m1 + (m1 * m1 + 8.0 * m2 * m3 * (ch - bp.v1)).sqrt())
            }
            OffsetRegime::CubicTrig => {
                let p = 2.0 * m1 * m2;
                let q = 1.5 * m1 * m2 * (m12 - 2.0 * m3 * ch);
                trisect(p, q) + m12
            }
            OffsetRegime::Linear => m3 * ch + 0.5 * bp.mm,
            OffsetRegime::FlatTrig => {
                let p = m1 * (m2 + m3) + m2 * m3 - 0.25;
                let q = 1.5 * m1 * m2 * m3 * (0.5 - ch);
                trisect(p, q) + 0.5
            }
        }
    }
}

/// Real root of the depressed cubic used by both trig regimes, relative to
/// its center.
#[inline]
fn trisect(p: f64, q: f64) -> f64 {
    let p12 = p.sqrt();
    let teta = (q / (p * p12)).clamp(-1.0, 1.0).acos() / 3.0;
    let cs = teta.cos();
    p12 * ((3.0 * (1.0 - cs * cs)).sqrt() - cs)
}

/// Plane offset `alpha` in `[0, 1]` reproducing volume fraction `c`.
///
/// `normal` may be signed and unnormalized; only its absolute values
/// relative to each other matter. The result is the offset in the
/// positive-octant frame (see [`crate::plane::InterfacePlane`] for the
/// signed frame). `c` must lie in `[0, 1]` and `normal` must not be zero.
pub fn plane_offset(normal: DVec3, c: f64) -> f64 {
    let bp = OffsetBreakpoints::from_normal(normal);
    let ch = c.min(1.0 - c);
    let alpha = bp.folded_alpha(ch);
    if c > 0.5 {
        1.0 - alpha
    } else {
        alpha
    }
}

/// [`plane_offset`] with the fraction read from `field` at `(i, j, k)`.
pub fn plane_offset_at<F: FieldAccess + ?Sized>(
    field: &F,
    i: i32,
    j: i32,
    k: i32,
    normal: DVec3,
) -> f64 {
    plane_offset(normal, field.at(i, j, k))
}
