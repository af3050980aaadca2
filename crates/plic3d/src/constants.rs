//! Numerical constants shared by the VOF/PLIC kernels.
//!
//! ## Degeneracy guard
//!
//! Every product of normal coefficients that ends up as a divisor is floored
//! at [`CONST_TINY`]. The guard only prevents division by exact zero; it does
//! not flag that a degenerate normal was seen.

/// Machine-precision floor substituted for vanishing divisors.
pub const CONST_TINY: f64 = f64::EPSILON;

// =============================================================================
// YOUNGS STENCIL WEIGHTS
// =============================================================================

/// Weight of the face-adjacent cell in a 3x3 side slab.
pub const FACE_WEIGHT: f64 = 4.0;

/// Weight of an edge-adjacent cell in a 3x3 side slab.
pub const EDGE_WEIGHT: f64 = 2.0;

/// Weight of a corner cell in a 3x3 side slab.
pub const CORNER_WEIGHT: f64 = 1.0;

/// Denominator that turns the raw Youngs stencil into a unit-spacing gradient.
///
/// Each side slab sums to 16 for a unit field, and the two slabs are two cells
/// apart: 16 * 2 = 32.
pub const LEVELSET_GRADIENT_SCALE: f64 = 32.0;

/// Fraction assigned to a level-set cell with a flat neighbourhood and `ls == 0`.
pub const FLAT_LEVELSET_FRACTION: f64 = 0.5;
