//! Youngs-type interface normal estimation on a 3x3x3 stencil.
//!
//! For each axis the two 3x3 slabs on the minus and plus side of the cell are
//! summed with weights 4 (face), 2 (edge) and 1 (corner); the component is
//! `minus - plus`. For a volume fraction this points out of the tracked
//! phase, so the phase lies on the `n . x <= alpha` side of the plane.

use glam::{DVec3, IVec3};

use crate::constants::{CORNER_WEIGHT, EDGE_WEIGHT, FACE_WEIGHT, LEVELSET_GRADIENT_SCALE};
use crate::field::FieldAccess;

/// Weight of the slab cell at in-plane offset `(a, b)`.
#[inline]
fn slab_weight(a: i32, b: i32) -> f64 {
    match a.abs() + b.abs() {
        0 => FACE_WEIGHT,
        1 => EDGE_WEIGHT,
        _ => CORNER_WEIGHT,
    }
}

/// Weighted sum of the 3x3 slab at offset `side` (`-1` or `+1`) along `axis`.
#[inline]
fn slab_sum<F: FieldAccess + ?Sized>(field: &F, center: IVec3, axis: usize, side: i32) -> f64 {
    let u = (axis + 1) % 3;
    let v = (axis + 2) % 3;
    let mut sum = 0.0;
    for b in -1..=1 {
        for a in -1..=1 {
            let mut offset = IVec3::ZERO;
            offset[axis] = side;
            offset[u] = a;
            offset[v] = b;
            let p = center + offset;
            sum += slab_weight(a, b) * field.at(p.x, p.y, p.z);
        }
    }
    sum
}

/// Raw (unnormalized) Youngs normal at `(i, j, k)`.
///
/// Reads the full 3x3x3 neighbourhood; the caller guarantees it is allocated.
/// Only the relative magnitude and sign of the components are meaningful.
#[inline]
pub fn youngs_normal<F: FieldAccess + ?Sized>(field: &F, i: i32, j: i32, k: i32) -> DVec3 {
    let center = IVec3::new(i, j, k);
    let mut m = DVec3::ZERO;
    for axis in 0..3 {
        m[axis] = slab_sum(field, center, axis, -1) - slab_sum(field, center, axis, 1);
    }
    m
}

/// Youngs stencil scaled to a unit-spacing gradient estimate.
///
/// For a signed-distance field this approximates `-grad(ls)`; a linear field
/// `ls = g . x` yields exactly `-g`.
#[inline]
pub fn levelset_gradient<F: FieldAccess + ?Sized>(field: &F, i: i32, j: i32, k: i32) -> DVec3 {
    youngs_normal(field, i, j, k) / LEVELSET_GRADIENT_SCALE
}
