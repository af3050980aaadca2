//! Level-set to volume-fraction conversion.
//!
//! Per cell: estimate the level-set gradient with the Youngs stencil,
//! L1-normalize its absolute value, place the plane at
//! `alpha = ls / |grad|_1 + 0.5` in the unit cell and evaluate the volume
//! under it. Cells with `alpha` outside `(0, 1)` are pure.

use std::iter::Sum;
use std::ops::Add;

use rayon::prelude::*;

use crate::constants::{CONST_TINY, FLAT_LEVELSET_FRACTION};
use crate::error::FieldError;
use crate::field::{CellBox, FieldAccess, ScalarField3D};
use crate::normals::levelset_gradient;
use crate::params::VofParams;
use crate::volume::cell_fraction;

/// Cell counts written by a conversion sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Cells set to exactly 1.
    pub full: usize,
    /// Cells set to exactly 0.
    pub empty: usize,
    /// Cells with a fraction strictly between 0 and 1.
    pub mixed: usize,
}

impl ConversionSummary {
    fn record(&mut self, c: f64) {
        if c >= 1.0 {
            self.full += 1;
        } else if c <= 0.0 {
            self.empty += 1;
        } else {
            self.mixed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.full + self.empty + self.mixed
    }
}

impl Add for ConversionSummary {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            full: self.full + rhs.full,
            empty: self.empty + rhs.empty,
            mixed: self.mixed + rhs.mixed,
        }
    }
}

impl Sum for ConversionSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Volume fraction of cell `(i, j, k)` from the signed-distance field `ls`.
///
/// Reads the 3x3x3 neighbourhood. A neighbourhood without gradient is
/// resolved by the sign of `ls` alone.
#[inline]
pub fn levelset_cell_fraction<F: FieldAccess + ?Sized>(ls: &F, i: i32, j: i32, k: i32) -> f64 {
    let m = levelset_gradient(ls, i, j, k).abs();
    let norm_l1 = m.element_sum();
    let phi = ls.at(i, j, k);

    if norm_l1 <= CONST_TINY {
        return if phi > 0.0 {
            1.0
        } else if phi < 0.0 {
            0.0
        } else {
            FLAT_LEVELSET_FRACTION
        };
    }

    let alpha = phi / norm_l1 + 0.5;
    if alpha >= 1.0 {
        1.0
    } else if alpha <= 0.0 {
        0.0
    } else {
        cell_fraction(m / norm_l1, alpha)
    }
}

/// Write volume fractions for every cell of `bx` into `cc`.
///
/// `ls` must cover `bx` grown by one cell; `cc` must cover `bx`. Cells of
/// `cc` outside `bx` are left untouched.
pub fn levelset_to_vof(
    ls: &ScalarField3D,
    cc: &mut ScalarField3D,
    bx: CellBox,
    params: &VofParams,
) -> Result<ConversionSummary, FieldError> {
    if bx.is_empty() {
        return Err(FieldError::EmptyBox(bx));
    }
    let stencil = bx.grow(1);
    if !ls.allocated_box().contains_box(&stencil) {
        return Err(FieldError::HaloTooThin {
            required: stencil,
            available: ls.allocated_box(),
        });
    }
    if !cc.allocated_box().contains_box(&bx) {
        return Err(FieldError::OutOfBounds {
            requested: bx,
            available: cc.allocated_box(),
        });
    }

    let alloc = cc.allocated_box();
    let nx = alloc.size().x;
    let plane_len = cc.plane_len();

    // One k-plane of the output per task
    let sweep = |(plane, values): (usize, &mut [f64])| -> ConversionSummary {
        let mut summary = ConversionSummary::default();
        let k = alloc.lo.z + plane as i32;
        if k < bx.lo.z || k > bx.hi.z {
            return summary;
        }
        for j in bx.lo.y..=bx.hi.y {
            let row = ((j - alloc.lo.y) * nx) as usize;
            for i in bx.lo.x..=bx.hi.x {
                let c = levelset_cell_fraction(ls, i, j, k);
                values[row + (i - alloc.lo.x) as usize] = c;
                summary.record(c);
            }
        }
        summary
    };

    let summary: ConversionSummary = if params.parallel {
        cc.data_mut()
            .par_chunks_mut(plane_len)
            .enumerate()
            .map(&sweep)
            .sum()
    } else {
        cc.data_mut()
            .chunks_mut(plane_len)
            .enumerate()
            .map(&sweep)
            .sum()
    };

    log::debug!(
        "levelset_to_vof: box {:?}..{:?}, {} full, {} empty, {} mixed",
        bx.lo,
        bx.hi,
        summary.full,
        summary.empty,
        summary.mixed
    );

    Ok(summary)
}

/// Convert a whole signed-distance field into a new volume-fraction field of
/// the same layout, over [`ScalarField3D::stencil_box`].
pub fn convert_levelset(
    ls: &ScalarField3D,
    params: &VofParams,
) -> Result<ScalarField3D, FieldError> {
    let mut cc = ScalarField3D::from_box(ls.valid_box(), ls.ghost())?;
    levelset_to_vof(ls, &mut cc, ls.stencil_box(), params)?;
    Ok(cc)
}
