//! PLIC reconstruction over a volume-fraction field.

use glam::IVec3;
use rayon::prelude::*;

use crate::constants::CONST_TINY;
use crate::error::FieldError;
use crate::field::{CellBox, FieldAccess, ScalarField3D};
use crate::normals::youngs_normal;
use crate::params::VofParams;
use crate::plane::InterfacePlane;

/// Reconstructed interface in one mixed cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InterfaceCell {
    pub cell: IVec3,
    pub plane: InterfacePlane,
}

/// Result of a reconstruction sweep.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reconstruction {
    /// Mixed cells in k-j-i order.
    pub cells: Vec<InterfaceCell>,
    /// Mixed cells skipped because their neighbourhood has no gradient.
    pub degenerate: usize,
}

/// Interface plane at `(i, j, k)` from the Youngs normal of `c`.
///
/// `None` when the neighbourhood is flat and no orientation can be inferred.
pub fn reconstruct_cell<F: FieldAccess + ?Sized>(
    c: &F,
    i: i32,
    j: i32,
    k: i32,
) -> Option<InterfacePlane> {
    let m = youngs_normal(c, i, j, k);
    if m.abs().element_sum() <= CONST_TINY {
        return None;
    }
    Some(InterfacePlane::from_fraction(m, c.at(i, j, k)))
}

/// Reconstruct a plane in every mixed cell of `bx`.
///
/// `c` must cover `bx` grown by one cell.
pub fn reconstruct_interfaces(
    c: &ScalarField3D,
    bx: CellBox,
    params: &VofParams,
) -> Result<Reconstruction, FieldError> {
    if bx.is_empty() {
        return Err(FieldError::EmptyBox(bx));
    }
    let stencil = bx.grow(1);
    if !c.allocated_box().contains_box(&stencil) {
        return Err(FieldError::HaloTooThin {
            required: stencil,
            available: c.allocated_box(),
        });
    }

    let sweep = |k: i32| -> (Vec<InterfaceCell>, usize) {
        let mut cells = Vec::new();
        let mut degenerate = 0;
        for j in bx.lo.y..=bx.hi.y {
            for i in bx.lo.x..=bx.hi.x {
                if !params.is_mixed(c.get(i, j, k)) {
                    continue;
                }
                match reconstruct_cell(c, i, j, k) {
                    Some(plane) => cells.push(InterfaceCell {
                        cell: IVec3::new(i, j, k),
                        plane,
                    }),
                    None => {
                        log::trace!("flat neighbourhood at ({}, {}, {})", i, j, k);
                        degenerate += 1;
                    }
                }
            }
        }
        (cells, degenerate)
    };

    let planes: Vec<(Vec<InterfaceCell>, usize)> = if params.parallel {
        (bx.lo.z..=bx.hi.z).into_par_iter().map(&sweep).collect()
    } else {
        (bx.lo.z..=bx.hi.z).map(&sweep).collect()
    };

    let mut result = Reconstruction::default();
    for (cells, degenerate) in planes {
        result.cells.extend(cells);
        result.degenerate += degenerate;
    }

    log::debug!(
        "reconstruct_interfaces: box {:?}..{:?}, {} planes, {} degenerate",
        bx.lo,
        bx.hi,
        result.cells.len(),
        result.degenerate
    );

    Ok(result)
}
