//! PLIC interface plane inside a unit cell.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::offset::plane_offset;
use crate::volume::{cell_fraction, partial_volume};

/// Grid axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Rotate `v` so that this axis' component comes first; the cyclic order
    /// of the other two is kept.
    #[inline]
    pub fn lead(self, v: DVec3) -> DVec3 {
        match self {
            Axis::X => v,
            Axis::Y => DVec3::new(v.y, v.z, v.x),
            Axis::Z => DVec3::new(v.z, v.x, v.y),
        }
    }
}

/// Plane `normal . x = alpha` in cell-local coordinates `x in [0, 1]^3`.
///
/// The tracked phase lies on the `normal . x <= alpha` side. `normal` is
/// signed and scaled to unit L1 norm; `alpha` is measured in the signed
/// frame, so it may be negative when some components are.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterfacePlane {
    pub normal: DVec3,
    pub alpha: f64,
}

impl InterfacePlane {
    pub fn new(normal: DVec3, alpha: f64) -> Self {
        Self { normal, alpha }
    }

    /// Plane with the given orientation that cuts volume fraction `c`.
    ///
    /// `normal` must not be zero; it is rescaled to unit L1 norm.
    pub fn from_fraction(normal: DVec3, c: f64) -> Self {
        let normal = normal / normal.abs().element_sum();
        let alpha = plane_offset(normal, c) + normal.min(DVec3::ZERO).element_sum();
        Self { normal, alpha }
    }

    /// Volume fraction of the cell on the phase side.
    pub fn fraction(&self) -> f64 {
        cell_fraction(self.normal, self.alpha)
    }

    /// Phase volume swept through the downwind face normal to `axis`, as a
    /// fraction of the cell.
    ///
    /// `courant` is the face velocity times `dt / dx`, in `[-1, 1]`. Positive
    /// values drain the slab `[1 - courant, 1]` through the upper face,
    /// negative ones the slab `[0, -courant]` through the lower face.
    pub fn face_flux(&self, axis: Axis, courant: f64) -> f64 {
        debug_assert!(courant.abs() <= 1.0, "courant number {} exceeds 1", courant);
        let m = axis.lead(self.normal);
        if courant > 0.0 {
            partial_volume(m, self.alpha, 1.0 - courant, courant)
        } else if courant < 0.0 {
            partial_volume(m, self.alpha, 0.0, -courant)
        } else {
            0.0
        }
    }
}
