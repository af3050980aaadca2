//! Volume-of-fluid fractions and PLIC interface reconstruction on 3D grids
//!
//! Closed-form algebra for Piecewise-Linear Interface Calculation in
//! rectangular cells:
//!
//! - [`normals`]: Youngs-type normal estimate from a 3x3x3 stencil
//! - [`offset`]: plane offset that reproduces a volume fraction
//! - [`volume`]: volume cut from a cell slab by a plane
//! - [`levelset`]: signed-distance field to volume-fraction field
//! - [`reconstruct`]: one plane per mixed cell of a volume-fraction field
//!
//! Every per-cell function is pure and allocation-free; the grid drivers
//! write only their own output cells and sweep k-planes in parallel.
//!
//! # Example
//!
//! ```
//! use plic3d::{cell_fraction, plane_offset, DVec3};
//!
//! let normal = DVec3::new(0.2, 0.3, 0.5);
//! let alpha = plane_offset(normal, 0.3);
//! assert!((cell_fraction(normal, alpha) - 0.3).abs() < 1e-12);
//! ```
//!
//! Converting a level set:
//!
//! ```
//! use plic3d::{convert_levelset, ScalarField3D, VofParams};
//!
//! // Half-space x < 2.25 on a 4x4x4 grid with one ghost layer
//! let mut ls = ScalarField3D::new(4, 4, 4, 1);
//! ls.fill_with(|p| 2.25 - p.x);
//!
//! let cc = convert_levelset(&ls, &VofParams::default()).unwrap();
//! assert_eq!(cc.get(1, 0, 0), 1.0);
//! assert!((cc.get(2, 0, 0) - 0.25).abs() < 1e-12);
//! assert_eq!(cc.get(3, 0, 0), 0.0);
//! ```

pub mod coefficients;
pub mod constants;
pub mod error;
pub mod field;
pub mod levelset;
pub mod normals;
pub mod offset;
pub mod params;
pub mod plane;
pub mod reconstruct;
pub mod volume;

pub use coefficients::OrderedTriple;
pub use error::FieldError;
pub use field::{CellBox, FieldAccess, Neighborhood, ScalarField3D};
pub use glam::{DVec3, IVec3};
pub use levelset::{convert_levelset, levelset_cell_fraction, levelset_to_vof, ConversionSummary};
pub use normals::{levelset_gradient, youngs_normal};
pub use offset::{plane_offset, plane_offset_at, OffsetBreakpoints, OffsetRegime};
pub use params::VofParams;
pub use plane::{Axis, InterfacePlane};
pub use reconstruct::{reconstruct_cell, reconstruct_interfaces, InterfaceCell, Reconstruction};
pub use volume::{cell_fraction, partial_volume, UnitCubeProblem, VolumeCoefficients, VolumeRegime};
