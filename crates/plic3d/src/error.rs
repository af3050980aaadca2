//! Errors raised by the field layer before a kernel sweep starts.

use glam::IVec3;

use crate::field::CellBox;

/// Precondition violations detected while validating a driver call.
///
/// The per-cell kernels never fail; these errors only guard the contract
/// between the drivers and the fields they are handed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The iteration box contains no cells.
    #[error("iteration box {0:?} is empty")]
    EmptyBox(CellBox),

    /// The 3x3x3 stencil around the iteration box leaves the input allocation.
    #[error("stencil box {required:?} is not covered by input allocation {available:?}")]
    HaloTooThin { required: CellBox, available: CellBox },

    /// The iteration box is not inside the output allocation.
    #[error("iteration box {requested:?} is outside output allocation {available:?}")]
    OutOfBounds { requested: CellBox, available: CellBox },

    /// A field was requested over an empty valid box. Carries the box size,
    /// which is zero along every collapsed axis.
    #[error("invalid field extent {0}: every axis needs at least one cell")]
    InvalidExtent(IVec3),
}
