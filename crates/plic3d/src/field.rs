//! Halo-padded cell-centered scalar storage.
//!
//! Cells are addressed by signed integer coordinates so that ghost cells sit
//! at negative indices (or past the valid extent) without any remapping by
//! the kernels. Storage is x-fastest:
//! `index = (k - lo.z) * nx * ny + (j - lo.y) * nx + (i - lo.x)`
//! where `lo`, `nx`, `ny` refer to the allocated (valid + ghost) box.

use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Inclusive box of cell indices `[lo, hi]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellBox {
    pub lo: IVec3,
    pub hi: IVec3,
}

impl CellBox {
    pub fn new(lo: IVec3, hi: IVec3) -> Self {
        Self { lo, hi }
    }

    /// Box covering `[0, extent - 1]` in every direction.
    pub fn from_extent(extent: IVec3) -> Self {
        Self::new(IVec3::ZERO, extent - IVec3::ONE)
    }

    /// Grow (or shrink, for negative `n`) the box by `n` cells on every side.
    pub fn grow(&self, n: i32) -> Self {
        Self::new(self.lo - IVec3::splat(n), self.hi + IVec3::splat(n))
    }

    /// Number of cells along each axis (zero when the box is empty).
    pub fn size(&self) -> IVec3 {
        (self.hi - self.lo + IVec3::ONE).max(IVec3::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.hi.cmplt(self.lo).any()
    }

    pub fn num_cells(&self) -> usize {
        let s = self.size();
        s.x as usize * s.y as usize * s.z as usize
    }

    #[inline]
    pub fn contains(&self, cell: IVec3) -> bool {
        cell.cmpge(self.lo).all() && cell.cmple(self.hi).all()
    }

    /// True if every cell of `other` lies inside `self`. An empty `other` is
    /// always contained.
    pub fn contains_box(&self, other: &CellBox) -> bool {
        other.is_empty() || (self.contains(other.lo) && self.contains(other.hi))
    }

    pub fn intersect(&self, other: &CellBox) -> Self {
        Self::new(self.lo.max(other.lo), self.hi.min(other.hi))
    }
}

/// Read access to a scalar field by signed cell coordinate.
///
/// Kernels only ever read a 3x3x3 neighbourhood around the cell they work on;
/// any container offering that access can feed them.
pub trait FieldAccess {
    fn at(&self, i: i32, j: i32, k: i32) -> f64;
}

/// Cell-centered scalar field on a uniform unit-spacing grid with ghost layers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalarField3D {
    /// Cells owned by this field (excluding ghosts).
    valid: CellBox,
    /// Number of ghost layers on every side.
    ghost: i32,
    /// Values over the allocated box, x-fastest.
    data: Vec<f64>,
}

impl ScalarField3D {
    /// Create a zero-filled field with valid cells `[0, n)` and `ghost` halo layers.
    pub fn new(nx: usize, ny: usize, nz: usize, ghost: usize) -> Self {
        let valid = CellBox::from_extent(IVec3::new(nx as i32, ny as i32, nz as i32));
        let ghost = ghost as i32;
        let data = vec![0.0; valid.grow(ghost).num_cells()];
        Self { valid, ghost, data }
    }

    /// Create a zero-filled field over an arbitrary valid box.
    pub fn from_box(valid: CellBox, ghost: usize) -> Result<Self, FieldError> {
        if valid.is_empty() {
            return Err(FieldError::InvalidExtent(valid.size()));
        }
        let ghost = ghost as i32;
        let data = vec![0.0; valid.grow(ghost).num_cells()];
        Ok(Self { valid, ghost, data })
    }

    /// Create a field with every cell (ghosts included) set to `value`.
    pub fn filled(nx: usize, ny: usize, nz: usize, ghost: usize, value: f64) -> Self {
        let mut field = Self::new(nx, ny, nz, ghost);
        field.fill(value);
        field
    }

    pub fn valid_box(&self) -> CellBox {
        self.valid
    }

    /// Valid cells plus ghost layers.
    pub fn allocated_box(&self) -> CellBox {
        self.valid.grow(self.ghost)
    }

    pub fn ghost(&self) -> usize {
        self.ghost as usize
    }

    /// Valid cells whose full 3x3x3 neighbourhood lies inside the allocation.
    pub fn stencil_box(&self) -> CellBox {
        self.valid.intersect(&self.allocated_box().grow(-1))
    }

    /// Number of values in one k-plane of the allocation.
    pub fn plane_len(&self) -> usize {
        let s = self.allocated_box().size();
        s.x as usize * s.y as usize
    }

    // ========== Index functions ==========

    #[inline]
    pub fn index(&self, i: i32, j: i32, k: i32) -> usize {
        let alloc = self.allocated_box();
        debug_assert!(
            alloc.contains(IVec3::new(i, j, k)),
            "cell ({}, {}, {}) outside allocation {:?}",
            i,
            j,
            k,
            alloc
        );
        let s = alloc.size();
        ((k - alloc.lo.z) * s.x * s.y + (j - alloc.lo.y) * s.x + (i - alloc.lo.x)) as usize
    }

    #[inline]
    pub fn get(&self, i: i32, j: i32, k: i32) -> f64 {
        self.data[self.index(i, j, k)]
    }

    #[inline]
    pub fn set(&mut self, i: i32, j: i32, k: i32, value: f64) {
        let idx = self.index(i, j, k);
        self.data[idx] = value;
    }

    // ========== Bulk access ==========

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Set every allocated cell (ghosts included) from its cell-center position.
    ///
    /// Cell `(i, j, k)` is centered at `(i + 0.5, j + 0.5, k + 0.5)`.
    pub fn fill_with<F>(&mut self, f: F)
    where
        F: Fn(DVec3) -> f64,
    {
        let alloc = self.allocated_box();
        let mut idx = 0;
        for k in alloc.lo.z..=alloc.hi.z {
            for j in alloc.lo.y..=alloc.hi.y {
                for i in alloc.lo.x..=alloc.hi.x {
                    self.data[idx] = f(cell_center(i, j, k));
                    idx += 1;
                }
            }
        }
    }

    /// Sum of the values over the valid cells.
    pub fn sum_valid(&self) -> f64 {
        let mut sum = 0.0;
        for k in self.valid.lo.z..=self.valid.hi.z {
            for j in self.valid.lo.y..=self.valid.hi.y {
                for i in self.valid.lo.x..=self.valid.hi.x {
                    sum += self.get(i, j, k);
                }
            }
        }
        sum
    }
}

impl FieldAccess for ScalarField3D {
    #[inline]
    fn at(&self, i: i32, j: i32, k: i32) -> f64 {
        self.get(i, j, k)
    }
}

/// Center of cell `(i, j, k)` on a unit grid.
#[inline]
pub fn cell_center(i: i32, j: i32, k: i32) -> DVec3 {
    DVec3::new(i as f64 + 0.5, j as f64 + 0.5, k as f64 + 0.5)
}

/// Stand-alone 3x3x3 stencil centered at `(0, 0, 0)`.
///
/// Lets a single cell be evaluated without a full field, e.g. when the
/// caller already gathered the neighbourhood.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighborhood {
    values: [f64; 27],
}

impl Neighborhood {
    /// Build from a function of the offset, each component in `-1..=1`.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(IVec3) -> f64,
    {
        let mut values = [0.0; 27];
        for dk in -1..=1 {
            for dj in -1..=1 {
                for di in -1..=1 {
                    values[Self::slot(di, dj, dk)] = f(IVec3::new(di, dj, dk));
                }
            }
        }
        Self { values }
    }

    /// Copy the neighbourhood of `(i, j, k)` out of a field.
    pub fn gather<F: FieldAccess + ?Sized>(field: &F, i: i32, j: i32, k: i32) -> Self {
        Self::from_fn(|d| field.at(i + d.x, j + d.y, k + d.z))
    }

    #[inline]
    fn slot(di: i32, dj: i32, dk: i32) -> usize {
        ((dk + 1) * 9 + (dj + 1) * 3 + (di + 1)) as usize
    }
}

impl FieldAccess for Neighborhood {
    #[inline]
    fn at(&self, i: i32, j: i32, k: i32) -> f64 {
        self.values[Self::slot(i, j, k)]
    }
}
