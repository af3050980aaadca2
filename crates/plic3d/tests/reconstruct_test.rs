//! PLIC reconstruction tests
//!
//! Volume-fraction fields are built from known planes (or a sphere level
//! set) and the reconstructed planes are checked for orientation, volume
//! consistency and swept-volume bookkeeping.

use plic3d::{
    cell_fraction, convert_levelset, field::cell_center, reconstruct_interfaces, Axis, DVec3,
    IVec3, ScalarField3D, VofParams,
};

/// Fraction field of the half-space `n . x <= alpha`, ghosts included.
fn planar_fraction(n_cells: usize, n: DVec3, alpha: f64) -> ScalarField3D {
    let mut c = ScalarField3D::new(n_cells, n_cells, n_cells, 1);
    let alloc = c.allocated_box();
    for k in alloc.lo.z..=alloc.hi.z {
        for j in alloc.lo.y..=alloc.hi.y {
            for i in alloc.lo.x..=alloc.hi.x {
                let origin = IVec3::new(i, j, k).as_dvec3();
                c.set(i, j, k, cell_fraction(n, alpha - n.dot(origin)));
            }
        }
    }
    c
}

/// Test that an axis-aligned plane is recovered exactly
#[test]
fn test_axis_plane_is_recovered_exactly() {
    let c = planar_fraction(6, DVec3::X, 2.4);
    let result = reconstruct_interfaces(&c, c.valid_box(), &VofParams::default()).unwrap();

    // One mixed column per (j, k): cells with i = 2
    assert_eq!(result.cells.len(), 36);
    assert_eq!(result.degenerate, 0);
    for ic in &result.cells {
        assert_eq!(ic.cell.x, 2);
        assert!((ic.plane.normal - DVec3::X).length() < 1e-14, "{:?}", ic);
        assert!((ic.plane.alpha - 0.4).abs() < 1e-12, "{:?}", ic);
    }
}

/// Test that a plane symmetric in x and y gives mx == my and mz == 0
#[test]
fn test_diagonal_plane_has_symmetric_normal() {
    let c = planar_fraction(8, DVec3::new(1.0, 1.0, 0.0), 7.3);
    let result = reconstruct_interfaces(&c, c.valid_box(), &VofParams::default()).unwrap();

    assert!(!result.cells.is_empty());
    for ic in &result.cells {
        let n = ic.plane.normal;
        assert!((n.x - n.y).abs() < 1e-12, "{:?}", ic);
        assert!(n.z.abs() < 1e-12, "{:?}", ic);
        assert!(n.x > 0.0);
    }
}

/// Test that a tilted plane's normal is recovered within a few degrees
#[test]
fn test_tilted_plane_orientation() {
    let n0 = DVec3::new(0.3, 0.5, 0.81);
    let c = planar_fraction(8, n0, 7.0);
    let result = reconstruct_interfaces(&c, c.valid_box(), &VofParams::default()).unwrap();

    assert!(!result.cells.is_empty());
    for ic in &result.cells {
        let cos = ic.plane.normal.normalize().dot(n0.normalize());
        assert!(cos > 0.95, "cell {:?}: cos = {}", ic.cell, cos);
    }
}

/// Test that every reconstructed plane cuts its cell's fraction
#[test]
fn test_planes_reproduce_cell_fractions() {
    let c = planar_fraction(8, DVec3::new(-0.3, 0.5, 0.81), 2.0);
    let result = reconstruct_interfaces(&c, c.valid_box(), &VofParams::default()).unwrap();

    for ic in &result.cells {
        let expected = c.get(ic.cell.x, ic.cell.y, ic.cell.z);
        assert!(
            (ic.plane.fraction() - expected).abs() < 1e-9,
            "cell {:?}: {} vs {}",
            ic.cell,
            ic.plane.fraction(),
            expected
        );
    }
}

/// Test that face fluxes partition the cell's phase volume
#[test]
fn test_face_flux_bookkeeping() {
    let c = planar_fraction(6, DVec3::new(0.4, -0.2, 0.7), 1.5);
    let result = reconstruct_interfaces(&c, c.valid_box(), &VofParams::default()).unwrap();

    for ic in &result.cells {
        let total = ic.plane.fraction();
        for axis in Axis::ALL {
            // Whole cell swept: everything leaves
            assert!((ic.plane.face_flux(axis, 1.0) - total).abs() < 1e-9);
            // Upper and lower slabs partition the cell
            let upper = ic.plane.face_flux(axis, 0.35);
            let lower = ic.plane.face_flux(axis, -0.65);
            assert!((upper + lower - total).abs() < 1e-9, "cell {:?} axis {:?}", ic.cell, axis);
            assert!(upper >= 0.0 && upper <= 0.35 + 1e-12);
        }
    }
}

/// Test that sphere normals point out of the phase
#[test]
fn test_sphere_normals_point_outward() {
    let radius = 5.0;
    let center = DVec3::splat(8.0);
    let mut ls = ScalarField3D::new(16, 16, 16, 2);
    ls.fill_with(|p| radius - (p - center).length());

    // Converting over the stencil box leaves the outer ghost layer at zero,
    // which is outside the sphere anyway
    let c = convert_levelset(&ls, &VofParams::default()).unwrap();
    let result = reconstruct_interfaces(&c, c.valid_box(), &VofParams::default()).unwrap();

    assert!(result.cells.len() > 100);
    for ic in &result.cells {
        let outward = (cell_center(ic.cell.x, ic.cell.y, ic.cell.z) - center).normalize();
        assert!(
            ic.plane.normal.normalize().dot(outward) > 0.8,
            "cell {:?} normal {:?}",
            ic.cell,
            ic.plane.normal
        );
    }
}

/// Test that parallel and serial reconstruction agree
#[test]
fn test_parallel_matches_serial() {
    let c = planar_fraction(7, DVec3::new(0.2, 0.7, -0.4), 2.2);
    let parallel = reconstruct_interfaces(&c, c.valid_box(), &VofParams::default()).unwrap();
    let serial = reconstruct_interfaces(&c, c.valid_box(), &VofParams::serial()).unwrap();
    assert_eq!(parallel, serial);
}
