use ndarray::{arr1, Array, Array1, Array2};

use metdiag_rust::config::Constants;
use metdiag_rust::error::MetError;
use metdiag_rust::grid::CoordinateGrid;
use metdiag_rust::math::*;

fn one_degree_grid() -> CoordinateGrid {
    CoordinateGrid::from_vectors(
        &arr1(&[0.0, 1.0, 2.0, 3.0, 4.0]),
        &arr1(&[0.0, 1.0, 2.0, 3.0, 4.0]),
    )
}

#[test]
fn test_divergence_of_uniform_wind_end_to_end() {
    let constants = Constants::default();
    let grid = one_degree_grid();
    let u = Array2::<f64>::ones((5, 5));
    let v = Array2::<f64>::zeros((5, 5));

    let div = divergence(&u, &v, &grid, &constants).unwrap();

    assert_eq!(div.dim(), (5, 5));
    for j in 0..5 {
        for i in 0..5 {
            let on_ring = j == 0 || j == 4 || i == 0 || i == 4;
            if on_ring {
                assert!(div[[j, i]].is_nan(), "expected NaN at ({}, {})", j, i);
            } else {
                assert!(
                    div[[j, i]].abs() < 1e-15,
                    "interior divergence {} at ({}, {})",
                    div[[j, i]],
                    j,
                    i
                );
            }
        }
    }
}

#[test]
fn test_vorticity_of_uniform_eastward_flow_is_near_zero() {
    let constants = Constants::default();
    let grid = one_degree_grid();
    let u = Array2::<f64>::ones((5, 5));
    let v = Array2::<f64>::zeros((5, 5));

    let vor = relative_vorticity(&u, &v, &grid, &constants).unwrap();

    // Only the spherical curvature term u*tan(phi)/R survives, which is
    // tiny at low latitudes.
    for j in 1..4 {
        for i in 1..4 {
            assert!(
                vor[[j, i]].abs() < 1e-6,
                "vorticity {} at ({}, {})",
                vor[[j, i]],
                j,
                i
            );
        }
    }
}

#[test]
fn test_vorticity_sign_for_cyclonic_flow() {
    let constants = Constants::default();
    let grid = one_degree_grid();
    // counterclockwise rotation around the grid center
    let u = Array2::from_shape_fn((5, 5), |(j, _)| -(j as f64 - 2.0));
    let v = Array2::from_shape_fn((5, 5), |(_, i)| i as f64 - 2.0);

    let vor = relative_vorticity(&u, &v, &grid, &constants).unwrap();

    for j in 1..4 {
        for i in 1..4 {
            let value = vor[[j, i]];
            assert!(value > 1e-5, "vorticity {} at ({}, {})", value, j, i);
            assert!(value < 3e-5, "vorticity {} at ({}, {})", value, j, i);
        }
    }
}

#[test]
fn test_absolute_minus_relative_is_coriolis() {
    let constants = Constants::default();
    let lat = arr1(&[30.0, 31.0, 32.0, 33.0, 34.0]);
    let grid = CoordinateGrid::from_vectors(&arr1(&[10.0, 11.0, 12.0, 13.0, 14.0]), &lat);
    let u = Array2::from_shape_fn((5, 5), |(j, i)| (0.3 * j as f64 + 0.7 * i as f64).sin());
    let v = Array2::from_shape_fn((5, 5), |(j, i)| (0.2 * j as f64 - 0.4 * i as f64).cos());

    let vor = relative_vorticity(&u, &v, &grid, &constants).unwrap();
    let avor = absolute_vorticity(&u, &v, &grid, &constants).unwrap();

    for j in 1..4 {
        for i in 1..4 {
            let f = coriolis_parameter(lat[j], &constants);
            let difference = avor[[j, i]] - vor[[j, i]];
            assert!(
                (difference - f).abs() < 1e-12,
                "avor - vor = {} but f = {} at ({}, {})",
                difference,
                f,
                j,
                i
            );
        }
    }
}

#[test]
fn test_coriolis_parameter_signs() {
    let constants = Constants::default();
    assert_eq!(coriolis_parameter(0.0, &constants), 0.0);
    assert!(coriolis_parameter(45.0, &constants) > 0.0);
    assert!(coriolis_parameter(-45.0, &constants) < 0.0);
    let f90 = coriolis_parameter(90.0, &constants);
    assert!((f90 - 2.0 * constants.omega).abs() < 1e-12);
}

#[test]
fn test_advection_of_uniform_field_is_zero_inside() {
    let constants = Constants::default();
    let grid = one_degree_grid();
    let field = Array2::from_elem((5, 5), 280.0);
    let u = Array2::<f64>::ones((5, 5));
    let v = Array2::<f64>::ones((5, 5));

    let adv = advection(&field, &u, &v, &grid, &constants).unwrap();

    for j in 1..4 {
        for i in 1..4 {
            assert!(adv[[j, i]].abs() < 1e-15);
        }
    }
}

#[test]
fn test_advection_of_zonal_ramp_by_westerly_wind() {
    let constants = Constants::default();
    let grid = one_degree_grid();
    // field grows eastward, wind blows eastward: local values must drop
    let field = Array2::from_shape_fn((5, 5), |(_, i)| i as f64);
    let u = Array2::<f64>::ones((5, 5));
    let v = Array2::<f64>::zeros((5, 5));

    let adv = advection(&field, &u, &v, &grid, &constants).unwrap();

    for j in 1..4 {
        for i in 1..4 {
            let phi = (j as f64).to_radians();
            let expected = -(2.0 / (phi.cos() * 2.0_f64.to_radians())) / constants.earth_radius;
            assert!(adv[[j, i]] < 0.0);
            assert!(
                (adv[[j, i]] - expected).abs() < 1e-15,
                "advection {} vs expected {} at ({}, {})",
                adv[[j, i]],
                expected,
                j,
                i
            );
        }
    }
}

#[test]
fn test_wind_component_shape_mismatch() {
    let constants = Constants::default();
    let grid = one_degree_grid();
    let u = Array2::<f64>::ones((3, 4));
    let v = Array2::<f64>::ones((3, 5));
    assert!(matches!(
        divergence(&u, &v, &grid, &constants).unwrap_err(),
        MetError::ShapeMismatch { .. }
    ));
}

#[test]
fn test_grid_extent_mismatch() {
    let constants = Constants::default();
    let grid = one_degree_grid();
    let u = Array2::<f64>::ones((4, 5));
    let v = Array2::<f64>::ones((4, 5));
    assert!(matches!(
        relative_vorticity(&u, &v, &grid, &constants).unwrap_err(),
        MetError::ShapeMismatch { .. }
    ));
}

#[test]
fn test_rank_rejection() {
    let constants = Constants::default();
    let grid = one_degree_grid();

    let u1 = Array1::<f64>::ones(5);
    let v1 = Array1::<f64>::ones(5);
    assert!(matches!(
        divergence(&u1, &v1, &grid, &constants).unwrap_err(),
        MetError::UnsupportedRank { rank: 1, .. }
    ));

    let u5 = Array::<f64, _>::ones((2, 2, 2, 5, 5));
    let v5 = Array::<f64, _>::ones((2, 2, 2, 5, 5));
    assert!(matches!(
        relative_vorticity(&u5, &v5, &grid, &constants).unwrap_err(),
        MetError::UnsupportedRank { rank: 5, .. }
    ));
}
