use ndarray::{Array, Array1, Dimension, Zip};

use crate::config::Constants;
use crate::error::MetError;
use crate::grid::{AxisTag, CoordinateGrid};

use super::cdiff::centered_difference;
use super::dynamics::absolute_vorticity;
use super::support::{
    broadcast_levels, ensure_grid_matches, ensure_same_shape, ensure_supported_rank,
    horizontal_spacing,
};

/// Potential temperature from temperature (K) and pressure levels (hPa).
///
/// Levels map onto the vertical axis of rank-3/4 input. Rank-2 input has no
/// vertical axis and takes a single level applied everywhere.
pub fn potential_temperature<D: Dimension>(
    temperature: &Array<f64, D>,
    levels: &Array1<f64>,
    constants: &Constants,
) -> Result<Array<f64, D>, MetError> {
    let rank = temperature.ndim();
    ensure_supported_rank(rank)?;

    if rank == 2 {
        if levels.len() != 1 {
            return Err(MetError::ShapeMismatch {
                context: format!(
                    "rank-2 temperature takes exactly one level, got {}",
                    levels.len()
                ),
            });
        }
        let factor = (constants.p0_hpa / levels[0]).powf(constants.kappa);
        return Ok(temperature * factor);
    }

    let pressure = broadcast_levels(levels, temperature.raw_dim())?;
    let (p0, kappa) = (constants.p0_hpa, constants.kappa);
    let mut theta = Array::from_elem(temperature.raw_dim(), f64::NAN);
    Zip::from(&mut theta)
        .and(temperature)
        .and(&pressure)
        .par_for_each(|out, &t, &lev| *out = t * (p0 / lev).powf(kappa));

    Ok(theta)
}

/// Baroclinic potential vorticity on pressure levels
/// [K*m**2*kg**-1*s**-1].
///
/// Needs a vertical axis, so only rank-3 and rank-4 input is accepted; the
/// rank-3 leading axis is treated as vertical.
pub fn potential_vorticity<D: Dimension>(
    temperature: &Array<f64, D>,
    u: &Array<f64, D>,
    v: &Array<f64, D>,
    grid: &CoordinateGrid,
    levels: &Array1<f64>,
    constants: &Constants,
) -> Result<Array<f64, D>, MetError> {
    let rank = temperature.ndim();
    if rank != 3 && rank != 4 {
        return Err(MetError::UnsupportedRank {
            rank,
            expected: "3 or 4",
        });
    }
    ensure_same_shape("temperature", temperature, "u wind", u)?;
    ensure_same_shape("temperature", temperature, "v wind", v)?;
    ensure_grid_matches(temperature, grid)?;

    let dim = temperature.raw_dim();
    let theta = potential_temperature(temperature, levels, constants)?;
    let avor = absolute_vorticity(u, v, grid, constants)?;

    let pressure = broadcast_levels(levels, dim.clone())? * constants.hpa_to_pa;
    let dp = centered_difference(&pressure, AxisTag::Z)?;

    let dthdp = centered_difference(&theta, AxisTag::Z)? / &dp;
    let dudp = centered_difference(u, AxisTag::Z)? / &dp;
    let dvdp = centered_difference(v, AxisTag::Z)? / &dp;

    let (dx, dy, cos_lat) = horizontal_spacing(grid, dim.clone())?;
    let r = constants.earth_radius;
    let dthdx = centered_difference(&theta, AxisTag::X)? / (&dx * &cos_lat * r);
    let dthdy = centered_difference(&theta, AxisTag::Y)? / (&dy * r);

    // avor * dTheta/dp - dV/dp * dTheta/dx fits one Zip; the remaining
    // shear term and the -g scaling fold in afterwards.
    let mut pv = Array::from_elem(dim, f64::NAN);
    Zip::from(&mut pv)
        .and(&avor)
        .and(&dthdp)
        .and(&dvdp)
        .and(&dthdx)
        .par_for_each(|out, &av, &t_p, &v_p, &t_x| {
            *out = av * t_p - v_p * t_x;
        });

    let g = constants.g;
    Zip::from(&mut pv)
        .and(&dudp)
        .and(&dthdy)
        .par_for_each(|out, &u_p, &t_y| {
            *out = -g * (*out + u_p * t_y);
        });

    Ok(pv)
}
