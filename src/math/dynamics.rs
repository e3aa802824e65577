use ndarray::{Array, Dimension, Zip};

use crate::config::Constants;
use crate::error::MetError;
use crate::grid::{AxisTag, CoordinateGrid};

use super::cdiff::centered_difference;
use super::support::{
    broadcast_onto, ensure_grid_matches, ensure_same_shape, ensure_supported_rank,
    horizontal_spacing,
};

/// Coriolis parameter f = 2 omega sin(phi) for a latitude in degrees
pub fn coriolis_parameter(latitude_deg: f64, constants: &Constants) -> f64 {
    2.0 * constants.omega * latitude_deg.to_radians().sin()
}

/// Horizontal divergence of the wind on a latitude/longitude grid [s**-1]
pub fn divergence<D: Dimension>(
    u: &Array<f64, D>,
    v: &Array<f64, D>,
    grid: &CoordinateGrid,
    constants: &Constants,
) -> Result<Array<f64, D>, MetError> {
    ensure_supported_rank(u.ndim())?;
    ensure_same_shape("u wind", u, "v wind", v)?;
    ensure_grid_matches(u, grid)?;

    let dim = u.raw_dim();
    let (dx, dy, cos_lat) = horizontal_spacing(grid, dim.clone())?;

    let dudx = centered_difference(u, AxisTag::X)?;
    let dvdy = centered_difference(&(v * &cos_lat), AxisTag::Y)?;

    let r = constants.earth_radius;
    let mut div = Array::from_elem(dim, f64::NAN);
    Zip::from(&mut div)
        .and(&dudx)
        .and(&dx)
        .and(&dvdy)
        .and(&dy)
        .and(&cos_lat)
        .par_for_each(|out, &du, &ddx, &dv, &ddy, &cosphi| {
            *out = (du / ddx + dv / ddy) / (r * cosphi);
        });

    Ok(div)
}

/// Vertical component of the wind's curl [s**-1]
pub fn relative_vorticity<D: Dimension>(
    u: &Array<f64, D>,
    v: &Array<f64, D>,
    grid: &CoordinateGrid,
    constants: &Constants,
) -> Result<Array<f64, D>, MetError> {
    ensure_supported_rank(u.ndim())?;
    ensure_same_shape("u wind", u, "v wind", v)?;
    ensure_grid_matches(u, grid)?;

    let dim = u.raw_dim();
    let (dx, dy, cos_lat) = horizontal_spacing(grid, dim.clone())?;

    let dvdx = centered_difference(v, AxisTag::X)?;
    let dudy = centered_difference(&(u * &cos_lat), AxisTag::Y)?;

    let r = constants.earth_radius;
    let mut vor = Array::from_elem(dim, f64::NAN);
    Zip::from(&mut vor)
        .and(&dvdx)
        .and(&dx)
        .and(&dudy)
        .and(&dy)
        .and(&cos_lat)
        .par_for_each(|out, &dv, &ddx, &du, &ddy, &cosphi| {
            *out = (dv / ddx - du / ddy) / (r * cosphi);
        });

    Ok(vor)
}

/// Relative vorticity plus the local Coriolis parameter [s**-1]
pub fn absolute_vorticity<D: Dimension>(
    u: &Array<f64, D>,
    v: &Array<f64, D>,
    grid: &CoordinateGrid,
    constants: &Constants,
) -> Result<Array<f64, D>, MetError> {
    let mut avor = relative_vorticity(u, v, grid, constants)?;
    let coriolis = broadcast_onto(grid.lat(), u.raw_dim(), "latitude")?
        .mapv_into(|lat| coriolis_parameter(lat, constants));
    avor += &coriolis;
    Ok(avor)
}

/// Horizontal advection of a scalar field by the wind [field units / s]
pub fn advection<D: Dimension>(
    field: &Array<f64, D>,
    u: &Array<f64, D>,
    v: &Array<f64, D>,
    grid: &CoordinateGrid,
    constants: &Constants,
) -> Result<Array<f64, D>, MetError> {
    ensure_supported_rank(field.ndim())?;
    ensure_same_shape("field", field, "u wind", u)?;
    ensure_same_shape("field", field, "v wind", v)?;
    ensure_grid_matches(field, grid)?;

    let dim = field.raw_dim();
    let (dx, dy, cos_lat) = horizontal_spacing(grid, dim.clone())?;

    let dfdx = centered_difference(field, AxisTag::X)?;
    let dfdy = centered_difference(field, AxisTag::Y)?;

    // Zonal term first, then fold in the meridional term and scale.
    let mut adv = Array::from_elem(dim, f64::NAN);
    Zip::from(&mut adv)
        .and(u)
        .and(&dfdx)
        .and(&dx)
        .and(&cos_lat)
        .par_for_each(|out, &uw, &df, &ddx, &cosphi| {
            *out = uw * df / (cosphi * ddx);
        });

    let r = constants.earth_radius;
    Zip::from(&mut adv)
        .and(v)
        .and(&dfdy)
        .and(&dy)
        .par_for_each(|out, &vw, &df, &ddy| {
            *out = -(*out + vw * df / ddy) / r;
        });

    Ok(adv)
}
