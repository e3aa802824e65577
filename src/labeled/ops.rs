//! Labeled counterparts of the raw diagnostics.
//!
//! Each function derives the coordinate grid (and levels where needed) from
//! the primary input's own coordinates, runs the raw operation on the
//! samples, and wraps the result with rewritten attributes. None of the
//! numerics live here.

use crate::config::Constants;
use crate::error::MetError;
use crate::grid::AxisTag;
use crate::math;
use crate::math::support::ensure_supported_rank;

use super::field::{FieldAttrs, LabeledField};

/// Centered difference of a labeled field. Layout and units carry through;
/// the names record the differenced axis. Unlike the diagnostics below this
/// places no demand on the dimension names.
pub fn centered_difference(field: &LabeledField, axis: AxisTag) -> Result<LabeledField, MetError> {
    let data = math::centered_difference(field.data(), axis)?;
    let long0 = field.attrs().long_name_or_default();
    let attrs = FieldAttrs {
        units: Some(field.attrs().units_or_default().to_string()),
        long_name: Some(format!("CDIFF_{}_in_{}", long0, axis)),
        standard_name: Some(format!(
            "Centered_finite_difference_of_{}_in_{}",
            long0, axis
        )),
    };
    Ok(field.derived("cdiff", data, attrs))
}

/// Horizontal divergence of labeled winds; the grid comes from the zonal
/// wind's trailing latitude/longitude coordinates
pub fn divergence(
    u: &LabeledField,
    v: &LabeledField,
    constants: &Constants,
) -> Result<LabeledField, MetError> {
    ensure_supported_rank(u.rank())?;
    u.same_layout(v, "v wind")?;
    let grid = u.horizontal_grid()?;
    let data = math::divergence(u.data(), v.data(), &grid, constants)?;
    let attrs = FieldAttrs {
        units: Some("s**-1".to_string()),
        long_name: Some("Divergence".to_string()),
        standard_name: Some("Horizontal_divergence_of_wind".to_string()),
    };
    Ok(u.derived("div", data, attrs))
}

/// Relative vorticity of labeled winds
pub fn relative_vorticity(
    u: &LabeledField,
    v: &LabeledField,
    constants: &Constants,
) -> Result<LabeledField, MetError> {
    ensure_supported_rank(u.rank())?;
    u.same_layout(v, "v wind")?;
    let grid = u.horizontal_grid()?;
    let data = math::relative_vorticity(u.data(), v.data(), &grid, constants)?;
    let attrs = FieldAttrs {
        units: Some("s**-1".to_string()),
        long_name: Some("Vorticity".to_string()),
        standard_name: Some("Relative_vorticity_of_wind".to_string()),
    };
    Ok(u.derived("vor", data, attrs))
}

/// Absolute vorticity of labeled winds
pub fn absolute_vorticity(
    u: &LabeledField,
    v: &LabeledField,
    constants: &Constants,
) -> Result<LabeledField, MetError> {
    ensure_supported_rank(u.rank())?;
    u.same_layout(v, "v wind")?;
    let grid = u.horizontal_grid()?;
    let data = math::absolute_vorticity(u.data(), v.data(), &grid, constants)?;
    let attrs = FieldAttrs {
        units: Some("s**-1".to_string()),
        long_name: Some("Absolute_vorticity".to_string()),
        standard_name: Some("Absolute_vorticity_of_wind".to_string()),
    };
    Ok(u.derived("avor", data, attrs))
}

/// Horizontal advection of a labeled scalar by labeled winds; grid and
/// naming come from the advected field
pub fn advection(
    field: &LabeledField,
    u: &LabeledField,
    v: &LabeledField,
    constants: &Constants,
) -> Result<LabeledField, MetError> {
    ensure_supported_rank(field.rank())?;
    field.same_layout(u, "u wind")?;
    field.same_layout(v, "v wind")?;
    let grid = field.horizontal_grid()?;
    let data = math::advection(field.data(), u.data(), v.data(), &grid, constants)?;
    let units0 = field.attrs().units_or_default();
    let long0 = field.attrs().long_name_or_default();
    let attrs = FieldAttrs {
        units: Some(format!("{}/s", units0)),
        long_name: Some(format!("{}_advection", long0)),
        standard_name: Some(format!("Horizontal_advection_of_{}", long0)),
    };
    Ok(field.derived("adv", data, attrs))
}

/// Potential temperature of a labeled temperature field; levels come from
/// the third-from-last coordinate axis (hPa assumed). The trailing dims
/// must still name a recognized latitude/longitude pair.
pub fn potential_temperature(
    temperature: &LabeledField,
    constants: &Constants,
) -> Result<LabeledField, MetError> {
    ensure_supported_rank(temperature.rank())?;
    temperature.horizontal_dims()?;
    let levels = temperature.vertical_levels()?;
    let data = math::potential_temperature(temperature.data(), levels, constants)?;
    let attrs = FieldAttrs {
        units: Some("K".to_string()),
        long_name: Some("Potential_temperature".to_string()),
        standard_name: Some("Potential_temperature".to_string()),
    };
    Ok(temperature.derived("ptemp", data, attrs))
}

/// Baroclinic potential vorticity of labeled temperature and winds; grid and
/// levels come from the temperature field's coordinates
pub fn potential_vorticity(
    temperature: &LabeledField,
    u: &LabeledField,
    v: &LabeledField,
    constants: &Constants,
) -> Result<LabeledField, MetError> {
    let rank = temperature.rank();
    if rank != 3 && rank != 4 {
        return Err(MetError::UnsupportedRank {
            rank,
            expected: "3 or 4",
        });
    }
    temperature.same_layout(u, "u wind")?;
    temperature.same_layout(v, "v wind")?;
    let grid = temperature.horizontal_grid()?;
    let levels = temperature.vertical_levels()?;
    let data = math::potential_vorticity(
        temperature.data(),
        u.data(),
        v.data(),
        &grid,
        levels,
        constants,
    )?;
    let attrs = FieldAttrs {
        units: Some("K*m**2*kg**-1*s**-1".to_string()),
        long_name: Some("Potential_vorticity".to_string()),
        standard_name: Some("Potential_vorticity".to_string()),
    };
    Ok(temperature.derived("pvor", data, attrs))
}
